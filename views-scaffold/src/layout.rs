//! The declared shape of a scaffolded tree.
//!
//! A [`Layout`] names a base directory, the subdirectories to ensure under it,
//! and the placeholder files to ensure inside each directory. Paths inside the
//! layout are relative to the base; [`Layout::directories`] and
//! [`Layout::file_map`] return them joined onto the base, which is the form
//! the [`Scaffolder`](crate::Scaffolder) consumes.
//!
//! Layouts serialize to YAML:
//!
//! ```yaml
//! base: views
//! directories:
//!   - layouts
//!   - auth
//! files:
//!   layouts: [header.html, footer.html]
//!   .: [index.html]
//! ```
//!
//! The `.` key (or an empty key) stands for the base directory itself.

use crate::error::{Result, ScaffoldError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Base directory of the built-in layout.
pub const DEFAULT_BASE: &str = "views";

/// Key that denotes the base directory in a file mapping.
pub const BASE_KEY: &str = ".";

/// Declared directories and placeholder files under a base directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layout {
    base: PathBuf,

    #[serde(default)]
    directories: Vec<PathBuf>,

    #[serde(default)]
    files: IndexMap<PathBuf, Vec<String>>,
}

impl Layout {
    /// An empty layout rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            directories: Vec::new(),
            files: IndexMap::new(),
        }
    }

    /// The built-in view-template layout.
    pub fn views() -> Self {
        Self::new(DEFAULT_BASE)
            .with_directory("layouts")
            .with_directory("auth")
            .with_directory("parking")
            .with_directory("customer")
            .with_directory("analytics")
            .with_files("layouts", ["header.html", "footer.html"])
            .with_files("auth", ["login.html", "register.html"])
            .with_files(
                "parking",
                [
                    "parking-lot.html",
                    "parking-lots.html",
                    "vehicle-entry.html",
                    "vehicle-exit.html",
                ],
            )
            .with_files("customer", ["customer-list.html", "customer-profile.html"])
            .with_files("analytics", ["dashboard.html", "reports.html"])
            .with_files(BASE_KEY, ["index.html"])
    }

    /// Declare a subdirectory of the base.
    pub fn with_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.directories.push(dir.into());
        self
    }

    /// Declare placeholder files inside `dir`.
    ///
    /// Repeated calls for the same directory append to its list.
    pub fn with_files<I, S>(mut self, dir: impl Into<PathBuf>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files
            .entry(dir.into())
            .or_default()
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// The same layout under a different base directory.
    pub fn rebased(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = base.into();
        self
    }

    /// The base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Declared directories, joined onto the base, in declaration order.
    pub fn directories(&self) -> Vec<PathBuf> {
        self.directories.iter().map(|d| self.resolve(d)).collect()
    }

    /// Declared files grouped by directory, joined onto the base, in
    /// declaration order.
    pub fn file_map(&self) -> IndexMap<PathBuf, Vec<String>> {
        let mut map: IndexMap<PathBuf, Vec<String>> = IndexMap::new();
        for (dir, names) in &self.files {
            map.entry(self.resolve(dir))
                .or_default()
                .extend(names.iter().cloned());
        }
        map
    }

    /// Total number of declared files.
    pub fn file_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    fn resolve(&self, rel: &Path) -> PathBuf {
        if is_base_key(rel) {
            self.base.clone()
        } else {
            self.base.join(rel)
        }
    }

    /// Check the layout's invariants.
    ///
    /// Every path must be relative and free of `..`, filenames must be single
    /// path components, and every file-mapping key must be the base or a
    /// declared directory.
    pub fn validate(&self) -> Result<()> {
        if is_base_key(&self.base) {
            return Err(ScaffoldError::invalid_layout(
                "base directory must name a directory below the root",
            ));
        }
        check_relative(&self.base, "base directory")?;

        for dir in &self.directories {
            check_relative(dir, "directory")?;
        }

        for (dir, names) in &self.files {
            if !is_base_key(dir) {
                check_relative(dir, "file directory")?;
                if !self.directories.iter().any(|d| d == dir) {
                    return Err(ScaffoldError::invalid_layout(format!(
                        "files listed under '{}' which is not a declared directory",
                        dir.display()
                    )));
                }
            }
            for name in names {
                check_filename(name)?;
            }
        }

        Ok(())
    }

    /// Parse and validate a layout from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let layout: Self = serde_yaml_ng::from_str(text)
            .map_err(|source| ScaffoldError::LayoutParse { source })?;
        layout.validate()?;
        Ok(layout)
    }

    /// Read, parse and validate a layout file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ScaffoldError::LayoutRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded layout file: {}", path.display());
        Self::from_yaml_str(&text)
    }

    /// Render the layout as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|source| ScaffoldError::LayoutRender { source })
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::views()
    }
}

fn is_base_key(path: &Path) -> bool {
    path.as_os_str().is_empty() || path == Path::new(BASE_KEY)
}

fn check_relative(path: &Path, what: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(ScaffoldError::invalid_layout(format!("{what} is empty")));
    }
    if path.to_string_lossy().contains('\0') {
        return Err(ScaffoldError::invalid_layout(format!(
            "{what} '{}' contains a NUL byte",
            path.display()
        )));
    }
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(ScaffoldError::invalid_layout(format!(
                    "{what} '{}' escapes the base directory",
                    path.display()
                )))
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(ScaffoldError::invalid_layout(format!(
                    "{what} '{}' must be relative",
                    path.display()
                )))
            }
        }
    }
    Ok(())
}

fn check_filename(name: &str) -> Result<()> {
    let path = Path::new(name);
    let mut components = path.components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if name.is_empty() || name.contains('\0') || !single_normal || name.ends_with('/') {
        return Err(ScaffoldError::invalid_layout(format!(
            "'{name}' is not a plain file name"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_views_layout_directories() {
        let layout = Layout::views();
        assert_eq!(layout.base(), Path::new("views"));
        assert_eq!(
            layout.directories(),
            vec![
                PathBuf::from("views/layouts"),
                PathBuf::from("views/auth"),
                PathBuf::from("views/parking"),
                PathBuf::from("views/customer"),
                PathBuf::from("views/analytics"),
            ]
        );
    }

    #[test]
    fn test_views_layout_file_map_order() {
        let map = Layout::views().file_map();
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                PathBuf::from("views/layouts"),
                PathBuf::from("views/auth"),
                PathBuf::from("views/parking"),
                PathBuf::from("views/customer"),
                PathBuf::from("views/analytics"),
                PathBuf::from("views"),
            ]
        );
        assert_eq!(map[&PathBuf::from("views/layouts")], ["header.html", "footer.html"]);
        assert_eq!(map[&PathBuf::from("views")], ["index.html"]);
        assert_eq!(Layout::views().file_count(), 13);
    }

    #[test]
    fn test_views_layout_is_valid() {
        Layout::views().validate().unwrap();
    }

    #[test]
    fn test_rebased_moves_every_path() {
        let layout = Layout::views().rebased("templates");
        assert!(layout
            .directories()
            .iter()
            .all(|d| d.starts_with("templates")));
        assert!(layout.file_map().contains_key(Path::new("templates")));
    }

    #[test]
    fn test_with_files_appends_to_existing_directory() {
        let layout = Layout::new("site")
            .with_directory("a")
            .with_files("a", ["one.html"])
            .with_files("a", ["two.html"]);
        assert_eq!(
            layout.file_map()[&PathBuf::from("site/a")],
            ["one.html", "two.html"]
        );
    }

    #[test]
    fn test_validate_rejects_undeclared_file_directory() {
        let layout = Layout::new("site").with_files("missing", ["x.html"]);
        let err = layout.validate().unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_validate_rejects_parent_components() {
        let layout = Layout::new("site").with_directory("../outside");
        assert!(matches!(
            layout.validate(),
            Err(ScaffoldError::InvalidLayout { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_absolute_directory() {
        let layout = Layout::new("site").with_directory("/etc");
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nested_filename() {
        let layout = Layout::new("site")
            .with_directory("a")
            .with_files("a", ["sub/file.html"]);
        assert!(layout.validate().is_err());

        let layout = Layout::new("site").with_files(BASE_KEY, [".."]);
        assert!(layout.validate().is_err());

        let layout = Layout::new("site").with_files(BASE_KEY, [""]);
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_base() {
        assert!(Layout::new("").validate().is_err());
        assert!(Layout::new(".").validate().is_err());
    }

    #[test]
    fn test_yaml_parses_base_key() {
        let yaml = r#"
base: pages
directories:
  - blog
files:
  blog: [post.html]
  .: [index.html]
"#;
        let layout = Layout::from_yaml_str(yaml).unwrap();
        assert_eq!(layout.base(), Path::new("pages"));
        let map = layout.file_map();
        assert_eq!(map[&PathBuf::from("pages/blog")], ["post.html"]);
        assert_eq!(map[&PathBuf::from("pages")], ["index.html"]);
    }

    #[test]
    fn test_yaml_rejects_unknown_keys() {
        let err = Layout::from_yaml_str("base: x\nextra: 1\n").unwrap_err();
        assert!(matches!(err, ScaffoldError::LayoutParse { .. }));
    }

    #[test]
    fn test_yaml_validation_runs_on_parse() {
        let err = Layout::from_yaml_str("base: x\nfiles:\n  nowhere: [a.html]\n").unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidLayout { .. }));
    }

    #[test]
    fn test_to_yaml_reloads_to_same_layout() {
        let layout = Layout::views();
        let yaml = layout.to_yaml().unwrap();
        assert_eq!(Layout::from_yaml_str(&yaml).unwrap(), layout);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Layout::load(temp.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ScaffoldError::LayoutRead { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("layout.yaml");
        fs::write(&path, "base: docs\ndirectories: [guides]\n").unwrap();
        let layout = Layout::load(&path).unwrap();
        assert_eq!(layout.directories(), vec![PathBuf::from("docs/guides")]);
        assert_eq!(layout.file_count(), 0);
    }
}
