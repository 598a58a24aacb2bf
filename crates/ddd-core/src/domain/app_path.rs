//! Django app paths and the names derived from them.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::template_ref::RenderParams;

/// A user supplied app path such as `apps/manager/app1`.
///
/// Decoding is purely textual. No legality checks happen here, so an empty
/// path or one with a trailing slash yields empty segments rather than an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppPath {
    raw: String,
    app_name: String,
    last_app_name: String,
    app_route: String,
    relative_path: String,
}

impl AppPath {
    /// Decode an app path into its dotted, route and relative forms.
    ///
    /// ```
    /// use ddd_core::domain::AppPath;
    ///
    /// let app = AppPath::parse("apps/manager/app1");
    /// assert_eq!(app.app_name(), "apps.manager.app1");
    /// assert_eq!(app.last_app_name(), "app1");
    /// assert_eq!(app.app_route(), "manager:app1");
    /// assert_eq!(app.relative_path(), "manager/app1");
    /// ```
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();

        let relative_path = match raw.split_once('/') {
            Some((_, rest)) => rest.to_string(),
            None => raw.clone(),
        };

        let app_name = dotted(&raw);
        let last_app_name = app_name.rsplit('.').next().unwrap_or_default().to_string();
        let app_route = dotted(&relative_path).replace('.', ":");

        Self {
            raw,
            app_name,
            last_app_name,
            app_route,
            relative_path,
        }
    }

    /// The path exactly as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The app directory, relative to the project root.
    pub fn dir(&self) -> &Path {
        Path::new(&self.raw)
    }

    /// Join a path below the app directory.
    pub fn join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.dir().join(path)
    }

    /// Dotted module name, e.g. `apps.manager.app1`.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Last dotted segment, e.g. `app1`.
    pub fn last_app_name(&self) -> &str {
        &self.last_app_name
    }

    /// URL namespace route with the first segment dropped, e.g. `manager:app1`.
    pub fn app_route(&self) -> &str {
        &self.app_route
    }

    /// Path with the first segment dropped, e.g. `manager/app1`.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    /// Template parameters every command passes along.
    pub fn render_params(&self) -> RenderParams {
        RenderParams::new()
            .with("app_name", self.app_name.as_str())
            .with("last_app_name", self.last_app_name.as_str())
            .with("app_route", self.app_route.as_str())
            .with("relative_path", self.relative_path.as_str())
    }
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn dotted(path: &str) -> String {
    path.replace(['/', '\\'], ".").replace("..", ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_path() {
        let app = AppPath::parse("apps/manager/app1");

        assert_eq!(app.app_name(), "apps.manager.app1");
        assert_eq!(app.last_app_name(), "app1");
        assert_eq!(app.app_route(), "manager:app1");
        assert_eq!(app.relative_path(), "manager/app1");
    }

    #[test]
    fn single_segment_is_its_own_relative_path() {
        let app = AppPath::parse("app1");

        assert_eq!(app.app_name(), "app1");
        assert_eq!(app.last_app_name(), "app1");
        assert_eq!(app.app_route(), "app1");
        assert_eq!(app.relative_path(), "app1");
    }

    #[test]
    fn two_segments_drop_the_prefix() {
        let app = AppPath::parse("apps/app1");

        assert_eq!(app.app_name(), "apps.app1");
        assert_eq!(app.app_route(), "app1");
        assert_eq!(app.relative_path(), "app1");
    }

    #[test]
    fn backslashes_are_dotted() {
        let app = AppPath::parse("apps\\billing");

        assert_eq!(app.app_name(), "apps.billing");
        assert_eq!(app.last_app_name(), "billing");
        // no forward slash, so nothing is dropped
        assert_eq!(app.relative_path(), "apps\\billing");
        assert_eq!(app.app_route(), "apps:billing");
    }

    #[test]
    fn double_separators_collapse() {
        let app = AppPath::parse("apps//shop");

        assert_eq!(app.app_name(), "apps.shop");
        assert_eq!(app.relative_path(), "/shop");
        assert_eq!(app.app_route(), ":shop");
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        let empty = AppPath::parse("");
        assert_eq!(empty.app_name(), "");
        assert_eq!(empty.last_app_name(), "");
        assert_eq!(empty.app_route(), "");
        assert_eq!(empty.relative_path(), "");

        let trailing = AppPath::parse("apps/shop/");
        assert_eq!(trailing.app_name(), "apps.shop.");
        assert_eq!(trailing.last_app_name(), "");
        assert_eq!(trailing.relative_path(), "shop/");
    }

    #[test]
    fn app_name_is_slash_to_dot_for_clean_paths() {
        for raw in ["a", "a/b", "apps/manager/app1", "x1/y_2/z3/w4"] {
            let app = AppPath::parse(raw);
            assert_eq!(app.app_name(), raw.replace('/', "."), "path {raw}");
        }
    }

    #[test]
    fn joins_below_app_dir() {
        let app = AppPath::parse("apps/shop");
        assert_eq!(
            app.join("domain/entities.py"),
            PathBuf::from("apps/shop/domain/entities.py")
        );
    }

    #[test]
    fn render_params_carry_all_forms() {
        let params = AppPath::parse("apps/manager/app1").render_params();

        assert_eq!(params.get_str("app_name"), Some("apps.manager.app1"));
        assert_eq!(params.get_str("last_app_name"), Some("app1"));
        assert_eq!(params.get_str("app_route"), Some("manager:app1"));
        assert_eq!(params.get_str("relative_path"), Some("manager/app1"));
    }
}
