//! Template identifiers and the parameters handed to the renderer.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Identifies `templates/<template_name>/<file_name>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TemplateRef {
    pub template_name: String,
    pub file_name: String,
}

impl TemplateRef {
    pub fn new(template_name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            template_name: template_name.into(),
            file_name: file_name.into(),
        }
    }

    /// Parse `"entity/class_dataclass.py"`. Returns `None` when there is no
    /// directory component.
    pub fn parse(id: &str) -> Option<Self> {
        let (template_name, file_name) = id.split_once('/')?;
        if template_name.is_empty() || file_name.is_empty() {
            return None;
        }
        Some(Self::new(template_name, file_name))
    }

    /// Slash-separated id, stable across platforms.
    pub fn id(&self) -> String {
        format!("{}/{}", self.template_name, self.file_name)
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.template_name, self.file_name)
    }
}

/// A single template parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Str(String),
    Bool(bool),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Bool(_) => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered map of placeholder names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderParams(BTreeMap<String, ParamValue>);

impl RenderParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// String value for `key`; `None` for missing keys and flags.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Delimiters every template in the library is written with.
///
/// Chosen so that Django template syntax inside generated files
/// (`{% %}`, `{{ }}`) passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub block_start: &'static str,
    pub block_end: &'static str,
    pub variable_start: &'static str,
    pub variable_end: &'static str,
    pub comment_start: &'static str,
    pub comment_end: &'static str,
}

impl Delimiters {
    pub const DDD: Self = Self {
        block_start: "[%",
        block_end: "%]",
        variable_start: "[[",
        variable_end: "]]",
        comment_start: "{#",
        comment_end: "#}",
    };
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::DDD
    }
}
