//! Template Service - template library queries.
//!
//! Separated from ScaffoldService for single responsibility.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    application::ports::TemplateStore,
    domain::TemplateRef,
    error::ScaffoldResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: String,
    pub template_name: String,
    pub file_name: String,
}

impl From<TemplateRef> for TemplateInfo {
    fn from(t: TemplateRef) -> Self {
        Self {
            id: t.id(),
            template_name: t.template_name,
            file_name: t.file_name,
        }
    }
}

/// Service for template operations.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// List all templates.
    pub fn list(&self) -> ScaffoldResult<Vec<TemplateInfo>> {
        Ok(self.store.list()?.into_iter().map(TemplateInfo::from).collect())
    }

    /// Templates grouped by template directory.
    pub fn grouped(&self) -> ScaffoldResult<BTreeMap<String, Vec<String>>> {
        let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for t in self.store.list()? {
            groups.entry(t.template_name).or_default().push(t.file_name);
        }
        Ok(groups)
    }

    /// Raw source of one template.
    pub fn source(&self, template: &TemplateRef) -> ScaffoldResult<String> {
        self.store.load(template)
    }

    /// Where templates come from.
    pub fn origin(&self) -> String {
        self.store.describe()
    }
}
