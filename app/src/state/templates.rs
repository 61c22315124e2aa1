//! Message template screen state — stored at `templates/view`.

use serde::{Deserialize, Serialize};

use crate::model::{Template, TemplateVariable, template_variables};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplatesView {
    /// All templates, in snapshot order.
    pub templates: Vec<Template>,
    /// The active template's working copy; edits accumulate here until
    /// saved. Auto-selected to the first template on first load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<Template>,
    /// The active content rendered against the sample data.
    pub preview: String,
    pub variables: Vec<TemplateVariable>,
    /// Id awaiting delete confirmation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_delete: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TemplatesView {
    pub const PATH: &'static str = "templates/view";
}

impl Default for TemplatesView {
    fn default() -> Self {
        Self {
            templates: Vec::new(),
            active: None,
            preview: String::new(),
            variables: template_variables(),
            pending_delete: None,
            notice: None,
            error: None,
        }
    }
}
