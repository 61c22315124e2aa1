//! Workshop management screen state — stored at `workshops/view`.

use serde::{Deserialize, Serialize};

use crate::model::Workshop;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WorkshopsView {
    /// Current search text, matched against name or owner.
    pub search: String,
    /// Workshops passing the search filter, in snapshot order. The
    /// unfiltered list stays in the reconciler; this is a projection.
    pub workshops: Vec<Workshop>,
    /// Working copy in the create/edit form; `None` means the form is
    /// closed. An empty id marks a create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing: Option<Workshop>,
    /// Id awaiting delete confirmation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_delete: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WorkshopsView {
    pub const PATH: &'static str = "workshops/view";
}
