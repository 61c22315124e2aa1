//! Message template screen requests.

/// `templates/mount`
#[derive(Debug, Clone)]
pub struct MountTemplatesReq;

impl MountTemplatesReq {
    pub const PATH: &'static str = "templates/mount";
}

/// `templates/unmount`
#[derive(Debug, Clone)]
pub struct UnmountTemplatesReq;

impl UnmountTemplatesReq {
    pub const PATH: &'static str = "templates/unmount";
}

/// `templates/select` — makes a template active, dropping any unsaved
/// edits on the previous one.
#[derive(Debug, Clone)]
pub struct SelectTemplateReq {
    pub id: String,
}

impl SelectTemplateReq {
    pub const PATH: &'static str = "templates/select";
}

/// `templates/add` — creates a template from the defaults and makes it
/// active.
#[derive(Debug, Clone)]
pub struct AddTemplateReq;

impl AddTemplateReq {
    pub const PATH: &'static str = "templates/add";
}

/// `templates/edit-content` — replaces the active template's content.
#[derive(Debug, Clone)]
pub struct EditTemplateContentReq {
    pub content: String,
}

impl EditTemplateContentReq {
    pub const PATH: &'static str = "templates/edit-content";
}

/// `templates/rename`
#[derive(Debug, Clone)]
pub struct RenameTemplateReq {
    pub name: String,
}

impl RenameTemplateReq {
    pub const PATH: &'static str = "templates/rename";
}

/// `templates/insert-variable` — appends ` {{key}}` to the active
/// content.
#[derive(Debug, Clone)]
pub struct InsertVariableReq {
    pub key: String,
}

impl InsertVariableReq {
    pub const PATH: &'static str = "templates/insert-variable";
}

/// `templates/save` — persists the active template's name and content.
#[derive(Debug, Clone)]
pub struct SaveTemplateReq;

impl SaveTemplateReq {
    pub const PATH: &'static str = "templates/save";
}

/// `templates/request-delete` — asks for confirmation first.
#[derive(Debug, Clone)]
pub struct RequestDeleteTemplateReq {
    pub id: String,
}

impl RequestDeleteTemplateReq {
    pub const PATH: &'static str = "templates/request-delete";
}

/// `templates/confirm-delete`
#[derive(Debug, Clone)]
pub struct ConfirmDeleteTemplateReq;

impl ConfirmDeleteTemplateReq {
    pub const PATH: &'static str = "templates/confirm-delete";
}

/// `templates/cancel-delete`
#[derive(Debug, Clone)]
pub struct CancelDeleteTemplateReq;

impl CancelDeleteTemplateReq {
    pub const PATH: &'static str = "templates/cancel-delete";
}
