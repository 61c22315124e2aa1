//! Workshop management screen requests.

/// `workshops/mount` — opens the live workshop subscription.
#[derive(Debug, Clone)]
pub struct MountWorkshopsReq;

impl MountWorkshopsReq {
    pub const PATH: &'static str = "workshops/mount";
}

/// `workshops/unmount` — tears the subscription down.
#[derive(Debug, Clone)]
pub struct UnmountWorkshopsReq;

impl UnmountWorkshopsReq {
    pub const PATH: &'static str = "workshops/unmount";
}

/// `workshops/search` — sets the filter text; the visible list is
/// recomputed on every keystroke.
#[derive(Debug, Clone)]
pub struct SearchWorkshopsReq {
    pub query: String,
}

impl SearchWorkshopsReq {
    pub const PATH: &'static str = "workshops/search";
}

/// `workshops/open-create` — opens the form on a blank workshop.
#[derive(Debug, Clone)]
pub struct OpenCreateWorkshopReq;

impl OpenCreateWorkshopReq {
    pub const PATH: &'static str = "workshops/open-create";
}

/// `workshops/edit` — opens the form on a copy of an existing workshop.
#[derive(Debug, Clone)]
pub struct EditWorkshopReq {
    pub id: String,
}

impl EditWorkshopReq {
    pub const PATH: &'static str = "workshops/edit";
}

/// `workshops/close-form` — discards the working copy without saving.
#[derive(Debug, Clone)]
pub struct CloseWorkshopFormReq;

impl CloseWorkshopFormReq {
    pub const PATH: &'static str = "workshops/close-form";
}

/// `workshops/save` — submits the form. Creating attaches a fresh
/// reference code; editing keeps the existing one. Carries the widget
/// field values the way the form modal collected them.
#[derive(Debug, Clone)]
pub struct SaveWorkshopReq {
    pub name: String,
    pub owner: String,
    pub phone: String,
    pub address: Option<String>,
    pub is_active: bool,
}

impl SaveWorkshopReq {
    pub const PATH: &'static str = "workshops/save";
}

/// `workshops/request-delete` — asks for confirmation first.
#[derive(Debug, Clone)]
pub struct RequestDeleteWorkshopReq {
    pub id: String,
}

impl RequestDeleteWorkshopReq {
    pub const PATH: &'static str = "workshops/request-delete";
}

/// `workshops/confirm-delete` — deletes the pending workshop.
#[derive(Debug, Clone)]
pub struct ConfirmDeleteWorkshopReq;

impl ConfirmDeleteWorkshopReq {
    pub const PATH: &'static str = "workshops/confirm-delete";
}

/// `workshops/cancel-delete`
#[derive(Debug, Clone)]
pub struct CancelDeleteWorkshopReq;

impl CancelDeleteWorkshopReq {
    pub const PATH: &'static str = "workshops/cancel-delete";
}
