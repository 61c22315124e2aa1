//! Request payloads, one store path each.
//!
//! The renderer emits these through [`akis::Akis::emit`]; handlers
//! downcast them back out. Unit structs are requests that carry nothing
//! beyond their path.

mod app;
mod auth;
mod orders;
mod templates;
mod workshops;

pub use app::{InitializeReq, NavigateReq};
pub use auth::{LoginReq, LogoutReq, SignupReq};
pub use orders::{
    MountOrdersReq, SelectOrderTypeReq, SelectOrderWorkshopReq, SubmitOrderReq, UnmountOrdersReq,
    UpdateOrderFormReq,
};
pub use templates::{
    AddTemplateReq, CancelDeleteTemplateReq, ConfirmDeleteTemplateReq, EditTemplateContentReq,
    InsertVariableReq, MountTemplatesReq, RenameTemplateReq, RequestDeleteTemplateReq,
    SaveTemplateReq, SelectTemplateReq, UnmountTemplatesReq,
};
pub use workshops::{
    CancelDeleteWorkshopReq, CloseWorkshopFormReq, ConfirmDeleteWorkshopReq, EditWorkshopReq,
    MountWorkshopsReq,
    OpenCreateWorkshopReq, RequestDeleteWorkshopReq, SaveWorkshopReq, SearchWorkshopsReq,
    UnmountWorkshopsReq,
};
