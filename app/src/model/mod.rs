//! Persisted records and their pure domain helpers.

mod order;
mod template;
mod workshop;

pub use order::{Order, OrderStatus, ProductType, product_types};
pub use template::{Template, TemplateVariable, render_preview, template_variables};
pub use workshop::{Workshop, new_workshop_code};
