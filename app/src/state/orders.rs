//! Order creation screen state — stored at `orders/view`.

use serde::{Deserialize, Serialize};

use crate::model::{Order, ProductType, Workshop, product_types};

/// Widget-entered order fields, held here so they survive snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub quantity: u32,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl Default for OrderForm {
    fn default() -> Self {
        Self {
            weight: None,
            quantity: 1,
            note: String::new(),
            due_date: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersView {
    /// Workshops available in the picker, in snapshot order.
    pub workshops: Vec<Workshop>,
    /// The workshop the order is placed against. Auto-selected to the
    /// first workshop of the first non-empty snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_workshop: Option<Workshop>,
    pub product_types: Vec<ProductType>,
    pub order_type: ProductType,
    pub form: OrderForm,
    /// The five most recent orders, newest first.
    pub recent_orders: Vec<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrdersView {
    pub const PATH: &'static str = "orders/view";
}

impl Default for OrdersView {
    fn default() -> Self {
        let product_types = product_types();
        let order_type = product_types[0].clone();
        Self {
            workshops: Vec::new(),
            selected_workshop: None,
            product_types,
            order_type,
            form: OrderForm::default(),
            recent_orders: Vec::new(),
            notice: None,
            error: None,
        }
    }
}
