use atolye_backend::Document;
use serde::{Deserialize, Serialize};

use super::Workshop;

/// One of the fixed product types an order can be placed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub id: String,
    pub name: String,
}

/// The fixed product catalog, in display order.
pub fn product_types() -> Vec<ProductType> {
    [
        ("bilezik", "Bilezik"),
        ("yuzuk", "Yüzük"),
        ("kolye", "Kolye"),
        ("kupe", "Küpe"),
        ("ozel", "Özel Sipariş"),
    ]
    .into_iter()
    .map(|(id, name)| ProductType {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Order lifecycle state. Only `Pending` is ever written today; the enum
/// exists so stored documents keep parsing when statuses are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    Pending,
}

/// A production order, stored in the `orders` collection. Orders are
/// create-only; there is no edit or status-transition flow.
///
/// `workshop` is a full value copy frozen at creation time. Editing the
/// workshop record later never changes existing orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: String,
    pub workshop: Workshop,
    pub order_type: ProductType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub created_at: String,
    pub created_by: String,
    pub status: OrderStatus,
}

impl Document for Order {
    const COLLECTION: &'static str = "orders";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
