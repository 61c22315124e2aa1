//! Order creation screen requests.

/// `orders/mount` — opens the workshop picker and recent-orders
/// subscriptions.
#[derive(Debug, Clone)]
pub struct MountOrdersReq;

impl MountOrdersReq {
    pub const PATH: &'static str = "orders/mount";
}

/// `orders/unmount`
#[derive(Debug, Clone)]
pub struct UnmountOrdersReq;

impl UnmountOrdersReq {
    pub const PATH: &'static str = "orders/unmount";
}

/// `orders/select-workshop` — picks the workshop to order from.
#[derive(Debug, Clone)]
pub struct SelectOrderWorkshopReq {
    pub id: String,
}

impl SelectOrderWorkshopReq {
    pub const PATH: &'static str = "orders/select-workshop";
}

/// `orders/select-type` — picks one of the fixed product types.
#[derive(Debug, Clone)]
pub struct SelectOrderTypeReq {
    pub id: String,
}

impl SelectOrderTypeReq {
    pub const PATH: &'static str = "orders/select-type";
}

/// `orders/update-form` — replaces the widget-entered fields.
#[derive(Debug, Clone)]
pub struct UpdateOrderFormReq {
    pub weight: Option<f64>,
    pub quantity: u32,
    pub note: String,
    pub due_date: Option<String>,
}

impl UpdateOrderFormReq {
    pub const PATH: &'static str = "orders/update-form";
}

/// `orders/submit` — creates the order from the current view state.
#[derive(Debug, Clone)]
pub struct SubmitOrderReq;

impl SubmitOrderReq {
    pub const PATH: &'static str = "orders/submit";
}
