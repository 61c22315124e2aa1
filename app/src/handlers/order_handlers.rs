//! Order creation handler implementations.

use std::sync::Arc;

use akis::StateStore;
use atolye_backend::{Query, now_rfc3339};
use tracing::warn;

use super::{AppContext, current_view};
use crate::model::{Order, OrderStatus, product_types};
use crate::request::{SelectOrderTypeReq, SelectOrderWorkshopReq, UpdateOrderFormReq};
use crate::state::{AuthState, OrderForm, OrdersView};

/// Reprojects both reconcilers into the view: the picker list with its
/// selection and the recent-orders table. Form fields, order type and
/// messages stay as entered.
fn project(ctx: &AppContext, store: &StateStore) {
    let mut view: OrdersView = current_view(store, OrdersView::PATH);
    if let Ok(rec) = ctx.order_workshops.lock() {
        view.workshops = rec.records().to_vec();
        view.selected_workshop = rec.selected().cloned();
    }
    if let Ok(rec) = ctx.orders.lock() {
        view.recent_orders = rec.records().to_vec();
    }
    store.set(OrdersView::PATH, view);
}

/// Handle `orders/mount`. Two watches: the workshop picker and the five
/// most recent orders, newest first.
pub async fn handle_mount(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    store.set(OrdersView::PATH, OrdersView::default());

    let snapshot_ctx = Arc::clone(ctx);
    let snapshot_store = Arc::clone(store);
    let workshops_watch = ctx.workshop_ops.subscribe(Query::unordered(), move |records| {
        if let Ok(mut rec) = snapshot_ctx.order_workshops.lock() {
            rec.on_snapshot(records);
        }
        project(&snapshot_ctx, &snapshot_store);
    });

    let snapshot_ctx = Arc::clone(ctx);
    let snapshot_store = Arc::clone(store);
    let orders_watch = ctx
        .order_ops
        .subscribe(Query::ordered_desc("createdAt", 5), move |records| {
            if let Ok(mut rec) = snapshot_ctx.orders.lock() {
                rec.on_snapshot(records);
            }
            project(&snapshot_ctx, &snapshot_store);
        });

    if let Ok(mut watches) = ctx.watches.lock() {
        if let Some(old) = watches.order_workshops.replace(workshops_watch) {
            ctx.workshop_ops.unsubscribe(old);
        }
        if let Some(old) = watches.orders.replace(orders_watch) {
            ctx.order_ops.unsubscribe(old);
        }
    }
}

/// Handle `orders/unmount`.
pub async fn handle_unmount(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    if let Ok(mut watches) = ctx.watches.lock() {
        if let Some(watch) = watches.order_workshops.take() {
            ctx.workshop_ops.unsubscribe(watch);
        }
        if let Some(watch) = watches.orders.take() {
            ctx.order_ops.unsubscribe(watch);
        }
    }
    if let Ok(mut rec) = ctx.order_workshops.lock() {
        rec.reset();
    }
    if let Ok(mut rec) = ctx.orders.lock() {
        rec.reset();
    }
    store.remove(OrdersView::PATH);
}

/// Handle `orders/select-workshop`.
pub async fn handle_select_workshop(
    req: &SelectOrderWorkshopReq,
    ctx: &Arc<AppContext>,
    store: &Arc<StateStore>,
) {
    if let Ok(mut rec) = ctx.order_workshops.lock() {
        rec.select_by_id(&req.id);
    }
    project(ctx, store);
}

/// Handle `orders/select-type`. Unknown ids are ignored.
pub async fn handle_select_type(
    req: &SelectOrderTypeReq,
    _ctx: &Arc<AppContext>,
    store: &Arc<StateStore>,
) {
    let mut view: OrdersView = current_view(store, OrdersView::PATH);
    if let Some(kind) = product_types().into_iter().find(|t| t.id == req.id) {
        view.order_type = kind;
        store.set(OrdersView::PATH, view);
    }
}

/// Handle `orders/update-form`. Quantity is floored at one.
pub async fn handle_update_form(
    req: &UpdateOrderFormReq,
    _ctx: &Arc<AppContext>,
    store: &Arc<StateStore>,
) {
    let mut view: OrdersView = current_view(store, OrdersView::PATH);
    view.form = OrderForm {
        weight: req.weight,
        quantity: req.quantity.max(1),
        note: req.note.clone(),
        due_date: req.due_date.clone(),
    };
    store.set(OrdersView::PATH, view);
}

/// Handle `orders/submit`.
///
/// Without a selected workshop this sets exactly one precondition error
/// and issues no backend call at all. On success the form resets and a
/// notice is shown; on failure the entered values are kept.
pub async fn handle_submit(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    let view: OrdersView = current_view(store, OrdersView::PATH);

    let selected = ctx
        .order_workshops
        .lock()
        .ok()
        .and_then(|rec| rec.selected().cloned());
    let Some(workshop) = selected else {
        let mut view = view;
        view.error = Some("Lütfen bir atölye seçin.".to_string());
        view.notice = None;
        store.set(OrdersView::PATH, view);
        return;
    };

    let created_by = store
        .get(AuthState::PATH)
        .and_then(|v| {
            v.downcast_ref::<AuthState>()
                .and_then(|a| a.user.as_ref().map(|u| u.uid.clone()))
        })
        .unwrap_or_else(|| "anonymous".to_string());

    // the workshop goes in as a frozen value copy
    let order = Order {
        id: String::new(),
        workshop,
        order_type: view.order_type.clone(),
        weight: view.form.weight,
        quantity: view.form.quantity,
        note: (!view.form.note.is_empty()).then(|| view.form.note.clone()),
        due_date: view.form.due_date.clone(),
        created_at: now_rfc3339(),
        created_by,
        status: OrderStatus::Pending,
    };

    let result = ctx.order_ops.create(&order).await;

    // re-read: the orders snapshot may have landed during the create
    let mut view: OrdersView = current_view(store, OrdersView::PATH);
    match result {
        Ok(_) => {
            view.form = OrderForm::default();
            view.notice = Some("Sipariş başarıyla oluşturuldu!".to_string());
            view.error = None;
        }
        Err(err) => {
            warn!(error = %err, "order create failed");
            view.notice = None;
            view.error = Some("Sipariş oluşturulurken bir hata oluştu.".to_string());
        }
    }
    store.set(OrdersView::PATH, view);
}
