//! Workshop management handler implementations.

use std::sync::Arc;

use akis::StateStore;
use atolye_backend::Query;
use tracing::warn;

use super::{AppContext, current_view};
use crate::model::{Workshop, new_workshop_code};
use crate::reconcile::Reconciler;
use crate::request::{EditWorkshopReq, RequestDeleteWorkshopReq, SaveWorkshopReq, SearchWorkshopsReq};
use crate::state::WorkshopsView;

/// Reprojects the reconciler into the view: the filtered list and the
/// form working copy. Search text, errors and the pending delete are
/// left as the view already has them.
fn project(ctx: &AppContext, store: &StateStore) {
    let mut view: WorkshopsView = current_view(store, WorkshopsView::PATH);
    if let Ok(rec) = ctx.workshops.lock() {
        view.workshops = rec
            .records()
            .iter()
            .filter(|w| w.matches(&view.search))
            .cloned()
            .collect();
        view.editing = rec.selected().cloned();
    }
    store.set(WorkshopsView::PATH, view);
}

fn set_error(store: &StateStore, error: Option<String>) {
    let mut view: WorkshopsView = current_view(store, WorkshopsView::PATH);
    view.error = error;
    store.set(WorkshopsView::PATH, view);
}

/// Handle `workshops/mount`.
pub async fn handle_mount(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    store.set(WorkshopsView::PATH, WorkshopsView::default());

    let snapshot_ctx = Arc::clone(ctx);
    let snapshot_store = Arc::clone(store);
    let watch = ctx.workshop_ops.subscribe(Query::unordered(), move |records| {
        if let Ok(mut rec) = snapshot_ctx.workshops.lock() {
            rec.on_snapshot(records);
        }
        project(&snapshot_ctx, &snapshot_store);
    });

    if let Ok(mut watches) = ctx.watches.lock()
        && let Some(old) = watches.workshops.replace(watch)
    {
        ctx.workshop_ops.unsubscribe(old);
    }
}

/// Handle `workshops/unmount`.
pub async fn handle_unmount(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    if let Ok(mut watches) = ctx.watches.lock()
        && let Some(watch) = watches.workshops.take()
    {
        ctx.workshop_ops.unsubscribe(watch);
    }
    if let Ok(mut rec) = ctx.workshops.lock() {
        rec.reset();
    }
    store.remove(WorkshopsView::PATH);
}

/// Handle `workshops/search`.
pub async fn handle_search(req: &SearchWorkshopsReq, ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    let mut view: WorkshopsView = current_view(store, WorkshopsView::PATH);
    view.search = req.query.clone();
    store.set(WorkshopsView::PATH, view);
    project(ctx, store);
}

/// Handle `workshops/open-create`.
pub async fn handle_open_create(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    if let Ok(mut rec) = ctx.workshops.lock() {
        rec.begin_create(Workshop::default());
    }
    set_error(store, None);
    project(ctx, store);
}

/// Handle `workshops/edit`.
pub async fn handle_edit(req: &EditWorkshopReq, ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    if let Ok(mut rec) = ctx.workshops.lock() {
        rec.select_by_id(&req.id);
    }
    set_error(store, None);
    project(ctx, store);
}

/// Handle `workshops/close-form`.
pub async fn handle_close_form(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    if let Ok(mut rec) = ctx.workshops.lock() {
        rec.select(None);
    }
    project(ctx, store);
}

/// Handle `workshops/save`.
///
/// Applies the form fields to the working copy and persists it. A create
/// gets a fresh reference code here; an edit keeps the one it was born
/// with. On success the form closes; on failure it stays open with the
/// entered values and an error.
pub async fn handle_save(req: &SaveWorkshopReq, ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    {
        let Ok(mut rec) = ctx.workshops.lock() else {
            return;
        };
        if rec.selected().is_none() {
            rec.begin_create(Workshop::default());
        }
        if let Some(workshop) = rec.selected_mut() {
            workshop.name = req.name.clone();
            workshop.owner = req.owner.clone();
            workshop.phone = req.phone.clone();
            workshop.address = req.address.clone();
            workshop.is_active = req.is_active;
            if workshop.id.is_empty() && workshop.code.is_empty() {
                workshop.code = new_workshop_code();
            }
        }
    }

    match Reconciler::save(&ctx.workshops).await {
        Ok(()) => {
            if let Ok(mut rec) = ctx.workshops.lock() {
                rec.select(None);
            }
            set_error(store, None);
        }
        Err(err) => {
            warn!(error = %err, "workshop save failed");
            set_error(store, Some("İşlem sırasında bir hata oluştu.".to_string()));
        }
    }
    project(ctx, store);
}

/// Handle `workshops/request-delete`.
pub async fn handle_request_delete(
    req: &RequestDeleteWorkshopReq,
    _ctx: &Arc<AppContext>,
    store: &Arc<StateStore>,
) {
    let mut view: WorkshopsView = current_view(store, WorkshopsView::PATH);
    view.pending_delete = Some(req.id.clone());
    store.set(WorkshopsView::PATH, view);
}

/// Handle `workshops/cancel-delete`.
pub async fn handle_cancel_delete(_ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    let mut view: WorkshopsView = current_view(store, WorkshopsView::PATH);
    view.pending_delete = None;
    store.set(WorkshopsView::PATH, view);
}

/// Handle `workshops/confirm-delete`.
pub async fn handle_confirm_delete(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    let pending = {
        let mut view: WorkshopsView = current_view(store, WorkshopsView::PATH);
        let pending = view.pending_delete.take();
        store.set(WorkshopsView::PATH, view);
        pending
    };
    let Some(id) = pending else {
        return;
    };

    match Reconciler::remove(&ctx.workshops, &id).await {
        Ok(()) => set_error(store, None),
        Err(err) => {
            warn!(error = %err, %id, "workshop delete failed");
            set_error(store, Some("Silme işlemi başarısız oldu.".to_string()));
        }
    }
    project(ctx, store);
}
