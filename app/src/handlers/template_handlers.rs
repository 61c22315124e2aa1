//! Message template handler implementations.

use std::sync::Arc;

use akis::StateStore;
use atolye_backend::Query;
use tracing::warn;

use super::{AppContext, current_view};
use crate::model::{Template, render_preview};
use crate::reconcile::Reconciler;
use crate::request::{
    EditTemplateContentReq, InsertVariableReq, RenameTemplateReq, RequestDeleteTemplateReq,
    SelectTemplateReq,
};
use crate::state::TemplatesView;

/// Reprojects the reconciler into the view: list, active working copy
/// and the preview rendered from it.
fn project(ctx: &AppContext, store: &StateStore) {
    let mut view: TemplatesView = current_view(store, TemplatesView::PATH);
    if let Ok(rec) = ctx.templates.lock() {
        view.templates = rec.records().to_vec();
        view.active = rec.selected().cloned();
    }
    view.preview = view
        .active
        .as_ref()
        .map(|t| render_preview(&t.content))
        .unwrap_or_default();
    store.set(TemplatesView::PATH, view);
}

fn set_messages(store: &StateStore, notice: Option<String>, error: Option<String>) {
    let mut view: TemplatesView = current_view(store, TemplatesView::PATH);
    view.notice = notice;
    view.error = error;
    store.set(TemplatesView::PATH, view);
}

/// Handle `templates/mount`.
pub async fn handle_mount(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    store.set(TemplatesView::PATH, TemplatesView::default());

    let snapshot_ctx = Arc::clone(ctx);
    let snapshot_store = Arc::clone(store);
    let watch = ctx.template_ops.subscribe(Query::unordered(), move |records| {
        if let Ok(mut rec) = snapshot_ctx.templates.lock() {
            rec.on_snapshot(records);
        }
        project(&snapshot_ctx, &snapshot_store);
    });

    if let Ok(mut watches) = ctx.watches.lock()
        && let Some(old) = watches.templates.replace(watch)
    {
        ctx.template_ops.unsubscribe(old);
    }
}

/// Handle `templates/unmount`.
pub async fn handle_unmount(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    if let Ok(mut watches) = ctx.watches.lock()
        && let Some(watch) = watches.templates.take()
    {
        ctx.template_ops.unsubscribe(watch);
    }
    if let Ok(mut rec) = ctx.templates.lock() {
        rec.reset();
    }
    store.remove(TemplatesView::PATH);
}

/// Handle `templates/select`. Selecting replaces the working copy with
/// a fresh snapshot copy, dropping unsaved edits on the previous one.
pub async fn handle_select(req: &SelectTemplateReq, ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    if let Ok(mut rec) = ctx.templates.lock() {
        rec.select_by_id(&req.id);
    }
    project(ctx, store);
}

/// Handle `templates/add`. Creates from the defaults and makes the new
/// record (with its backend-assigned id) the active one.
pub async fn handle_add(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    if let Ok(mut rec) = ctx.templates.lock() {
        rec.begin_create(Template::new_default());
    }
    match Reconciler::save(&ctx.templates).await {
        Ok(()) => set_messages(store, None, None),
        Err(err) => {
            warn!(error = %err, "template create failed");
            set_messages(store, None, Some("Kaydetme hatası.".to_string()));
        }
    }
    project(ctx, store);
}

/// Handle `templates/edit-content`.
pub async fn handle_edit_content(
    req: &EditTemplateContentReq,
    ctx: &Arc<AppContext>,
    store: &Arc<StateStore>,
) {
    if let Ok(mut rec) = ctx.templates.lock()
        && let Some(active) = rec.selected_mut()
    {
        active.content = req.content.clone();
    }
    project(ctx, store);
}

/// Handle `templates/rename`.
pub async fn handle_rename(req: &RenameTemplateReq, ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    if let Ok(mut rec) = ctx.templates.lock()
        && let Some(active) = rec.selected_mut()
    {
        active.name = req.name.clone();
    }
    project(ctx, store);
}

/// Handle `templates/insert-variable`. Appends ` {{key}}` to the active
/// content, like the editor's variable buttons.
pub async fn handle_insert_variable(
    req: &InsertVariableReq,
    ctx: &Arc<AppContext>,
    store: &Arc<StateStore>,
) {
    if let Ok(mut rec) = ctx.templates.lock()
        && let Some(active) = rec.selected_mut()
    {
        active.content.push_str(&format!(" {{{{{}}}}}", req.key));
    }
    project(ctx, store);
}

/// Handle `templates/save`. No-op when nothing is active. The working
/// copy is echoed locally on success; the pushed snapshot confirms it.
pub async fn handle_save(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    let has_active = ctx
        .templates
        .lock()
        .map(|rec| rec.selected().is_some())
        .unwrap_or(false);
    if !has_active {
        return;
    }
    match Reconciler::save(&ctx.templates).await {
        Ok(()) => set_messages(store, Some("Şablon kaydedildi.".to_string()), None),
        Err(err) => {
            warn!(error = %err, "template save failed");
            set_messages(store, None, Some("Kaydetme hatası.".to_string()));
        }
    }
    project(ctx, store);
}

/// Handle `templates/request-delete`.
pub async fn handle_request_delete(
    req: &RequestDeleteTemplateReq,
    _ctx: &Arc<AppContext>,
    store: &Arc<StateStore>,
) {
    let mut view: TemplatesView = current_view(store, TemplatesView::PATH);
    view.pending_delete = Some(req.id.clone());
    store.set(TemplatesView::PATH, view);
}

/// Handle `templates/cancel-delete`.
pub async fn handle_cancel_delete(_ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    let mut view: TemplatesView = current_view(store, TemplatesView::PATH);
    view.pending_delete = None;
    store.set(TemplatesView::PATH, view);
}

/// Handle `templates/confirm-delete`. Deleting the active template
/// clears the selection before the delete is issued.
pub async fn handle_confirm_delete(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    let pending = {
        let mut view: TemplatesView = current_view(store, TemplatesView::PATH);
        let pending = view.pending_delete.take();
        store.set(TemplatesView::PATH, view);
        pending
    };
    let Some(id) = pending else {
        return;
    };

    match Reconciler::remove(&ctx.templates, &id).await {
        Ok(()) => set_messages(store, None, None),
        Err(err) => {
            warn!(error = %err, %id, "template delete failed");
            set_messages(store, None, Some("Silme işlemi başarısız oldu.".to_string()));
        }
    }
    project(ctx, store);
}
