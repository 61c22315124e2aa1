//! Request handler implementations and engine wiring.
//!
//! `register_handlers` binds every request path to its handler on an
//! [`akis::Akis`] instance, wiring the typed payload downcast and store
//! access. Handlers are free functions taking the request, the store and
//! the shared [`AppContext`].

mod app_handlers;
mod auth_handlers;
mod order_handlers;
mod template_handlers;
mod workshop_handlers;

use std::sync::{Arc, Mutex};

use akis::{Akis, StateStore};
use atolye_backend::{AuthClient, CollectionClient, CollectionOps, WatchId};

use crate::model::{Order, Template, Workshop};
use crate::reconcile::{AutoSelect, Reconciler};
use crate::request::*;

/// Backend watches owned by the mounted screens, torn down on unmount.
#[derive(Default)]
pub(crate) struct Watches {
    pub(crate) session: Option<WatchId>,
    pub(crate) workshops: Option<WatchId>,
    pub(crate) order_workshops: Option<WatchId>,
    pub(crate) orders: Option<WatchId>,
    pub(crate) templates: Option<WatchId>,
}

/// Shared handler context: backend clients, one reconciler per live
/// collection view, and the active watches.
pub struct AppContext {
    pub auth: Arc<dyn AuthClient>,
    pub workshop_ops: CollectionOps<Workshop>,
    pub order_ops: CollectionOps<Order>,
    pub template_ops: CollectionOps<Template>,
    /// Workshop management screen list + form.
    pub workshops: Mutex<Reconciler<Workshop>>,
    /// Workshop picker on the order screen; auto-selects the first
    /// workshop so the form is immediately usable.
    pub order_workshops: Mutex<Reconciler<Workshop>>,
    /// Recent orders list (newest five).
    pub orders: Mutex<Reconciler<Order>>,
    /// Template list + active working copy.
    pub templates: Mutex<Reconciler<Template>>,
    pub(crate) watches: Mutex<Watches>,
}

impl AppContext {
    pub fn new(collections: Arc<dyn CollectionClient>, auth: Arc<dyn AuthClient>) -> Arc<Self> {
        let workshop_ops = CollectionOps::<Workshop>::new(Arc::clone(&collections));
        let order_ops = CollectionOps::<Order>::new(Arc::clone(&collections));
        let template_ops = CollectionOps::<Template>::new(collections);
        Arc::new(Self {
            auth,
            workshops: Mutex::new(Reconciler::new(workshop_ops.clone(), AutoSelect::None)),
            order_workshops: Mutex::new(Reconciler::new(workshop_ops.clone(), AutoSelect::First)),
            orders: Mutex::new(Reconciler::new(order_ops.clone(), AutoSelect::None)),
            templates: Mutex::new(Reconciler::new(template_ops.clone(), AutoSelect::First)),
            workshop_ops,
            order_ops,
            template_ops,
            watches: Mutex::new(Watches::default()),
        })
    }
}

/// Reads the current view struct at `path`, falling back to defaults
/// when the screen has not written one yet.
pub(crate) fn current_view<T>(store: &StateStore, path: &str) -> T
where
    T: Clone + Default + Send + Sync + 'static,
{
    store
        .get(path)
        .and_then(|v| v.downcast_ref::<T>().cloned())
        .unwrap_or_default()
}

/// Register all handlers with an Akis instance.
pub fn register_handlers(app: &Akis, ctx: Arc<AppContext>) {
    // app/initialize
    {
        let ctx = ctx.clone();
        app.on(InitializeReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                app_handlers::handle_initialize(&ctx, &store).await;
            }
        });
    }

    // app/navigate
    app.on(NavigateReq::PATH, |_, payload, store| async move {
        let Some(req) = payload.downcast_ref::<NavigateReq>() else {
            return;
        };
        app_handlers::handle_navigate(req, &store).await;
    });

    // auth/login
    {
        let ctx = ctx.clone();
        app.on(LoginReq::PATH, move |_, payload, store| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload.downcast_ref::<LoginReq>() else {
                    return;
                };
                auth_handlers::handle_login(req, &ctx, &store).await;
            }
        });
    }

    // auth/signup
    {
        let ctx = ctx.clone();
        app.on(SignupReq::PATH, move |_, payload, store| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload.downcast_ref::<SignupReq>() else {
                    return;
                };
                auth_handlers::handle_signup(req, &ctx, &store).await;
            }
        });
    }

    // auth/logout
    {
        let ctx = ctx.clone();
        app.on(LogoutReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                auth_handlers::handle_logout(&ctx, &store).await;
            }
        });
    }

    // workshops/*
    {
        let ctx = ctx.clone();
        app.on(MountWorkshopsReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                workshop_handlers::handle_mount(&ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(UnmountWorkshopsReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                workshop_handlers::handle_unmount(&ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(SearchWorkshopsReq::PATH, move |_, payload, store| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload.downcast_ref::<SearchWorkshopsReq>() else {
                    return;
                };
                workshop_handlers::handle_search(req, &ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(OpenCreateWorkshopReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                workshop_handlers::handle_open_create(&ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(EditWorkshopReq::PATH, move |_, payload, store| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload.downcast_ref::<EditWorkshopReq>() else {
                    return;
                };
                workshop_handlers::handle_edit(req, &ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(CloseWorkshopFormReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                workshop_handlers::handle_close_form(&ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(SaveWorkshopReq::PATH, move |_, payload, store| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload.downcast_ref::<SaveWorkshopReq>() else {
                    return;
                };
                workshop_handlers::handle_save(req, &ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(RequestDeleteWorkshopReq::PATH, move |_, payload, store| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload.downcast_ref::<RequestDeleteWorkshopReq>() else {
                    return;
                };
                workshop_handlers::handle_request_delete(req, &ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(ConfirmDeleteWorkshopReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                workshop_handlers::handle_confirm_delete(&ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(CancelDeleteWorkshopReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                workshop_handlers::handle_cancel_delete(&ctx, &store).await;
            }
        });
    }

    // orders/*
    {
        let ctx = ctx.clone();
        app.on(MountOrdersReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                order_handlers::handle_mount(&ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(UnmountOrdersReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                order_handlers::handle_unmount(&ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(SelectOrderWorkshopReq::PATH, move |_, payload, store| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload.downcast_ref::<SelectOrderWorkshopReq>() else {
                    return;
                };
                order_handlers::handle_select_workshop(req, &ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(SelectOrderTypeReq::PATH, move |_, payload, store| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload.downcast_ref::<SelectOrderTypeReq>() else {
                    return;
                };
                order_handlers::handle_select_type(req, &ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(UpdateOrderFormReq::PATH, move |_, payload, store| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload.downcast_ref::<UpdateOrderFormReq>() else {
                    return;
                };
                order_handlers::handle_update_form(req, &ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(SubmitOrderReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                order_handlers::handle_submit(&ctx, &store).await;
            }
        });
    }

    // templates/*
    {
        let ctx = ctx.clone();
        app.on(MountTemplatesReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                template_handlers::handle_mount(&ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(UnmountTemplatesReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                template_handlers::handle_unmount(&ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(SelectTemplateReq::PATH, move |_, payload, store| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload.downcast_ref::<SelectTemplateReq>() else {
                    return;
                };
                template_handlers::handle_select(req, &ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(AddTemplateReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                template_handlers::handle_add(&ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(EditTemplateContentReq::PATH, move |_, payload, store| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload.downcast_ref::<EditTemplateContentReq>() else {
                    return;
                };
                template_handlers::handle_edit_content(req, &ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(RenameTemplateReq::PATH, move |_, payload, store| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload.downcast_ref::<RenameTemplateReq>() else {
                    return;
                };
                template_handlers::handle_rename(req, &ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(InsertVariableReq::PATH, move |_, payload, store| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload.downcast_ref::<InsertVariableReq>() else {
                    return;
                };
                template_handlers::handle_insert_variable(req, &ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(SaveTemplateReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                template_handlers::handle_save(&ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(RequestDeleteTemplateReq::PATH, move |_, payload, store| {
            let ctx = ctx.clone();
            async move {
                let Some(req) = payload.downcast_ref::<RequestDeleteTemplateReq>() else {
                    return;
                };
                template_handlers::handle_request_delete(req, &ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(ConfirmDeleteTemplateReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                template_handlers::handle_confirm_delete(&ctx, &store).await;
            }
        });
    }
    {
        let ctx = ctx.clone();
        app.on(CancelDeleteTemplateReq::PATH, move |_, _, store| {
            let ctx = ctx.clone();
            async move {
                template_handlers::handle_cancel_delete(&ctx, &store).await;
            }
        });
    }
}
