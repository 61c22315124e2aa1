//! Atolye demo — boots the in-memory backend, seeds data, and drives a
//! scripted pass over every screen, tracing state as it changes.
//!
//! Usage: atolye [--email=...] [--password=...] [--name=...]

use std::sync::Arc;

use akis::Akis;
use atolye_app::model::Workshop;
use atolye_app::request::*;
use atolye_app::state::*;
use atolye_app::{AppContext, register_handlers};
use atolye_backend::{AuthClient, CollectionClient, MemoryAuth, MemoryBackend};
use tracing::{debug, info};

struct Config {
    email: String,
    password: String,
    display_name: String,
}

impl Config {
    fn from_args() -> Self {
        let mut config = Self {
            email: "usta@atolye.example".to_string(),
            password: "parola".to_string(),
            display_name: "Mehmet Usta".to_string(),
        };
        for arg in std::env::args().skip(1) {
            if let Some(value) = arg.strip_prefix("--email=") {
                config.email = value.to_string();
            } else if let Some(value) = arg.strip_prefix("--password=") {
                config.password = value.to_string();
            } else if let Some(value) = arg.strip_prefix("--name=") {
                config.display_name = value.to_string();
            }
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_args();

    let backend = Arc::new(MemoryBackend::new());
    let auth = Arc::new(MemoryAuth::new());
    auth.register_user(&config.email, &config.password, &config.display_name);

    let ctx = AppContext::new(
        Arc::clone(&backend) as Arc<dyn CollectionClient>,
        Arc::clone(&auth) as Arc<dyn AuthClient>,
    );
    seed_workshops(&ctx).await?;
    info!("seeded demo data");

    let app = Akis::new();
    register_handlers(&app, Arc::clone(&ctx));

    // Trace every state write, the way a renderer would observe them.
    app.subscribe("#", |path, _| {
        debug!(path, "state changed");
    });

    // ── boot & sign in ──
    app.emit(InitializeReq::PATH, InitializeReq).await;
    app.emit(
        LoginReq::PATH,
        LoginReq {
            email: config.email.clone(),
            password: config.password.clone(),
        },
    )
    .await;
    if let Some(state) = get::<AuthState>(&app, AuthState::PATH) {
        match state.user {
            Some(user) => info!(user = %user.display_name, "signed in"),
            None => anyhow::bail!("login failed: {:?}", state.error),
        }
    }

    // ── workshops ──
    app.emit(MountWorkshopsReq::PATH, MountWorkshopsReq).await;
    app.emit(OpenCreateWorkshopReq::PATH, OpenCreateWorkshopReq).await;
    app.emit(
        SaveWorkshopReq::PATH,
        SaveWorkshopReq {
            name: "Safir Kuyumculuk".to_string(),
            owner: "Zeynep Hanım".to_string(),
            phone: "0555 333 44 55".to_string(),
            address: Some("Nuruosmaniye Cd. 7, İstanbul".to_string()),
            is_active: true,
        },
    )
    .await;
    app.emit(
        SearchWorkshopsReq::PATH,
        SearchWorkshopsReq { query: "zeynep".to_string() },
    )
    .await;
    if let Some(view) = get::<WorkshopsView>(&app, WorkshopsView::PATH) {
        for workshop in &view.workshops {
            info!(name = %workshop.name, code = %workshop.code, "workshop matched search");
        }
    }
    app.emit(
        SearchWorkshopsReq::PATH,
        SearchWorkshopsReq { query: String::new() },
    )
    .await;
    app.emit(UnmountWorkshopsReq::PATH, UnmountWorkshopsReq).await;

    // ── orders ──
    app.emit(NavigateReq::PATH, NavigateReq { to: "/orders".to_string() }).await;
    app.emit(MountOrdersReq::PATH, MountOrdersReq).await;
    app.emit(
        SelectOrderTypeReq::PATH,
        SelectOrderTypeReq { id: "yuzuk".to_string() },
    )
    .await;
    app.emit(
        UpdateOrderFormReq::PATH,
        UpdateOrderFormReq {
            weight: Some(4.2),
            quantity: 2,
            note: "Tek taş, 14 ayar".to_string(),
            due_date: Some("2026-09-15".to_string()),
        },
    )
    .await;
    app.emit(SubmitOrderReq::PATH, SubmitOrderReq).await;
    if let Some(view) = get::<OrdersView>(&app, OrdersView::PATH) {
        if let Some(notice) = &view.notice {
            info!(%notice, "order submitted");
        }
        for order in &view.recent_orders {
            info!(
                workshop = %order.workshop.name,
                product = %order.order_type.name,
                quantity = order.quantity,
                "recent order"
            );
        }
    }
    app.emit(UnmountOrdersReq::PATH, UnmountOrdersReq).await;

    // ── templates ──
    app.emit(NavigateReq::PATH, NavigateReq { to: "/templates".to_string() }).await;
    app.emit(MountTemplatesReq::PATH, MountTemplatesReq).await;
    app.emit(AddTemplateReq::PATH, AddTemplateReq).await;
    app.emit(
        EditTemplateContentReq::PATH,
        EditTemplateContentReq {
            content: "Merhaba {{yetkili}}, {{siparis_no}} numaralı {{urun_tipi}} \
                      siparişiniz {{tarih}} tarihinde hazır olacak."
                .to_string(),
        },
    )
    .await;
    app.emit(
        RenameTemplateReq::PATH,
        RenameTemplateReq { name: "Teslim Bildirimi".to_string() },
    )
    .await;
    app.emit(SaveTemplateReq::PATH, SaveTemplateReq).await;
    if let Some(view) = get::<TemplatesView>(&app, TemplatesView::PATH) {
        info!(preview = %view.preview, "template preview");
    }
    app.emit(UnmountTemplatesReq::PATH, UnmountTemplatesReq).await;

    // ── sign out ──
    app.emit(LogoutReq::PATH, LogoutReq).await;
    info!("demo flow complete");
    Ok(())
}

fn get<T: Clone + Send + Sync + 'static>(app: &Akis, path: &str) -> Option<T> {
    app.get(path).and_then(|v| v.downcast_ref::<T>().cloned())
}

async fn seed_workshops(ctx: &Arc<AppContext>) -> anyhow::Result<()> {
    let seeds = [
        ("Altınbaş Atölye", "Mehmet Usta", "0555 111 22 33", "W-1042"),
        ("Gümüş İşleri", "Ayşe Hanım", "0555 222 33 44", "W-2817"),
    ];
    for (name, owner, phone, code) in seeds {
        ctx.workshop_ops
            .create(&Workshop {
                id: String::new(),
                name: name.to_string(),
                owner: owner.to_string(),
                phone: phone.to_string(),
                address: None,
                is_active: true,
                code: code.to_string(),
            })
            .await?;
    }
    Ok(())
}
