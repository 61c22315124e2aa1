//! End-to-end screen flows: requests emitted through the engine, state
//! read back from the store, with the in-memory backend pushing live
//! snapshots throughout.

use std::sync::Arc;

use akis::Akis;
use atolye_app::model::Workshop;
use atolye_app::request::*;
use atolye_app::state::*;
use atolye_app::{AppContext, register_handlers};
use atolye_backend::{AuthClient, CollectionClient, MemoryAuth, MemoryBackend};

fn setup() -> (Akis, Arc<AppContext>, Arc<MemoryBackend>, Arc<MemoryAuth>) {
    let backend = Arc::new(MemoryBackend::new());
    let auth = Arc::new(MemoryAuth::new());
    let ctx = AppContext::new(
        Arc::clone(&backend) as Arc<dyn CollectionClient>,
        Arc::clone(&auth) as Arc<dyn AuthClient>,
    );
    let app = Akis::new();
    register_handlers(&app, Arc::clone(&ctx));
    (app, ctx, backend, auth)
}

fn view<T: Clone + Send + Sync + 'static>(app: &Akis, path: &str) -> T {
    app.get(path)
        .and_then(|v| v.downcast_ref::<T>().cloned())
        .unwrap_or_else(|| panic!("no {path} state"))
}

fn route(app: &Akis) -> String {
    view::<AppRoute>(app, AppRoute::PATH).0
}

async fn save_workshop(app: &Akis, name: &str, owner: &str) {
    app.emit(OpenCreateWorkshopReq::PATH, OpenCreateWorkshopReq).await;
    app.emit(
        SaveWorkshopReq::PATH,
        SaveWorkshopReq {
            name: name.to_string(),
            owner: owner.to_string(),
            phone: "5550000".to_string(),
            address: None,
            is_active: true,
        },
    )
    .await;
}

// ---------------------------------------------------------------------------
// auth & routing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn initialize_routes_to_login_without_a_session() {
    let (app, _, _, _) = setup();
    app.emit(InitializeReq::PATH, InitializeReq).await;
    assert_eq!(route(&app), "/login");
    let auth: AuthState = view(&app, AuthState::PATH);
    assert_eq!(auth.phase, AuthPhase::Unauthenticated);
}

#[tokio::test]
async fn login_failure_maps_to_the_credential_message() {
    let (app, _, _, auth) = setup();
    auth.register_user("usta@atolye.example", "parola", "Mehmet Usta");
    app.emit(InitializeReq::PATH, InitializeReq).await;

    app.emit(
        LoginReq::PATH,
        LoginReq {
            email: "usta@atolye.example".to_string(),
            password: "yanlış".to_string(),
        },
    )
    .await;

    let state: AuthState = view(&app, AuthState::PATH);
    assert_eq!(state.error.as_deref(), Some("E-posta veya şifre hatalı."));
    assert!(!state.busy);
    assert_eq!(route(&app), "/login");
}

#[tokio::test]
async fn failed_relogin_keeps_the_live_session() {
    let (app, _, _, auth) = setup();
    auth.register_user("usta@atolye.example", "parola", "Mehmet Usta");
    app.emit(InitializeReq::PATH, InitializeReq).await;
    app.emit(
        LoginReq::PATH,
        LoginReq {
            email: "usta@atolye.example".to_string(),
            password: "parola".to_string(),
        },
    )
    .await;

    // the auth client keeps its session through a failed login, and the
    // store must agree with it
    app.emit(
        LoginReq::PATH,
        LoginReq {
            email: "usta@atolye.example".to_string(),
            password: "yanlış".to_string(),
        },
    )
    .await;

    assert!(auth.current_session().is_some());
    let state: AuthState = view(&app, AuthState::PATH);
    assert_eq!(state.phase, AuthPhase::Authenticated);
    assert_eq!(state.user.unwrap().display_name, "Mehmet Usta");
    assert_eq!(state.error.as_deref(), Some("E-posta veya şifre hatalı."));
    assert!(!state.busy);
}

#[tokio::test]
async fn login_success_authenticates_and_routes_home() {
    let (app, _, _, auth) = setup();
    auth.register_user("usta@atolye.example", "parola", "Mehmet Usta");
    app.emit(InitializeReq::PATH, InitializeReq).await;

    app.emit(
        LoginReq::PATH,
        LoginReq {
            email: "usta@atolye.example".to_string(),
            password: "parola".to_string(),
        },
    )
    .await;

    let state: AuthState = view(&app, AuthState::PATH);
    assert_eq!(state.phase, AuthPhase::Authenticated);
    assert_eq!(state.user.unwrap().display_name, "Mehmet Usta");
    assert_eq!(route(&app), "/");
}

#[tokio::test]
async fn signup_with_taken_email_maps_to_the_in_use_message() {
    let (app, _, _, auth) = setup();
    auth.register_user("usta@atolye.example", "parola", "Mehmet Usta");

    app.emit(
        SignupReq::PATH,
        SignupReq {
            email: "usta@atolye.example".to_string(),
            password: "başka".to_string(),
            display_name: "Başkası".to_string(),
        },
    )
    .await;

    let state: AuthState = view(&app, AuthState::PATH);
    assert_eq!(
        state.error.as_deref(),
        Some("Bu e-posta adresi zaten kullanımda.")
    );
}

#[tokio::test]
async fn gated_routes_redirect_to_login_until_authenticated() {
    let (app, _, _, auth) = setup();
    auth.register_user("usta@atolye.example", "parola", "Mehmet Usta");
    app.emit(InitializeReq::PATH, InitializeReq).await;

    app.emit(NavigateReq::PATH, NavigateReq { to: "/orders".to_string() }).await;
    assert_eq!(route(&app), "/login");

    app.emit(
        LoginReq::PATH,
        LoginReq {
            email: "usta@atolye.example".to_string(),
            password: "parola".to_string(),
        },
    )
    .await;
    app.emit(NavigateReq::PATH, NavigateReq { to: "/orders".to_string() }).await;
    assert_eq!(route(&app), "/orders");
}

#[tokio::test]
async fn logout_clears_session_and_screen_state() {
    let (app, _, _, auth) = setup();
    auth.register_user("usta@atolye.example", "parola", "Mehmet Usta");
    app.emit(InitializeReq::PATH, InitializeReq).await;
    app.emit(
        LoginReq::PATH,
        LoginReq {
            email: "usta@atolye.example".to_string(),
            password: "parola".to_string(),
        },
    )
    .await;
    app.emit(MountWorkshopsReq::PATH, MountWorkshopsReq).await;

    app.emit(LogoutReq::PATH, LogoutReq).await;

    assert_eq!(route(&app), "/login");
    assert!(auth.current_session().is_none());
    assert!(app.get(WorkshopsView::PATH).is_none());
}

// ---------------------------------------------------------------------------
// workshops screen
// ---------------------------------------------------------------------------

#[tokio::test]
async fn workshop_create_attaches_a_code_and_closes_the_form() {
    let (app, _, _, _) = setup();
    app.emit(MountWorkshopsReq::PATH, MountWorkshopsReq).await;

    save_workshop(&app, "Altınbaş Atölye", "Mehmet Usta").await;

    let v: WorkshopsView = view(&app, WorkshopsView::PATH);
    assert_eq!(v.workshops.len(), 1);
    let created = &v.workshops[0];
    assert!(!created.id.is_empty());
    assert!(created.code.starts_with("W-"));
    assert!(v.editing.is_none());
    assert!(v.error.is_none());
}

#[tokio::test]
async fn workshop_edit_never_regenerates_the_code() {
    let (app, _, _, _) = setup();
    app.emit(MountWorkshopsReq::PATH, MountWorkshopsReq).await;
    save_workshop(&app, "Altınbaş Atölye", "Mehmet Usta").await;

    let v: WorkshopsView = view(&app, WorkshopsView::PATH);
    let id = v.workshops[0].id.clone();
    let code = v.workshops[0].code.clone();

    app.emit(EditWorkshopReq::PATH, EditWorkshopReq { id }).await;
    app.emit(
        SaveWorkshopReq::PATH,
        SaveWorkshopReq {
            name: "Altınbaş Atölye".to_string(),
            owner: "Ayşe Usta".to_string(),
            phone: "5551111".to_string(),
            address: Some("Kapalıçarşı 12".to_string()),
            is_active: false,
        },
    )
    .await;

    let v: WorkshopsView = view(&app, WorkshopsView::PATH);
    assert_eq!(v.workshops.len(), 1);
    assert_eq!(v.workshops[0].code, code);
    assert_eq!(v.workshops[0].owner, "Ayşe Usta");
    assert!(!v.workshops[0].is_active);
}

#[tokio::test]
async fn workshop_search_filters_by_name_or_owner() {
    let (app, _, _, _) = setup();
    app.emit(MountWorkshopsReq::PATH, MountWorkshopsReq).await;
    save_workshop(&app, "Altınbaş Atölye", "Mehmet Usta").await;
    save_workshop(&app, "Gümüş İşleri", "Ayşe Hanım").await;

    app.emit(
        SearchWorkshopsReq::PATH,
        SearchWorkshopsReq { query: "ayşe".to_string() },
    )
    .await;
    let v: WorkshopsView = view(&app, WorkshopsView::PATH);
    assert_eq!(v.workshops.len(), 1);
    assert_eq!(v.workshops[0].name, "Gümüş İşleri");

    // clearing the search restores the full snapshot
    app.emit(
        SearchWorkshopsReq::PATH,
        SearchWorkshopsReq { query: String::new() },
    )
    .await;
    let v: WorkshopsView = view(&app, WorkshopsView::PATH);
    assert_eq!(v.workshops.len(), 2);
}

#[tokio::test]
async fn workshop_delete_goes_through_the_confirm_step() {
    let (app, _, backend, _) = setup();
    app.emit(MountWorkshopsReq::PATH, MountWorkshopsReq).await;
    save_workshop(&app, "Altınbaş Atölye", "Mehmet Usta").await;
    let v: WorkshopsView = view(&app, WorkshopsView::PATH);
    let id = v.workshops[0].id.clone();

    app.emit(
        RequestDeleteWorkshopReq::PATH,
        RequestDeleteWorkshopReq { id: id.clone() },
    )
    .await;
    let v: WorkshopsView = view(&app, WorkshopsView::PATH);
    assert_eq!(v.pending_delete.as_deref(), Some(id.as_str()));
    assert_eq!(backend.len("workshops"), 1); // nothing deleted yet

    app.emit(CancelDeleteWorkshopReq::PATH, CancelDeleteWorkshopReq).await;
    let v: WorkshopsView = view(&app, WorkshopsView::PATH);
    assert!(v.pending_delete.is_none());
    assert_eq!(backend.len("workshops"), 1);

    app.emit(RequestDeleteWorkshopReq::PATH, RequestDeleteWorkshopReq { id }).await;
    app.emit(ConfirmDeleteWorkshopReq::PATH, ConfirmDeleteWorkshopReq).await;
    let v: WorkshopsView = view(&app, WorkshopsView::PATH);
    assert!(v.workshops.is_empty());
    assert_eq!(backend.len("workshops"), 0);
}

#[tokio::test]
async fn clearing_the_address_on_edit_persists() {
    let (app, _, _, _) = setup();
    app.emit(MountWorkshopsReq::PATH, MountWorkshopsReq).await;
    app.emit(OpenCreateWorkshopReq::PATH, OpenCreateWorkshopReq).await;
    app.emit(
        SaveWorkshopReq::PATH,
        SaveWorkshopReq {
            name: "Altınbaş Atölye".to_string(),
            owner: "Mehmet Usta".to_string(),
            phone: "5550000".to_string(),
            address: Some("Kapalıçarşı 12".to_string()),
            is_active: true,
        },
    )
    .await;
    let v: WorkshopsView = view(&app, WorkshopsView::PATH);
    assert_eq!(v.workshops[0].address.as_deref(), Some("Kapalıçarşı 12"));
    let id = v.workshops[0].id.clone();

    app.emit(EditWorkshopReq::PATH, EditWorkshopReq { id }).await;
    app.emit(
        SaveWorkshopReq::PATH,
        SaveWorkshopReq {
            name: "Altınbaş Atölye".to_string(),
            owner: "Mehmet Usta".to_string(),
            phone: "5550000".to_string(),
            address: None,
            is_active: true,
        },
    )
    .await;

    // the snapshot after the update must not resurrect the old address
    let v: WorkshopsView = view(&app, WorkshopsView::PATH);
    assert_eq!(v.workshops[0].address, None);
}

#[tokio::test]
async fn failed_workshop_save_keeps_the_form_open_with_an_error() {
    let (app, _, backend, _) = setup();
    app.emit(MountWorkshopsReq::PATH, MountWorkshopsReq).await;
    backend.reject_writes("workshops");

    save_workshop(&app, "Altınbaş Atölye", "Mehmet Usta").await;

    let v: WorkshopsView = view(&app, WorkshopsView::PATH);
    assert_eq!(v.error.as_deref(), Some("İşlem sırasında bir hata oluştu."));
    let editing = v.editing.expect("form stays open");
    assert_eq!(editing.name, "Altınbaş Atölye");
    assert!(editing.id.is_empty());
}

// ---------------------------------------------------------------------------
// orders screen
// ---------------------------------------------------------------------------

#[tokio::test]
async fn orders_mount_auto_selects_the_first_workshop() {
    let (app, ctx, _, _) = setup();
    let first = Workshop {
        name: "Altınbaş Atölye".to_string(),
        owner: "Mehmet Usta".to_string(),
        phone: "5550000".to_string(),
        code: "W-1042".to_string(),
        ..Workshop::default()
    };
    ctx.workshop_ops.create(&first).await.unwrap();
    ctx.workshop_ops
        .create(&Workshop {
            name: "Gümüş İşleri".to_string(),
            owner: "Ayşe Hanım".to_string(),
            phone: "5551111".to_string(),
            code: "W-2042".to_string(),
            ..Workshop::default()
        })
        .await
        .unwrap();

    app.emit(MountOrdersReq::PATH, MountOrdersReq).await;

    let v: OrdersView = view(&app, OrdersView::PATH);
    assert_eq!(v.workshops.len(), 2);
    assert_eq!(v.selected_workshop.unwrap().name, "Altınbaş Atölye");
    assert_eq!(v.order_type.id, "bilezik"); // catalog default
    assert_eq!(v.form.quantity, 1);
}

#[tokio::test]
async fn order_submit_freezes_the_workshop_copy_and_resets_the_form() {
    let (app, ctx, _, _) = setup();
    let id = ctx
        .workshop_ops
        .create(&Workshop {
            name: "Altınbaş Atölye".to_string(),
            owner: "Mehmet Usta".to_string(),
            phone: "5550000".to_string(),
            code: "W-1042".to_string(),
            ..Workshop::default()
        })
        .await
        .unwrap();

    app.emit(MountOrdersReq::PATH, MountOrdersReq).await;
    app.emit(
        SelectOrderTypeReq::PATH,
        SelectOrderTypeReq { id: "kolye".to_string() },
    )
    .await;
    app.emit(
        UpdateOrderFormReq::PATH,
        UpdateOrderFormReq {
            weight: Some(18.5),
            quantity: 3,
            note: "Acele".to_string(),
            due_date: Some("2026-03-01".to_string()),
        },
    )
    .await;
    app.emit(SubmitOrderReq::PATH, SubmitOrderReq).await;

    let v: OrdersView = view(&app, OrdersView::PATH);
    assert_eq!(v.notice.as_deref(), Some("Sipariş başarıyla oluşturuldu!"));
    assert!(v.error.is_none());
    assert_eq!(v.form.quantity, 1); // reset
    assert!(v.form.note.is_empty());
    assert_eq!(v.recent_orders.len(), 1);
    let order = &v.recent_orders[0];
    assert_eq!(order.order_type.id, "kolye");
    assert_eq!(order.quantity, 3);
    assert_eq!(order.created_by, "anonymous");

    // editing the workshop later never rewrites the frozen copy
    let mut renamed = order.workshop.clone();
    renamed.id = id;
    renamed.name = "Yeni İsim".to_string();
    ctx.workshop_ops.update(&renamed).await.unwrap();

    let v: OrdersView = view(&app, OrdersView::PATH);
    assert_eq!(v.workshops[0].name, "Yeni İsim");
    assert_eq!(v.recent_orders[0].workshop.name, "Altınbaş Atölye");
}

#[tokio::test]
async fn order_submit_without_a_workshop_is_a_single_error_and_no_write() {
    let (app, _, backend, _) = setup();
    app.emit(MountOrdersReq::PATH, MountOrdersReq).await;

    app.emit(SubmitOrderReq::PATH, SubmitOrderReq).await;

    let v: OrdersView = view(&app, OrdersView::PATH);
    assert_eq!(v.error.as_deref(), Some("Lütfen bir atölye seçin."));
    assert!(v.notice.is_none());
    assert_eq!(backend.len("orders"), 0);
}

#[tokio::test]
async fn failed_order_submit_keeps_the_entered_values() {
    let (app, ctx, backend, _) = setup();
    ctx.workshop_ops
        .create(&Workshop {
            name: "Altınbaş Atölye".to_string(),
            owner: "Mehmet Usta".to_string(),
            phone: "5550000".to_string(),
            code: "W-1042".to_string(),
            ..Workshop::default()
        })
        .await
        .unwrap();
    app.emit(MountOrdersReq::PATH, MountOrdersReq).await;
    app.emit(
        UpdateOrderFormReq::PATH,
        UpdateOrderFormReq {
            weight: Some(12.0),
            quantity: 2,
            note: "Acele".to_string(),
            due_date: None,
        },
    )
    .await;

    backend.reject_writes("orders");
    app.emit(SubmitOrderReq::PATH, SubmitOrderReq).await;

    let v: OrdersView = view(&app, OrdersView::PATH);
    assert_eq!(
        v.error.as_deref(),
        Some("Sipariş oluşturulurken bir hata oluştu.")
    );
    assert_eq!(v.form.quantity, 2);
    assert_eq!(v.form.note, "Acele");
    assert_eq!(v.form.weight, Some(12.0));
}

#[tokio::test]
async fn recent_orders_are_newest_first_and_capped_at_five() {
    let (app, ctx, _, _) = setup();
    ctx.workshop_ops
        .create(&Workshop {
            name: "Altınbaş Atölye".to_string(),
            owner: "Mehmet Usta".to_string(),
            phone: "5550000".to_string(),
            code: "W-1042".to_string(),
            ..Workshop::default()
        })
        .await
        .unwrap();
    app.emit(MountOrdersReq::PATH, MountOrdersReq).await;

    for quantity in 1..=7u32 {
        app.emit(
            UpdateOrderFormReq::PATH,
            UpdateOrderFormReq {
                weight: None,
                quantity,
                note: String::new(),
                due_date: None,
            },
        )
        .await;
        app.emit(SubmitOrderReq::PATH, SubmitOrderReq).await;
    }

    let v: OrdersView = view(&app, OrdersView::PATH);
    assert_eq!(v.recent_orders.len(), 5);
    let quantities: Vec<u32> = v.recent_orders.iter().map(|o| o.quantity).collect();
    assert_eq!(quantities, [7, 6, 5, 4, 3]);
}

#[tokio::test]
async fn order_form_quantity_is_floored_at_one() {
    let (app, _, _, _) = setup();
    app.emit(MountOrdersReq::PATH, MountOrdersReq).await;
    app.emit(
        UpdateOrderFormReq::PATH,
        UpdateOrderFormReq {
            weight: None,
            quantity: 0,
            note: String::new(),
            due_date: None,
        },
    )
    .await;
    let v: OrdersView = view(&app, OrdersView::PATH);
    assert_eq!(v.form.quantity, 1);
}

// ---------------------------------------------------------------------------
// templates screen
// ---------------------------------------------------------------------------

#[tokio::test]
async fn template_add_selects_the_new_default() {
    let (app, _, _, _) = setup();
    app.emit(MountTemplatesReq::PATH, MountTemplatesReq).await;

    app.emit(AddTemplateReq::PATH, AddTemplateReq).await;

    let v: TemplatesView = view(&app, TemplatesView::PATH);
    assert_eq!(v.templates.len(), 1);
    let active = v.active.unwrap();
    assert!(!active.id.is_empty());
    assert_eq!(active.name, "Yeni Şablon");
    assert_eq!(active.content, "Merhaba {{yetkili}}, ...");
    assert_eq!(v.preview, "Merhaba Ahmet Bey, ...");
}

#[tokio::test]
async fn template_edits_survive_snapshots_until_saved() {
    let (app, ctx, _, _) = setup();
    app.emit(MountTemplatesReq::PATH, MountTemplatesReq).await;
    app.emit(AddTemplateReq::PATH, AddTemplateReq).await;

    app.emit(
        EditTemplateContentReq::PATH,
        EditTemplateContentReq {
            content: "Sayın {{yetkili}}, siparişiniz hazır.".to_string(),
        },
    )
    .await;
    app.emit(
        InsertVariableReq::PATH,
        InsertVariableReq { key: "tarih".to_string() },
    )
    .await;

    // an unrelated template arriving must not clobber the draft
    ctx.template_ops
        .create(&atolye_app::model::Template {
            id: String::new(),
            name: "Başka".to_string(),
            content: "-".to_string(),
        })
        .await
        .unwrap();

    let v: TemplatesView = view(&app, TemplatesView::PATH);
    assert_eq!(v.templates.len(), 2);
    let active = v.active.unwrap();
    assert_eq!(active.content, "Sayın {{yetkili}}, siparişiniz hazır. {{tarih}}");
    assert_eq!(v.preview, "Sayın Ahmet Bey, siparişiniz hazır. 15.02.2026");

    // the draft is not persisted yet
    let stored = v
        .templates
        .iter()
        .find(|t| t.id == active.id)
        .unwrap();
    assert_eq!(stored.content, "Merhaba {{yetkili}}, ...");

    app.emit(SaveTemplateReq::PATH, SaveTemplateReq).await;
    let v: TemplatesView = view(&app, TemplatesView::PATH);
    assert_eq!(v.notice.as_deref(), Some("Şablon kaydedildi."));
    let stored = v
        .templates
        .iter()
        .find(|t| t.id == active.id)
        .unwrap();
    assert_eq!(stored.content, "Sayın {{yetkili}}, siparişiniz hazır. {{tarih}}");
}

#[tokio::test]
async fn template_rename_persists_with_save() {
    let (app, _, _, _) = setup();
    app.emit(MountTemplatesReq::PATH, MountTemplatesReq).await;
    app.emit(AddTemplateReq::PATH, AddTemplateReq).await;

    app.emit(
        RenameTemplateReq::PATH,
        RenameTemplateReq { name: "Teslim Bildirimi".to_string() },
    )
    .await;
    app.emit(SaveTemplateReq::PATH, SaveTemplateReq).await;

    let v: TemplatesView = view(&app, TemplatesView::PATH);
    assert_eq!(v.templates[0].name, "Teslim Bildirimi");
}

#[tokio::test]
async fn deleting_the_active_template_falls_back_to_the_first_remaining() {
    let (app, _, _, _) = setup();
    app.emit(MountTemplatesReq::PATH, MountTemplatesReq).await;
    app.emit(AddTemplateReq::PATH, AddTemplateReq).await;
    let first_id = view::<TemplatesView>(&app, TemplatesView::PATH)
        .active
        .unwrap()
        .id;
    app.emit(AddTemplateReq::PATH, AddTemplateReq).await;
    let second_id = view::<TemplatesView>(&app, TemplatesView::PATH)
        .active
        .unwrap()
        .id;

    app.emit(
        RequestDeleteTemplateReq::PATH,
        RequestDeleteTemplateReq { id: second_id.clone() },
    )
    .await;
    app.emit(ConfirmDeleteTemplateReq::PATH, ConfirmDeleteTemplateReq).await;

    let v: TemplatesView = view(&app, TemplatesView::PATH);
    assert_eq!(v.templates.len(), 1);
    // the selection cleared with the delete, and the next snapshot
    // auto-selected the first remaining template
    assert_eq!(v.active.unwrap().id, first_id);
    assert!(v.pending_delete.is_none());
}

#[tokio::test]
async fn template_select_switches_the_working_copy() {
    let (app, _, _, _) = setup();
    app.emit(MountTemplatesReq::PATH, MountTemplatesReq).await;
    app.emit(AddTemplateReq::PATH, AddTemplateReq).await;
    let first_id = view::<TemplatesView>(&app, TemplatesView::PATH)
        .active
        .unwrap()
        .id;
    app.emit(AddTemplateReq::PATH, AddTemplateReq).await;

    app.emit(
        SelectTemplateReq::PATH,
        SelectTemplateReq { id: first_id.clone() },
    )
    .await;
    let v: TemplatesView = view(&app, TemplatesView::PATH);
    assert_eq!(v.active.unwrap().id, first_id);
}

#[tokio::test]
async fn unmount_tears_the_watch_down() {
    let (app, ctx, _, _) = setup();
    app.emit(MountTemplatesReq::PATH, MountTemplatesReq).await;
    app.emit(UnmountTemplatesReq::PATH, UnmountTemplatesReq).await;

    assert!(app.get(TemplatesView::PATH).is_none());

    // a later write must not resurrect the view
    ctx.template_ops
        .create(&atolye_app::model::Template {
            id: String::new(),
            name: "Sonradan".to_string(),
            content: "-".to_string(),
        })
        .await
        .unwrap();
    assert!(app.get(TemplatesView::PATH).is_none());
}
