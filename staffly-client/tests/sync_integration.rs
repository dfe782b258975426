//! End-to-end tests: client stores against the in-memory mock API

use std::time::Duration;

use shared::models::{EmployeeCreate, ServiceDraft, ServiceUpdate};
use staffly_api_mock::MockState;
use staffly_client::{
    ClientConfig, ClientError, EmployeeApi, EmployeeCache, EmployeeDetailStore, EmployeeField,
    EmployeeListStore, FieldEditor,
};

const TOKEN: &str = "test-token";

fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

async fn start_backend() -> (MockState, String) {
    init_tracing();
    let state = MockState::new(TOKEN);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let serve_state = state.clone();
    tokio::spawn(async move {
        let _ = staffly_api_mock::serve(listener, serve_state).await;
    });
    (state, format!("http://{}", addr))
}

fn api(base_url: &str) -> EmployeeApi {
    EmployeeApi::new(ClientConfig::new(base_url).with_token(TOKEN).build())
}

fn stores(api: &EmployeeApi) -> (EmployeeListStore, EmployeeDetailStore) {
    let cache = EmployeeCache::new();
    (
        EmployeeListStore::new(api.clone(), cache.clone()),
        EmployeeDetailStore::new(api.clone(), cache),
    )
}

fn employee_payload(name: &str, phone: &str) -> EmployeeCreate {
    EmployeeCreate {
        name: name.to_string(),
        phone: Some(phone.to_string()),
        ..Default::default()
    }
}

fn cut_draft() -> ServiceDraft {
    ServiceDraft {
        name: "Cut".to_string(),
        description: Some(String::new()),
        duration: 30,
        time_offset: 0,
        price: 0.0,
    }
}

#[tokio::test]
async fn nested_create_assigns_service_ids() {
    let (_state, base) = start_backend().await;
    let api = api(&base);

    let mut payload = employee_payload("Ana", "+37360000000");
    payload.services.push(cut_draft());

    let employee = api.create(&payload).await.unwrap();
    assert!(employee.id > 0);
    assert_eq!(employee.services.len(), 1);
    let service = &employee.services[0];
    assert!(service.id > 0);
    assert_eq!(service.duration, 30);
    assert_eq!(service.employee_id, employee.id);
}

#[tokio::test]
async fn field_commit_changes_only_that_field() {
    let (_state, base) = start_backend().await;
    let api = api(&base);
    let (list, detail) = stores(&api);

    let mut payload = employee_payload("Ana", "+37360000000");
    payload.services.push(cut_draft());
    let created = list.create(&payload).await.unwrap();
    detail.open(created.id).await.unwrap();

    let mut editor = FieldEditor::new(EmployeeField::Phone);
    editor.begin(detail.current().unwrap().phone.as_deref());
    editor.set_draft("+37369999999");

    let updated = editor.commit(&api, &detail).await.unwrap();
    assert_eq!(updated.phone.as_deref(), Some("+37369999999"));
    assert_eq!(updated.name, "Ana");

    // Local reconciliation merged the one field and kept everything else,
    // services included
    let held = detail.current().unwrap();
    assert_eq!(held.phone.as_deref(), Some("+37369999999"));
    assert_eq!(held.name, "Ana");
    assert_eq!(held.services.len(), 1);
    assert!(!editor.is_editing());
}

#[tokio::test]
async fn commit_merges_servers_canonical_value() {
    let (_state, base) = start_backend().await;
    let api = api(&base);
    let (list, detail) = stores(&api);

    let created = list.create(&employee_payload("Ana", "+37360000000")).await.unwrap();
    detail.open(created.id).await.unwrap();

    let mut editor = FieldEditor::new(EmployeeField::Phone);
    editor.begin(detail.current().unwrap().phone.as_deref());
    editor.set_draft("  +37369999999  ");

    // The server trims what it stores; the merged value is the
    // server's, not the raw draft
    let updated = editor.commit(&api, &detail).await.unwrap();
    assert_eq!(updated.phone.as_deref(), Some("+37369999999"));
    assert_eq!(
        detail.current().unwrap().phone.as_deref(),
        Some("+37369999999")
    );
    assert!(!editor.is_editing());
}

#[tokio::test]
async fn failed_commit_keeps_editor_open_with_draft() {
    let (_state, base) = start_backend().await;
    let api = api(&base);
    let (list, detail) = stores(&api);

    let created = list.create(&employee_payload("Ana", "+37360000000")).await.unwrap();
    detail.open(created.id).await.unwrap();

    // Deleting the record server-side makes the next PATCH fail
    api.remove(created.id).await.unwrap();

    let mut editor = FieldEditor::new(EmployeeField::Phone);
    editor.begin(Some("+37360000000"));
    editor.set_draft("+37369999999");

    let err = editor.commit(&api, &detail).await.unwrap_err();
    assert!(matches!(err, ClientError::Internal(_)));
    assert!(editor.is_editing());
    assert_eq!(editor.draft(), "+37369999999");
    // Local state untouched by the failed save
    assert_eq!(
        detail.current().unwrap().phone.as_deref(),
        Some("+37360000000")
    );
}

#[tokio::test]
async fn patch_is_idempotent() {
    let (_state, base) = start_backend().await;
    let api = api(&base);

    let created = api.create(&employee_payload("Ana", "+37360000000")).await.unwrap();
    let patch = EmployeeField::Phone.patch("+37369999999".to_string());

    let first = api.update(created.id, &patch).await.unwrap();
    let second = api.update(created.id, &patch).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(second.phone.as_deref(), Some("+37369999999"));
    assert_eq!(second.name, "Ana");
}

#[tokio::test]
async fn service_add_and_edit_reconcile_in_place() {
    let (_state, base) = start_backend().await;
    let api = api(&base);
    let (list, detail) = stores(&api);

    let created = list.create(&employee_payload("Ana", "+37360000000")).await.unwrap();
    detail.open(created.id).await.unwrap();

    let cut = detail.add_service(cut_draft()).await.unwrap();
    let color = detail
        .add_service(ServiceDraft {
            name: "Color".to_string(),
            description: Some("Full color".to_string()),
            duration: 60,
            time_offset: 10,
            price: 40.0,
        })
        .await
        .unwrap();

    let held = detail.current().unwrap();
    assert_eq!(held.services.len(), 2);
    assert!(held.services.iter().all(|s| s.employee_id == created.id));

    // Edit the first entry; order and the neighbor must survive
    let edited = detail
        .edit_service(
            cut.id,
            ServiceUpdate {
                duration: Some(45),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.duration, 45);
    assert_eq!(edited.name, "Cut");

    let held = detail.current().unwrap();
    let ids: Vec<i64> = held.services.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![cut.id, color.id]);
    assert_eq!(held.services[0].duration, 45);
    assert_eq!(held.services[1], color);
}

#[tokio::test]
async fn service_add_requires_description_presence() {
    let (_state, base) = start_backend().await;
    let api = api(&base);
    let (list, detail) = stores(&api);

    let created = list.create(&employee_payload("Ana", "+37360000000")).await.unwrap();
    detail.open(created.id).await.unwrap();

    let err = detail
        .add_service(ServiceDraft {
            name: "Cut".to_string(),
            description: None,
            duration: 30,
            time_offset: 0,
            price: 0.0,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(detail.current().unwrap().services.is_empty());
}

#[tokio::test]
async fn ownership_mismatch_is_not_found() {
    let (_state, base) = start_backend().await;
    let api = api(&base);

    let mut ana = employee_payload("Ana", "+37360000000");
    ana.services.push(cut_draft());
    let ana = api.create(&ana).await.unwrap();
    let ion = api.create(&employee_payload("Ion", "+37361111111")).await.unwrap();

    // Ana's service addressed through Ion's id
    let err = api
        .remove_service(ion.id, ana.services[0].id)
        .await
        .unwrap_err();
    match err {
        ClientError::NotFound(body) => {
            assert!(body.contains("Service not found for this employee"))
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
    // The service is still there under its real owner
    api.fetch_service(ana.id, ana.services[0].id).await.unwrap();
}

#[tokio::test]
async fn optimistic_delete_has_no_rollback() {
    let (_state, base) = start_backend().await;
    let api = api(&base);
    let (list, detail) = stores(&api);

    let mut payload = employee_payload("Ana", "+37360000000");
    payload.services.push(cut_draft());
    payload.services.push(ServiceDraft {
        name: "Color".to_string(),
        description: Some(String::new()),
        duration: 60,
        time_offset: 0,
        price: 40.0,
    });
    let created = list.create(&payload).await.unwrap();
    detail.open(created.id).await.unwrap();
    let doomed = created.services[0].id;

    // Make the DELETE fail: the record is already gone server-side
    api.remove_service(created.id, doomed).await.unwrap();

    detail.delete_service(doomed).await.unwrap();

    // Removed locally despite the 404, and no rollback happened
    let held = detail.current().unwrap();
    assert!(held.services.iter().all(|s| s.id != doomed));
    assert_eq!(held.services.len(), 1);
}

#[tokio::test]
async fn successful_delete_removes_exactly_one_entry() {
    let (_state, base) = start_backend().await;
    let api = api(&base);
    let (list, detail) = stores(&api);

    let mut payload = employee_payload("Ana", "+37360000000");
    payload.services.push(cut_draft());
    let created = list.create(&payload).await.unwrap();
    detail.open(created.id).await.unwrap();

    detail.delete_service(created.services[0].id).await.unwrap();
    assert!(detail.current().unwrap().services.is_empty());

    // Gone server-side too
    let err = api
        .fetch_service(created.id, created.services[0].id)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn employee_delete_cascades_and_leaves_roster() {
    let (_state, base) = start_backend().await;
    let api = api(&base);
    let (list, detail) = stores(&api);

    let mut payload = employee_payload("Ana", "+37360000000");
    payload.services.push(cut_draft());
    let ana = list.create(&payload).await.unwrap();
    list.create(&employee_payload("Ion", "+37361111111")).await.unwrap();

    detail.open(ana.id).await.unwrap();
    detail.delete().await.unwrap();

    assert!(detail.open_id().is_none());
    assert!(detail.current().is_none());
    let names: Vec<String> = list.employees().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["Ion".to_string()]);

    // Cascade: the employee and its services no longer exist
    assert!(api.fetch(ana.id).await.unwrap().is_none());
}

#[tokio::test]
async fn missing_detail_resolves_to_empty_not_error() {
    let (_state, base) = start_backend().await;
    let api = api(&base);
    let (_list, detail) = stores(&api);

    assert!(api.fetch(999).await.unwrap().is_none());

    let opened = detail.open(999).await.unwrap();
    assert!(opened.is_none());
    assert!(detail.current().is_none());
}

#[tokio::test]
async fn empty_detail_evicts_stale_record() {
    let (_state, base) = start_backend().await;
    let api = api(&base);
    let (list, detail) = stores(&api);

    // Warm the shared cache through the list store, then lose the
    // record server-side behind the store's back
    let ana = list.create(&employee_payload("Ana", "+37360000000")).await.unwrap();
    api.remove(ana.id).await.unwrap();

    let opened = detail.open(ana.id).await.unwrap();
    assert!(opened.is_none());
    // The cached copy is gone too; nothing keeps serving a record the
    // server says does not exist
    assert!(detail.current().is_none());
    assert!(list.employees().is_empty());
}

#[tokio::test]
async fn failed_open_clears_the_open_id() {
    let (_state, base) = start_backend().await;
    let anonymous = EmployeeApi::new(ClientConfig::new(&base).build());
    let (_list, detail) = stores(&anonymous);

    let err = detail.open(1).await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized));
    // Nothing stays open after a failed fetch
    assert!(detail.open_id().is_none());
    assert!(detail.current().is_none());
}

#[tokio::test]
async fn cancelled_fetch_applies_nothing() {
    let (state, base) = start_backend().await;
    let api = api(&base);
    // Created through the raw API so the shared cache starts empty
    let created = api.create(&employee_payload("Ana", "+37360000000")).await.unwrap();
    let (_list, detail) = stores(&api);

    state.set_latency(Duration::from_millis(300));
    let racing = detail.clone();
    let handle = tokio::spawn(async move { racing.open(created.id).await });
    tokio::time::sleep(Duration::from_millis(50)).await;
    detail.close();

    let result = handle.await.unwrap();
    assert!(matches!(result, Err(ClientError::Cancelled)));
    // The late response was never applied
    assert!(detail.open_id().is_none());
    assert!(detail.current().is_none());
    state.clear_latency();
}

#[tokio::test]
async fn opening_another_employee_cancels_the_first_fetch() {
    let (state, base) = start_backend().await;
    let api = api(&base);
    let (list, detail) = stores(&api);

    let ana = list.create(&employee_payload("Ana", "+37360000000")).await.unwrap();
    let ion = list.create(&employee_payload("Ion", "+37361111111")).await.unwrap();

    state.set_latency(Duration::from_millis(300));
    let racing = detail.clone();
    let first = tokio::spawn(async move { racing.open(ana.id).await });
    tokio::time::sleep(Duration::from_millis(50)).await;

    state.clear_latency();
    let opened = detail.open(ion.id).await.unwrap().unwrap();
    assert_eq!(opened.id, ion.id);

    assert!(matches!(first.await.unwrap(), Err(ClientError::Cancelled)));
    assert_eq!(detail.open_id(), Some(ion.id));
    assert_eq!(detail.current().unwrap().name, "Ion");
}

#[tokio::test]
async fn search_is_case_insensitive_substring() {
    let (_state, base) = start_backend().await;
    let api = api(&base);
    let (list, _detail) = stores(&api);

    list.create(&employee_payload("Ana", "+37360000001")).await.unwrap();
    list.create(&employee_payload("Ion", "+37360000002")).await.unwrap();
    list.create(&employee_payload("Mariana", "+37360000003")).await.unwrap();

    let hits: Vec<String> = list.search("ANA").into_iter().map(|e| e.name).collect();
    assert_eq!(hits, vec!["Ana".to_string(), "Mariana".to_string()]);
    assert!(list.search("zzz").is_empty());
}

#[tokio::test]
async fn created_employee_appears_in_roster() {
    let (_state, base) = start_backend().await;
    let api = api(&base);
    let (list, _detail) = stores(&api);

    list.load().await.unwrap();
    assert!(list.employees().is_empty());

    let created = list.create(&employee_payload("Ana", "+37360000000")).await.unwrap();
    assert_eq!(list.employees().len(), 1);
    assert_eq!(list.employees()[0].id, created.id);

    // A record created outside the store is appended explicitly
    let outside = api.create(&employee_payload("Ion", "+37361111111")).await.unwrap();
    list.insert(outside.clone());
    let ids: Vec<i64> = list.employees().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![created.id, outside.id]);
}

#[tokio::test]
async fn missing_required_fields_reject_create() {
    let (_state, base) = start_backend().await;
    let api = api(&base);

    let err = api
        .create(&EmployeeCreate {
            name: "Ana".to_string(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    match err {
        ClientError::Validation(body) => assert!(body.contains("Name and phone are required")),
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[tokio::test]
async fn unauthenticated_calls_fail_before_persistence() {
    let (_state, base) = start_backend().await;
    let anonymous = EmployeeApi::new(ClientConfig::new(&base).build());
    let (list, _detail) = stores(&anonymous);

    assert!(matches!(anonymous.list().await, Err(ClientError::Unauthorized)));
    assert!(list.load().await.is_err());
    assert!(list.employees().is_empty());
}
