//! Drives the HTTP backend and the screens against an in-process fake of the
//! Firebase-style REST endpoint.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::{json, Value};

use expense_tracker::backend::{BackendError, ExpenseBackend, HttpExpenseBackend};
use expense_tracker::config::{BackendConfig, ManageExpenseConfig};
use expense_tracker::ui::navigation::{Navigator, Route, StackNavigator};
use expense_tracker::ui::screens::{ManageExpense, RecentExpenses};
use expense_tracker::ui::state::{ExpensesStore, InMemoryExpensesStore};
use shared::{ExpenseData, ExpenseId};

#[derive(Clone, Default)]
struct FakeDatabase {
    records: Arc<Mutex<BTreeMap<String, Value>>>,
    next_key: Arc<AtomicU64>,
}

impl FakeDatabase {
    fn records(&self) -> BTreeMap<String, Value> {
        self.records.lock().unwrap().clone()
    }
}

fn record_key(file: &str) -> Result<String, StatusCode> {
    file.strip_suffix(".json")
        .map(str::to_string)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_expenses(State(db): State<FakeDatabase>) -> Json<Value> {
    let records = db.records();
    if records.is_empty() {
        Json(Value::Null)
    } else {
        Json(json!(records))
    }
}

async fn create_expense(State(db): State<FakeDatabase>, Json(body): Json<Value>) -> Json<Value> {
    // Keys sort in creation order, the way push ids do
    let sequence = db.next_key.fetch_add(1, Ordering::SeqCst);
    let key = format!("-N{:06}{}", sequence, &uuid::Uuid::new_v4().simple().to_string()[..8]);
    db.records.lock().unwrap().insert(key.clone(), body);
    Json(json!({ "name": key }))
}

async fn replace_expense(
    State(db): State<FakeDatabase>,
    Path(file): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let key = record_key(&file)?;
    db.records.lock().unwrap().insert(key, body.clone());
    Ok(Json(body))
}

async fn remove_expense(
    State(db): State<FakeDatabase>,
    Path(file): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let key = record_key(&file)?;
    db.records.lock().unwrap().remove(&key);
    Ok(Json(Value::Null))
}

async fn spawn_server(db: FakeDatabase) -> String {
    let app = Router::new()
        .route("/expenses.json", get(list_expenses).post(create_expense))
        .route("/expenses/:file", put(replace_expense).delete(remove_expense))
        .with_state(db);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/", addr)
}

async fn spawn_failing_server() -> String {
    let app = Router::new().route(
        "/expenses.json",
        get(|| async { (StatusCode::UNAUTHORIZED, "Permission denied") }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn backend(base_url: String) -> HttpExpenseBackend {
    HttpExpenseBackend::new(&BackendConfig {
        base_url,
        timeout_secs: 5,
    })
    .unwrap()
}

fn data(description: &str, amount: f64, day: u32) -> ExpenseData {
    ExpenseData {
        date: NaiveDate::from_ymd_opt(2024, 3, day).unwrap(),
        amount,
        description: description.to_string(),
    }
}

#[tokio::test]
async fn test_empty_collection_fetches_as_no_expenses() {
    let backend = backend(spawn_server(FakeDatabase::default()).await);

    let expenses = backend.fetch_expenses().await.unwrap();

    assert!(expenses.is_empty());
}

#[tokio::test]
async fn test_store_update_delete_round_trip() {
    let db = FakeDatabase::default();
    let backend = backend(spawn_server(db.clone()).await);

    let first = backend.store_expense(&data("coffee", 4.5, 1)).await.unwrap();
    let second = backend.store_expense(&data("books", 30.0, 2)).await.unwrap();
    assert_ne!(first, second);

    // Dates travel as plain calendar dates
    let stored = db.records();
    assert_eq!(stored[first.as_str()]["date"], json!("2024-03-01"));

    backend
        .update_expense(&first, &data("coffee and cake", 9.0, 1))
        .await
        .unwrap();

    let fetched = backend.fetch_expenses().await.unwrap();
    assert_eq!(fetched.len(), 2);
    assert_eq!(fetched[0].id, first);
    assert_eq!(fetched[0].description, "coffee and cake");
    assert_eq!(fetched[0].amount, 9.0);
    assert_eq!(fetched[1].id, second);

    backend.delete_expense(&second).await.unwrap();

    let fetched = backend.fetch_expenses().await.unwrap();
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].id, first);
}

#[tokio::test]
async fn test_error_status_is_reported_with_body() {
    let backend = backend(spawn_failing_server().await);

    match backend.fetch_expenses().await {
        Err(BackendError::Status { status, body }) => {
            assert_eq!(status, 401);
            assert_eq!(body, "Permission denied");
        }
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_screens_add_edit_and_delete_against_server() {
    let db = FakeDatabase::default();
    let backend: Arc<dyn ExpenseBackend> = Arc::new(backend(spawn_server(db.clone()).await));
    let store = Arc::new(InMemoryExpensesStore::new());
    let navigator = Arc::new(StackNavigator::new(Route::AllExpenses));

    // Add
    navigator.navigate(Route::ManageExpense { expense_id: None });
    let add = ManageExpense::mount(
        None,
        store.clone(),
        backend.clone(),
        navigator.clone(),
        ManageExpenseConfig::default(),
    );
    add.confirm(data("lunch", 12.5, 3)).await;

    let added = store.expenses();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].description, "lunch");
    assert!(db.records().contains_key(added[0].id.as_str()));
    navigator.go_back();

    // Edit
    let id: ExpenseId = added[0].id.clone();
    navigator.navigate(Route::ManageExpense {
        expense_id: Some(id.clone()),
    });
    let edit = ManageExpense::mount(
        Some(id.clone()),
        store.clone(),
        backend.clone(),
        navigator.clone(),
        ManageExpenseConfig::default(),
    );
    assert_eq!(navigator.current_title(), "Edit Expense");
    edit.confirm(data("lunch", 15.0, 3)).await;

    assert_eq!(navigator.current_route(), Route::AllExpenses);
    assert_eq!(db.records()[id.as_str()]["amount"], json!(15.0));

    // A fresh fetch sees the same thing the store holds
    let recent = RecentExpenses::new(
        Arc::new(InMemoryExpensesStore::new()),
        backend.clone(),
        navigator.clone(),
    );
    recent.load().await;
    let today = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    assert_eq!(recent.recent_expenses(today).len(), 1);

    // Delete
    navigator.navigate(Route::ManageExpense {
        expense_id: Some(id.clone()),
    });
    let delete = ManageExpense::mount(
        Some(id.clone()),
        store.clone(),
        backend.clone(),
        navigator.clone(),
        ManageExpenseConfig::default(),
    );
    delete.delete().await;

    assert!(store.expenses().is_empty());
    assert!(db.records().is_empty());
    assert_eq!(navigator.current_route(), Route::AllExpenses);
}
