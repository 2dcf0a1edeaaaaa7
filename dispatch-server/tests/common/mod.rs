//! Shared helpers for the HTTP integration tests
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use dispatch_server::{Config, DbService, ServerState, build_app};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Full application (middleware included) over a private in-memory database
pub struct TestApp {
    router: Router,
    pub state: ServerState,
}

impl TestApp {
    pub async fn new() -> Self {
        let state = ServerState::in_memory()
            .await
            .expect("in-memory state should initialize");
        Self::with_state(state)
    }

    /// Application over an already opened database (file backed, pooled)
    pub fn with_db(db: DbService) -> Self {
        Self::with_state(ServerState::new(Config::default(), db))
    }

    fn with_state(state: ServerState) -> Self {
        let router = build_app().with_state(state.clone());
        Self { router, state }
    }

    /// Send a request; a `Some` body is sent as JSON
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        self.dispatch(request).await
    }

    /// Send a raw JSON-typed body (used for malformed payloads)
    pub async fn send_raw(&self, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap();
        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Create an employee and return the id it was stored under
    pub async fn create_employee(&self, body: Value) -> i64 {
        let (status, _) = self.post("/employees", body).await;
        assert_eq!(status, StatusCode::OK);
        let (_, list) = self.get("/employees").await;
        list.as_array().unwrap().last().unwrap()["id"].as_i64().unwrap()
    }

    /// Create an order and return the id it was stored under
    pub async fn create_order(&self, body: Value) -> i64 {
        let (status, _) = self.post("/orders", body).await;
        assert_eq!(status, StatusCode::OK);
        let (_, list) = self.get("/orders").await;
        list.as_array().unwrap().last().unwrap()["id"].as_i64().unwrap()
    }
}

pub fn employee_body() -> Value {
    json!({
        "firstName": "Petr",
        "lastName": "Svoboda",
        "birthDate": "1985-07-21",
        "carRegistrationNumber": "2BC 4410"
    })
}

pub fn order_body(employee_id: i64) -> Value {
    json!({
        "startTime": "2024-03-04T07:30:00Z",
        "endTime": "2024-03-04T11:15:00Z",
        "price": 1499.5,
        "employeeId": employee_id,
        "startCity": "Olomouc",
        "destination": "Ostrava"
    })
}
