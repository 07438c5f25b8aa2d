//! Shared harness: an in-memory database, seeded, behind the real router

#![allow(dead_code)]

use std::str::FromStr;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use library_server::{api, repository::MIGRATOR, AppConfig, AppState};
use serde_json::Value;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tower::ServiceExt;

pub const ALICE: (&str, i64) = ("Alice", 42);
pub const BOB: (&str, i64) = ("Bob", 17);

pub const SAPIENS: &str = "978-0062316097";
pub const DUNE: &str = "978-0441172719";
pub const HOBBIT: &str = "978-0547928227";

/// Fresh single-connection in-memory database with schema and seed rows.
///
/// Dune has no copies, The Hobbit has copies 7 and 8 on the shelf, and
/// Sapiens has copy 9 lent to Bob.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();

    for (card_num, name) in [(ALICE.1, ALICE.0), (BOB.1, BOB.0)] {
        sqlx::query("INSERT INTO patrons (card_num, name) VALUES (?, ?)")
            .bind(card_num)
            .bind(name)
            .execute(&pool)
            .await
            .unwrap();
    }

    for (isbn, title, author) in [
        (SAPIENS, "Sapiens", "Yuval Noah Harari"),
        (DUNE, "Dune", "Frank Herbert"),
        (HOBBIT, "The Hobbit", "J.R.R. Tolkien"),
    ] {
        sqlx::query("INSERT INTO titles (isbn, title, author) VALUES (?, ?, ?)")
            .bind(isbn)
            .bind(title)
            .bind(author)
            .execute(&pool)
            .await
            .unwrap();
    }

    for (serial, isbn) in [(7_i64, HOBBIT), (8, HOBBIT), (9, SAPIENS)] {
        sqlx::query("INSERT INTO inventory (serial, isbn) VALUES (?, ?)")
            .bind(serial)
            .bind(isbn)
            .execute(&pool)
            .await
            .unwrap();
    }

    sqlx::query("INSERT INTO checked_out (serial, card_num) VALUES (9, ?)")
        .bind(BOB.1)
        .execute(&pool)
        .await
        .unwrap();

    pool
}

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = test_pool().await;
        let router = api::create_router(AppState::new(AppConfig::default(), pool.clone()));
        Self { router, pool }
    }

    /// Send a request and decode the JSON body (`Value::Null` when there is none)
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, body).await
    }

    /// Log in and return the session token
    pub async fn login(&self, (name, card_num): (&str, i64)) -> String {
        let (status, body) = self
            .post(
                "/api/v1/auth/login",
                None,
                Some(serde_json::json!({ "name": name, "card_num": card_num })),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        body["token"].as_str().unwrap().to_string()
    }

    /// Snapshot of the checked_out table, ordered by serial
    pub async fn checked_out_rows(&self) -> Vec<(i64, i64)> {
        sqlx::query_as::<_, (i64, i64)>("SELECT serial, card_num FROM checked_out ORDER BY serial")
            .fetch_all(&self.pool)
            .await
            .unwrap()
    }
}
