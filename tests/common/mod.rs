use std::path::PathBuf;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use uuid::Uuid;

use formbox::client::ApiClient;
use formbox::config::Config;

/// A running test server instance with a dedicated test database file.
pub struct TestApp {
    pub addr: std::net::SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
    pub api: ApiClient,
    pub db_path: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a submission body, return (body, status).
    pub async fn create_submission(&self, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/submissions"))
            .json(body)
            .send()
            .await
            .expect("create submission request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET the submission list, return (body, status).
    pub async fn list_submissions(&self) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url("/api/submissions"))
            .send()
            .await
            .expect("list submissions request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let db_path = std::env::temp_dir().join(format!(
        "formbox_test_{}.db",
        Uuid::now_v7().to_string().replace('-', "")
    ));

    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to open test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: format!("sqlite:{}", db_path.display()),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        max_body_size: 65_536,
        log_level: "warn".to_string(),
        static_dir: "static".to_string(),
    };

    let app = formbox::build_app(pool.clone(), config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();
    let api = ApiClient::new(format!("http://{addr}"));

    TestApp {
        addr,
        pool,
        client,
        api,
        db_path,
    }
}

/// Close the pool and remove the test database file.
pub async fn cleanup(app: TestApp) {
    app.pool.close().await;

    let _ = std::fs::remove_file(&app.db_path);
    for suffix in ["-wal", "-shm"] {
        let mut side = app.db_path.clone().into_os_string();
        side.push(suffix);
        let _ = std::fs::remove_file(side);
    }
}
