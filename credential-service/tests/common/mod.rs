#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use credential_service::domain::user::models::NewUser;
use credential_service::domain::user::models::User;
use credential_service::domain::user::models::UserId;
use credential_service::domain::user::ports::UserRepository;
use credential_service::domain::user::service::CredentialService;
use credential_service::inbound::http::router::create_router;
use credential_service::outbound::hashing::Argon2PasswordHasher;
use credential_service::user::errors::RepositoryError;
use serde_json::json;
use serde_json::Value;

/// In-process stand-in for the users table, unique on username.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn count_with_username(&self, username: &str) -> usize {
        self.users
            .lock()
            .unwrap()
            .iter()
            .filter(|user| user.username.as_str() == username)
            .count()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.username == user.username) {
            return Err(RepositoryError::UsernameTaken(user.username.to_string()));
        }

        let now = Utc::now();
        let created = User {
            id: UserId(users.len() as i64 + 1),
            username: user.username,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());

        Ok(created)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.username.as_str() == username)
            .cloned())
    }
}

/// Cheap Argon2 cost so tests stay fast
pub fn test_hasher() -> Argon2PasswordHasher {
    let params = auth::HashingParams {
        memory_kib: 8 * 1024,
        iterations: 1,
        parallelism: 1,
    };
    Argon2PasswordHasher::new(
        auth::PasswordHasher::with_params(&params).expect("Failed to build test hasher"),
    )
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub repository: Arc<InMemoryUserRepository>,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryUserRepository::default());
        let credential_service = Arc::new(CredentialService::new(
            Arc::clone(&repository),
            Arc::new(test_hasher()),
        ));

        let router = create_router(credential_service);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            repository,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// POST /api/register and return the `data` payload
    pub async fn register(&self, username: &str, password: &str) -> Value {
        self.send_credentials("/api/register", username, password)
            .await
    }

    /// POST /api/login and return the `data` payload
    pub async fn login(&self, username: &str, password: &str) -> Value {
        self.send_credentials("/api/login", username, password).await
    }

    async fn send_credentials(&self, path: &str, username: &str, password: &str) -> Value {
        let response = self
            .post(path)
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"].clone()
    }
}
