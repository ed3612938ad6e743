use std::sync::Arc;

use auth::Identity;
use auth::Role;
use auth::TokenService;
use auth_service::domain::auth::errors::AuthError;
use auth_service::domain::auth::models::EmailAddress;
use auth_service::domain::auth::models::User;
use auth_service::domain::auth::models::UserId;
use auth_service::domain::auth::models::Username;
use auth_service::domain::auth::ports::PasswordHashing;
use auth_service::domain::auth::service::AuthService;
use auth_service::inbound::http::router::create_router;
use auth_service::outbound::repositories::InMemoryUserRepository;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;

pub const SIGNING_KEY_BYTES: [u8; 64] = [42u8; 64];

/// Cheap deterministic hasher so tests don't pay for Argon2.
pub struct FakePasswordHasher;

impl PasswordHashing for FakePasswordHasher {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("fake${}", password.chars().rev().collect::<String>()))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        self.hash(password).map(|h| h == hash).unwrap_or(false)
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryUserRepository>,
    pub token_service: Arc<TokenService>,
    pub api_client: reqwest::Client,
    pub users: Vec<User>,
}

impl TestApp {
    /// Spawn the application in a background task, seeded with two users:
    /// `user1@example.com` (Reader) and `user2@example.com` (Admin), both
    /// with password `fakepassword`.
    pub async fn spawn() -> Self {
        let users = vec![
            seed_user("User1", "user1@example.com", Role::Reader),
            seed_user("User2", "user2@example.com", Role::Admin),
        ];
        let repository = Arc::new(InMemoryUserRepository::with_users(users.clone()));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_service = Arc::new(
            TokenService::from_base64_key(&STANDARD.encode(SIGNING_KEY_BYTES))
                .expect("Failed to build token service"),
        );

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&repository),
            Arc::new(FakePasswordHasher),
        ));

        let router = create_router(auth_service, Arc::clone(&token_service));

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            token_service,
            api_client: reqwest::Client::new(),
            users,
        }
    }

    pub fn identity_of(&self, email: &str) -> Identity {
        self.users
            .iter()
            .find(|u| u.email.as_str() == email)
            .map(User::identity)
            .expect("Unknown seeded user")
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Log in and return the issued token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/api/auth/login")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Login response has no token")
            .to_string()
    }
}

fn seed_user(user_name: &str, email: &str, role: Role) -> User {
    User {
        id: UserId::new(),
        user_name: Username::new(user_name.to_string()).unwrap(),
        name: user_name.to_string(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        password_hash: FakePasswordHasher.hash("fakepassword").unwrap(),
        role,
        created_at: Utc::now(),
    }
}
