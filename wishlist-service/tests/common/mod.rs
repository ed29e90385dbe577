use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use wishlist_service::domain::errors::RepositoryError;
use wishlist_service::domain::user::models::User;
use wishlist_service::domain::user::ports::UserRepository;
use wishlist_service::domain::user::service::AuthService;
use wishlist_service::domain::wishlist::models::Wishlist;
use wishlist_service::domain::wishlist::ports::WishlistRepository;
use wishlist_service::domain::wishlist::service::WishlistService;
use wishlist_service::inbound::http::router::create_router;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub users: Arc<InMemoryUserRepository>,
    pub wishlists: Arc<InMemoryWishlistRepository>,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
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

        let users = Arc::new(InMemoryUserRepository::default());
        let wishlists = Arc::new(InMemoryWishlistRepository::default());
        let authenticator = Arc::new(Authenticator::new(JWT_SECRET));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&users),
            Arc::clone(&authenticator),
        ));
        let wishlist_service = Arc::new(WishlistService::new(Arc::clone(&wishlists)));

        let router = create_router(auth_service, wishlist_service, Arc::clone(&authenticator));

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            users,
            wishlists,
            api_client: reqwest::Client::new(),
            authenticator,
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

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Register and log in a user, returning the issued token
    pub async fn login_token(&self, email: &str, password: &str) -> String {
        let credentials = serde_json::json!({ "email": email, "password": password });

        self.post("/register")
            .json(&credentials)
            .send()
            .await
            .expect("Failed to execute request");

        let body: serde_json::Value = self
            .post("/login")
            .json(&credentials)
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response");

        body["data"]["token"]
            .as_str()
            .expect("Login did not return a token")
            .to_string()
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn all(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, RepositoryError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct InMemoryWishlistRepository {
    wishlists: Mutex<Vec<Wishlist>>,
}

impl InMemoryWishlistRepository {
    pub fn insert(&self, wishlist: Wishlist) {
        self.wishlists.lock().unwrap().push(wishlist);
    }

    pub fn list_all(&self) -> Vec<Wishlist> {
        self.wishlists.lock().unwrap().clone()
    }
}

#[async_trait]
impl WishlistRepository for InMemoryWishlistRepository {
    async fn list(&self) -> Result<Vec<Wishlist>, RepositoryError> {
        Ok(self
            .wishlists
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.deleted_at.is_none())
            .cloned()
            .collect())
    }

    async fn create(&self, wishlist: Wishlist) -> Result<Wishlist, RepositoryError> {
        self.wishlists.lock().unwrap().push(wishlist.clone());
        Ok(wishlist)
    }
}
