//! Authentication primitives for the wishlist service.
//!
//! - Password hashing (Argon2id, fixed cost parameters)
//! - JWT issuance and validation (HS256)
//! - An [`Authenticator`] that ties both together for login flows
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("admin123").unwrap();
//! assert!(hasher.verify("admin123", &hash).unwrap());
//! assert!(!hasher.verify("admin321", &hash).unwrap());
//! ```
//!
//! ## Login Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let result = auth
//!     .authenticate("password123", &hash, "user123", "alice@example.com")
//!     .unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! assert_eq!(claims.email, "alice@example.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::DEFAULT_TOKEN_LIFETIME_HOURS;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
