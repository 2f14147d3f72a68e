//! # sugar - Typed Tokens and Lazy Singletons
//!
//! Two small, independent utilities:
//!
//! - [`TypedToken`] wraps symmetric-key JWT signing and verification with a
//!   generic, typed claims payload. Tokens use the standard JWS compact
//!   serialization (HS256), so they interoperate bit-exactly with any
//!   standard-compliant verifier sharing the same secret.
//! - [`Singleton`] lazily initializes a value of any type, guaranteeing the
//!   factory runs at most once even when many threads race on first access.
//!
//! ## Tokens
//!
//! ```ignore
//! use std::time::Duration;
//! use sugar::{Claims, TypedToken};
//!
//! #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
//! struct User { id: i64, name: String }
//!
//! let jwt = TypedToken::<User>::new("secret")?;
//!
//! let token = jwt.generate(
//!     &Claims::with_data(User { id: 1, name: "test".into() })
//!         .issued_now()
//!         .expires_in(Duration::from_secs(3600)),
//! )?;
//!
//! let claims = jwt.parse(&token)?;
//! assert_eq!(claims.data.unwrap(), User { id: 1, name: "test".into() });
//! ```
//!
//! Parsing verifies the HMAC-SHA-256 signature in constant time before the
//! payload is decoded, rejects any declared algorithm other than HS256
//! (including `"none"`), and validates `exp`/`nbf` when present. Failures
//! come back as a classified [`Error`]; there are no partial results.
//!
//! ## Singletons
//!
//! ```ignore
//! use sugar::Singleton;
//!
//! static CONFIG: Singleton<String> = Singleton::new(|| load_config());
//!
//! // First access runs load_config() exactly once; later reads are
//! // lock-free.
//! println!("{}", CONFIG.get());
//! ```

mod algorithm;
mod utils;

pub mod claims;
pub mod error;
pub mod singleton;
pub mod token;

pub use claims::Claims;
pub use error::{Error, Result};
pub use singleton::Singleton;
pub use token::{TokenHeader, TypedToken};
