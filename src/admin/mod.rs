//! Admin API client module
//!
//! Everything needed to talk to the password-protected admin API: the
//! session credential store, the request client, wire types, and the
//! per-operation error taxonomy.
//!
//! # Usage
//! ```ignore
//! let session = Arc::new(SessionStore::load("session.json"));
//! let client = AdminClient::new(&config, session)?;
//! client.login("secret123").await?;
//! let logs = client.fetch_audit_logs(Some(60)).await?;
//! ```

pub mod client;
pub mod errors;
pub mod session;
pub mod types;

pub use client::AdminClient;
pub use session::SessionStore;
