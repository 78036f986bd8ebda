//! # salesforce-resty
//!
//! Paginated Salesforce REST/SOQL fetch and mutate engine.
//!
//! The engine executes a caller-described request (HTTP method, endpoint
//! path, optional SOQL string, optional JSON payload) against a Salesforce
//! instance and hands back extracted records (GET, following pagination
//! links) or a response document (POST/PATCH/DELETE).
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Tracing spans skip credential parameters
//!
//! ## Crates
//!
//! - **resty-client** - HTTP plumbing: request builder, compression, tracing
//! - **resty-auth** - Credential loading from auth.json exports (flat and
//!   nested layouts)
//! - **resty-rest** - The explorer engine: pagination loop, record-key
//!   heuristic, per-verb status rules, CSV export
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use salesforce_resty::{ApiRequest, Credentials, Method, RestExplorer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from an auth.json export
//!     let bytes = std::fs::read("auth.json")?;
//!     let creds = Credentials::from_json_slice(&bytes)?;
//!
//!     let explorer = RestExplorer::new()?;
//!     let request = ApiRequest::new(Method::Get, "/services/data/v60.0/query")
//!         .with_soql("SELECT Id, Name FROM Account LIMIT 10")
//!         .fetch_all_pages(true);
//!
//!     let response = explorer.execute(&creds, request).await?;
//!     for record in response.records() {
//!         println!("{}", record["Name"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use resty_auth as auth;
#[cfg(feature = "client")]
pub use resty_client as client;
#[cfg(feature = "rest")]
pub use resty_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use resty_auth::Credentials;
#[cfg(feature = "client")]
pub use resty_client::{ClientConfig, HttpClient, Method};
#[cfg(feature = "rest")]
pub use resty_rest::{records_to_csv, ApiRequest, ApiResponse, ResponseData, RestExplorer};
