//! # resty-rest
//!
//! Paginated Salesforce REST/SOQL fetch and mutate engine.
//!
//! The engine takes a [`Credentials`](resty_auth::Credentials) value and an
//! [`ApiRequest`] descriptor (method, endpoint path, optional SOQL string,
//! optional JSON payload, and a fetch-all-pages toggle) and executes it:
//!
//! - **GET** follows `nextRecordsUrl`/`nextPageUrl` pagination links until
//!   exhausted (or after the first page when the toggle is off), resolving
//!   each link against the instance base URL, and accumulates records across
//!   pages.
//! - **POST**, **PATCH**, **DELETE** are single calls with the status rules
//!   and synthesized bodies of the explorer contract.
//!
//! Requests run strictly sequentially; a failure at any page aborts the
//! whole fetch and discards what was accumulated.
//!
//! ## Example
//!
//! ```rust,ignore
//! use resty_auth::Credentials;
//! use resty_rest::{ApiRequest, RestExplorer};
//! use resty_client::Method;
//!
//! let creds = Credentials::from_json_slice(&auth_json_bytes)?;
//! let explorer = RestExplorer::new()?;
//!
//! let request = ApiRequest::new(Method::Get, "/services/data/v60.0/query")
//!     .with_soql("SELECT Name FROM Account")
//!     .fetch_all_pages(true);
//!
//! let response = explorer.execute(&creds, request).await?;
//! let csv = resty_rest::records_to_csv(response.records())?;
//! ```

mod error;
mod explorer;
mod export;
pub mod records;
mod request;

pub use error::{Error, ErrorKind, Result};
pub use explorer::{ApiResponse, ResponseData, RestExplorer};
pub use export::records_to_csv;
pub use request::ApiRequest;

// Re-export the types callers need to build requests and load credentials.
pub use resty_auth::Credentials;
pub use resty_client::{ClientConfig, ClientConfigBuilder, Method};
