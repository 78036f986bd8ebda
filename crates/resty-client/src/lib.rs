//! # resty-client
//!
//! Core HTTP client infrastructure for the Salesforce REST explorer engine.
//!
//! This crate provides the foundational HTTP layer:
//! - A closed [`Method`] enum (GET/POST/PATCH/DELETE) with an explicit
//!   rejection of anything else at the parsing boundary
//! - Request building with bearer authentication and query parameters
//! - Compression support (gzip, deflate)
//! - A response wrapper that reports status and body without deciding
//!   success for the caller
//!
//! Requests are issued one at a time; there is no retry loop and no
//! rate-limit handling. A non-2xx status is returned to the caller as data,
//! not as an error; the engine layer (`resty-rest`) owns the status rules
//! for each verb.
//!
//! ## Example
//!
//! ```rust,ignore
//! use resty_client::{HttpClient, Method};
//!
//! let client = HttpClient::default_client()?;
//! let request = client
//!     .request(Method::Get, "https://na1.salesforce.com/services/data/v60.0/limits")
//!     .bearer_auth("access_token");
//! let response = client.execute(request).await?;
//! println!("{}", response.status());
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{Method, RequestBuilder};
pub use response::Response;

/// Default Salesforce API version used when a credential file omits one.
pub const DEFAULT_API_VERSION: &str = "60.0";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("salesforce-resty/", env!("CARGO_PKG_VERSION"));
