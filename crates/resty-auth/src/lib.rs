//! # resty-auth
//!
//! Credential loading for the Salesforce REST explorer.
//!
//! Credentials arrive as an uploaded `auth.json` file in one of two shapes:
//! a flat object, or the nested `result`-wrapped output of
//! `sf org display --json`. Both reduce to the same [`Credentials`] value.
//!
//! ## Security
//!
//! - Access tokens are redacted in Debug output
//! - Error messages name the missing field, never a credential value

mod credentials;
mod error;

pub use credentials::Credentials;
pub use error::{Error, ErrorKind, Result};
