//! Credentials and the auth.json loader.
//!
//! Two sibling file shapes exist in the wild:
//!
//! - flat: `{"access_token": ..., "instance_url": ...}` (camelCase aliases
//!   accepted);
//! - nested: `{"result": {"accessToken": ..., "instanceUrl": ...,
//!   "apiVersion": ...}}` as produced by `sf org display --json`.
//!
//! Both reduce to the same [`Credentials`] value; the shape is autodetected
//! by the presence of a `result` object.

use serde_json::Value;
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};

/// Credentials for one explorer session.
///
/// Immutable once loaded. The access token is redacted in Debug output to
/// prevent accidental exposure in logs.
#[derive(Clone)]
pub struct Credentials {
    instance_url: String,
    access_token: String,
    api_version: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl Credentials {
    /// Create credentials with the given values.
    ///
    /// The instance URL is trimmed of surrounding whitespace and any
    /// trailing `/` so that root-relative pagination links resolve cleanly.
    pub fn new(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            instance_url: instance_url.into().trim().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            api_version: api_version.into(),
        }
    }

    /// Load credentials from the raw bytes of an uploaded auth.json file.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_json_value(&value)
    }

    /// Load credentials from an already-parsed auth.json document.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::new(ErrorKind::InvalidInput(
                "auth.json root must be a JSON object".to_string(),
            )));
        }
        let creds = match value.get("result") {
            Some(result) => Self::from_nested(result)?,
            None => Self::from_flat(value)?,
        };
        debug!(instance_url = %creds.instance_url, api_version = %creds.api_version,
               "Loaded credentials");
        Ok(creds)
    }

    /// Flat shape: `access_token`/`accessToken`, `instance_url`/`instanceUrl`.
    fn from_flat(value: &Value) -> Result<Self> {
        let access_token = string_field(value, &["access_token", "accessToken"])
            .ok_or_else(|| Error::new(ErrorKind::MissingField("access_token")))?;
        let instance_url = string_field(value, &["instance_url", "instanceUrl"])
            .ok_or_else(|| Error::new(ErrorKind::MissingField("instance_url")))?;
        let api_version = string_field(value, &["api_version", "apiVersion"])
            .unwrap_or_else(|| resty_client::DEFAULT_API_VERSION.to_string());

        Ok(Self::new(
            normalize_instance_url(&instance_url),
            access_token,
            api_version,
        ))
    }

    /// Nested shape: the `result` object of `sf org display --json`.
    fn from_nested(result: &Value) -> Result<Self> {
        let access_token = string_field(result, &["accessToken"])
            .ok_or_else(|| Error::new(ErrorKind::MissingField("accessToken")))?;
        let instance_url = string_field(result, &["instanceUrl"])
            .ok_or_else(|| Error::new(ErrorKind::MissingField("instanceUrl")))?;
        let api_version = string_field(result, &["apiVersion"])
            .unwrap_or_else(|| resty_client::DEFAULT_API_VERSION.to_string());

        Ok(Self::new(
            normalize_instance_url(&instance_url),
            access_token,
            api_version,
        ))
    }

    /// Change the API version (e.g., when the UI overrides it).
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the API version (e.g., "60.0").
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns true if the credentials appear to be usable (non-empty).
    pub fn is_valid(&self) -> bool {
        !self.instance_url.is_empty() && !self.access_token.is_empty()
    }
}

/// First non-empty string value among the given keys.
fn string_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| value.get(*k))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Prepend `https://` when the URL carries no scheme, as exported
/// instance URLs sometimes omit it.
fn normalize_instance_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
