//! Request descriptors built from user input.

use resty_client::Method;
use serde_json::Value;

use crate::error::Result;

/// One explorer API call, built fresh per user action and passed by value
/// into [`RestExplorer::execute`](crate::RestExplorer::execute).
///
/// Everything the engine needs travels in here (plus the credentials it is
/// handed alongside); there is no ambient session state.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    endpoint: String,
    soql: Option<String>,
    payload: Option<Value>,
    all_pages: bool,
    headers: Vec<(String, String)>,
}

impl ApiRequest {
    /// Create a request for the given method and endpoint path
    /// (e.g. `/services/data/v60.0/sobjects/Account`).
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            soql: None,
            payload: None,
            all_pages: false,
            headers: Vec::new(),
        }
    }

    /// Create a request from a user-entered method name.
    ///
    /// Fails with `UnsupportedMethod` for anything outside
    /// GET/POST/PATCH/DELETE.
    pub fn from_method_name(method: &str, endpoint: impl Into<String>) -> Result<Self> {
        let method = method.parse::<Method>().map_err(crate::Error::from)?;
        Ok(Self::new(method, endpoint))
    }

    /// Attach a SOQL query string. Only used by GET against query-flavored
    /// endpoints, and only on the first page.
    pub fn with_soql(mut self, soql: impl Into<String>) -> Self {
        self.soql = Some(soql.into());
        self
    }

    /// Attach a JSON payload (POST and PATCH).
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Add an extra header for this call.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Follow pagination links until exhausted (GET only).
    pub fn fetch_all_pages(mut self, all_pages: bool) -> Self {
        self.all_pages = all_pages;
        self
    }

    /// The HTTP method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The endpoint path.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The SOQL query string, if any.
    pub fn soql(&self) -> Option<&str> {
        self.soql.as_deref()
    }

    /// The JSON payload, if any.
    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    /// Whether to follow pagination links.
    pub fn all_pages(&self) -> bool {
        self.all_pages
    }

    /// Extra headers for this call.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}
