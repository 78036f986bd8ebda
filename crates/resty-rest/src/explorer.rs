//! The paginated fetch/mutate engine.

use resty_auth::Credentials;
use resty_client::{ClientConfig, HttpClient, Method, RequestBuilder};
use serde_json::{json, Value};
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Error, ErrorKind, Result};
use crate::records;
use crate::request::ApiRequest;

/// Result of one [`RestExplorer::execute`] call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// The extracted data: accumulated records for GET, the response
    /// document for mutations.
    pub data: ResponseData,
    /// The final page's parsed body (GET) or the response document
    /// (mutations), for diagnostic display.
    pub last_response: Value,
}

/// Extracted data, by verb.
#[derive(Debug, Clone)]
pub enum ResponseData {
    /// Records accumulated across pages (GET).
    Records(Vec<Value>),
    /// The response document of a mutation (POST/PATCH/DELETE).
    Document(Value),
}

impl ApiResponse {
    fn from_records(records: Vec<Value>, last_response: Value) -> Self {
        Self {
            data: ResponseData::Records(records),
            last_response,
        }
    }

    fn from_document(document: Value) -> Self {
        Self {
            last_response: document.clone(),
            data: ResponseData::Document(document),
        }
    }

    /// The accumulated records; empty for mutations.
    pub fn records(&self) -> &[Value] {
        match &self.data {
            ResponseData::Records(records) => records,
            ResponseData::Document(_) => &[],
        }
    }

    /// The mutation response document, if this was a mutation.
    pub fn document(&self) -> Option<&Value> {
        match &self.data {
            ResponseData::Document(document) => Some(document),
            ResponseData::Records(_) => None,
        }
    }
}

/// The explorer engine: one HTTP call per verb, with a sequential
/// pagination loop for GET.
///
/// Credentials are passed into [`execute`](RestExplorer::execute) per call;
/// the engine holds no session state of its own.
#[derive(Debug, Clone)]
pub struct RestExplorer {
    http: HttpClient,
}

impl RestExplorer {
    /// Create an explorer with default HTTP configuration.
    pub fn new() -> Result<Self> {
        Ok(Self {
            http: HttpClient::default_client().map_err(Error::from)?,
        })
    }

    /// Create an explorer with custom HTTP configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config).map_err(Error::from)?,
        })
    }

    /// Create an explorer from an existing HTTP client.
    pub fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// Execute one explorer call.
    ///
    /// GET follows pagination links when the request asks for all pages;
    /// mutations are single calls. A failure at any page of a paginated GET
    /// aborts the whole fetch; no partial results are returned.
    #[instrument(skip(self, creds, request),
                 fields(method = %request.method(), endpoint = %request.endpoint()))]
    pub async fn execute(&self, creds: &Credentials, request: ApiRequest) -> Result<ApiResponse> {
        match request.method() {
            Method::Get => self.fetch_pages(creds, &request).await,
            Method::Post => self.create(creds, &request).await,
            Method::Patch => self.update(creds, &request).await,
            Method::Delete => self.remove(creds, &request).await,
        }
    }

    /// GET with the pagination loop.
    async fn fetch_pages(&self, creds: &Credentials, request: &ApiRequest) -> Result<ApiResponse> {
        let base = Url::parse(creds.instance_url())?;
        let mut url = base.join(request.endpoint())?;

        let query_endpoint = records::is_query_endpoint(request.endpoint());
        // The SOQL string rides on the first page only; pagination links
        // already encode the query.
        let mut soql = if query_endpoint {
            request.soql().map(str::to_string)
        } else {
            None
        };

        let mut all_records: Vec<Value> = Vec::new();
        loop {
            let mut req = self.authorized(Method::Get, url.as_str(), creds, request);
            if let Some(q) = soql.take() {
                req = req.query("q", q);
            }

            let response = self.http.execute(req).await?;
            let status = response.status();
            let body = response.text().await?;
            if status != 200 {
                return Err(Error::new(ErrorKind::Http { status, body }));
            }

            let page: Value = serde_json::from_str(&body)?;

            let key = if query_endpoint {
                records::RECORDS_KEY.to_string()
            } else {
                records::record_key(request.endpoint(), &page)
            };
            all_records.extend(records::extract_records(&page, &key).iter().cloned());

            let link_field = if query_endpoint {
                "nextRecordsUrl"
            } else {
                "nextPageUrl"
            };
            let next = if request.all_pages() {
                page.get(link_field)
                    .and_then(Value::as_str)
                    .map(str::to_string)
            } else {
                None
            };

            match next {
                Some(next) => {
                    debug!(next_url = %next, "Following pagination link");
                    // Next links are root-relative: resolve against the
                    // instance base, never the previous request URL.
                    url = base.join(&next)?;
                }
                None => return Ok(ApiResponse::from_records(all_records, page)),
            }
        }
    }

    /// POST: single call, success on 200 or 201, body parsed as JSON.
    async fn create(&self, creds: &Credentials, request: &ApiRequest) -> Result<ApiResponse> {
        let (status, body) = self.send_once(Method::Post, creds, request).await?;
        if !(status == 200 || status == 201) {
            return Err(Error::new(ErrorKind::Http { status, body }));
        }
        let document: Value = serde_json::from_str(&body)?;
        Ok(ApiResponse::from_document(document))
    }

    /// PATCH: single call, success on 204. An empty body yields a
    /// synthesized confirmation document.
    async fn update(&self, creds: &Credentials, request: &ApiRequest) -> Result<ApiResponse> {
        let (status, body) = self.send_once(Method::Patch, creds, request).await?;
        if status != 204 {
            return Err(Error::new(ErrorKind::Http { status, body }));
        }
        let document = if body.is_empty() {
            json!({"message": "Update successful"})
        } else {
            serde_json::from_str(&body)?
        };
        Ok(ApiResponse::from_document(document))
    }

    /// DELETE: single call, success on 204, always a synthesized
    /// confirmation document.
    async fn remove(&self, creds: &Credentials, request: &ApiRequest) -> Result<ApiResponse> {
        let (status, body) = self.send_once(Method::Delete, creds, request).await?;
        if status != 204 {
            return Err(Error::new(ErrorKind::Http { status, body }));
        }
        Ok(ApiResponse::from_document(json!({"message": "Delete successful"})))
    }

    /// Issue one call against the resolved endpoint and hand back status
    /// plus raw body.
    async fn send_once(
        &self,
        method: Method,
        creds: &Credentials,
        request: &ApiRequest,
    ) -> Result<(u16, String)> {
        let url = Url::parse(creds.instance_url())?.join(request.endpoint())?;

        let mut req = self.authorized(method, url.as_str(), creds, request);
        if let Some(payload) = request.payload() {
            req = req.json(payload.clone());
        }

        let response = self.http.execute(req).await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    fn authorized(
        &self,
        method: Method,
        url: &str,
        creds: &Credentials,
        request: &ApiRequest,
    ) -> RequestBuilder {
        let mut req = self
            .http
            .request(method, url)
            .bearer_auth(creds.access_token())
            .header("Content-Type", "application/json");
        for (name, value) in request.headers() {
            req = req.header(name.clone(), value.clone());
        }
        req
    }
}
