use crate::config::ClientConfig;
use crate::errors::ApiError;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Client, Method, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

/// Method, query, body and extra headers for one call to [`ApiClient::fetch`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Vec<u8>>,
    pub headers: HeaderMap,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_vec(body)?);
        Ok(self)
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Thin JSON wrapper around a `reqwest::Client` pinned to one base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issues `options.method` against `base_url + path`.
    ///
    /// `Content-Type: application/json` is always sent unless the caller's
    /// headers override it. Non-2xx responses become an [`ApiError`] whose
    /// message comes from the body's `detail` field. A 204 yields `Ok(None)`
    /// without touching the body; anything else is decoded as `T` with no
    /// further validation.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<T>, ApiError> {
        let RequestOptions {
            method,
            query,
            body,
            headers: extra_headers,
        } = options;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(extra_headers);

        debug!(%method, path, "api request");

        let mut request = self.http.request(method, self.url(path)).headers(headers);
        if !query.is_empty() {
            request = request.query(&query);
        }
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            // An unreadable error body counts as empty: the message becomes `HTTP <status>`.
            let body = response.bytes().await.unwrap_or_default();
            let err = ApiError::from_response(status, &body);
            warn!(status = status.as_u16(), path, error = %err, "api request failed");
            return Err(err);
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// Like [`fetch`](Self::fetch) for endpoints that always answer with a body.
    pub(crate) async fn fetch_entity<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        self.fetch(path, options)
            .await?
            .ok_or_else(|| ApiError::empty_body(path))
    }

    /// For endpoints whose body may legitimately be `null`.
    pub(crate) async fn fetch_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<T>, ApiError> {
        Ok(self.fetch::<Option<T>>(path, options).await?.flatten())
    }

    /// For endpoints where only success matters, e.g. DELETE answering 204.
    pub(crate) async fn send(&self, path: &str, options: RequestOptions) -> Result<(), ApiError> {
        self.fetch::<serde::de::IgnoredAny>(path, options).await?;
        Ok(())
    }
}
