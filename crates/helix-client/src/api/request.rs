use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::envelope::RawResponse;
use super::params::{QueryPairs, QueryParams, encode_body, encode_query};
use super::*;

/// A request described as plain data, ready to be dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryPairs,
    pub body: Option<String>,
}

impl ApiRequest {
    /// GET with query parameters. `None` means no parameters.
    pub fn get<P: QueryParams + ?Sized>(path: &str, params: Option<&P>) -> Self {
        Self {
            method: Method::GET,
            path: path.to_string(),
            query: encode_query(params),
            body: None,
        }
    }

    /// `method` with query parameters and no body.
    pub fn without_body<P: QueryParams + ?Sized>(method: Method, path: &str, params: &P) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: params.to_query(),
            body: None,
        }
    }

    /// `method` with query parameters and a JSON body from the same value.
    pub fn json<P>(method: Method, path: &str, params: &P) -> Result<Self, HelixError>
    where
        P: QueryParams + Serialize + ?Sized,
    {
        Ok(Self {
            method,
            path: path.to_string(),
            query: params.to_query(),
            body: Some(encode_body(params)?),
        })
    }
}

impl HelixClient {
    /// Build auth headers from the given token.
    fn auth_headers(&self, token: &Token) -> Result<HeaderMap, HelixError> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", token.access_token);
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&bearer)?);
        headers.insert("Client-Id", HeaderValue::from_str(&self.config.client_id)?);
        Ok(headers)
    }

    /// Full URL for `request`, with query pairs percent-encoded in order.
    pub(super) fn request_url(&self, request: &ApiRequest) -> Result<Url, HelixError> {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = Url::parse(&format!("{base}{}", request.path))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }
        Ok(url)
    }

    /// Send one request and decode the body into `T`.
    ///
    /// Exactly one HTTP exchange happens; nothing is retried. Non-2xx
    /// responses are returned as `Ok` with the envelope describing the
    /// failure. Only transport failures and undecodable bodies are `Err`.
    pub async fn dispatch<T>(
        &self,
        token: &Token,
        request: ApiRequest,
    ) -> Result<HelixResponse<T>, HelixError>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.request_url(&request)?;
        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .headers(self.auth_headers(token)?);
        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let resp = builder.send().await?;
        let raw = RawResponse {
            status: resp.status(),
            headers: resp.headers().clone(),
            body: resp.text().await?,
        };

        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status = raw.status.as_u16(),
            "Helix request completed"
        );

        if raw.status == StatusCode::UNAUTHORIZED {
            tracing::warn!(path = %request.path, "Got 401, caller should refresh token");
        } else if !raw.status.is_success() {
            tracing::warn!(
                path = %request.path,
                status = raw.status.as_u16(),
                "Helix API reported an error"
            );
        }

        raw.decode()
    }

    pub(super) async fn get<T, P>(
        &self,
        token: &Token,
        path: &str,
        params: Option<&P>,
    ) -> Result<HelixResponse<T>, HelixError>
    where
        T: DeserializeOwned + Default,
        P: QueryParams + ?Sized,
    {
        self.dispatch(token, ApiRequest::get(path, params)).await
    }

    pub(super) async fn send_json<T, P>(
        &self,
        token: &Token,
        method: Method,
        path: &str,
        params: &P,
    ) -> Result<HelixResponse<T>, HelixError>
    where
        T: DeserializeOwned + Default,
        P: QueryParams + Serialize + ?Sized,
    {
        let request = ApiRequest::json(method, path, params)?;
        self.dispatch(token, request).await
    }

    pub(super) async fn send_without_body<T, P>(
        &self,
        token: &Token,
        method: Method,
        path: &str,
        params: &P,
    ) -> Result<HelixResponse<T>, HelixError>
    where
        T: DeserializeOwned + Default,
        P: QueryParams + ?Sized,
    {
        self.dispatch(token, ApiRequest::without_body(method, path, params))
            .await
    }
}
