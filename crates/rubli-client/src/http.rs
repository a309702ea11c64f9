//! Request execution shared by every endpoint module.
//!
//! Each call is a single attempt: no retry, no backoff. Any failure
//! (transport, timeout, non-success status, body that does not match the
//! expected schema) is logged once here and returned unchanged.

use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ApiClient;
use crate::error::ClientError;
use crate::query::QueryParams;

/// A binary payload returned by an export endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    /// File name advertised in `Content-Disposition`, when present.
    pub file_name: Option<String>,
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success; otherwise the status code and
/// the response body become [`ClientError::Api`].
pub async fn check_response(resp: Response) -> Result<Response, ClientError> {
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Pull the `filename="..."` parameter out of a `Content-Disposition` value.
fn parse_disposition_filename(value: &str) -> Option<String> {
    value.split(';').map(str::trim).find_map(|part| {
        part.strip_prefix("filename=")
            .map(|name| name.trim_matches('"').to_string())
            .filter(|name| !name.is_empty())
    })
}

impl ApiClient {
    /// Absolute URL for an endpoint path, with the query string appended.
    pub(crate) fn url(&self, path: &str, query: &QueryParams) -> String {
        if query.is_empty() {
            format!("{}{path}", self.root)
        } else {
            format!("{}{path}?{}", self.root, query.to_query_string())
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<T, ClientError> {
        let url = self.url(path, query);
        let request = self.http.get(&url);
        self.execute_json(Method::GET, &url, request).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, &QueryParams::new());
        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute_json(method, &url, request).await
    }

    pub(crate) async fn get_bytes(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<ExportFile, ClientError> {
        let url = self.url(path, query);
        let resp = self.execute(&Method::GET, &url, self.http.get(&url)).await?;

        let header = |name: reqwest::header::HeaderName| {
            resp.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let content_type = header(reqwest::header::CONTENT_TYPE);
        let file_name = header(reqwest::header::CONTENT_DISPOSITION)
            .as_deref()
            .and_then(parse_disposition_filename);

        let bytes = resp.bytes().await.map_err(|error| {
            tracing::error!(method = %Method::GET, %url, %error, "failed to read export body");
            ClientError::Http(error)
        })?;

        Ok(ExportFile {
            bytes: bytes.to_vec(),
            content_type,
            file_name,
        })
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let resp = self.execute(&method, url, request).await?;
        let text = resp.text().await.map_err(|error| {
            tracing::error!(%method, %url, %error, "failed to read response body");
            ClientError::Http(error)
        })?;

        serde_json::from_str(&text).map_err(|error| {
            tracing::error!(%method, %url, %error, body = %text, "response did not match schema");
            ClientError::Parse(error.to_string())
        })
    }

    async fn execute(
        &self,
        method: &Method,
        url: &str,
        request: RequestBuilder,
    ) -> Result<Response, ClientError> {
        tracing::debug!(%method, %url, "api request");

        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(error) => {
                tracing::error!(
                    %method,
                    %url,
                    timeout = error.is_timeout(),
                    %error,
                    "api request failed"
                );
                return Err(ClientError::Http(error));
            }
        };

        match check_response(resp).await {
            Ok(resp) => Ok(resp),
            Err(error) => {
                if let ClientError::Api { status, message } = &error {
                    tracing::error!(%method, %url, status, body = %message, "api returned error status");
                }
                Err(error)
            }
        }
    }
}
