//! Authenticated request execution with one-shot credential refresh.

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::ApiClient;
use crate::error::ClientError;
use crate::http::{check_response, decode};

impl ApiClient {
    /// Send `method path` with an optional JSON body and decode the response.
    ///
    /// A 401 triggers one credential refresh through the session and a single
    /// retry with the new credential. A 401 on the retry is returned as
    /// [`ClientError::Api`].
    ///
    /// # Errors
    ///
    /// [`ClientError::Api`] for non-success statuses, [`ClientError::Http`] on
    /// transport failure, [`ClientError::Decode`] when the body does not match
    /// `T`, [`ClientError::ReauthRequired`] when the refresh failed.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ClientError> {
        let resp = self.execute(method, path, body).await?;
        decode(resp, path).await
    }

    /// Like [`Self::request`] for endpoints whose body is ignored (204, or a
    /// status message).
    ///
    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn request_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<(), ClientError> {
        self.execute(method, path, body).await.map(drop)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.request(Method::GET, path, None).await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.request(Method::POST, path, Some(&body)).await
    }

    pub(crate) async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.request(Method::PUT, path, Some(&body)).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.request_empty(Method::DELETE, path, None).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, ClientError> {
        let url = self.url(path);
        let token = self.session.access_token();

        let resp = self
            .send_once(method.clone(), &url, body, token.as_deref())
            .await?;
        if resp.status() != StatusCode::UNAUTHORIZED {
            return check_response(resp).await;
        }

        tracing::debug!(%method, %url, "access credential rejected, refreshing");
        let fresh = self.session.refresh_access(token.as_deref()).await?;
        let retry = self.send_once(method, &url, body, Some(&fresh)).await?;
        check_response(retry).await
    }

    async fn send_once(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        token: Option<&str>,
    ) -> Result<reqwest::Response, ClientError> {
        tracing::debug!(%method, %url, "request");
        let mut builder = self.http.request(method, url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        Ok(builder.send().await?)
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ClientError> {
    serde_json::to_value(body).map_err(|e| ClientError::Encode(e.to_string()))
}
