// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Authenticated JSON transport

use super::ApiClient;
use crate::error::{check_status, MispApiError};
use reqwest::{header, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

const APPLICATION_JSON: &str = "application/json";

impl ApiClient {
    /// `GET {base_url}{path}` and decode the JSON response into `T`.
    ///
    /// # Errors
    ///
    /// Returns a `MispApiError` if the URL is malformed, the request fails,
    /// the status is not 2xx or the body does not decode into `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, MispApiError> {
        let request_builder = self.request(Method::GET, path)?;
        self.fetch_json(request_builder).await
    }

    /// `POST {base_url}{path}` with `body` encoded as JSON and decode the JSON response into `T`.
    ///
    /// With `body` set to `None` the request is sent without a body.
    ///
    /// # Errors
    ///
    /// Returns a `MispApiError` if the URL is malformed, `body` cannot be
    /// encoded, the request fails, the status is not 2xx or the response
    /// body does not decode into `T`.
    pub async fn post<S: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&S>,
    ) -> Result<T, MispApiError> {
        let mut request_builder = self
            .request(Method::POST, path)?
            .header(header::CONTENT_TYPE, APPLICATION_JSON);

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(MispApiError::Encode)?;
            request_builder = request_builder.body(bytes);
        }

        self.fetch_json(request_builder).await
    }

    /// Helper to build an authenticated request for `path` below the base URL.
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, MispApiError> {
        let url = Url::parse(&format!("{}{}", self.base_url, path))?;
        tracing::debug!(%method, %url, "MISP API request");

        Ok(self
            .client
            .request(method, url)
            .header(header::ACCEPT, APPLICATION_JSON)
            .header(header::AUTHORIZATION, &self.auth))
    }

    /// Helper to execute a request, check for a 2xx status and decode the buffered JSON body.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        request_builder: RequestBuilder,
    ) -> Result<T, MispApiError> {
        let response = request_builder.send().await?;
        let response = check_status(response)?;
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(MispApiError::Decode)
    }
}
