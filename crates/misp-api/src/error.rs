// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use reqwest::{Response, StatusCode};
use thiserror::Error;

/// Represents all possible errors that can occur when interacting with the MISP API.
///
/// Every call fails with exactly one of these kinds; nothing is retried
/// or swallowed inside the client.
#[derive(Error, Debug)]
pub enum MispApiError {
    /// The base URL or the request URL built from it could not be parsed.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The request payload could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Wraps an underlying reqwest error (connection, TLS, timeout, body read).
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a status outside of `200..=299`.
    ///
    /// The response body is not inspected.
    #[error("Bad HTTP status: {status}")]
    BadStatus {
        /// HTTP status code returned by the API.
        status: StatusCode,
    },

    /// The response body is not valid JSON or does not match the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

impl MispApiError {
    /// Returns the HTTP status code, if this is a [`MispApiError::BadStatus`].
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            MispApiError::BadStatus { status } => Some(*status),
            _ => None,
        }
    }
}

/// Checks the response status and returns a `BadStatus` error if it is not a 2xx status.
pub(crate) fn check_status(response: Response) -> Result<Response, MispApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!(url = %response.url(), %status, "MISP API returned an error status");
        Err(MispApiError::BadStatus { status })
    }
}
