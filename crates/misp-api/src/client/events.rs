// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use super::ApiClient;
use crate::{
    error::MispApiError,
    requests::SearchRequest,
    responses::SearchResponse,
    types::{Event, EventQuery},
};

impl ApiClient {
    /// Path of the event search endpoint, relative to the base URL.
    pub const SEARCH_EVENTS_PATH: &'static str = "/events/restSearch/download/";

    // --- Events ---

    /// POST /events/restSearch/download/
    /// Searches the MISP instance for events matching `query`.
    ///
    /// Unset filters of the [`EventQuery`] are left out of the request, so the
    /// server defaults apply. `page` is only sent if `limit` is positive.
    ///
    /// # Arguments
    ///
    /// * `query` - The search filters.
    ///
    /// # Returns
    ///
    /// The matching events, in the order returned by the server. No match
    /// is not an error and yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns a `MispApiError` if the request fails, the server answers with
    /// a non-2xx status, or the response cannot be decoded.
    pub async fn search_events(&self, query: &EventQuery<'_>) -> Result<Vec<Event>, MispApiError> {
        let request = SearchRequest::from(query);

        let response: SearchResponse = self
            .post(Self::SEARCH_EVENTS_PATH, Some(&request))
            .await?;

        let events = response.into_events();
        tracing::debug!(count = events.len(), "MISP event search finished");
        Ok(events)
    }
}
