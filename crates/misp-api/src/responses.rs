// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use crate::types::Event;
use serde::Deserialize;

/// Response of `POST /events/restSearch/download/`: `{"response": [{"Event": {..}}, ..]}`.
#[derive(Deserialize, Debug)]
pub(crate) struct SearchResponse {
    pub(crate) response: Vec<EventEnvelope>,
}

/// Wrapper the platform nests each search result in.
#[derive(Deserialize, Debug)]
pub(crate) struct EventEnvelope {
    #[serde(rename = "Event")]
    pub(crate) event: Event,
}

impl SearchResponse {
    /// Unwraps the envelopes, keeping the platform order.
    pub(crate) fn into_events(self) -> Vec<Event> {
        self.response.into_iter().map(|e| e.event).collect()
    }
}
