// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

use crate::{tags::chain, types::EventQuery};
use serde::Serialize;

/// Body of `POST /events/restSearch/download/`.
///
/// Every filter is optional and left out of the JSON body when unset.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub(crate) struct SearchRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) from: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) to: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) last: Option<&'a str>,
    #[serde(rename = "eventid", skip_serializing_if = "Option::is_none")]
    pub(crate) event_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) metadata: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) timestamp: Option<String>,
    #[serde(flatten)]
    pub(crate) paging: Option<Paging>,
}

/// `limit` and `page` are only ever sent together.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub(crate) struct Paging {
    pub(crate) limit: String,
    pub(crate) page: String,
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

impl<'a> From<&EventQuery<'a>> for SearchRequest<'a> {
    fn from(query: &EventQuery<'a>) -> Self {
        let tags = chain(query.include_tags, query.exclude_tags);
        SearchRequest {
            tags: (!tags.is_empty()).then_some(tags),
            from: non_empty(query.from),
            to: non_empty(query.to),
            last: non_empty(query.last),
            event_id: non_empty(query.event_id),
            metadata: query.metadata_only.then_some(true),
            timestamp: query.min_timestamp.map(|t| t.timestamp().to_string()),
            paging: (query.limit > 0).then(|| Paging {
                limit: query.limit.to_string(),
                page: query.page.to_string(),
            }),
        }
    }
}
