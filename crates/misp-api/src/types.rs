// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Normalized MISP entities and search parameters.
//!
//! The platform sends many more fields than modelled here; unknown fields
//! are ignored when decoding. Identifiers and timestamps travel as decimal
//! strings on the wire and are parsed into integers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

/// A MISP event, the top-level shareable unit.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Numeric event identifier.
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    /// Free-text description.
    pub info: String,
    /// Event date as sent by the platform (`YYYY-MM-DD`).
    pub date: String,
    /// Last modification, in seconds since the Unix epoch.
    #[serde_as(as = "DisplayFromStr")]
    pub timestamp: i64,
    /// Threat level: 1 = high, 2 = medium, 3 = low, 4 = undefined.
    #[serde(rename = "threat_level_id")]
    #[serde_as(as = "DisplayFromStr")]
    pub threat_level: u8,
    /// Whether the event has been published.
    #[serde(default)]
    pub published: bool,
    /// The organisation that created the event.
    #[serde(rename = "Orgc", default)]
    pub orgc: Org,
    /// Attributes attached to the event, in platform order.
    #[serde(rename = "Attribute", alias = "attribute", default)]
    pub attributes: Vec<Attribute>,
    /// Tags attached to the event, in platform order.
    #[serde(rename = "Tag", alias = "tag", default)]
    pub tags: Vec<Tag>,
}

impl Event {
    /// The event timestamp as a UTC date-time, if it is in range.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// An organisation, reduced to its display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Org {
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// A single indicator attached to an [`Event`].
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Numeric attribute identifier.
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    /// Indicator type, e.g. `sha256`, `yara` or `ip-dst`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the attribute should be used for detection.
    #[serde(default)]
    pub to_ids: bool,
    /// The indicator value; its meaning depends on `kind`.
    pub value: String,
    /// Soft-deletion marker.
    #[serde(default)]
    pub deleted: bool,
}

/// A label attached to an [`Event`].
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Numeric tag identifier.
    #[serde_as(as = "DisplayFromStr")]
    pub id: i64,
    /// Tag name, e.g. `tlp:white`.
    pub name: String,
    /// Display colour as a hex string, e.g. `#ffffff`.
    #[serde(rename = "colour", default)]
    pub color: String,
    /// Whether the tag is hidden in the UI.
    #[serde(default)]
    pub hide_tag: bool,
}

/// Parameters of [`ApiClient::search_events`](crate::ApiClient::search_events).
///
/// Empty strings, `false`, `None` and a non-positive `limit` all mean
/// "not set" and are left out of the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventQuery<'a> {
    /// Tags every returned event must carry.
    pub include_tags: &'a [&'a str],
    /// Tags no returned event may carry.
    pub exclude_tags: &'a [&'a str],
    /// Lower bound of the event date (`YYYY-MM-DD`).
    pub from: &'a str,
    /// Upper bound of the event date (`YYYY-MM-DD`).
    pub to: &'a str,
    /// Relative publication window, e.g. `7d` or `12h`.
    pub last: &'a str,
    /// Restrict the search to a single event.
    pub event_id: &'a str,
    /// Only return event metadata, without attributes.
    pub metadata_only: bool,
    /// Only return events modified at or after this instant.
    pub min_timestamp: Option<DateTime<Utc>>,
    /// Maximum number of events per page.
    pub limit: i64,
    /// Page number, only sent together with `limit`.
    pub page: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event_json() -> serde_json::Value {
        json!({
            "id": "1488",
            "orgc_id": "2",
            "date": "2020-01-22",
            "threat_level_id": "3",
            "info": "Test Event",
            "published": false,
            "uuid": "5e287d09-b3a0-4741-bbea-7ae3ac1c1da0",
            "timestamp": "1579771919",
            "distribution": "0",
            "Org": { "id": "2", "name": "Other Org" },
            "Orgc": { "id": "2", "name": "Test Org", "uuid": "5e287cfe" },
            "Attribute": [{
                "id": "193850",
                "type": "yara",
                "category": "Payload installation",
                "to_ids": true,
                "value": "rule Test {condition: uint16(0) == 0x5a4d}",
                "deleted": false
            }],
            "tag": [{
                "id": "7",
                "name": "test_tag",
                "colour": "#2f5a24",
                "exportable": true,
                "hide_tag": false
            }]
        })
    }

    #[test]
    fn decode_event_drops_unknown_fields() {
        let event: Event = serde_json::from_value(event_json()).unwrap();
        assert_eq!(event.id, 1488);
        assert_eq!(event.threat_level, 3);
        assert_eq!(event.timestamp, 1579771919);
        assert_eq!(event.orgc.name, "Test Org");
        assert_eq!(
            event.attributes,
            vec![Attribute {
                id: 193850,
                kind: "yara".into(),
                to_ids: true,
                value: "rule Test {condition: uint16(0) == 0x5a4d}".into(),
                deleted: false,
            }]
        );
        assert_eq!(
            event.tags,
            vec![Tag {
                id: 7,
                name: "test_tag".into(),
                color: "#2f5a24".into(),
                hide_tag: false,
            }]
        );
        assert_eq!(
            event.timestamp_utc().unwrap().to_rfc3339(),
            "2020-01-23T09:31:59+00:00"
        );
    }

    #[test]
    fn decode_metadata_only_event() {
        let mut value = event_json();
        let obj = value.as_object_mut().unwrap();
        obj.remove("Attribute");
        obj.remove("tag");
        obj.remove("Orgc");

        let event: Event = serde_json::from_value(value).unwrap();
        assert!(event.attributes.is_empty());
        assert!(event.tags.is_empty());
        assert_eq!(event.orgc, Org::default());
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let mut value = event_json();
        value["id"] = json!("14x88");
        assert!(serde_json::from_value::<Event>(value).is_err());

        let mut value = event_json();
        value["Attribute"][0]["id"] = json!("abc");
        assert!(serde_json::from_value::<Event>(value).is_err());

        let mut value = event_json();
        value["threat_level_id"] = json!("300");
        assert!(serde_json::from_value::<Event>(value).is_err());
    }

    #[test]
    fn encode_keeps_wire_names() {
        let event: Event = serde_json::from_value(event_json()).unwrap();
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["id"], "1488");
        assert_eq!(value["threat_level_id"], "3");
        assert_eq!(value["Orgc"]["name"], "Test Org");
        assert_eq!(value["Attribute"][0]["type"], "yara");
        assert_eq!(value["Tag"][0]["colour"], "#2f5a24");
    }
}
