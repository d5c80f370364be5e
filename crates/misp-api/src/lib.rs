// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! MISP API Client
//!
//! This module provides a typed client for the REST API of a
//! [MISP](https://www.misp-project.org/) threat-intelligence-sharing instance.
//!
//! Create an [`ApiClient`] to interface with the MISP API.
//!
//! Example
//! ```rust,no_run
//! use misp_api::{ApiClient, EventQuery, MispApiError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), MispApiError> {
//!    let client = ApiClient::new("misp.example.org", "my-auth-key")?;
//!
//!    // Example: all events tagged `tlp:white` but not `false-positive`, from the last week
//!    let query = EventQuery {
//!        include_tags: &["tlp:white"],
//!        exclude_tags: &["false-positive"],
//!        last: "7d",
//!        ..Default::default()
//!    };
//!    match client.search_events(&query).await {
//!        Ok(events) => {
//!            for event in events {
//!                println!("{}: {} ({} attributes)", event.id, event.info, event.attributes.len());
//!            }
//!        }
//!        Err(e) => eprintln!("Error searching events: {}", e),
//!    }
//!
//!    Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]

mod client;
mod error;
mod requests;
mod responses;
mod tags;
mod types;

// Re-export public items
pub use client::ApiClient;
pub use error::MispApiError;
pub use tags::chain;
pub use types::{Attribute, Event, EventQuery, Org, Tag};
