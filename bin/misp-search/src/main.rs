// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Search a MISP instance for events and print them as JSON

#![deny(missing_docs)]
#![deny(clippy::all)]

mod log;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use misp_api::{ApiClient, EventQuery};
use std::time::Duration;
use tracing::{error, info, level_filters::LevelFilter};

use crate::log::{setup_logging, LogLevelParser};

/// Search a MISP instance for events and print them as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Arguments {
    /// URL of the MISP instance, `https://` is assumed if no scheme is given
    #[arg(long, env = "MISP_URL")]
    url: String,
    /// authorization key
    #[arg(long, env = "MISP_AUTH", hide_env_values = true)]
    auth: String,
    /// only events carrying this tag, can be given multiple times
    #[arg(long = "tag", value_name = "TAG")]
    tags: Vec<String>,
    /// no events carrying this tag, can be given multiple times
    #[arg(long = "not-tag", value_name = "TAG")]
    not_tags: Vec<String>,
    /// lower bound of the event date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    from: String,
    /// upper bound of the event date (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    to: String,
    /// relative publication window, e.g. `7d`
    #[arg(long, default_value = "")]
    last: String,
    /// restrict the search to a single event
    #[arg(long, default_value = "")]
    event_id: String,
    /// only fetch event metadata
    #[arg(long)]
    metadata: bool,
    /// only events modified at or after this RFC 3339 timestamp
    #[arg(long)]
    since: Option<DateTime<Utc>>,
    /// maximum number of events per page, 0 for the server default
    #[arg(long, default_value_t = 0)]
    limit: i64,
    /// page number, only used with `--limit`
    #[arg(long, default_value_t = 1)]
    page: i64,
    /// request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
    /// Log level for the log output.
    /// Valid values are: `off`, `error`, `warn`, `info`, `debug`, `trace`
    #[clap(long, default_value_t = LevelFilter::WARN, value_parser = LogLevelParser)]
    pub log_level: LevelFilter,
}

impl Arguments {
    fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .timeout(Duration::from_secs(self.timeout))
            .build()
            .context("Failed to build HTTP client")
    }
}

async fn main_with_error() -> Result<()> {
    let args = Arguments::parse();
    setup_logging(&args.log_level)?;

    let client = ApiClient::new_with_client(args.http_client()?, &args.url, args.auth.as_str())
        .context("Invalid MISP URL")?;

    let tags: Vec<&str> = args.tags.iter().map(String::as_str).collect();
    let not_tags: Vec<&str> = args.not_tags.iter().map(String::as_str).collect();
    let query = EventQuery {
        include_tags: &tags,
        exclude_tags: &not_tags,
        from: &args.from,
        to: &args.to,
        last: &args.last,
        event_id: &args.event_id,
        metadata_only: args.metadata,
        min_timestamp: args.since,
        limit: args.limit,
        page: args.page,
    };

    let events = client
        .search_events(&query)
        .await
        .with_context(|| format!("Failed to search events on {}", client.base_url()))?;
    info!(count = events.len(), "Events found");

    println!("{}", serde_json::to_string_pretty(&events)?);

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let ret = main_with_error().await;
    if let Err(e) = &ret {
        error!(error = %e, "Execution failed");
    }
    ret
}
