// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Remote movie search service.
//!
//! This module wraps the single outbound request the application makes: a
//! title search against the TMDB `search/movie` endpoint. The [`MovieSource`]
//! trait is the seam used by the task worker, [`TmdbClient`] is the real
//! implementation.
//!
//! Requests are blocking and are only ever issued from worker threads, never
//! from the UI thread. Failures are returned to the caller unchanged, there
//! is no retry and no caching here.

use std::time::Duration;

use reqwest::{
    StatusCode, Url,
    blocking::{Client, Request},
    header::ACCEPT,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{config::AppConfig, model::SearchPage};

const SEARCH_PATH: &str = "search/movie";

#[derive(Error, Debug)]
pub(crate) enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Request was not authorised ({0}), check TMDB_TOKEN")]
    Unauthorized(StatusCode),
    #[error("Unexpected response status: {0}")]
    Status(StatusCode),
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),
}

/// Something that can answer a movie title search.
pub(crate) trait MovieSource: Send + Sync {
    fn search(&self, query: &str, page: u32) -> Result<SearchPage, FetchError>;
}

#[derive(Clone)]
pub(crate) struct TmdbClient {
    client: Client,
    base_url: String,
    token: String,
    language: String,
    include_adult: bool,
}

impl TmdbClient {
    pub(crate) fn new(config: &AppConfig, token: String) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            token,
            language: config.language.clone(),
            include_adult: config.include_adult,
        })
    }

    fn search_url(&self, query: &str, page: u32) -> Result<Url, FetchError> {
        let endpoint = format!("{}/{}", self.base_url.trim_end_matches('/'), SEARCH_PATH);
        let include_adult = if self.include_adult { "true" } else { "false" };
        let page = page.to_string();

        Url::parse_with_params(
            &endpoint,
            [
                ("query", query),
                ("include_adult", include_adult),
                ("language", self.language.as_str()),
                ("page", page.as_str()),
            ],
        )
        .map_err(|e| FetchError::InvalidUrl(e.to_string()))
    }

    /// Builds, but does not send, the search request for a query and page.
    pub(crate) fn build_request(&self, query: &str, page: u32) -> Result<Request, FetchError> {
        let url = self.search_url(query, page)?;

        let request = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.token)
            .build()?;

        Ok(request)
    }
}

impl MovieSource for TmdbClient {
    fn search(&self, query: &str, page: u32) -> Result<SearchPage, FetchError> {
        let request = self.build_request(query, page)?;
        debug!(%query, page, "Requesting movie search");

        let response = self.client.execute(request)?;
        let status = response.status();

        if status.is_success() {
            let page: SearchPage = response.json()?;
            debug!(
                results = page.results.len(),
                total_pages = page.total_pages,
                "Movie search succeeded"
            );
            Ok(page)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(%status, "Movie search rejected the bearer token");
            Err(FetchError::Unauthorized(status))
        } else {
            warn!(%status, "Movie search failed");
            Err(FetchError::Status(status))
        }
    }
}
