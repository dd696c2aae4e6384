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

//! Domain models and core data structures.
//!
//! This module defines the movie records returned by the remote search
//! service and the page envelope they arrive in. The search session state
//! machine that owns them lives in [`search`].

pub(crate) mod search;

use serde::Deserialize;

/// A single movie as returned by the remote search endpoint.
///
/// Only `id` and `title` are guaranteed by the service, everything else is
/// descriptive and may be absent (or an empty string, in the case of
/// `release_date`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Movie {
    pub(crate) id: u64,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) overview: String,
    #[serde(default)]
    pub(crate) poster_path: Option<String>,
    #[serde(default)]
    pub(crate) backdrop_path: Option<String>,
    #[serde(default)]
    pub(crate) release_date: Option<String>,
    #[serde(default)]
    pub(crate) vote_average: Option<f64>,
    #[serde(default)]
    pub(crate) vote_count: Option<u64>,
    #[serde(default)]
    pub(crate) original_language: Option<String>,
}

impl Movie {
    /// The four digit release year, if the service supplied a usable date.
    pub(crate) fn release_year(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
    }
}

/// One page of search results.
///
/// The service omits the page counters for some error-ish responses, in which
/// case they decode as zero and the pager simply stays hidden.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct SearchPage {
    #[serde(default = "first_page")]
    pub(crate) page: u32,
    pub(crate) results: Vec<Movie>,
    #[serde(default)]
    pub(crate) total_pages: u32,
    #[serde(default)]
    pub(crate) total_results: u64,
}

fn first_page() -> u32 {
    1
}

#[cfg(test)]
pub(crate) fn movie(id: u64, title: &str) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: format!("Overview of {title}"),
        poster_path: Some(format!("/{id}.jpg")),
        backdrop_path: None,
        release_date: Some("2005-06-10".to_string()),
        vote_average: Some(7.7),
        vote_count: Some(20000),
        original_language: Some("en".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_search_response() {
        let body = r#"{
            "page": 2,
            "results": [
                {
                    "adult": false,
                    "id": 272,
                    "title": "Batman Begins",
                    "overview": "Driven by tragedy...",
                    "poster_path": "/sPX89Td70IDDjVr85jdSBb4rWGr.jpg",
                    "backdrop_path": null,
                    "release_date": "2005-06-10",
                    "vote_average": 7.7,
                    "vote_count": 21000,
                    "original_language": "en",
                    "genre_ids": [28, 80]
                }
            ],
            "total_pages": 9,
            "total_results": 170
        }"#;

        let page: SearchPage = serde_json::from_str(body).unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 9);
        assert_eq!(page.total_results, 170);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].title, "Batman Begins");
        assert_eq!(page.results[0].backdrop_path, None);
        assert_eq!(page.results[0].release_year(), Some("2005"));
    }

    #[test]
    fn missing_page_counters_default() {
        let body = r#"{ "results": [ { "id": 1, "title": "Untitled" } ] }"#;

        let page: SearchPage = serde_json::from_str(body).unwrap();

        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_results, 0);
        assert_eq!(page.results[0].overview, "");
        assert_eq!(page.results[0].vote_average, None);
    }

    #[test]
    fn empty_release_date_has_no_year() {
        let mut m = movie(1, "Unreleased");
        m.release_date = Some(String::new());
        assert_eq!(m.release_year(), None);

        m.release_date = None;
        assert_eq!(m.release_year(), None);
    }
}
