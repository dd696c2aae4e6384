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

//! Application configuration.
//!
//! This module manages the application configuration file and resolves the
//! API bearer token. The token is never read from the file, it comes
//! from the `TMDB_TOKEN` environment variable at build time or at run time.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "reelfind";

const TOKEN_VAR: &str = "TMDB_TOKEN";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub version: u32,
    pub api_base_url: String,
    pub language: String,
    pub include_adult: bool,
    pub request_timeout_secs: u64,
    pub toast_duration_ms: u64,
    pub log_file: Option<String>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            api_base_url: "https://api.themoviedb.org/3".to_string(),
            language: "en-US".to_string(),
            include_adult: false,
            request_timeout_secs: 10,
            toast_duration_ms: 3000,
            log_file: None,
            log_filter: "info".to_string(),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

/// Returns the bearer token used for every search request.
///
/// A token exported when the application runs wins over one captured at
/// build time. A missing token is not an error here, the service rejects the
/// request and that failure is reported like any other.
pub fn api_token() -> String {
    resolve_token(std::env::var(TOKEN_VAR).ok(), option_env!("TMDB_TOKEN"))
}

fn resolve_token(runtime: Option<String>, built: Option<&str>) -> String {
    runtime
        .filter(|t| !t.trim().is_empty())
        .or_else(|| built.map(str::to_string))
        .unwrap_or_default()
}
