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

//! Opt-in diagnostic logging.
//!
//! The TUI owns the terminal, so log output only ever goes to a file. Logging
//! stays disabled unless a path is given by the `REELFIND_LOG` environment
//! variable or the `log_file` setting, in that order of precedence. The level
//! filter comes from `RUST_LOG` when set, then the `log_filter` setting.

use std::{env, fs::File, sync::Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;

const LOG_ENV: &str = "REELFIND_LOG";

pub(crate) fn init_tracing(config: &AppConfig) -> Result<()> {
    let Some(path) = log_path(env::var(LOG_ENV).ok(), config.log_file.as_deref()) else {
        return Ok(());
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .with_context(|| format!("Invalid log filter '{}'", config.log_filter))?;

    let file = File::create(&path).with_context(|| format!("Failed to create log file {path}"))?;

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(())
}

fn log_path(from_env: Option<String>, from_config: Option<&str>) -> Option<String> {
    from_env
        .filter(|p| !p.trim().is_empty())
        .or_else(|| from_config.filter(|p| !p.trim().is_empty()).map(str::to_string))
}
