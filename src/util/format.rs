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

//! Human-readable formatting of movie metadata.

/// Formats an average vote on a one decimal place, ten point scale.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_rating(Some(7.66)), "7.7");
/// assert_eq!(format_rating(None), "-");
/// ```
pub(crate) fn format_rating(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(v) if v.is_finite() => format!("{:.1}", v),
        _ => "-".to_string(),
    }
}

/// Formats a vote count, abbreviating thousands and millions.
pub(crate) fn format_votes(vote_count: Option<u64>) -> String {
    match vote_count {
        None => "-".to_string(),
        Some(n) if n >= 1_000_000 => format!("{:.1}M", n as f64 / 1_000_000.0),
        Some(n) if n >= 10_000 => format!("{}k", n / 1_000),
        Some(n) if n >= 1_000 => format!("{:.1}k", n as f64 / 1_000.0),
        Some(n) => n.to_string(),
    }
}
