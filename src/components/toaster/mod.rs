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

//! Transient notifications.
//!
//! Notices raised by the search session are queued here and shown as toasts
//! until they expire. Expiry is driven by the tick event rather than a timer
//! per toast, so a toast may linger for up to one tick past its deadline.

mod render;

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use crate::model::search::Notice;

const MAX_TOASTS: usize = 4;

#[derive(Debug)]
pub(crate) struct Toast {
    pub(crate) notice: Notice,
    expires_at: Instant,
}

pub(crate) struct Toaster {
    toasts: VecDeque<Toast>,
    duration: Duration,
}

impl Toaster {
    pub(crate) fn new(duration: Duration) -> Self {
        Self {
            toasts: VecDeque::with_capacity(MAX_TOASTS),
            duration,
        }
    }

    pub(crate) fn push(&mut self, notice: Notice) {
        self.push_at(notice, Instant::now());
    }

    /// Queues `notice`, dropping the oldest toast once the queue is full.
    pub(crate) fn push_at(&mut self, notice: Notice, now: Instant) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }

        self.toasts.push_back(Toast {
            notice,
            expires_at: now + self.duration,
        });
    }

    /// Drops expired toasts, returning `true` if anything was removed.
    pub(crate) fn prune(&mut self, now: Instant) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.expires_at > now);
        self.toasts.len() != before
    }

    pub(crate) fn toasts(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::search::NoticeKind;

    fn info(message: &str) -> Notice {
        Notice::new(NoticeKind::Info, message)
    }

    #[test]
    fn toasts_expire_after_duration() {
        let mut toaster = Toaster::new(Duration::from_millis(3000));
        let start = Instant::now();

        toaster.push_at(info("first"), start);
        toaster.push_at(info("second"), start + Duration::from_millis(1000));

        assert!(!toaster.prune(start + Duration::from_millis(2999)));
        assert_eq!(toaster.toasts().count(), 2);

        assert!(toaster.prune(start + Duration::from_millis(3000)));
        let remaining: Vec<_> = toaster.toasts().map(|t| t.notice.message.as_str()).collect();
        assert_eq!(remaining, ["second"]);

        toaster.prune(start + Duration::from_millis(4000));
        assert_eq!(toaster.toasts().count(), 0);
    }

    #[test]
    fn oldest_toast_is_dropped_when_full() {
        let mut toaster = Toaster::new(Duration::from_secs(3));
        let now = Instant::now();

        for i in 0..=MAX_TOASTS {
            toaster.push_at(info(&format!("toast {i}")), now);
        }

        let messages: Vec<_> = toaster.toasts().map(|t| t.notice.message.clone()).collect();
        assert_eq!(messages.len(), MAX_TOASTS);
        assert_eq!(messages[0], "toast 1");
        assert_eq!(messages[MAX_TOASTS - 1], format!("toast {MAX_TOASTS}"));
    }
}
