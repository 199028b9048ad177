#![allow(dead_code)]

pub mod dns_server_mock;

pub use dns_server_mock::{MockDnsServer, MockReply};

use rootwalk_application::ports::Clock;
use std::sync::atomic::{AtomicU64, Ordering};

pub struct ManualClock {
    now: AtomicU64,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self {
            now: AtomicU64::new(start),
        }
    }

    pub fn advance(&self, secs: u64) {
        self.now.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}
