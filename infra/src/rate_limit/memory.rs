//! Process-local counter store

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use ov_core::services::{RateLimitHit, RateLimitStore};

/// Entry count above which expired windows are swept on the next hit
const SWEEP_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u64,
    reset_at: DateTime<Utc>,
}

/// In-memory fixed-window counters.
///
/// Counters are lost on restart and not shared between processes.
#[derive(Debug, Default)]
pub struct InMemoryRateLimitStore {
    windows: Mutex<HashMap<String, Window>>,
}

impl InMemoryRateLimitStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every window that ended at or before `now`
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        match self.windows.lock() {
            Ok(mut windows) => Self::sweep(&mut windows, now),
            Err(_) => 0,
        }
    }

    /// Number of tracked keys
    pub fn len(&self) -> usize {
        self.windows.lock().map(|w| w.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sweep(windows: &mut HashMap<String, Window>, now: DateTime<Utc>) -> usize {
        let before = windows.len();
        windows.retain(|_, window| window.reset_at > now);
        before - windows.len()
    }
}

#[async_trait]
impl RateLimitStore for InMemoryRateLimitStore {
    async fn hit(
        &self,
        key: &str,
        window: Duration,
        now: DateTime<Utc>,
    ) -> Result<RateLimitHit, String> {
        let mut windows = self
            .windows
            .lock()
            .map_err(|_| "rate limit counters poisoned".to_string())?;

        if windows.len() >= SWEEP_THRESHOLD {
            let swept = Self::sweep(&mut windows, now);
            tracing::debug!(swept, "Swept expired rate limit windows");
        }

        let entry = windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            reset_at: now + window,
        });
        if entry.reset_at <= now {
            *entry = Window {
                count: 0,
                reset_at: now + window,
            };
        }
        entry.count += 1;

        Ok(RateLimitHit {
            count: entry.count,
            reset_at: entry.reset_at,
        })
    }

    async fn reset(&self, key: &str) -> Result<(), String> {
        self.windows
            .lock()
            .map_err(|_| "rate limit counters poisoned".to_string())?
            .remove(key);
        Ok(())
    }
}
