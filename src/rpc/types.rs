use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub const MIN_YEAR: i32 = 1;
pub const MAX_YEAR: i32 = 9999;

/// Calendar date as sent by the client: `{"year", "month", "day"}`.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    /// `None` for dates that do not exist, e.g. month 13 or Feb 30, and for
    /// years outside `MIN_YEAR..=MAX_YEAR`.
    pub fn to_naive(self) -> Option<NaiveDate> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub start_date: Date,
    #[serde(default)]
    pub end_date: Option<Date>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DetailParams {
    pub id: String,
}

/// A request whose params have been checked against its method.
#[derive(Debug, Clone)]
pub enum Call {
    ScheduleList(ListParams),
    ScheduleDetail(DetailParams),
}

/// Shared, lock-free request state. Each request draws its own RNG.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    seed: Option<u64>,
    today: Option<NaiveDate>,
    requests: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Pins the detail day instead of reading the local clock.
    #[cfg(test)]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Seeded states hand out `seed + n` for the n-th request; unseeded ones
    /// draw from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                let n = self.requests.fetch_add(1, Ordering::Relaxed);
                StdRng::seed_from_u64(seed.wrapping_add(n))
            }
            None => StdRng::from_entropy(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
