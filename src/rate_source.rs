//! Provides historical currency rate lookup for the application.

use async_trait::async_trait;
use std::fmt;

use crate::error::RateError;

/// A calendar date as supplied by the caller.
///
/// Values are passed through without validation; an impossible month or day
/// ends up in the request URL unchanged and surfaces as a fetch or parse
/// failure from the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Renders a month or day for a request URL: values below ten get a leading
/// zero, everything else is rendered as-is.
pub fn zero_pad(num: u32) -> String {
    if num < 10 {
        format!("0{num}")
    } else {
        num.to_string()
    }
}

impl fmt::Display for RateDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.year,
            zero_pad(self.month),
            zero_pad(self.day)
        )
    }
}

impl From<chrono::NaiveDate> for RateDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        RateDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

#[async_trait]
pub trait RateSource: Send + Sync {
    /// Rate of `currency` against the base currency (the Euro) on `date`.
    async fn rate(&self, currency: &str, date: RateDate) -> Result<f64, RateError>;

    /// Rate of one unit of `from` expressed in `to` on `date`, derived from
    /// a single fetched document.
    async fn cross_rate(
        &self,
        from: &str,
        to: &str,
        date: RateDate,
    ) -> Result<f64, RateError>;
}
