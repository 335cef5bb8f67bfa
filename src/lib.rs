pub mod config;
pub mod error;
pub mod log;
pub mod providers;
pub mod rate_source;

use anyhow::Result;
use tracing::{debug, info};

use crate::rate_source::{RateDate, RateSource};

/// A single rate lookup as requested on the command line.
pub struct RateRequest {
    /// Currency to look up (against the Euro, or against `to` if set).
    pub from: String,
    /// Optional second currency for a cross rate.
    pub to: Option<String>,
    pub date: RateDate,
}

pub async fn run(request: RateRequest, config_path: Option<&str>) -> Result<()> {
    info!("Rate lookup starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let access_key = config.api.credential()?;
    let provider = providers::fixer::FixerProvider::new(&config.api.base_url, access_key)?;

    match &request.to {
        Some(to) => {
            let rate = provider.cross_rate(&request.from, to, request.date).await?;
            println!("1 {} = {:.4} {} on {}", request.from, rate, to, request.date);
        }
        None => {
            let rate = provider.rate(&request.from, request.date).await?;
            println!("1 EUR = {:.4} {} on {}", rate, request.from, request.date);
        }
    }

    Ok(())
}
