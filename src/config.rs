use anyhow::{anyhow, Result};
use std::env;

use crate::scheduler::{CourtCatalog, SchedulerSettings};
use crate::utils::validation::validate_catalog;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token from @BotFather.
    pub telegram_bot_token: String,
    /// Port for the health check HTTP server.
    pub http_port: u16,
    /// Court names and time slot labels offered by the config editor.
    pub catalog: CourtCatalog,
    /// Rotation tunables for timetable generation.
    pub scheduler: SchedulerSettings,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Only `TELEGRAM_BOT_TOKEN` is required; everything else falls back to
    /// the deployed defaults. `COURT_NAMES` and `TIME_SLOT_LABELS` are
    /// comma-separated lists.
    pub fn from_env() -> Result<Self> {
        let telegram_bot_token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;
        if telegram_bot_token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let http_port = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let defaults = CourtCatalog::default();
        let catalog = CourtCatalog::new(
            list_var("COURT_NAMES", &defaults.courts),
            list_var("TIME_SLOT_LABELS", &defaults.time_slots),
        );
        validate_catalog(&catalog)?;

        let max_consecutive = numeric_var("MAX_CONSECUTIVE_QUANTUMS", 2)?;
        if max_consecutive == 0 {
            return Err(anyhow!("MAX_CONSECUTIVE_QUANTUMS must be at least 1"));
        }
        let quantums_per_booking_block = numeric_var("QUANTUMS_PER_BOOKING_BLOCK", 3)?;
        if quantums_per_booking_block == 0 {
            return Err(anyhow!("QUANTUMS_PER_BOOKING_BLOCK must be at least 1"));
        }

        Ok(Config {
            telegram_bot_token,
            http_port,
            catalog,
            scheduler: SchedulerSettings {
                max_consecutive,
                quantums_per_booking_block,
            },
        })
    }
}

fn list_var(name: &str, default: &[String]) -> Vec<String> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .split(',')
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
        _ => default.to_vec(),
    }
}

fn numeric_var(name: &str, default: u32) -> Result<u32> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map_err(|_| anyhow!("Invalid {}", name))
        }
        _ => Ok(default),
    }
}
