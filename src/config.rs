use chrono::FixedOffset;
use dotenv::dotenv;
use log::*;

use std::env;

use crate::calendar::SystemClock;
use crate::error::{Error, Result};

pub const UTC_OFFSET_VAR: &str = "MOVIE_NIGHT_UTC_OFFSET";

#[derive(Clone, Debug, Default)]
pub struct Config {
    /**
     * Zone Thursdays are counted in, the host's local zone when unset
     */
    pub utc_offset: Option<FixedOffset>,
}

impl Config {
    /**
     * Read configuration from the environment, after loading any `.env` file
     */
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let utc_offset = match env::var(UTC_OFFSET_VAR) {
            Ok(value) => Some(parse_offset(&value)?),
            Err(_) => {
                info!("{} not set, using the local time zone", UTC_OFFSET_VAR);
                None
            }
        };

        Ok(Self { utc_offset })
    }

    pub fn clock(&self) -> SystemClock {
        SystemClock {
            offset: self.utc_offset,
        }
    }
}

/**
 * Parse an offset like `+05:30` or `-08:00`
 */
pub fn parse_offset(value: &str) -> Result<FixedOffset> {
    value.trim().parse::<FixedOffset>().map_err(|err| {
        warn!("Invalid {} value {:?}: {}", UTC_OFFSET_VAR, value, err);
        Error::Config(format!("{} must look like +05:30, got {:?}", UTC_OFFSET_VAR, value))
    })
}
