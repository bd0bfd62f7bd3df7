use rust_decimal::Decimal;
use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_TAX_RATE: &str = "0.10";
const DEFAULT_MIN_BLOCK_ROOMS: i32 = 3;
const DEFAULT_MAX_BOOKING_ATTEMPTS: u32 = 3;
const DEFAULT_UNPAID_SWEEP_SCHEDULE: &str = "0 0 19 * * *";
const DEFAULT_COMPLETION_SWEEP_SCHEDULE: &str = "0 0 0 * * *";

/// Business knobs shared by the booking services.
#[derive(Debug, Clone)]
pub struct BookingPolicy {
    /// Flat tax rate applied to room charges, e.g. `0.10` for 10%.
    pub tax_rate: Decimal,
    /// A blocked booking must hold strictly more rooms than this.
    pub min_block_rooms: i32,
    /// How many times a booking is attempted when a concurrent booking wins the rooms.
    pub max_booking_attempts: u32,
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(10, 2),
            min_block_rooms: DEFAULT_MIN_BLOCK_ROOMS,
            max_booking_attempts: DEFAULT_MAX_BOOKING_ATTEMPTS,
        }
    }
}

pub struct Config {
    pub database_url: String,

    pub policy: BookingPolicy,

    pub unpaid_sweep_schedule: String,
    pub completion_sweep_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let tax_rate: Decimal = parse_var("TAX_RATE", DEFAULT_TAX_RATE)?;
        if tax_rate < Decimal::ZERO || tax_rate >= Decimal::ONE {
            return Err(ConfigError::InvalidEnvVar {
                name: "TAX_RATE".to_string(),
                value: tax_rate.to_string(),
            }
            .into());
        }

        let max_booking_attempts: u32 = parse_var(
            "MAX_BOOKING_ATTEMPTS",
            &DEFAULT_MAX_BOOKING_ATTEMPTS.to_string(),
        )?;
        if max_booking_attempts == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "MAX_BOOKING_ATTEMPTS".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            policy: BookingPolicy {
                tax_rate,
                min_block_rooms: parse_var(
                    "MIN_BLOCK_ROOMS",
                    &DEFAULT_MIN_BLOCK_ROOMS.to_string(),
                )?,
                max_booking_attempts,
            },
            unpaid_sweep_schedule: std::env::var("UNPAID_SWEEP_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_UNPAID_SWEEP_SCHEDULE.to_string()),
            completion_sweep_schedule: std::env::var("COMPLETION_SWEEP_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_COMPLETION_SWEEP_SCHEDULE.to_string()),
        })
    }
}

/// Reads an optional environment variable, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &str, default: &str) -> Result<T, ConfigError> {
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());

    value.trim().parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}
