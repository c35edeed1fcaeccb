// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line arguments and the resolved server configuration.

use chrono_tz::Tz;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use supply_plan::{Credentials, DEFAULT_BASE_URL};

/// Supply Plan Server - HTTP front end for the supply planning workflow
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the CSV sheet file. If not provided, uses an in-memory sheet.
    #[arg(short, long, env = "SHEET_PATH")]
    pub sheet: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Seller API origin
    #[arg(long, env = "SELLER_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// IANA timezone timeslots are displayed in
    #[arg(long, env = "DISPLAY_TIMEZONE", default_value = "Europe/Moscow")]
    pub timezone: String,

    /// Seller account client id
    #[arg(long, env = "CLIENT_ID", hide_env_values = true)]
    pub client_id: Option<String>,

    /// Seller account API key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Timeout of a single seller API request, in seconds
    #[arg(long, default_value_t = 30)]
    pub request_timeout_secs: u64,
}

/// Errors raised while resolving the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required credential was missing or empty.
    MissingCredential(&'static str),
    /// The display timezone is not a known IANA name.
    InvalidTimezone(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCredential(name) => {
                write!(f, "Missing required credential {name}")
            }
            Self::InvalidTimezone(name) => write!(f, "Unknown display timezone '{name}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Validated server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV sheet location, or `None` for an in-memory sheet.
    pub sheet_path: Option<PathBuf>,
    /// Listening port.
    pub port: u16,
    /// Seller API origin.
    pub base_url: String,
    /// Seller account credentials.
    pub credentials: Credentials,
    /// Display timezone for timeslots.
    pub timezone: Tz,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl Config {
    /// Resolves the configuration from parsed arguments.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredential` if `CLIENT_ID` or `API_KEY`
    /// is absent, or `ConfigError::InvalidTimezone` for an unknown zone.
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let client_id: String = required(args.client_id, "CLIENT_ID")?;
        let api_key: String = required(args.api_key, "API_KEY")?;
        let timezone: Tz = args
            .timezone
            .parse()
            .map_err(|_| ConfigError::InvalidTimezone(args.timezone.clone()))?;

        Ok(Self {
            sheet_path: args.sheet,
            port: args.port,
            base_url: args.base_url,
            credentials: Credentials { client_id, api_key },
            timezone,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
        })
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingCredential(name))
}
