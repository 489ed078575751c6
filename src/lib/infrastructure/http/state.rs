//! Application state module

use std::{convert::Infallible, fmt, path::PathBuf, str::FromStr, sync::Arc};

use chrono::{DateTime, Utc};

use crate::domain::reservations::ReservationService;

use super::HttpServerConfig;

/// Deployment environment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development; internal error details are returned to clients
    Development,

    /// Anything else
    #[default]
    Production,
}

impl Environment {
    /// Whether internal error details may be shown to clients
    pub fn discloses_errors(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    /// `development` (any case) selects [`Environment::Development`]; every other value is production.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("development") {
            Ok(Self::Development)
        } else {
            Ok(Self::Production)
        }
    }
}

/// Application configuration
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    /// The deployment environment
    pub environment: Environment,

    /// Directory holding the built website
    pub static_dir: Option<PathBuf>,
}

impl From<&HttpServerConfig> for AppConfig {
    fn from(config: &HttpServerConfig) -> Self {
        Self {
            environment: config.environment,
            static_dir: config.static_dir.clone(),
        }
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState<R: ReservationService> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// The application configuration
    pub config: AppConfig,

    /// Reservation service
    pub reservations: Arc<R>,
}

impl<R> AppState<R>
where
    R: ReservationService,
{
    /// Create a new application state
    pub fn new(config: AppConfig, reservations: R) -> Self {
        Self {
            start_time: Utc::now(),
            config,
            reservations: Arc::new(reservations),
        }
    }
}

impl<R> fmt::Debug for AppState<R>
where
    R: ReservationService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("config", &self.config)
            .field("reservations", &"ReservationService")
            .finish()
    }
}
