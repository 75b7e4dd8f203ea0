//! Configuration loading and management for the service score engine.
//!
//! This module provides functionality to load engine configurations from YAML files,
//! including the daily point table, bonus rates and seed calendars.
//!
//! # Example
//!
//! ```no_run
//! use hizmet_puani::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/hizmet_puani").unwrap();
//! println!("Loaded: {}", config.settings().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BoardingDutyRates, BonusRates, CalendarConfig, DigitalContentRates, EngineConfig,
    EngineSettings, PointsConfig, StudentAwardPoints, SubjectCommitteeRates,
};
