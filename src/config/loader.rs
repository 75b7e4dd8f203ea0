//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::calendar::{BusinessDayCounter, CalendarRuleSet};
use crate::error::{EngineError, EngineResult};
use crate::models::ExceptionRange;

use super::types::{BonusRates, CalendarConfig, EngineConfig, EngineSettings, PointsConfig};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query point rates, bonus rates and seed calendars.
///
/// # Directory Structure
///
/// ```text
/// config/hizmet_puani/
/// ├── engine.yaml          # Settings: weekend, expected days, default calendar
/// ├── points.yaml          # Daily point rates by region and service area
/// ├── bonuses.yaml         # Bonus rates, caps and award tables
/// └── calendars/
///     └── 2025-2026.yaml   # Seed calendar for one academic year
/// ```
///
/// # Example
///
/// ```no_run
/// use hizmet_puani::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/hizmet_puani").unwrap();
///
/// let rate = loader.get_daily_points(2, 4).unwrap();
/// println!("Daily rate: {}", rate);
///
/// let rules = loader.default_rule_set().unwrap();
/// println!("Seed calendar entries: {}", rules.len());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if a required file or the calendars directory is missing
    /// - [`EngineError::ConfigParseError`] if a file contains invalid YAML or misses a field
    /// - [`EngineError::CalendarNotFound`] if the default calendar named in `engine.yaml`
    ///   has no file
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;
        let points = Self::load_yaml::<PointsConfig>(&path.join("points.yaml"))?;
        let bonuses = Self::load_yaml::<BonusRates>(&path.join("bonuses.yaml"))?;
        let calendars = Self::load_calendars(&path.join("calendars"))?;

        let config = EngineConfig::new(settings, points, bonuses, calendars);

        let default_calendar = &config.settings().default_calendar;
        if !config.calendars().contains_key(default_calendar) {
            return Err(EngineError::CalendarNotFound {
                academic_year: default_calendar.clone(),
            });
        }

        debug!(
            path = %path.display(),
            calendars = config.calendars().len(),
            "Loaded engine configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all calendar files from the calendars directory.
    fn load_calendars(calendars_dir: &Path) -> EngineResult<Vec<CalendarConfig>> {
        let dir_str = calendars_dir.display().to_string();

        let entries = fs::read_dir(calendars_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut calendars = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                calendars.push(Self::load_yaml::<CalendarConfig>(&path)?);
            }
        }

        if calendars.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no calendar files found)", dir_str),
            });
        }

        Ok(calendars)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        self.config.settings()
    }

    /// Returns the bonus rates.
    pub fn bonus_rates(&self) -> &BonusRates {
        self.config.bonuses()
    }

    /// Gets the daily point rate for a region and service area.
    ///
    /// # Errors
    ///
    /// [`EngineError::PointRateNotFound`] if the pair is not in the table.
    pub fn get_daily_points(&self, region: u8, area: u8) -> EngineResult<Decimal> {
        self.config
            .points()
            .daily_points
            .get(&region)
            .and_then(|areas| areas.get(&area))
            .copied()
            .ok_or(EngineError::PointRateNotFound { region, area })
    }

    /// Gets the seed calendar for an academic year.
    ///
    /// # Errors
    ///
    /// [`EngineError::CalendarNotFound`] if no calendar file declares that year.
    pub fn get_calendar(&self, academic_year: &str) -> EngineResult<&[ExceptionRange]> {
        self.config
            .calendars()
            .get(academic_year)
            .map(|c| c.ranges.as_slice())
            .ok_or_else(|| EngineError::CalendarNotFound {
                academic_year: academic_year.to_string(),
            })
    }

    /// Returns a copy of the default seed calendar.
    pub fn default_calendar(&self) -> EngineResult<Vec<ExceptionRange>> {
        self.get_calendar(&self.settings().default_calendar)
            .map(|ranges| ranges.to_vec())
    }

    /// Returns a fresh rule set seeded with the default calendar.
    pub fn default_rule_set(&self) -> EngineResult<CalendarRuleSet> {
        Ok(CalendarRuleSet::with_ranges(self.default_calendar()?))
    }

    /// Returns a business day counter using the configured weekend.
    pub fn counter(&self) -> BusinessDayCounter {
        BusinessDayCounter::new(self.settings().weekend.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AwardRank, ExceptionKind};
    use chrono::{NaiveDate, Weekday};
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/hizmet_puani"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.settings().default_calendar, "2025-2026");
        assert_eq!(loader.settings().expected_days_per_year, dec("180"));
    }

    #[test]
    fn test_weekend_loaded_as_saturday_and_sunday() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.settings().weekend, vec![Weekday::Sat, Weekday::Sun]);
        let counter = loader.counter();
        assert!(counter.is_weekend(NaiveDate::from_ymd_opt(2025, 11, 8).unwrap()));
        assert!(!counter.is_weekend(NaiveDate::from_ymd_opt(2025, 11, 10).unwrap()));
    }

    #[test]
    fn test_get_daily_points_table_corners() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.get_daily_points(1, 1).unwrap(), dec("0.028"));
        assert_eq!(loader.get_daily_points(1, 6).unwrap(), dec("0.060"));
        assert_eq!(loader.get_daily_points(3, 1).unwrap(), dec("0.039"));
        assert_eq!(loader.get_daily_points(3, 6).unwrap(), dec("0.099"));
        assert_eq!(loader.get_daily_points(2, 4).unwrap(), dec("0.060"));
    }

    #[test]
    fn test_get_daily_points_unknown_pair_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_daily_points(4, 1) {
            Err(EngineError::PointRateNotFound { region, area }) => {
                assert_eq!(region, 4);
                assert_eq!(area, 1);
            }
            other => panic!("Expected PointRateNotFound error, got {:?}", other),
        }
        assert!(loader.get_daily_points(1, 7).is_err());
    }

    #[test]
    fn test_default_calendar_has_seed_entries() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let calendar = loader.default_calendar().unwrap();

        assert_eq!(calendar.len(), 8);
        assert_eq!(calendar[0].start, NaiveDate::from_ymd_opt(2025, 11, 10).unwrap());
        assert_eq!(calendar[0].kind, ExceptionKind::FullDayOff);
        let forced = calendar
            .iter()
            .filter(|r| r.kind == ExceptionKind::ForcedWorkday)
            .count();
        assert_eq!(forced, 3);
    }

    #[test]
    fn test_get_calendar_unknown_year_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        match loader.get_calendar("1999-2000") {
            Err(EngineError::CalendarNotFound { academic_year }) => {
                assert_eq!(academic_year, "1999-2000");
            }
            other => panic!("Expected CalendarNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_bonus_rates_loaded_correctly() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let rates = loader.bonus_rates();

        assert_eq!(rates.boarding_duty.special, dec("0.2"));
        assert_eq!(rates.boarding_duty.other, dec("0.1"));
        assert_eq!(rates.digital_content.yearly_cap, 10);
        assert_eq!(rates.subject_committee.max_years, 4);
        assert_eq!(rates.teacher_award[&AwardRank::InternationalFirst], dec("35"));
        assert_eq!(rates.student_award[&AwardRank::NationalFirst].areas_4_6, dec("20"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
