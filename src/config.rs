/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ElevatorError;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone)]
pub struct Config {
    pub elevator: ElevatorConfig,
}

#[derive(Deserialize, Clone)]
pub struct ElevatorConfig {
    pub n_floors: u8,
    /// Metres between adjacent floors.
    pub floor_height: f64,
    /// Cabin speed in metres per second.
    pub speed: f64,
    /// Total door cycle budget in milliseconds.
    pub door_open_time: u64,
}

impl Config {
    /// Rejects parameters the controller assumes valid once constructed.
    pub fn validate(&self) -> Result<(), ElevatorError> {
        let elevator = &self.elevator;
        if elevator.n_floors < 2 {
            return Err(ElevatorError::Config(format!(
                "n_floors must be at least 2, got {}",
                elevator.n_floors
            )));
        }
        if elevator.floor_height <= 0.0 {
            return Err(ElevatorError::Config(format!(
                "floor_height must be positive, got {}",
                elevator.floor_height
            )));
        }
        if elevator.speed <= 0.0 {
            return Err(ElevatorError::Config(format!(
                "speed must be positive, got {}",
                elevator.speed
            )));
        }
        if elevator.door_open_time == 0 {
            return Err(ElevatorError::Config(
                "door_open_time must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config(path: &str) -> Result<Config, ElevatorError> {
    let config_str = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ElevatorError::Config(format!("failed to parse {}: {}", path, e)))?;
    config.validate()?;
    Ok(config)
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod config_tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            elevator: ElevatorConfig {
                n_floors: 10,
                floor_height: 3.0,
                speed: 2.0,
                door_open_time: 1000,
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_too_few_floors_rejected() {
        let mut config = valid_config();
        config.elevator.n_floors = 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_speed_rejected() {
        let mut config = valid_config();
        config.elevator.speed = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_positive_floor_height_rejected() {
        let mut config = valid_config();
        config.elevator.floor_height = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_door_open_time_rejected() {
        let mut config = valid_config();
        config.elevator.door_open_time = 0;
        assert!(config.validate().is_err());
    }
}
