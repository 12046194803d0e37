use std::path::Path;

use serde::Deserialize;
use triarm_core::{Arm, JointAngles};

use crate::core::ScreenProjection;

pub trait Configurable: Clone {
    fn global(&self) -> &GlobalConfig;
}

/// Triarm global configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct GlobalConfig {
    /// Name of the binary.
    #[serde(default)]
    pub bin_name: String,

    /// Whether motion is enabled.
    #[serde(default = "GlobalConfig::enable_motion")]
    pub enable_motion: bool,

    /// Whether the application runs as daemon.
    #[serde(default)]
    pub daemon: bool,
}

impl GlobalConfig {
    fn enable_motion() -> bool {
        true
    }
}

impl Configurable for GlobalConfig {
    fn global(&self) -> &GlobalConfig {
        self
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            bin_name: String::new(),
            enable_motion: true,
            daemon: false,
        }
    }
}

/// Triarm runtime configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Arm segment lengths.
    #[serde(default)]
    pub arm: Arm,

    /// Initial joint angles in radians.
    #[serde(default)]
    pub angles: JointAngles,

    /// Interval between two frame ticks in milliseconds.
    #[serde(default = "Config::frame_interval_ms")]
    pub frame_interval_ms: u64,

    /// Pointer input projection.
    #[serde(default)]
    pub projection: ScreenProjection,

    /// Global configuration.
    #[serde(default)]
    pub global: GlobalConfig,
}

impl Config {
    fn frame_interval_ms() -> u64 {
        crate::consts::FRAME_INTERVAL.as_millis() as u64
    }

    /// Try to read the configuration from the first file that exists.
    ///
    /// Falls back to the default configuration when none of the given paths
    /// exist.
    pub fn try_from_file<P: AsRef<Path>>(paths: Vec<P>) -> crate::runtime::Result<Self> {
        for path in &paths {
            if path.as_ref().exists() {
                let contents = std::fs::read_to_string(path)?;

                return Ok(toml::from_str(&contents)?);
            }
        }

        Ok(Self::default())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arm: Arm::default(),
            angles: JointAngles::default(),
            frame_interval_ms: Self::frame_interval_ms(),
            projection: ScreenProjection::default(),
            global: GlobalConfig::default(),
        }
    }
}

impl Configurable for Config {
    fn global(&self) -> &GlobalConfig {
        &self.global
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
            frame_interval_ms = 10

            [arm]
            a = 0.6
            b = 0.3
            c = 0.15

            [angles]
            theta = 0.0
            phi = 0.4
            psi = 0.8
            "#,
        )
        .unwrap();

        assert_eq!(config.arm, Arm::new(0.6, 0.3, 0.15));
        assert_eq!(config.angles, JointAngles::new(0.0, 0.4, 0.8));
        assert_eq!(config.frame_interval_ms, 10);
        assert!(config.global().enable_motion);
    }
}
