//! Simulation settings
//!
//! Loaded from a JSON document the same way content bundles are: the page
//! fetches it, hands the string to `World::load_config`, and every missing
//! field falls back to the defaults below.

use serde::{Deserialize, Serialize};

use super::error::{SimError, SimResult};
use super::modes::{CollisionMode, PairPolicy};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Uniform bounding radius `R` shared by every body of the run
    pub radius: f32,
    /// Edge length of the cubic enclosure
    pub enclosure_size: f32,
    /// Fixed step used by `World::step()`
    pub dt: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_angular_speed: f32,
    pub max_angular_speed: f32,
    /// RNG seed for spawn velocities and `randomize_velocities`
    pub seed: u64,
    pub pair_policy: PairPolicy,
    pub mode: CollisionMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            enclosure_size: 120.0,
            dt: 0.02,
            min_speed: 10.0,
            max_speed: 40.0,
            min_angular_speed: 1.0,
            max_angular_speed: 3.0,
            seed: 42,
            pair_policy: PairPolicy::FirstMatch,
            mode: CollisionMode::default(),
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> SimResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SimError::InvalidConfig(format!("radius must be positive, got {}", self.radius)));
        }
        if !(self.enclosure_size.is_finite() && self.enclosure_size > 2.0 * self.radius) {
            return Err(SimError::InvalidConfig(format!(
                "enclosure_size {} cannot hold a body of radius {}",
                self.enclosure_size, self.radius
            )));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidConfig(format!("dt must be positive, got {}", self.dt)));
        }
        if !self.mode.is_runnable() {
            return Err(SimError::InvalidConfig("bvh broad phase requires the sphere narrow phase".into()));
        }
        self.speed_bounds().validate()?;
        self.angular_speed_bounds().validate()?;
        Ok(())
    }

    pub fn speed_bounds(&self) -> SpeedRange {
        SpeedRange { min: self.min_speed, max: self.max_speed }
    }

    pub fn angular_speed_bounds(&self) -> SpeedRange {
        SpeedRange { min: self.min_angular_speed, max: self.max_angular_speed }
    }
}

/// Closed interval a random speed is drawn from
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

impl SpeedRange {
    pub fn validate(&self) -> SimResult<()> {
        let ok = self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min <= self.max;
        if ok {
            Ok(())
        } else {
            Err(SimError::InvalidVelocityBounds { min: self.min, max: self.max })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::modes::{BroadPhaseKind, NarrowPhaseKind};

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = SimConfig::from_json(r#"{ "radius": 4.0 }"#).unwrap();
        assert_eq!(cfg.radius, 4.0);
        assert_eq!(cfg.enclosure_size, 120.0);
        assert_eq!(cfg.pair_policy, PairPolicy::FirstMatch);
        assert_eq!(cfg.mode, CollisionMode::default());
    }

    #[test]
    fn rejects_non_positive_radius() {
        let err = SimConfig::from_json(r#"{ "radius": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_enclosure_smaller_than_a_body() {
        let err = SimConfig::from_json(r#"{ "radius": 10.0, "enclosure_size": 15.0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_inverted_speed_range() {
        let err = SimConfig::from_json(r#"{ "min_speed": 50.0, "max_speed": 5.0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidVelocityBounds { .. }));
    }

    #[test]
    fn rejects_bvh_with_aabb() {
        let json = r#"{ "mode": { "broad_phase": "bvh", "narrow_phase": "aabb" } }"#;
        assert!(SimConfig::from_json(json).is_err());
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let err = SimConfig::from_json("{ radius: ").unwrap_err();
        assert!(matches!(err, SimError::ConfigJson(_)));
    }

    #[test]
    fn json_round_trip_keeps_mode() {
        let mut cfg = SimConfig::default();
        cfg.mode = CollisionMode {
            broad_phase: BroadPhaseKind::BruteForce,
            narrow_phase: NarrowPhaseKind::Aabb,
        };
        let back = SimConfig::from_json(&cfg.to_json()).unwrap();
        assert_eq!(back, cfg);
    }
}
