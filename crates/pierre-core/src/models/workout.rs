// ABOUTME: Workout context and personalization bias input types
// ABOUTME: Defines the ordered workout intensity levels and the opaque preference pass-through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workout effort level, ordered from easiest to longest
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutIntensity {
    /// Easy social or commuting ride
    #[default]
    Recreational,
    /// Sustained moderately hard effort
    Tempo,
    /// Intervals, races and other hard efforts
    Intensive,
    /// Long steady endurance ride
    Endurance,
}

impl WorkoutIntensity {
    /// All intensities in ascending order
    pub const ALL: [Self; 4] = [
        Self::Recreational,
        Self::Tempo,
        Self::Intensive,
        Self::Endurance,
    ];

    /// Stable identifier used in serialization and on the command line
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recreational => "recreational",
            Self::Tempo => "tempo",
            Self::Intensive => "intensive",
            Self::Endurance => "endurance",
        }
    }
}

impl fmt::Display for WorkoutIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutIntensity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|intensity| intensity.as_str() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "unknown workout intensity '{s}' (expected one of: recreational, tempo, intensive, endurance)"
                ))
            })
    }
}

/// Planned workout parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutContext {
    /// Effort level
    pub intensity: WorkoutIntensity,
    /// Planned ride duration in minutes
    pub duration_minutes: u32,
}

impl WorkoutContext {
    /// Create a workout context
    #[must_use]
    pub const fn new(intensity: WorkoutIntensity, duration_minutes: u32) -> Self {
        Self {
            intensity,
            duration_minutes,
        }
    }

    /// True for intensive workouts
    #[must_use]
    pub fn is_intensive(&self) -> bool {
        self.intensity == WorkoutIntensity::Intensive
    }

    /// True for tempo workouts
    #[must_use]
    pub fn is_tempo(&self) -> bool {
        self.intensity == WorkoutIntensity::Tempo
    }

    /// True for relaxed-pace rides (recreational and endurance)
    #[must_use]
    pub const fn is_relaxed_pace(&self) -> bool {
        matches!(
            self.intensity,
            WorkoutIntensity::Recreational | WorkoutIntensity::Endurance
        )
    }

    /// True when the ride lasts at least `minutes`
    #[must_use]
    pub const fn lasts_at_least(&self, minutes: u32) -> bool {
        self.duration_minutes >= minutes
    }
}

/// Pre-computed personal thermal preference
///
/// `thermal_adjustment` shifts the air temperature before any rule sees it:
/// riders who run cold get a negative value. `preference_override` is carried
/// through to the recommendation untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalizationBias {
    /// Signed offset in Celsius applied to the air temperature
    #[serde(default)]
    pub thermal_adjustment: f64,
    /// Opaque caller preferences, never interpreted by the engine
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_override: Option<serde_json::Value>,
}

impl PersonalizationBias {
    /// Bias with only a thermal adjustment
    #[must_use]
    pub const fn new(thermal_adjustment: f64) -> Self {
        Self {
            thermal_adjustment,
            preference_override: None,
        }
    }

    /// Attach an opaque preference override
    #[must_use]
    pub fn with_preference_override(mut self, preferences: serde_json::Value) -> Self {
        self.preference_override = Some(preferences);
        self
    }
}

impl Default for PersonalizationBias {
    fn default() -> Self {
        Self::new(defaults::THERMAL_ADJUSTMENT_CELSIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intensity_parsing_is_case_insensitive() {
        assert_eq!(
            " Intensive ".parse::<WorkoutIntensity>().unwrap(),
            WorkoutIntensity::Intensive
        );
        assert_eq!(
            "endurance".parse::<WorkoutIntensity>().unwrap(),
            WorkoutIntensity::Endurance
        );
        assert!("sprint".parse::<WorkoutIntensity>().is_err());
    }

    #[test]
    fn test_intensity_ordering() {
        assert!(WorkoutIntensity::Recreational < WorkoutIntensity::Tempo);
        assert!(WorkoutIntensity::Tempo < WorkoutIntensity::Intensive);
        assert!(WorkoutIntensity::Intensive < WorkoutIntensity::Endurance);
    }

    #[test]
    fn test_bias_deserializes_with_defaults() {
        let bias: PersonalizationBias = serde_json::from_str("{}").unwrap();
        assert_eq!(bias, PersonalizationBias::default());

        let bias: PersonalizationBias =
            serde_json::from_str(r#"{"thermal_adjustment":-2.5,"preference_override":{"hates_vests":true}}"#)
                .unwrap();
        assert!((bias.thermal_adjustment + 2.5).abs() < f64::EPSILON);
        assert_eq!(
            bias.preference_override,
            Some(serde_json::json!({"hates_vests": true}))
        );
    }
}
