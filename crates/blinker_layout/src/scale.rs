//! Scale modes
//!
//! How content of a given intrinsic size is sized and positioned inside the
//! viewport.

use blinker_core::BlinkerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Policy for laying content out inside a padded viewport
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Fill the padded viewport exactly, ignoring the content's aspect ratio
    #[default]
    Stretch,
    /// Keep the aspect ratio, filling the padded axis matching the orientation
    Constrain,
    /// Draw at intrinsic size, centered in the viewport, ignoring padding
    Center,
}

impl ScaleMode {
    pub const ALL: [ScaleMode; 3] = [ScaleMode::Stretch, ScaleMode::Constrain, ScaleMode::Center];

    /// Integer encoding used by hosts that persist the mode as a number
    pub fn to_raw(self) -> i32 {
        match self {
            ScaleMode::Stretch => 0,
            ScaleMode::Constrain => 1,
            ScaleMode::Center => 2,
        }
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(ScaleMode::Stretch),
            1 => Some(ScaleMode::Constrain),
            2 => Some(ScaleMode::Center),
            _ => None,
        }
    }

    /// Decode a raw value, degrading unknown values to `Stretch`
    pub fn from_raw_or_stretch(raw: i32) -> Self {
        Self::from_raw(raw).unwrap_or_else(|| {
            tracing::warn!("Unknown scale mode {}, falling back to stretch", raw);
            ScaleMode::Stretch
        })
    }

    /// Whether this mode needs the content's intrinsic size
    pub fn needs_intrinsic_size(self) -> bool {
        !matches!(self, ScaleMode::Stretch)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScaleMode::Stretch => "stretch",
            ScaleMode::Constrain => "constrain",
            ScaleMode::Center => "center",
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleMode {
    type Err = BlinkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stretch" => Ok(ScaleMode::Stretch),
            "constrain" => Ok(ScaleMode::Constrain),
            "center" => Ok(ScaleMode::Center),
            other => Err(BlinkerError::UnknownScaleMode(other.to_string())),
        }
    }
}

impl TryFrom<i32> for ScaleMode {
    type Error = BlinkerError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::from_raw(raw).ok_or_else(|| BlinkerError::UnknownScaleMode(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_encoding() {
        for mode in ScaleMode::ALL {
            assert_eq!(ScaleMode::from_raw(mode.to_raw()), Some(mode));
        }
        assert_eq!(ScaleMode::from_raw(3), None);
        assert_eq!(ScaleMode::from_raw_or_stretch(-1), ScaleMode::Stretch);
        assert_eq!(ScaleMode::from_raw_or_stretch(2), ScaleMode::Center);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Constrain".parse::<ScaleMode>(), Ok(ScaleMode::Constrain));
        assert_eq!(" center ".parse::<ScaleMode>(), Ok(ScaleMode::Center));
        assert_eq!(
            "zoom".parse::<ScaleMode>(),
            Err(BlinkerError::UnknownScaleMode("zoom".to_string()))
        );
        assert!(ScaleMode::try_from(9).is_err());
    }

    #[test]
    fn test_default_is_stretch() {
        assert_eq!(ScaleMode::default(), ScaleMode::Stretch);
        assert!(!ScaleMode::Stretch.needs_intrinsic_size());
        assert!(ScaleMode::Center.needs_intrinsic_size());
    }
}
