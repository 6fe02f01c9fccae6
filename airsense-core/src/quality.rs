//! Air quality classification
//!
//! Maps a concentration onto three ordinal bands using two thresholds:
//!
//! ```text
//! ppm < good        -> Good
//! ppm < moderate    -> Moderate
//! otherwise         -> Poor
//! ```
//!
//! Thresholds are taken as given. If `good >= moderate` the Moderate band is
//! simply empty; `QualityThresholds::validate` is there for callers that
//! want to reject that up front.

use core::fmt;

use crate::{
    constants::quality::{
        MQ135_GOOD_THRESHOLD_PPM, MQ135_MODERATE_THRESHOLD_PPM,
        MQ4_GOOD_THRESHOLD_PPM, MQ4_MODERATE_THRESHOLD_PPM,
    },
    errors::{ConversionError, ConversionResult},
};

/// Qualitative air quality band, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AirQuality {
    /// Below the good threshold
    Good,
    /// Between the good and moderate thresholds
    Moderate,
    /// At or above the moderate threshold
    Poor,
}

impl AirQuality {
    /// Label used in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AirQuality {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

/// Classify a concentration against two thresholds
pub fn classify(ppm: f32, good_threshold: f32, moderate_threshold: f32) -> AirQuality {
    if ppm < good_threshold {
        AirQuality::Good
    } else if ppm < moderate_threshold {
        AirQuality::Moderate
    } else {
        AirQuality::Poor
    }
}

/// Band boundaries for one gas sensor (ppm)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityThresholds {
    /// Concentrations below this are Good
    pub good: f32,

    /// Concentrations below this (and not Good) are Moderate
    pub moderate: f32,
}

impl QualityThresholds {
    /// Create thresholds from explicit bounds
    pub fn new(good: f32, moderate: f32) -> Self {
        Self { good, moderate }
    }

    /// Methane bands for the MQ-4
    pub fn mq4() -> Self {
        Self::new(MQ4_GOOD_THRESHOLD_PPM, MQ4_MODERATE_THRESHOLD_PPM)
    }

    /// CO2-equivalent bands for the MQ-135
    pub fn mq135() -> Self {
        Self::new(MQ135_GOOD_THRESHOLD_PPM, MQ135_MODERATE_THRESHOLD_PPM)
    }

    /// Classify a concentration against these bands
    pub fn classify(&self, ppm: f32) -> AirQuality {
        classify(ppm, self.good, self.moderate)
    }

    /// Require finite bounds with `good < moderate`
    pub fn validate(&self) -> ConversionResult<()> {
        if !self.good.is_finite() || !self.moderate.is_finite() {
            return Err(ConversionError::InvalidConfig {
                reason: "quality thresholds must be finite",
            });
        }
        if self.good >= self.moderate {
            return Err(ConversionError::InvalidConfig {
                reason: "good threshold must be below moderate threshold",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_bands() {
        assert_eq!(classify(250.0, 300.0, 600.0), AirQuality::Good);
        assert_eq!(classify(450.0, 300.0, 600.0), AirQuality::Moderate);
        assert_eq!(classify(700.0, 300.0, 600.0), AirQuality::Poor);
    }

    #[test]
    fn boundaries_belong_to_upper_band() {
        assert_eq!(classify(300.0, 300.0, 600.0), AirQuality::Moderate);
        assert_eq!(classify(600.0, 300.0, 600.0), AirQuality::Poor);
    }

    #[test]
    fn inverted_thresholds_skip_moderate() {
        // No ordering check in the raw classifier
        assert_eq!(classify(500.0, 600.0, 300.0), AirQuality::Good);
        assert_eq!(classify(700.0, 600.0, 300.0), AirQuality::Poor);
        assert!(QualityThresholds::new(600.0, 300.0).validate().is_err());
    }

    #[test]
    fn presets() {
        let mq135 = QualityThresholds::mq135();
        assert_eq!(mq135.classify(399.0), AirQuality::Good);
        assert_eq!(mq135.classify(999.0), AirQuality::Moderate);
        assert_eq!(mq135.classify(1000.0), AirQuality::Poor);
        assert!(mq135.validate().is_ok());
        assert!(QualityThresholds::mq4().validate().is_ok());
    }

    #[test]
    fn bands_are_ordered() {
        assert!(AirQuality::Good < AirQuality::Moderate);
        assert!(AirQuality::Moderate < AirQuality::Poor);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_labels() {
        assert_eq!(AirQuality::Good.to_string(), "Good");
        assert_eq!(AirQuality::Moderate.to_string(), "Moderate");
        assert_eq!(AirQuality::Poor.to_string(), "Poor");
    }
}
