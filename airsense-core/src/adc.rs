//! Raw sample to voltage conversion
//!
//! The converter quantizes `0..reference` into `resolution` levels. The
//! inverse mapping is linear:
//!
//! ```text
//! voltage = (sample / resolution) * reference
//! ```

use crate::{
    constants::adc::{ADC_RESOLUTION_12BIT, CURRENT_ADC_REFERENCE_V, GAS_ADC_REFERENCE_V},
    errors::{ConversionError, ConversionResult},
};

/// Raw ADC code as read from the converter
pub type RawSample = u16;

/// Convert a raw sample to volts.
///
/// `resolution` is the level count (4096 for 12 bits), so a sample equal to
/// `resolution` maps exactly to `reference`.
pub fn sample_to_voltage(sample: RawSample, reference: f32, resolution: u16) -> f32 {
    (sample as f32 / resolution as f32) * reference
}

/// Reference voltage and resolution of one ADC channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdcConfig {
    /// Full-scale reference voltage (V)
    pub reference_voltage: f32,

    /// Number of discrete levels
    pub resolution: u16,
}

impl Default for AdcConfig {
    fn default() -> Self {
        Self::gas_default()
    }
}

impl AdcConfig {
    /// Create a channel config with custom reference and resolution
    pub fn new(reference_voltage: f32, resolution: u16) -> Self {
        Self { reference_voltage, resolution }
    }

    /// 5 V, 12-bit channel used by the MQ sensors
    pub fn gas_default() -> Self {
        Self::new(GAS_ADC_REFERENCE_V, ADC_RESOLUTION_12BIT)
    }

    /// 3.3 V, 12-bit channel used by the current sensor
    pub fn current_default() -> Self {
        Self::new(CURRENT_ADC_REFERENCE_V, ADC_RESOLUTION_12BIT)
    }

    /// Voltage of a raw sample on this channel
    pub fn voltage(&self, sample: RawSample) -> f32 {
        sample_to_voltage(sample, self.reference_voltage, self.resolution)
    }

    /// Reject a zero resolution or a non-positive reference
    pub fn validate(&self) -> ConversionResult<()> {
        if self.resolution == 0 {
            return Err(ConversionError::InvalidConfig {
                reason: "ADC resolution must be non-zero",
            });
        }
        require_positive(self.reference_voltage, "ADC reference voltage must be positive")
    }
}

/// Fail with `reason` unless `value` is finite and strictly positive
pub(crate) fn require_positive(value: f32, reason: &'static str) -> ConversionResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConversionError::InvalidConfig { reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sample_is_zero_volts() {
        assert_eq!(sample_to_voltage(0, 5.0, 4096), 0.0);
        assert_eq!(sample_to_voltage(0, 3.3, 1024), 0.0);
    }

    #[test]
    fn full_scale_is_reference() {
        assert_eq!(sample_to_voltage(4096, 5.0, 4096), 5.0);
        assert_eq!(sample_to_voltage(1024, 3.3, 1024), 3.3);
    }

    #[test]
    fn midscale() {
        assert_eq!(sample_to_voltage(2048, 5.0, 4096), 2.5);
        assert_eq!(AdcConfig::gas_default().voltage(2048), 2.5);
    }

    #[test]
    fn presets() {
        let gas = AdcConfig::gas_default();
        assert_eq!(gas.reference_voltage, 5.0);
        assert_eq!(gas.resolution, 4096);

        let current = AdcConfig::current_default();
        assert_eq!(current.reference_voltage, 3.3);
        assert_eq!(current.resolution, 4096);
    }

    #[test]
    fn validation() {
        assert!(AdcConfig::gas_default().validate().is_ok());
        assert!(matches!(
            AdcConfig::new(5.0, 0).validate(),
            Err(ConversionError::InvalidConfig { .. })
        ));
        assert!(AdcConfig::new(0.0, 4096).validate().is_err());
        assert!(AdcConfig::new(f32::NAN, 4096).validate().is_err());
    }
}
