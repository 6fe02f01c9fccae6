//! Error Types for Sensor Conversion Failures
//!
//! The conversion formulas themselves are plain arithmetic and never fail;
//! these errors come from the checked entry points that sit in front of
//! them (`try_sensor_resistance`, `CurrentSensor::measure`, config
//! validation).
//!
//! Like the rest of the crate, errors stay small and `Copy`: no `String`,
//! only `&'static str` reasons, so they can be returned from the hot path
//! on a microcontroller without touching the heap.
//!
//! ## Error Categories
//!
//! ### Conversion Guards
//! - `ZeroVoltage`: the divider voltage is 0 V (or negative), so the load
//!   resistor formula would divide by zero
//! - `InvalidValue`: a formula produced NaN or infinity
//!
//! ### Sampling
//! - `EmptyWindow`: a peak-to-peak window without samples has no swing
//! - `WindowOverflow`: more samples requested than the buffer can hold
//!
//! ### Configuration
//! - `InvalidConfig`: a calibration or ADC parameter is out of its domain
//!
//! ```rust
//! use airsense_core::{ConversionError, gas::try_sensor_resistance};
//!
//! match try_sensor_resistance(0.0, 10.0, 5.0) {
//!     Err(ConversionError::ZeroVoltage { .. }) => {
//!         // Sensor line is floating or shorted to ground
//!     }
//!     Ok(_rs) => {}
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// Divider voltage is zero or negative, resistance is undefined
    #[error("Voltage {voltage}V is not positive, sensor resistance undefined")]
    ZeroVoltage {
        /// The voltage that was rejected
        voltage: f32,
    },

    /// Peak-to-peak window contained no samples
    #[error("Sample window is empty")]
    EmptyWindow,

    /// Requested window does not fit the sample buffer
    #[error("Sample window exceeds capacity {capacity}")]
    WindowOverflow {
        /// Maximum number of samples the buffer holds
        capacity: usize,
    },

    /// Configuration parameter outside its valid domain
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        reason: &'static str,
    },

    /// Result makes no physical sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConversionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::ZeroVoltage { voltage } =>
                defmt::write!(fmt, "Voltage {}V not positive", voltage),
            Self::EmptyWindow =>
                defmt::write!(fmt, "Empty sample window"),
            Self::WindowOverflow { capacity } =>
                defmt::write!(fmt, "Window exceeds {} samples", capacity),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid config: {}", reason),
            Self::InvalidValue =>
                defmt::write!(fmt, "Invalid value"),
        }
    }
}
