//! Conversion engine for AirSense
//!
//! Turns raw ADC codes from an MQ-4 methane sensor, an MQ-135 air quality
//! sensor and an ACS712 current sensor into gas concentration, air quality
//! bands, RMS current and power.
//!
//! Key constraints:
//! - Pure conversions, no hidden state
//! - No heap allocation (sample windows use `heapless`)
//! - Acquisition is injected through [`SampleSource`]
//!
//! ```no_run
//! use airsense_core::{GasSensor, AirQuality};
//!
//! let mq4 = GasSensor::mq4();
//!
//! match mq4.read(1800) {
//!     Ok(reading) if reading.quality == AirQuality::Good => {}, // Clean air
//!     Ok(_) => {}, // Raise an alert
//!     Err(e) => {}, // Sensor line floating or shorted
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod adc;
pub mod constants;
pub mod current;
pub mod errors;
pub mod gas;
pub mod monitor;
pub mod quality;
pub mod source;

// Public API
pub use adc::{sample_to_voltage, AdcConfig, RawSample};
pub use current::{peak_to_peak, CurrentSensor, CurrentSensorConfig, PowerMeasurement};
pub use errors::{ConversionError, ConversionResult};
pub use gas::{
    calculate_ppm_mq135, calculate_ppm_mq4, sensor_resistance, try_sensor_resistance,
    GasReading, GasSensor, GasSensorConfig, PowerLawCurve, SensorKind,
};
pub use monitor::{Monitor, MonitorConfig, MonitorReport};
pub use quality::{classify, AirQuality, QualityThresholds};
pub use source::{ConstantSource, FixedSamples, SampleSource};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
