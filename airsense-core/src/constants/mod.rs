//! Constants for AirSense Core
//!
//! Every calibration coefficient, sensitivity and fixed electrical value the
//! conversion formulas use lives here, with its unit in the name and its
//! origin in the doc comment. Config presets are built from these values;
//! the formulas themselves never contain literals.
//!
//! ## Organization
//!
//! - **ADC**: reference voltages and resolutions of the sampling front end
//! - **Gas**: MQ-series load resistor, baseline resistance, curve fits
//! - **Current**: ACS712 transfer function and mains parameters
//! - **Quality**: ppm band thresholds per gas sensor

/// Analog-to-digital converter parameters.
pub mod adc;

/// MQ-series gas sensor calibration.
pub mod gas;

/// Hall-effect current sensor and mains constants.
pub mod current;

/// Air quality band thresholds.
pub mod quality;

pub use adc::{ADC_RESOLUTION_12BIT, GAS_ADC_REFERENCE_V, CURRENT_ADC_REFERENCE_V};

pub use gas::{
    SENSOR_SUPPLY_VOLTAGE, MQ_LOAD_RESISTANCE_KOHM,
    MQ4_R0_KOHM, MQ4_CURVE_COEFFICIENT, MQ4_CURVE_EXPONENT,
    MQ135_R0_KOHM, MQ135_CURVE_COEFFICIENT, MQ135_CURVE_EXPONENT,
};

pub use current::{
    ACS712_5A_SENSITIVITY_MV_PER_A, ACS712_OFFSET_A, SINE_RMS_FACTOR,
    LINE_VOLTAGE_V, POWER_FACTOR_DIVISOR, DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE,
};

pub use quality::{
    MQ4_GOOD_THRESHOLD_PPM, MQ4_MODERATE_THRESHOLD_PPM,
    MQ135_GOOD_THRESHOLD_PPM, MQ135_MODERATE_THRESHOLD_PPM,
};
