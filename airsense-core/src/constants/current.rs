//! Current Sensor and Mains Constants
//!
//! The current channel is an ACS712 hall-effect sensor clamped on a mains
//! conductor. Its output is an AC voltage centred on Vcc/2 whose amplitude
//! is proportional to the conductor current.

/// ACS712-05B sensitivity (mV per A).
///
/// 20A variant: 100 mV/A, 30A variant: 66 mV/A.
///
/// Source: Allegro ACS712 datasheet, Table "Characteristic Performance"
pub const ACS712_5A_SENSITIVITY_MV_PER_A: f32 = 185.0;

/// Zero-current offset subtracted from the RMS current (A).
///
/// Empirical: removes the noise floor seen with no load attached.
pub const ACS712_OFFSET_A: f32 = 0.3;

/// Ratio of RMS to peak amplitude for a pure sine (1/sqrt(2), truncated).
pub const SINE_RMS_FACTOR: f32 = 0.707;

/// Nominal mains line voltage (V RMS).
pub const LINE_VOLTAGE_V: f32 = 240.0;

/// Divisor applied to apparent power to estimate real power.
pub const POWER_FACTOR_DIVISOR: f32 = 1.2;

/// Samples per peak-to-peak window.
///
/// At ~20 kS/s this spans several 50 Hz cycles.
pub const DEFAULT_WINDOW_SIZE: usize = 1000;

/// Capacity of the fixed sample buffer.
pub const MAX_WINDOW_SIZE: usize = 1000;
