//! MQ-Series Gas Sensor Calibration
//!
//! MQ sensors are tin-dioxide chemiresistors. The module forms a voltage
//! divider with a load resistor RL; the sensing element resistance Rs falls
//! as the target gas concentration rises. Datasheet sensitivity curves are
//! straight lines on log-log axes, so concentration is fitted as
//!
//! ```text
//! ppm = a * (Rs / R0) ^ b
//! ```
//!
//! where R0 is the sensor resistance at a known reference atmosphere.

/// Supply voltage across the sensor and load resistor divider (V).
///
/// Fixed by the module hardware, independent of the ADC reference.
pub const SENSOR_SUPPLY_VOLTAGE: f32 = 5.0;

/// Load resistor fitted on common MQ breakout boards (kOhm).
///
/// Source: Winsen/Hanwei MQ module schematics (10k trimmer default)
pub const MQ_LOAD_RESISTANCE_KOHM: f32 = 10.0;

// ===== MQ-4 (METHANE / CNG) =====

/// MQ-4 baseline resistance R0 (kOhm).
pub const MQ4_R0_KOHM: f32 = 9.83;

/// MQ-4 methane curve coefficient `a`.
///
/// Source: power-law fit of the MQ-4 datasheet CH4 curve
pub const MQ4_CURVE_COEFFICIENT: f32 = 1021.0;

/// MQ-4 methane curve exponent `b`.
pub const MQ4_CURVE_EXPONENT: f32 = -2.7887;

/// Rs/R0 ratio of the MQ-4 in clean air.
///
/// Source: MQ-4 datasheet sensitivity chart (air line)
pub const MQ4_CLEAN_AIR_RATIO: f32 = 4.4;

// ===== MQ-135 (AIR QUALITY / CO2) =====

/// MQ-135 baseline resistance R0 (kOhm).
pub const MQ135_R0_KOHM: f32 = 9.83;

/// MQ-135 CO2 curve coefficient `a`.
///
/// Source: GeorgK MQ135 library regression (116.6020682)
pub const MQ135_CURVE_COEFFICIENT: f32 = 116.602;

/// MQ-135 CO2 curve exponent `b`.
pub const MQ135_CURVE_EXPONENT: f32 = -2.769;

/// Rs/R0 ratio of the MQ-135 in clean air.
///
/// Source: MQ-135 datasheet sensitivity chart (air line)
pub const MQ135_CLEAN_AIR_RATIO: f32 = 3.6;
