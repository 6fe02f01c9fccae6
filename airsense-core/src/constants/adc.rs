//! ADC Front-End Parameters
//!
//! Both gas sensors sit on a 5 V divider read by a 12-bit converter; the
//! current sensor output goes through a 3.3 V converter of the same width.

/// Number of discrete levels of a 12-bit converter.
///
/// Raw samples span `0..=4095`. Formulas divide by the level count, not by
/// the maximum code, so a full-scale sample maps to just under the reference.
///
/// Source: ESP32 / STM32 / Arduino Due ADC datasheets
pub const ADC_RESOLUTION_12BIT: u16 = 4096;

/// Reference voltage used for the gas sensor channels (V).
///
/// MQ modules are powered from 5 V and their analog output swings rail to
/// rail.
pub const GAS_ADC_REFERENCE_V: f32 = 5.0;

/// Reference voltage used for the current sensor channel (V).
pub const CURRENT_ADC_REFERENCE_V: f32 = 3.3;
