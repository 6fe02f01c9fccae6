//! Air Quality Band Thresholds
//!
//! A reading below the "good" threshold is Good, below the "moderate"
//! threshold is Moderate, anything else is Poor.

/// MQ-4 methane: upper bound of the Good band (ppm).
pub const MQ4_GOOD_THRESHOLD_PPM: f32 = 300.0;

/// MQ-4 methane: upper bound of the Moderate band (ppm).
pub const MQ4_MODERATE_THRESHOLD_PPM: f32 = 600.0;

/// MQ-135 CO2-equivalent: upper bound of the Good band (ppm).
///
/// Roughly outdoor background CO2.
pub const MQ135_GOOD_THRESHOLD_PPM: f32 = 400.0;

/// MQ-135 CO2-equivalent: upper bound of the Moderate band (ppm).
///
/// Source: ASHRAE 62.1 indoor CO2 guidance (~1000 ppm)
pub const MQ135_MODERATE_THRESHOLD_PPM: f32 = 1000.0;
