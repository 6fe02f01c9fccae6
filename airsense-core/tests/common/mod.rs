//! Shared fixtures for integration tests
//!
//! - Sample windows with known peak-to-peak spread
//! - Float comparison with a tolerance
//! - A synthetic sine waveform as the current sensor would see it

#![allow(dead_code)]

use airsense_core::RawSample;

/// 12-bit resolution used by every stock channel
pub const RESOLUTION: u16 = 4096;

/// Window from the reference scenario: full-scale spread
pub const WIDE_WINDOW: [RawSample; 3] = [0, 4095, 2000];

/// Assert two floats agree within `tolerance`
pub fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

/// ACS712-style output: sine of `amplitude` codes around mid-scale.
///
/// `samples_per_cycle` controls how finely one mains cycle is sampled.
pub fn sine_window(amplitude: f32, samples_per_cycle: usize, len: usize) -> Vec<RawSample> {
    let midpoint = (RESOLUTION / 2) as f32;
    (0..len)
        .map(|i| {
            let phase = 2.0 * core::f32::consts::PI * i as f32 / samples_per_cycle as f32;
            (midpoint + amplitude * phase.sin()).round() as RawSample
        })
        .collect()
}
