//! Integration tests for the conversion chain
//!
//! Covers each stage on its own and the full path from raw sample to report.

#![cfg(test)]

mod common;

use airsense_core::{
    calculate_ppm_mq4, classify, peak_to_peak, sample_to_voltage,
    constants::{gas::MQ4_R0_KOHM, current::MAX_WINDOW_SIZE},
    AirQuality, ConversionError, CurrentSensor, CurrentSensorConfig, FixedSamples,
    GasSensor, GasSensorConfig, Monitor, MonitorConfig, SensorKind,
};

use common::{assert_close, sine_window, RESOLUTION, WIDE_WINDOW};

#[test]
fn test_voltage_boundaries() {
    assert_eq!(sample_to_voltage(0, 5.0, RESOLUTION), 0.0);
    assert_eq!(sample_to_voltage(RESOLUTION, 5.0, RESOLUTION), 5.0);
    assert_eq!(sample_to_voltage(2048, 5.0, RESOLUTION), 2.5);
}

#[test]
fn test_quality_reference_cases() {
    assert_eq!(classify(250.0, 300.0, 600.0), AirQuality::Good);
    assert_eq!(classify(450.0, 300.0, 600.0), AirQuality::Moderate);
    assert_eq!(classify(700.0, 300.0, 600.0), AirQuality::Poor);
}

#[test]
fn test_peak_to_peak_reference_window() {
    assert_close(peak_to_peak(&WIDE_WINDOW, 3.3, RESOLUTION), 3.2992, 1e-4);
}

#[test]
fn test_mq4_at_baseline() {
    assert_eq!(calculate_ppm_mq4(MQ4_R0_KOHM), 1021.0);
}

#[test]
fn test_gas_quality_rises_with_output_voltage() {
    // Higher divider voltage means lower Rs, so more gas
    let sensor = GasSensor::mq4();
    let mut previous = 0.0;
    for sample in [1000, 2000, 3000, 4000] {
        let reading = sensor.read(sample).unwrap();
        assert!(reading.ppm > previous, "ppm not increasing at sample {}", sample);
        previous = reading.ppm;
    }

    assert_eq!(sensor.read(1000).unwrap().quality, AirQuality::Good);
    assert_eq!(sensor.read(4000).unwrap().quality, AirQuality::Poor);
}

#[test]
fn test_sine_current_measurement() {
    // 500-code amplitude on a 3.3 V / 4096 channel: Vpp ~= 0.8057 V
    let window = sine_window(500.0, 100, 1000);
    let m = CurrentSensor::acs712_5a().measure(&window).unwrap();

    assert_close(m.peak_to_peak, 1000.0 * 3.3 / 4096.0, 2e-3);
    assert_close(m.rms_voltage, m.peak_to_peak / 2.0 * 0.707, 1e-6);
    assert_close(m.rms_current, m.rms_voltage * 1000.0 / 185.0 - 0.3, 1e-5);
    assert_close(m.watts, m.rms_current * 200.0, 1e-3);
}

#[test]
fn test_window_capacity_is_enforced() {
    let config = CurrentSensorConfig {
        window_size: MAX_WINDOW_SIZE + 1,
        ..CurrentSensorConfig::acs712_5a()
    };
    assert_eq!(
        CurrentSensor::with_config(config).unwrap_err(),
        ConversionError::WindowOverflow { capacity: MAX_WINDOW_SIZE }
    );
}

#[test]
fn test_calibrated_monitor() {
    let mq135 = GasSensor::mq135()
        .calibrate_in_clean_air(2048, SensorKind::Mq135.clean_air_ratio())
        .unwrap();

    let config = MonitorConfig {
        mq135: *mq135.config(),
        ..MonitorConfig::default()
    };
    let monitor = Monitor::with_config(config).unwrap();

    let samples = [2048];
    let report = monitor.run(
        &mut FixedSamples::new(&samples),
        &mut FixedSamples::new(&samples),
        &mut FixedSamples::new(&WIDE_WINDOW),
    );

    assert!(report.is_complete());
    assert_eq!(report.mq135.unwrap().quality, AirQuality::Good);
}

#[test]
fn test_report_output_format() {
    let report = Monitor::new().run(
        &mut FixedSamples::new(&[2048]),
        &mut FixedSamples::new(&[2048]),
        &mut FixedSamples::new(&WIDE_WINDOW),
    );

    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("MQ-4 PPM: "));
    assert!(lines[0].ends_with("| Air Quality: Poor"));
    assert!(lines[1].starts_with("MQ-135 PPM: "));
    assert_eq!(
        lines[2],
        "Voltage: 3.30V | VRMS: 1.17V | Amps RMS: 6.00A | Watt: 1200.83W"
    );
}

#[test]
fn test_config_serializes() {
    let json = serde_json::to_string(&GasSensorConfig::mq4()).unwrap();
    assert!(json.contains("\"kind\":\"Mq4\""));
    assert!(json.contains("\"coefficient\":1021.0"));

    let config: MonitorConfig =
        serde_json::from_str(&serde_json::to_string(&MonitorConfig::default()).unwrap()).unwrap();
    assert_eq!(config, MonitorConfig::default());
}
