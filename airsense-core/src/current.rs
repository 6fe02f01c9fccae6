//! Peak-to-peak current measurement
//!
//! The ACS712 output is an AC waveform riding on a DC midpoint. Sampling a
//! window that spans several mains cycles and taking the spread between the
//! highest and lowest code removes the midpoint without knowing it:
//!
//! ```text
//! Vpp   = (max - min) * Vref / resolution
//! Vrms  = (Vpp / 2) * 0.707
//! Irms  = Vrms * 1000 / sensitivity_mV_per_A - offset
//! P     = Irms * Vline / pf_divisor
//! ```
//!
//! The RMS step assumes a sinusoidal load current.

use heapless::Vec;

use crate::{
    adc::{require_positive, AdcConfig, RawSample},
    constants::current::{
        ACS712_5A_SENSITIVITY_MV_PER_A, ACS712_OFFSET_A, DEFAULT_WINDOW_SIZE, LINE_VOLTAGE_V,
        MAX_WINDOW_SIZE, POWER_FACTOR_DIVISOR, SINE_RMS_FACTOR,
    },
    errors::{ConversionError, ConversionResult},
    source::SampleSource,
};

/// Fixed-capacity buffer holding one sampling window
pub type SampleWindow = Vec<RawSample, MAX_WINDOW_SIZE>;

/// Voltage swing across a window of samples.
///
/// Scans once with the running minimum seeded at `resolution` and the
/// maximum at 0. An empty slice leaves both seeds in place and returns
/// `-reference`.
pub fn peak_to_peak(samples: &[RawSample], reference: f32, resolution: u16) -> f32 {
    let mut max_value: RawSample = 0;
    let mut min_value: RawSample = resolution;

    for &sample in samples {
        if sample > max_value {
            max_value = sample;
        }
        if sample < min_value {
            min_value = sample;
        }
    }

    ((max_value as f32 - min_value as f32) * reference) / resolution as f32
}

/// RMS of a sine with the given peak-to-peak swing
pub fn rms_voltage(peak_to_peak: f32, rms_factor: f32) -> f32 {
    (peak_to_peak / 2.0) * rms_factor
}

/// Conductor current from the sensor's RMS output voltage
pub fn rms_current(rms_voltage: f32, sensitivity_mv_per_amp: f32, offset_amps: f32) -> f32 {
    (rms_voltage * 1000.0 / sensitivity_mv_per_amp) - offset_amps
}

/// Estimated real power drawn at the given line voltage
pub fn power_watts(rms_current: f32, line_voltage: f32, power_factor_divisor: f32) -> f32 {
    rms_current * line_voltage / power_factor_divisor
}

/// Transfer function and mains parameters of the current channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrentSensorConfig {
    /// ADC the sensor output is read through
    pub adc: AdcConfig,

    /// Sensor sensitivity (mV per A)
    pub sensitivity_mv_per_amp: f32,

    /// Zero-load offset subtracted from RMS current (A)
    pub offset_amps: f32,

    /// RMS-to-peak ratio of the expected waveform
    pub rms_factor: f32,

    /// Mains voltage (V RMS)
    pub line_voltage: f32,

    /// Divisor from apparent to real power
    pub power_factor_divisor: f32,

    /// Samples taken per measurement
    pub window_size: usize,
}

impl Default for CurrentSensorConfig {
    fn default() -> Self {
        Self::acs712_5a()
    }
}

impl CurrentSensorConfig {
    /// ACS712-05B on a 3.3 V, 12-bit channel, 240 V mains
    pub fn acs712_5a() -> Self {
        Self {
            adc: AdcConfig::current_default(),
            sensitivity_mv_per_amp: ACS712_5A_SENSITIVITY_MV_PER_A,
            offset_amps: ACS712_OFFSET_A,
            rms_factor: SINE_RMS_FACTOR,
            line_voltage: LINE_VOLTAGE_V,
            power_factor_divisor: POWER_FACTOR_DIVISOR,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    /// Check the transfer function and window are usable
    pub fn validate(&self) -> ConversionResult<()> {
        self.adc.validate()?;
        require_positive(self.sensitivity_mv_per_amp, "sensitivity must be positive")?;
        require_positive(self.rms_factor, "RMS factor must be positive")?;
        require_positive(self.line_voltage, "line voltage must be positive")?;
        require_positive(self.power_factor_divisor, "power factor divisor must be positive")?;
        if !self.offset_amps.is_finite() {
            return Err(ConversionError::InvalidConfig {
                reason: "current offset must be finite",
            });
        }
        if self.window_size == 0 {
            return Err(ConversionError::InvalidConfig {
                reason: "window size must be non-zero",
            });
        }
        if self.window_size > MAX_WINDOW_SIZE {
            return Err(ConversionError::WindowOverflow { capacity: MAX_WINDOW_SIZE });
        }
        Ok(())
    }
}

/// Quantities derived from one sampling window
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerMeasurement {
    /// Peak-to-peak sensor output (V)
    pub peak_to_peak: f32,
    /// RMS sensor output (V)
    pub rms_voltage: f32,
    /// RMS conductor current (A)
    pub rms_current: f32,
    /// Estimated power (W)
    pub watts: f32,
}

impl PowerMeasurement {
    /// Derive RMS voltage, current and power from a peak-to-peak swing
    pub fn from_peak_to_peak(peak_to_peak: f32, config: &CurrentSensorConfig) -> Self {
        let rms_voltage = rms_voltage(peak_to_peak, config.rms_factor);
        let rms_current = rms_current(
            rms_voltage,
            config.sensitivity_mv_per_amp,
            config.offset_amps,
        );
        let watts = power_watts(rms_current, config.line_voltage, config.power_factor_divisor);

        Self { peak_to_peak, rms_voltage, rms_current, watts }
    }
}

/// A current channel ready to measure windows
#[derive(Debug, Clone, Default)]
pub struct CurrentSensor {
    config: CurrentSensorConfig,
}

impl CurrentSensor {
    /// Stock ACS712-05B
    pub fn acs712_5a() -> Self {
        Self { config: CurrentSensorConfig::acs712_5a() }
    }

    /// Sensor with a custom configuration
    pub fn with_config(config: CurrentSensorConfig) -> ConversionResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &CurrentSensorConfig {
        &self.config
    }

    /// Measure a window that was already captured
    pub fn measure(&self, samples: &[RawSample]) -> ConversionResult<PowerMeasurement> {
        if samples.is_empty() {
            log_warn!("current: empty sample window");
            return Err(ConversionError::EmptyWindow);
        }

        let adc = &self.config.adc;
        let vpp = peak_to_peak(samples, adc.reference_voltage, adc.resolution);
        let measurement = PowerMeasurement::from_peak_to_peak(vpp, &self.config);

        log_debug!(
            "current: n={} Vpp={} Vrms={} Irms={} P={}",
            samples.len(), measurement.peak_to_peak, measurement.rms_voltage,
            measurement.rms_current, measurement.watts
        );

        Ok(measurement)
    }

    /// Capture `window_size` samples from `source` and measure them
    pub fn sample<S: SampleSource>(
        &self,
        source: &mut S,
    ) -> ConversionResult<PowerMeasurement> {
        let window: SampleWindow = source.fill_window(self.config.window_size)?;
        self.measure(&window)
    }
}
