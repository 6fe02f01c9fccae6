//! One-shot monitoring cycle
//!
//! Ties the three channels together: one sample from each gas sensor and
//! one window from the current sensor, converted and collected into a
//! [`MonitorReport`]. A channel that fails keeps its error in the report;
//! the other channels are still converted.
//!
//! ```rust
//! use airsense_core::{monitor::Monitor, source::{ConstantSource, FixedSamples}};
//!
//! let monitor = Monitor::new();
//! let report = monitor.run(
//!     &mut ConstantSource::new(2048),
//!     &mut ConstantSource::new(2048),
//!     &mut FixedSamples::new(&[0, 4095, 2000]),
//! );
//! println!("{report}");
//! ```

use core::fmt;

use crate::{
    current::{CurrentSensor, CurrentSensorConfig, PowerMeasurement},
    errors::ConversionResult,
    gas::{GasReading, GasSensor, GasSensorConfig, SensorKind},
    source::SampleSource,
};

/// Configuration of every channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonitorConfig {
    /// Methane channel
    pub mq4: GasSensorConfig,
    /// Air quality channel
    pub mq135: GasSensorConfig,
    /// Current channel
    pub current: CurrentSensorConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            mq4: GasSensorConfig::mq4(),
            mq135: GasSensorConfig::mq135(),
            current: CurrentSensorConfig::acs712_5a(),
        }
    }
}

impl MonitorConfig {
    /// Validate all three channels
    pub fn validate(&self) -> ConversionResult<()> {
        self.mq4.validate()?;
        self.mq135.validate()?;
        self.current.validate()
    }
}

/// The three sensors of one station
#[derive(Debug, Clone)]
pub struct Monitor {
    mq4: GasSensor,
    mq135: GasSensor,
    current: CurrentSensor,
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Monitor {
    /// Stock MQ-4, MQ-135 and ACS712-05B
    pub fn new() -> Self {
        Self {
            mq4: GasSensor::mq4(),
            mq135: GasSensor::mq135(),
            current: CurrentSensor::acs712_5a(),
        }
    }

    /// Station with custom calibration
    pub fn with_config(config: MonitorConfig) -> ConversionResult<Self> {
        Ok(Self {
            mq4: GasSensor::with_config(config.mq4)?,
            mq135: GasSensor::with_config(config.mq135)?,
            current: CurrentSensor::with_config(config.current)?,
        })
    }

    /// Run one acquisition and conversion cycle
    pub fn run<A, B, C>(&self, mq4_source: &mut A, mq135_source: &mut B, current_source: &mut C) -> MonitorReport
    where
        A: SampleSource,
        B: SampleSource,
        C: SampleSource,
    {
        let mq4 = self.mq4.read(mq4_source.next_sample());
        let mq135 = self.mq135.read(mq135_source.next_sample());
        let power = self.current.sample(current_source);

        log_debug!(
            "cycle done: mq4 ok={} mq135 ok={} power ok={}",
            mq4.is_ok(), mq135.is_ok(), power.is_ok()
        );

        MonitorReport { mq4, mq135, power }
    }
}

/// Outcome of one cycle, per channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitorReport {
    /// Methane reading
    pub mq4: ConversionResult<GasReading>,
    /// Air quality reading
    pub mq135: ConversionResult<GasReading>,
    /// Current and power
    pub power: ConversionResult<PowerMeasurement>,
}

impl MonitorReport {
    /// True when every channel converted
    pub fn is_complete(&self) -> bool {
        self.mq4.is_ok() && self.mq135.is_ok() && self.power.is_ok()
    }
}

fn write_gas_line(
    f: &mut fmt::Formatter<'_>,
    kind: SensorKind,
    reading: &ConversionResult<GasReading>,
) -> fmt::Result {
    match reading {
        Ok(r) => write!(f, "{} PPM: {:.2} | Air Quality: {}", kind, r.ppm, r.quality),
        Err(e) => write!(f, "{} PPM: n/a | Air Quality: n/a ({})", kind, e),
    }
}

impl fmt::Display for MonitorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_gas_line(f, SensorKind::Mq4, &self.mq4)?;
        writeln!(f)?;
        write_gas_line(f, SensorKind::Mq135, &self.mq135)?;
        writeln!(f)?;
        match &self.power {
            Ok(p) => write!(
                f,
                "Voltage: {:.2}V | VRMS: {:.2}V | Amps RMS: {:.2}A | Watt: {:.2}W",
                p.peak_to_peak, p.rms_voltage, p.rms_current, p.watts
            ),
            Err(e) => write!(f, "Voltage: n/a ({})", e),
        }
    }
}
