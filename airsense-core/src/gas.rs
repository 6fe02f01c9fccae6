//! MQ-series gas sensor conversion
//!
//! ## Signal Chain
//!
//! ```text
//! raw sample --adc--> Vout --divider--> Rs --curve--> ppm --bands--> AirQuality
//! ```
//!
//! The sensing element and the load resistor RL form a divider across the
//! module supply, so the element resistance follows from the measured
//! output voltage:
//!
//! ```text
//! Rs = RL * (Vsupply / Vout - 1)
//! ```
//!
//! Concentration is the datasheet power-law fit over the ratio to the
//! baseline resistance R0:
//!
//! ```text
//! ppm = a * (Rs / R0) ^ b
//! ```
//!
//! `b` is negative for every MQ curve: lower resistance means more gas.
//!
//! ## Usage
//!
//! ```rust
//! use airsense_core::gas::GasSensor;
//!
//! let mq135 = GasSensor::mq135();
//! let reading = mq135.read(2048)?;
//! println!("{} ppm ({})", reading.ppm, reading.quality);
//! # Ok::<(), airsense_core::ConversionError>(())
//! ```

use core::fmt;

use crate::{
    adc::{require_positive, AdcConfig, RawSample},
    constants::gas::{
        MQ135_CLEAN_AIR_RATIO, MQ135_CURVE_COEFFICIENT, MQ135_CURVE_EXPONENT, MQ135_R0_KOHM,
        MQ4_CLEAN_AIR_RATIO, MQ4_CURVE_COEFFICIENT, MQ4_CURVE_EXPONENT, MQ4_R0_KOHM,
        MQ_LOAD_RESISTANCE_KOHM, SENSOR_SUPPLY_VOLTAGE,
    },
    errors::{ConversionError, ConversionResult},
    quality::{AirQuality, QualityThresholds},
};

/// Sensor resistance from the divider output voltage.
///
/// Unguarded: `voltage == 0.0` yields `+inf`. Use [`try_sensor_resistance`]
/// when the voltage comes from a live channel.
pub fn sensor_resistance(voltage: f32, load_resistance: f32, supply_voltage: f32) -> f32 {
    load_resistance * ((supply_voltage / voltage) - 1.0)
}

/// Sensor resistance, rejecting a zero, negative or non-finite voltage
pub fn try_sensor_resistance(
    voltage: f32,
    load_resistance: f32,
    supply_voltage: f32,
) -> ConversionResult<f32> {
    if !voltage.is_finite() {
        return Err(ConversionError::InvalidValue);
    }
    if voltage <= 0.0 {
        return Err(ConversionError::ZeroVoltage { voltage });
    }
    Ok(sensor_resistance(voltage, load_resistance, supply_voltage))
}

/// Power-law concentration curve `ppm = coefficient * ratio ^ exponent`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerLawCurve {
    /// Scale factor `a`
    pub coefficient: f32,

    /// Slope `b` on log-log axes
    pub exponent: f32,
}

impl PowerLawCurve {
    /// Create a curve from fitted constants
    pub fn new(coefficient: f32, exponent: f32) -> Self {
        Self { coefficient, exponent }
    }

    /// MQ-4 methane fit
    pub fn mq4() -> Self {
        Self::new(MQ4_CURVE_COEFFICIENT, MQ4_CURVE_EXPONENT)
    }

    /// MQ-135 CO2 fit
    pub fn mq135() -> Self {
        Self::new(MQ135_CURVE_COEFFICIENT, MQ135_CURVE_EXPONENT)
    }

    /// Concentration for resistance `rs` against baseline `r0`
    pub fn ppm(&self, rs: f32, r0: f32) -> f32 {
        self.coefficient * libm::powf(rs / r0, self.exponent)
    }
}

/// MQ-4 methane concentration with the stock R0
pub fn calculate_ppm_mq4(rs: f32) -> f32 {
    PowerLawCurve::mq4().ppm(rs, MQ4_R0_KOHM)
}

/// MQ-135 CO2 concentration with the stock R0
pub fn calculate_ppm_mq135(rs: f32) -> f32 {
    PowerLawCurve::mq135().ppm(rs, MQ135_R0_KOHM)
}

/// Which physical sensor a channel carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SensorKind {
    /// Methane / natural gas
    Mq4,
    /// Air quality (CO2, NH3, benzene)
    Mq135,
}

impl SensorKind {
    /// Label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mq4 => "MQ-4",
            Self::Mq135 => "MQ-135",
        }
    }

    /// Datasheet Rs/R0 ratio in clean air
    pub fn clean_air_ratio(&self) -> f32 {
        match self {
            Self::Mq4 => MQ4_CLEAN_AIR_RATIO,
            Self::Mq135 => MQ135_CLEAN_AIR_RATIO,
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calibration and wiring of one gas channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GasSensorConfig {
    /// Sensor on this channel
    pub kind: SensorKind,

    /// ADC the divider output is read through
    pub adc: AdcConfig,

    /// Load resistor RL (kOhm)
    pub load_resistance_kohm: f32,

    /// Divider supply voltage (V)
    pub supply_voltage: f32,

    /// Baseline resistance R0 (kOhm)
    pub r0_kohm: f32,

    /// Concentration curve
    pub curve: PowerLawCurve,

    /// Air quality bands
    pub thresholds: QualityThresholds,
}

impl GasSensorConfig {
    /// Stock MQ-4 module on a 5 V, 12-bit channel
    pub fn mq4() -> Self {
        Self {
            kind: SensorKind::Mq4,
            adc: AdcConfig::gas_default(),
            load_resistance_kohm: MQ_LOAD_RESISTANCE_KOHM,
            supply_voltage: SENSOR_SUPPLY_VOLTAGE,
            r0_kohm: MQ4_R0_KOHM,
            curve: PowerLawCurve::mq4(),
            thresholds: QualityThresholds::mq4(),
        }
    }

    /// Stock MQ-135 module on a 5 V, 12-bit channel
    pub fn mq135() -> Self {
        Self {
            kind: SensorKind::Mq135,
            adc: AdcConfig::gas_default(),
            load_resistance_kohm: MQ_LOAD_RESISTANCE_KOHM,
            supply_voltage: SENSOR_SUPPLY_VOLTAGE,
            r0_kohm: MQ135_R0_KOHM,
            curve: PowerLawCurve::mq135(),
            thresholds: QualityThresholds::mq135(),
        }
    }

    /// Check every parameter is inside its physical domain
    pub fn validate(&self) -> ConversionResult<()> {
        self.adc.validate()?;
        require_positive(self.load_resistance_kohm, "load resistance must be positive")?;
        require_positive(self.supply_voltage, "supply voltage must be positive")?;
        require_positive(self.r0_kohm, "R0 must be positive")?;
        require_positive(self.curve.coefficient, "curve coefficient must be positive")?;
        if !self.curve.exponent.is_finite() {
            return Err(ConversionError::InvalidConfig {
                reason: "curve exponent must be finite",
            });
        }
        self.thresholds.validate()
    }
}

/// One converted gas sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GasReading {
    /// Sensor the sample came from
    pub sensor: SensorKind,
    /// Raw ADC code
    pub raw: RawSample,
    /// Divider output (V)
    pub voltage: f32,
    /// Sensor resistance Rs (kOhm)
    pub resistance_kohm: f32,
    /// Gas concentration (ppm)
    pub ppm: f32,
    /// Air quality band
    pub quality: AirQuality,
}

/// A gas channel ready to convert samples
#[derive(Debug, Clone)]
pub struct GasSensor {
    config: GasSensorConfig,
}

impl GasSensor {
    /// Stock MQ-4
    pub fn mq4() -> Self {
        Self { config: GasSensorConfig::mq4() }
    }

    /// Stock MQ-135
    pub fn mq135() -> Self {
        Self { config: GasSensorConfig::mq135() }
    }

    /// Sensor with a custom configuration
    pub fn with_config(config: GasSensorConfig) -> ConversionResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &GasSensorConfig {
        &self.config
    }

    /// Run one raw sample through the whole chain
    pub fn read(&self, sample: RawSample) -> ConversionResult<GasReading> {
        let cfg = &self.config;

        let voltage = cfg.adc.voltage(sample);
        let resistance_kohm = try_sensor_resistance(
            voltage,
            cfg.load_resistance_kohm,
            cfg.supply_voltage,
        )
        .map_err(|e| {
            log_warn!("{}: sample {} rejected: {}", cfg.kind.label(), sample, e);
            e
        })?;

        let ppm = cfg.curve.ppm(resistance_kohm, cfg.r0_kohm);
        if !ppm.is_finite() {
            log_warn!("{}: Rs={} kOhm gives non-finite ppm", cfg.kind.label(), resistance_kohm);
            return Err(ConversionError::InvalidValue);
        }

        let quality = cfg.thresholds.classify(ppm);
        log_debug!(
            "{}: raw={} V={} Rs={} ppm={} quality={}",
            cfg.kind.label(), sample, voltage, resistance_kohm, ppm, quality.as_str()
        );

        Ok(GasReading {
            sensor: cfg.kind,
            raw: sample,
            voltage,
            resistance_kohm,
            ppm,
            quality,
        })
    }

    /// Derive R0 from a sample taken in clean air.
    ///
    /// `clean_air_ratio` is the datasheet Rs/R0 in clean air (see
    /// [`SensorKind::clean_air_ratio`]). Returns a new sensor; nothing is
    /// stored.
    pub fn calibrate_in_clean_air(
        &self,
        sample: RawSample,
        clean_air_ratio: f32,
    ) -> ConversionResult<Self> {
        require_positive(clean_air_ratio, "clean air ratio must be positive")?;

        let voltage = self.config.adc.voltage(sample);
        let rs = try_sensor_resistance(
            voltage,
            self.config.load_resistance_kohm,
            self.config.supply_voltage,
        )?;
        let r0_kohm = rs / clean_air_ratio;
        require_positive(r0_kohm, "calibrated R0 must be positive")?;

        log_debug!("{}: calibrated R0={} kOhm", self.config.kind.label(), r0_kohm);

        Ok(Self {
            config: GasSensorConfig { r0_kohm, ..self.config },
        })
    }
}
