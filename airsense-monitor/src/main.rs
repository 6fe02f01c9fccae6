//! AirSense station simulator
//!
//! Feeds random codes into the MQ-4, MQ-135 and ACS712 channels, runs one
//! conversion cycle and prints the report.
//!
//! ```bash
//! cargo run -p airsense-monitor
//! ```

mod random;

use airsense_core::{Monitor, MonitorConfig};
use log::{info, warn};

use random::RandomSource;

fn main() {
    let config = MonitorConfig::default();
    let monitor = Monitor::with_config(config).unwrap_or_else(|e| {
        warn!("invalid configuration ({e}), falling back to stock sensors");
        Monitor::new()
    });

    let mut mq4_source = RandomSource::from_entropy(config.mq4.adc.resolution);
    let mut mq135_source = RandomSource::from_entropy(config.mq135.adc.resolution);
    let mut current_source = RandomSource::from_entropy(config.current.adc.resolution);

    info!(
        "sampling {} current samples at {}V / {} levels",
        config.current.window_size,
        config.current.adc.reference_voltage,
        config.current.adc.resolution
    );

    let report = monitor.run(&mut mq4_source, &mut mq135_source, &mut current_source);
    if !report.is_complete() {
        warn!("one or more channels failed to convert");
    }

    println!("{report}");
}
