//! Configuration loading
//!
//! `build.rs` validates marquee.toml and encodes it with postcard; the bytes
//! are compiled into the image and decoded here at boot.

use defmt::*;

use marquee_core::config::{codec, MarqueeConfig};

/// Encoded marquee.toml
static EMBEDDED_CONFIG: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/marquee.bin"));

/// Decode the embedded configuration, falling back to defaults
pub fn load() -> MarqueeConfig {
    match codec::decode(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Loaded embedded configuration ({} bytes)", EMBEDDED_CONFIG.len());
            log_config_summary(&config);
            config
        }
        Err(e) => {
            // Only reachable if build.rs and the firmware disagree on the format
            error!("Failed to decode embedded config: {:?}", e);
            warn!("Using default configuration");
            MarqueeConfig::default()
        }
    }
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &MarqueeConfig) {
    debug!(
        "  display {}x{} at 0x{:02x}",
        config.display.cols, config.display.rows, config.display.i2c_address
    );
    debug!(
        "  mode {}, shift every {} ms",
        config.render.initial_mode.label(),
        config.render.shift_interval_ms
    );
    debug!("  button sampled every {} ms", config.button.debounce_ms);
    debug!("  uart {} baud", config.serial.baudrate);
}
