//! Binary configuration encoding
//!
//! The firmware build script turns `marquee.toml` into postcard bytes; the
//! firmware decodes them at boot.

use super::types::{ConfigError, MarqueeConfig};

/// Upper bound on the encoded size of a `MarqueeConfig`
pub const MAX_ENCODED_SIZE: usize = 64;

/// Encode a configuration into `buf`, returning the used prefix
pub fn encode<'a>(config: &MarqueeConfig, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
    postcard::to_slice(config, buf).map_err(|_| ConfigError::Encode)
}

/// Decode and validate a configuration
pub fn decode(bytes: &[u8]) -> Result<MarqueeConfig, ConfigError> {
    let config: MarqueeConfig = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
    config.validate()?;
    Ok(config)
}
