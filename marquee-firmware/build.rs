//! Build script for marquee-firmware
//!
//! - Passes the cortex-m-rt and defmt linker scripts
//! - Validates marquee.toml and embeds it as postcard bytes

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use marquee_core::config::{codec, MarqueeConfig};

fn main() {
    setup_linker();
    encode_config();
}

/// Linker arguments; memory.x comes from embassy-stm32's `memory-x` feature
fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse, validate and encode marquee.toml into OUT_DIR/marquee.bin
fn encode_config() {
    println!("cargo:rerun-if-changed=marquee.toml");

    let config_path = Path::new("marquee.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read marquee.toml", &[e.to_string()]),
    };

    let config: MarqueeConfig = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => fail(
            "Invalid marquee.toml",
            &e.to_string().lines().map(str::to_owned).collect::<Vec<_>>(),
        ),
    };

    if let Err(e) = config.validate() {
        fail("Invalid configuration in marquee.toml", &[format!("{:?}", e)]);
    }

    let mut buf = [0u8; codec::MAX_ENCODED_SIZE];
    let encoded = match codec::encode(&config, &mut buf) {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => fail("Failed to encode marquee.toml", &[format!("{:?}", e)]),
    };

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    if let Err(e) = fs::write(out_dir.join("marquee.bin"), &encoded) {
        fail("Failed to write marquee.bin", &[e.to_string()]);
    }

    println!("cargo:warning=marquee.toml validated successfully");
}

/// Abort the build with a boxed error message
fn fail(title: &str, lines: &[String]) -> ! {
    let body = lines
        .iter()
        .map(|line| {
            let truncated = if line.chars().count() > 62 {
                format!("{}...", line.chars().take(59).collect::<String>())
            } else {
                line.clone()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}
