//! Build script for octonix-firmware
//!
//! - Sets up linker arguments for cortex-m-rt and defmt
//! - Validates display.toml and generates the board constants from it

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use octonix_core::EngineConfig;
use octonix_hal::TargetAddress;

/// Accepted refresh rates; below this the display flickers, above it the
/// refresh context starves the control loop
const TICK_HZ_RANGE: std::ops::RangeInclusive<i64> = 500..=5000;

fn main() {
    setup_linker();
    let board = validate_config();
    generate_board_config(&board);
}

/// Set up linker arguments
fn setup_linker() {
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated contents of display.toml
struct BoardConfig {
    address: u8,
    general_call: bool,
    tick_hz: u32,
    engine: EngineConfig,
}

/// Validate display.toml at compile time
fn validate_config() -> BoardConfig {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a display.toml board configuration.       ║\n\
            ║  Please create one in the octonix-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let (address, general_call) = validate_bus(&config, &mut errors);
    let tick_hz = validate_refresh(&config, &mut errors);
    let engine = validate_engine(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid display configuration                            ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=display.toml validated successfully");

    BoardConfig {
        address,
        general_call,
        tick_hz,
        engine,
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validate the [bus] section
fn validate_bus(config: &toml::Value, errors: &mut Vec<String>) -> (u8, bool) {
    let Some(bus) = config.get("bus").and_then(|b| b.as_table()) else {
        errors.push("Missing [bus] section".to_string());
        return (0, false);
    };

    let address = match bus.get("address") {
        Some(toml::Value::Integer(a)) => match u8::try_from(*a).map(TargetAddress::new) {
            Ok(Ok(address)) => address.get(),
            Ok(Err(e)) => {
                errors.push(format!("[bus] address {}", e));
                0
            }
            Err(_) => {
                errors.push(format!("[bus] address {} is not a 7-bit address", a));
                0
            }
        },
        Some(_) => {
            errors.push("[bus] address must be an integer".to_string());
            0
        }
        None => {
            errors.push("[bus] missing 'address'".to_string());
            0
        }
    };

    let general_call = match bus.get("general_call") {
        Some(toml::Value::Boolean(g)) => *g,
        Some(_) => {
            errors.push("[bus] general_call must be true or false".to_string());
            false
        }
        None => false,
    };

    (address, general_call)
}

/// Validate the [refresh] section
fn validate_refresh(config: &toml::Value, errors: &mut Vec<String>) -> u32 {
    let Some(refresh) = config.get("refresh").and_then(|r| r.as_table()) else {
        errors.push("Missing [refresh] section".to_string());
        return 0;
    };

    match refresh.get("tick_hz") {
        Some(toml::Value::Integer(hz)) if TICK_HZ_RANGE.contains(hz) => *hz as u32,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!(
                "[refresh] tick_hz must be {}-{}",
                TICK_HZ_RANGE.start(),
                TICK_HZ_RANGE.end()
            ));
            0
        }
        Some(_) => {
            errors.push("[refresh] tick_hz must be an integer".to_string());
            0
        }
        None => {
            errors.push("[refresh] missing 'tick_hz'".to_string());
            0
        }
    }
}

/// Validate the [engine] section; every field is optional
fn validate_engine(config: &toml::Value, errors: &mut Vec<String>) -> EngineConfig {
    let Some(engine) = config.get("engine") else {
        return EngineConfig::DEFAULT;
    };

    let engine: EngineConfig = match engine.clone().try_into() {
        Ok(engine) => engine,
        Err(e) => {
            errors.push(format!("[engine] {}", e.to_string().trim()));
            return EngineConfig::DEFAULT;
        }
    };

    if let Err(e) = engine.validate() {
        errors.push(format!("[engine] {}", e));
    }
    engine
}

/// Write board_config.rs into OUT_DIR
fn generate_board_config(board: &BoardConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let engine = &board.engine;

    let source = format!(
        "// Generated by build.rs from display.toml\n\
        \n\
        /// I2C target setup\n\
        pub const BUS: octonix_hal::I2cTargetConfig = octonix_hal::I2cTargetConfig {{\n\
        \x20   address: match octonix_hal::TargetAddress::new({address:#04X}) {{\n\
        \x20       Ok(address) => address,\n\
        \x20       Err(_) => panic!(\"invalid bus address\"),\n\
        \x20   }},\n\
        \x20   general_call: {general_call},\n\
        }};\n\
        \n\
        /// Refresh ticks per second\n\
        pub const TICK_HZ: u64 = {tick_hz};\n\
        \n\
        /// Engine power-on configuration\n\
        pub const ENGINE: octonix_core::EngineConfig = octonix_core::EngineConfig {{\n\
        \x20   crossfade_steps: {crossfade_steps},\n\
        \x20   crossfade_rate_index: {crossfade_rate_index},\n\
        \x20   shuffle_rate: {shuffle_rate},\n\
        \x20   shuffle_seed: {shuffle_seed},\n\
        \x20   start_locked: {start_locked},\n\
        }};\n",
        address = board.address,
        general_call = board.general_call,
        tick_hz = board.tick_hz,
        crossfade_steps = engine.crossfade_steps,
        crossfade_rate_index = engine.crossfade_rate_index,
        shuffle_rate = engine.shuffle_rate,
        shuffle_seed = engine.shuffle_seed,
        start_locked = engine.start_locked,
    );

    fs::write(out_dir.join("board_config.rs"), source).unwrap();
}
