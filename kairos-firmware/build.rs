//! Build script for kairos-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates kairos.toml and turns it into Rust constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KairosToml {
    timer: TimerSection,
    #[serde(default)]
    input: InputSection,
    #[serde(default, rename = "loop")]
    main_loop: LoopSection,
    #[serde(default)]
    clock: ClockSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TimerSection {
    epoch_anchor: i64,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct InputSection {
    hold_threshold_ms: u64,
    repeat: String,
}

impl Default for InputSection {
    fn default() -> Self {
        Self {
            hold_threshold_ms: 1000,
            repeat: "every_tick".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LoopSection {
    tick_interval_ms: u64,
}

impl Default for LoopSection {
    fn default() -> Self {
        Self {
            tick_interval_ms: 50,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ClockSection {
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl Default for ClockSection {
    fn default() -> Self {
        Self {
            year: 2023,
            month: 9,
            day: 16,
            hour: 14,
            minute: 12,
            second: 0,
        }
    }
}

fn main() {
    setup_linker();
    let config = load_config();
    validate_config(&config);
    generate_constants(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read and parse kairos.toml
fn load_config() -> KairosToml {
    println!("cargo:rerun-if-changed=kairos.toml");

    let config_path = Path::new("kairos.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: kairos.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a kairos.toml configuration file.         ║\n\
            ║  Please create one in the kairos-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read kairos.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid kairos.toml                                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check value ranges the parser cannot express
fn validate_config(config: &KairosToml) {
    let mut errors = Vec::new();

    if !(1..=10_000).contains(&config.input.hold_threshold_ms) {
        errors.push("[input] hold_threshold_ms must be 1-10000".to_string());
    }
    if !["every_tick", "on_press"].contains(&config.input.repeat.as_str()) {
        errors.push("[input] repeat must be 'every_tick' or 'on_press'".to_string());
    }
    if !(1..=1_000).contains(&config.main_loop.tick_interval_ms) {
        errors.push("[loop] tick_interval_ms must be 1-1000".to_string());
    }

    let clock = &config.clock;
    if !(1970..=4095).contains(&clock.year) {
        errors.push("[clock] year must be 1970-4095".to_string());
    }
    if !(1..=12).contains(&clock.month) {
        errors.push("[clock] month must be 1-12".to_string());
    } else {
        let max_day = DAYS_IN_MONTH[usize::from(clock.month - 1)];
        if !(1..=max_day).contains(&clock.day) {
            errors.push(format!(
                "[clock] day must be 1-{} for month {}",
                max_day, clock.month
            ));
        }
    }
    if clock.hour > 23 {
        errors.push("[clock] hour must be 0-23".to_string());
    }
    if clock.minute > 59 {
        errors.push("[clock] minute must be 0-59".to_string());
    }
    if clock.second > 59 {
        errors.push("[clock] second must be 0-59".to_string());
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in kairos.toml                     ║\n\
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

    println!("cargo:warning=kairos.toml validated successfully");
}

/// Write `kairos_config.rs` into OUT_DIR
fn generate_constants(config: &KairosToml) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let repeat = match config.input.repeat.as_str() {
        "on_press" => "OnPress",
        _ => "EveryTick",
    };
    let clock = &config.clock;

    let source = format!(
        "// Generated from kairos.toml by build.rs\n\
         pub const EPOCH_ANCHOR: i64 = {};\n\
         pub const HOLD_THRESHOLD_MS: u64 = {};\n\
         pub const TICK_INTERVAL_MS: u64 = {};\n\
         pub const REPEAT: kairos_core::RepeatMode = kairos_core::RepeatMode::{};\n\
         pub const INITIAL_CLOCK: (u16, u8, u8, u8, u8, u8) = ({}, {}, {}, {}, {}, {});\n",
        config.timer.epoch_anchor,
        config.input.hold_threshold_ms,
        config.main_loop.tick_interval_ms,
        repeat,
        clock.year,
        clock.month,
        clock.day,
        clock.hour,
        clock.minute,
        clock.second,
    );

    fs::write(out_dir.join("kairos_config.rs"), source).unwrap();
}
