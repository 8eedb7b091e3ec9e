//! Kairos - Pico Display Timer & Clock Firmware
//!
//! Shows the live RTC clock above the time elapsed since (or remaining
//! until) a fixed moment, with button-driven editing of the RTC date and
//! time.
//!
//! Named after the Greek "kairos" meaning "the right moment".

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use kairos_core::input::InputPoller;
use kairos_core::Controller;
use kairos_hal_rp2040::gpio::GpioInput;
use kairos_hal_rp2040::pins::PinRole;
use kairos_hal_rp2040::rtc::PicoRtc;

mod config;
mod display;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Kairos firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");
    for role in PinRole::ALL {
        debug!("{} on GPIO{}", role, role.gpio());
    }

    let timer_config = config::timer_config();
    let controller = match Controller::new(timer_config) {
        Ok(controller) => controller,
        Err(e) => defmt::panic!("Invalid configuration: {}", e),
    };
    info!(
        "Config: anchor={}, hold={}ms, tick={}ms, repeat={}",
        timer_config.epoch_anchor,
        timer_config.hold_threshold_ms,
        timer_config.tick_interval_ms,
        timer_config.repeat
    );

    // The RTC loses its value without power; seed it from the config
    let mut rtc = PicoRtc::new(p.RTC);
    match rtc.start_if_stopped(&timer_config.initial_clock.to_datetime()) {
        Ok(true) => info!("RTC was stopped, started at configured clock"),
        Ok(false) => info!("RTC already running"),
        Err(e) => warn!("RTC start failed: {}", e),
    }

    // Buttons short to ground when pressed
    let buttons = InputPoller::new([
        GpioInput::pull_up(p.PIN_12),
        GpioInput::pull_up(p.PIN_13),
        GpioInput::pull_up(p.PIN_14),
        GpioInput::pull_up(p.PIN_15),
    ]);

    let surface = display::init(display::DisplayPins {
        spi: p.SPI0,
        sck: p.PIN_18,
        mosi: p.PIN_19,
        cs: p.PIN_17,
        dc: p.PIN_16,
        backlight: p.PIN_20,
    });

    spawner.spawn(unwrap!(tasks::ui_task(controller, buttons, rtc, surface)));

    info!("All tasks spawned");
}
