//! UI loop task
//!
//! One tick per period: sample buttons, let the controller read the RTC,
//! render and commit, then log what changed.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};
use heapless::Vec;

use kairos_core::input::InputPoller;
use kairos_core::time::format_datetime;
use kairos_core::{Controller, HardwareFault, TickReport};
use kairos_hal_rp2040::gpio::GpioInput;
use kairos_hal_rp2040::rtc::PicoRtc;

use crate::display::Surface;

/// Buttons A, B, X, Y
pub type Buttons = InputPoller<GpioInput<'static>>;

#[embassy_executor::task]
pub async fn ui_task(
    mut controller: Controller,
    buttons: Buttons,
    mut rtc: PicoRtc<'static>,
    mut surface: Surface,
) {
    info!("UI task started");

    let mut ticker = Ticker::every(Duration::from_millis(controller.config().tick_interval_ms));
    let start = Instant::now();
    let mut last_faults: Vec<HardwareFault, 3> = Vec::new();

    loop {
        let now_ms = start.elapsed().as_millis();
        let levels = buttons.poll();

        let report = controller.tick(now_ms, levels, &mut rtc, &mut surface);
        log_report(&report, &last_faults);
        last_faults = report.faults;

        ticker.next().await;
    }
}

/// Log transitions and commits, and faults only when they start or clear
fn log_report(report: &TickReport, last_faults: &Vec<HardwareFault, 3>) {
    if let Some(event) = report.event {
        info!("{} -> {}", event, report.mode);
    }
    if let Some(datetime) = &report.committed {
        info!(
            "RTC set to {} ({})",
            format_datetime(datetime).as_str(),
            datetime.weekday.abbreviation()
        );
    }
    if report.faults != *last_faults {
        if report.faults.is_empty() {
            info!("Hardware recovered");
        } else {
            warn!("Hardware fault: {}", report.faults.as_slice());
        }
    }
}
