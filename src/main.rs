use std::sync::mpsc::sync_channel;
use std::time::Instant;

use anyhow::Context;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_svc::timer::EspTimerService;

use desk_gesture::{timing, ChannelSink, Dispatcher, Gesture, PinPair, Reporter};

mod ble;

// Gestures arrive at most every 50 ms; the BLE side drains them much faster.
const GESTURE_QUEUE_SIZE: usize = 8;

fn main() -> anyhow::Result<()> {
    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    let peripherals = Peripherals::take().context("Peripherals already taken")?;

    // Both buttons short their line to ground.
    let mut up = PinDriver::input(peripherals.pins.gpio13)?;
    up.set_pull(Pull::Up)?;
    let mut down = PinDriver::input(peripherals.pins.gpio12)?;
    down.set_pull(Pull::Up)?;
    let mut buttons = PinPair::new(up, down);

    let (gesture_tx, gesture_rx) = sync_channel::<Gesture>(GESTURE_QUEUE_SIZE);
    let mut dispatcher = Dispatcher::new(ChannelSink::new(gesture_tx));

    let timer_service = EspTimerService::new()?;
    let tick_timer = timer_service.timer(move || {
        if let Err(e) = dispatcher.on_tick(&mut buttons) {
            ::log::error!("Failed to sample buttons: {:?}", e);
        }
    })?;
    tick_timer.every(timing::tick_period())?;

    ::log::info!(
        "Polling buttons at {} Hz, debounced tick every {} ms",
        timing::TICK_RATE.0,
        timing::DEBOUNCED_TICK_PERIOD.0
    );

    let mut ble = ble::GestureBle::new()?;
    let mut reporter = Reporter::new();
    let boot = Instant::now();

    loop {
        let gesture = gesture_rx.recv().context("Button timer stopped")?;
        let report = reporter.report(gesture, boot.elapsed());
        ::log::info!("Gesture {} (#{})", gesture, report.sequence);

        if ble.connected() {
            ble.publish(&report)?;
        }
    }
}
