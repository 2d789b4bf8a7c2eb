use std::sync::Arc;

use anyhow::anyhow;
use esp32_nimble::enums::SecurityIOCap;
use esp32_nimble::utilities::mutex::Mutex;
use esp32_nimble::utilities::BleUuid;
use esp32_nimble::BLEDevice;
use esp32_nimble::{uuid128, BLECharacteristic, BLEServer, NimbleProperties};

use desk_gesture::GestureReport;

const SERVICE_UUID: BleUuid = uuid128!("fafafafa-fafa-fafa-fafa-fafafafafafa");
const GESTURE_CHARACTERISTIC_UUID: BleUuid = uuid128!("a3c87500-8ed3-4bdf-8a39-a01bebede295");

const DEVICE_NAME: &str = "Desk-Gesture";

/// Publishes gesture reports as JSON notifications.
pub struct GestureBle {
    server: &'static mut BLEServer,
    gesture_characteristic: Arc<Mutex<BLECharacteristic>>,
}

impl GestureBle {
    pub fn new() -> anyhow::Result<Self> {
        let ble_device = BLEDevice::take();
        ble_device
            .security()
            .set_auth(true, true, true)
            .set_io_cap(SecurityIOCap::NoInputNoOutput);

        BLEDevice::set_device_name(DEVICE_NAME)
            .map_err(|e| anyhow!("Failed to set BLE device name: {:?}", e))?;

        let server = ble_device.get_server();
        server
            .on_connect(|_| {
                ::log::info!("Client connected");
            })
            .on_disconnect(|_| {
                ::log::info!("Client disconnected");
                if let Err(e) = ble_device.get_advertising().start() {
                    ::log::error!("Failed to restart advertising: {:?}", e);
                }
            });
        let service = server.create_service(SERVICE_UUID);

        let gesture_characteristic = service.lock().create_characteristic(
            GESTURE_CHARACTERISTIC_UUID,
            NimbleProperties::READ | NimbleProperties::NOTIFY,
        );
        gesture_characteristic.lock().on_read(move |_, _| {
            ::log::info!("Read from gesture characteristic.");
        });

        ble_device
            .get_advertising()
            .name(DEVICE_NAME)
            .add_service_uuid(SERVICE_UUID)
            .scan_response(true)
            .start()
            .map_err(|e| anyhow!("Failed to start advertising: {:?}", e))?;

        Ok(Self {
            server,
            gesture_characteristic,
        })
    }

    pub fn connected(&self) -> bool {
        self.server.connected_count() > 0
    }

    pub fn publish(&mut self, report: &GestureReport) -> anyhow::Result<()> {
        let payload = report.to_json()?;
        ::log::info!("Notifying gesture characteristic: {}", payload);
        self.gesture_characteristic
            .lock()
            .set_value(payload.as_bytes())
            .notify();
        Ok(())
    }
}
