// Strip Writer - RMT-Implementierung des StripWriter Traits
//
// Schiebt komplette Frames über das RMT Peripheral auf den Strip.
// Die globale Helligkeit wird hier angewendet, direkt vor der Hardware.

use esp_core::{LedError, StripWriter, scale_brightness};
use rgb::RGB8;

use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use smart_leds_trait::SmartLedsWrite;

use crate::config::{STRIP_BRIGHTNESS, STRIP_LEN};

// Buffer-Größe: 3 Farben * 8 Bits pro Pixel + 1 Reset
pub const STRIP_RMT_BUFFER_SIZE: usize = STRIP_LEN * 24 + 1;

/// Real Hardware Strip Writer
///
/// Nutzt das ESP32 RMT Peripheral um WS2812-Strips anzusteuern.
///
/// Hinweis: Der Buffer muss 'static sein, daher wird er im Task erstellt
/// und als Parameter übergeben statt im Constructor allokiert.
pub struct RmtStripWriter<'a> {
    strip: SmartLedsAdapter<'a, STRIP_RMT_BUFFER_SIZE>,
}

impl<'a> RmtStripWriter<'a> {
    /// Erstellt einen neuen RmtStripWriter
    ///
    /// # Parameter
    /// - `data_pin`: GPIO Peripheral für die Strip-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(STRIP_LEN))
    pub fn new(
        data_pin: esp_hal::peripherals::GPIO2<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [esp_hal::rmt::PulseCode; STRIP_RMT_BUFFER_SIZE],
    ) -> Self {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> =
            Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz)).unwrap();

        // SmartLED Adapter erstellen
        let strip = SmartLedsAdapter::new(rmt.channel0, data_pin, buffer);

        Self { strip }
    }
}

impl<'a> StripWriter for RmtStripWriter<'a> {
    fn write(&mut self, pixels: &[RGB8]) -> Result<(), LedError> {
        self.strip
            .write(
                pixels
                    .iter()
                    .map(|pixel| scale_brightness(*pixel, STRIP_BRIGHTNESS)),
            )
            .map_err(|_| LedError::WriteFailed)
    }
}
