// Strip Task - Render-Loop für den LED-Strip
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_hal_smartled::smart_led_buffer;
use rgb::RGB8;

use crate::config::{IDLE_FRAME_DELAY_MS, RMT_CLOCK_MHZ, STRIP_LEN};
use crate::hal::RmtStripWriter;
use crate::{CommandReceiver, RenderPhase, StripState, StripWriter, render_frame};

/// Render-Loop - Testbare Steuerungs-Logik ohne Hardware-Abhängigkeit
///
/// Eine Iteration = ein Tick:
/// 1. Frame für den aktuellen Modus rendern und an den Strip schieben
/// 2. Angesammelte Kommandos vom Channel holen und anwenden (non-blocking)
/// 3. Frame-Delay abwarten (Basis-Kadenz oder Animations-Delay)
///
/// Das Delay in Schritt 3 ist der einzige Suspension-Point: ein Kommando,
/// das währenddessen eintrifft, wird erst mit der nächsten Iteration
/// sichtbar. Zustand und Phase gehören exklusiv diesem Task - kein Locking.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `W: StripWriter` ermöglicht:
/// - Real Hardware (RmtStripWriter) im Production-Code
/// - Mock Implementation (MockStripWriter) in Host-Tests
pub async fn strip_render_logic<W: StripWriter>(mut strip: W, command_receiver: CommandReceiver) {
    // Startzustand: Off, Chase-Farbe Blau, 20 ms Tick-Delay
    let mut state = StripState::new();
    let mut phase = RenderPhase::new();
    let mut frame = [RGB8::default(); STRIP_LEN];

    info!("Strip: Render-Loop gestartet ({} Pixel)", STRIP_LEN);

    loop {
        let delay = render_frame(&state, &mut phase, &mut frame);

        if strip.write(&frame).is_err() {
            error!("Strip: Frame-Write fehlgeschlagen");
        }

        // Höchstens die seit dem letzten Tick angekommenen Kommandos anwenden
        while let Ok(command) = command_receiver.try_receive() {
            info!("Strip: Kommando {}", command);
            state.apply(command);
        }

        let delay_ms = delay.map_or(IDLE_FRAME_DELAY_MS, u64::from);
        Timer::after(Duration::from_millis(delay_ms)).await;
    }
}

/// Strip Task - Embassy Task für parallele Ausführung
///
/// Übernimmt die Hardware-Initialisierung und ruft dann die testbare
/// `strip_render_logic()` Funktion auf.
///
/// # Parameter
/// - `data_pin`: GPIO2 Peripheral für die Strip-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `command_receiver`: Channel Receiver für dekodierte Kommandos
#[embassy_executor::task]
pub async fn strip_render_task(
    data_pin: esp_hal::peripherals::GPIO2<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    command_receiver: CommandReceiver,
) {
    // Buffer für SmartLED-Daten (STRIP_LEN Pixel)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(STRIP_LEN);

    // Hardware initialisieren: RmtStripWriter kapselt RMT + SmartLED
    let strip = RmtStripWriter::new(data_pin, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);

    strip_render_logic(strip, command_receiver).await;
}
