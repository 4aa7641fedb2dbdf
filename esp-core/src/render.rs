//! Renderer: Mode-State → Pixel-Buffer
//!
//! Erzeugt pro Tick genau einen Frame für den ganzen Strip und meldet
//! das Delay, das der Render-Loop danach einhalten soll. Pure Logic,
//! keine Hardware-Dependencies (testbar!).

use rgb::RGB8;
use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::types::{LedMode, StripState};

/// Länge des Lauflicht-Blocks der Loading-Animation (Pixel)
pub const CHASE_RUN_LENGTH: usize = 5;

/// Hue-Schrittweite pro Pixel im Rainbow-Modus
pub const RAINBOW_HUE_STEP: u8 = 7;

/// Frame-Delay des Rainbow-Modus in Millisekunden
pub const RAINBOW_FRAME_DELAY_MS: u32 = 10;

/// Animations-Phase des Renderers
///
/// Interne Tick-Zähler, für Clients nicht sichtbar:
/// - `chase_pos` rotiert in `[0, strip_len)`, ein Schritt pro Frame
/// - `hue` rotiert in `[0, 255]`, ein Schritt pro Frame
///
/// Wird nur beim Prozess-Start zurückgesetzt; ein Reset-Kommando
/// existiert nicht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderPhase {
    chase_pos: usize,
    hue: u8,
}

impl RenderPhase {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Rendert einen Frame für den aktuellen Modus
///
/// Füllt `pixels` komplett neu und rückt bei animierten Modi die Phase um
/// einen Tick vor. Rückgabe ist das Animations-Delay in Millisekunden;
/// `None` bei statischen Modi (der Loop nutzt dann seine Basis-Kadenz).
///
/// Ein Modus-Wechsel wirkt ab dem nächsten Frame, ohne Übergangs-Animation.
pub fn render_frame(
    state: &StripState,
    phase: &mut RenderPhase,
    pixels: &mut [RGB8],
) -> Option<u32> {
    match state.mode {
        LedMode::Off => {
            pixels.fill(RGB8::default());
            None
        }
        LedMode::SolidRed
        | LedMode::SolidGreen
        | LedMode::SolidBlue
        | LedMode::SolidPurple
        | LedMode::SolidPink => {
            // solid_color() liefert für diese Arme immer eine Farbe
            pixels.fill(state.mode.solid_color().unwrap_or_default());
            None
        }
        LedMode::Rainbow => {
            // Hue-Verlauf ab der rotierenden Phase, RAINBOW_HUE_STEP pro
            // Pixel - der ganze Strip zeigt ein wanderndes Regenbogen-Band
            for (i, pixel) in pixels.iter_mut().enumerate() {
                let hue = phase
                    .hue
                    .wrapping_add(((i * RAINBOW_HUE_STEP as usize) % 256) as u8);
                *pixel = hsv2rgb(Hsv {
                    hue,
                    sat: 255,
                    val: 255,
                });
            }
            phase.hue = phase.hue.wrapping_add(1);
            Some(RAINBOW_FRAME_DELAY_MS)
        }
        LedMode::Loading => {
            pixels.fill(RGB8::default());
            if !pixels.is_empty() {
                // Der Block wickelt am Strip-Ende auf den Anfang um; bei
                // Strips kürzer als CHASE_RUN_LENGTH überlappt er sich selbst
                for offset in 0..CHASE_RUN_LENGTH {
                    let index = (phase.chase_pos + offset) % pixels.len();
                    pixels[index] = state.chase.color;
                }
                phase.chase_pos = (phase.chase_pos + 1) % pixels.len();
            }
            // Negatives Delay ist nicht abbildbar - wirkt wie 0 ms
            Some(state.chase.speed_ms.max(0) as u32)
        }
    }
}

/// Globale Helligkeits-Skalierung eines Pixels
///
/// FastLED-scale8-Formel `(v * (b + 1)) >> 8`: Helligkeit 255 ist die
/// Identität, 0 ist Schwarz. Wird vom Strip-Writer auf jeden Pixel
/// angewendet, bevor der Frame an die Hardware geht.
#[inline]
pub fn scale_brightness(color: RGB8, brightness: u8) -> RGB8 {
    let scale = u16::from(brightness) + 1;
    RGB8 {
        r: ((u16::from(color.r) * scale) >> 8) as u8,
        g: ((u16::from(color.g) * scale) >> 8) as u8,
        b: ((u16::from(color.b) * scale) >> 8) as u8,
    }
}
