//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für Strip-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Trait für den LED-Strip-Treiber
///
/// Abstrahiert die Ausgabe eines kompletten Frames auf einen
/// adressierbaren Strip (WS2812/WS2815). Das physische Signaling
/// (Bit-Timing, Farb-Reihenfolge) ist Sache der Implementierung.
///
/// # Implementierungen
/// - **Production:** `RmtStripWriter` (ESP32 RMT Peripheral)
/// - **Testing:** `MockStripWriter` (in-memory Mock)
pub trait StripWriter: Send {
    /// Schreibt einen vollständigen Frame auf den Strip
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn der Hardware-Zugriff
    /// fehlschlägt; der Render-Loop loggt und rendert den nächsten Frame.
    fn write(&mut self, pixels: &[RGB8]) -> Result<(), LedError>;
}
