//! Core Types für die LED-Strip-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Default-Farbe der Loading-Animation (Blau)
pub const DEFAULT_CHASE_COLOR: RGB8 = RGB8 { r: 0, g: 0, b: 255 };

/// Default-Tick-Delay der Loading-Animation in Millisekunden
pub const DEFAULT_CHASE_SPEED_MS: i32 = 20;

/// Leucht-Modus des LED-Strips
///
/// Genau ein Modus ist zu jedem Zeitpunkt aktiv. Die Auswahl erfolgt
/// über Text-Kommandos (siehe [`crate::command::parse_command`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedMode {
    /// Alle Pixel aus
    #[default]
    Off,
    SolidRed,
    SolidGreen,
    SolidBlue,
    SolidPurple,
    SolidPink,
    /// Wandernder Regenbogen-Verlauf über den ganzen Strip
    Rainbow,
    /// "Loading"-Lauflicht: kurzer Pixel-Block wandert zyklisch
    Loading,
}

impl LedMode {
    /// Feste Farbe der Solid-Modi
    ///
    /// Farbwerte entsprechen den HTML-Farbkonstanten (Pink = DeepPink).
    /// `None` für Off und die animierten Modi.
    pub const fn solid_color(self) -> Option<RGB8> {
        match self {
            LedMode::SolidRed => Some(RGB8 { r: 255, g: 0, b: 0 }),
            LedMode::SolidGreen => Some(RGB8 { r: 0, g: 128, b: 0 }),
            LedMode::SolidBlue => Some(RGB8 { r: 0, g: 0, b: 255 }),
            LedMode::SolidPurple => Some(RGB8 { r: 128, g: 0, b: 128 }),
            LedMode::SolidPink => Some(RGB8 {
                r: 255,
                g: 20,
                b: 147,
            }),
            LedMode::Off | LedMode::Rainbow | LedMode::Loading => None,
        }
    }

    /// Kommando-Keyword des Modus (für Logging)
    pub const fn name(self) -> &'static str {
        match self {
            LedMode::Off => "none",
            LedMode::SolidRed => "red",
            LedMode::SolidGreen => "green",
            LedMode::SolidBlue => "blue",
            LedMode::SolidPurple => "purple",
            LedMode::SolidPink => "pink",
            LedMode::Rainbow => "rainbow",
            LedMode::Loading => "loading",
        }
    }
}

/// Einstellungen der Loading-Animation
///
/// Unabhängig vom aktiven Modus: ein Wechsel weg von Loading und zurück
/// setzt Farbe und Geschwindigkeit NICHT zurück.
///
/// `speed_ms` ist bewusst `i32`: der Parser übernimmt negative Werte
/// unverändert (keine Clamping-Policy, siehe [`crate::command`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChaseSettings {
    pub color: RGB8,
    pub speed_ms: i32,
}

impl Default for ChaseSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_CHASE_COLOR,
            speed_ms: DEFAULT_CHASE_SPEED_MS,
        }
    }
}

/// Dekodiertes Kommando vom Funk-Client oder der seriellen Konsole
///
/// Jeder Input-Text ergibt genau ein Kommando - die Dekodierung ist total
/// und kennt keinen Fehlerfall (siehe [`crate::command::parse_command`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Modus wechseln (z.B. "red", "rainbow", "none")
    SetMode(LedMode),
    /// Tick-Delay der Loading-Animation setzen ("s,<n>")
    SetSpeed(i32),
    /// Farbe der Loading-Animation setzen ("c,<R>,<G>,<B>")
    SetColor(RGB8),
    /// Leerer oder unvollständiger Input - Zustand bleibt unverändert
    NoOp,
    /// Unbekanntes Kommando - Zustand bleibt unverändert
    Unrecognized,
}

/// Zustand der Strip-Steuerung
///
/// Wird einmal beim Start erstellt und lebt für die Prozess-Lebensdauer.
/// Der Render-Loop besitzt den Zustand exklusiv - kein globaler Singleton,
/// kein Locking nötig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StripState {
    pub mode: LedMode,
    pub chase: ChaseSettings,
}

impl StripState {
    /// Startzustand: Off, Chase-Farbe Blau, 20 ms Tick-Delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Wendet ein dekodiertes Kommando an
    ///
    /// Total: jedes Kommando ersetzt genau ein Feld, `NoOp`/`Unrecognized`
    /// ändern nichts. Keine Teil-Mutation - last-write-wins pro Feld.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetMode(mode) => self.mode = mode,
            Command::SetSpeed(speed_ms) => self.chase.speed_ms = speed_ms,
            Command::SetColor(color) => self.chase.color = color,
            Command::NoOp | Command::Unrecognized => {}
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedMode {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.name());
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Command::SetMode(mode) => defmt::write!(fmt, "SetMode({})", mode),
            Command::SetSpeed(speed_ms) => defmt::write!(fmt, "SetSpeed({})", speed_ms),
            Command::SetColor(color) => {
                defmt::write!(fmt, "SetColor({}, {}, {})", color.r, color.g, color.b)
            }
            Command::NoOp => defmt::write!(fmt, "NoOp"),
            Command::Unrecognized => defmt::write!(fmt, "Unrecognized"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = StripState::new();
        assert_eq!(state.mode, LedMode::Off);
        assert_eq!(state.chase.color, DEFAULT_CHASE_COLOR);
        assert_eq!(state.chase.speed_ms, DEFAULT_CHASE_SPEED_MS);
    }

    #[test]
    fn test_apply_set_mode_keeps_chase() {
        let mut state = StripState::new();
        state.apply(Command::SetMode(LedMode::Rainbow));
        assert_eq!(state.mode, LedMode::Rainbow);
        assert_eq!(state.chase, ChaseSettings::default());
    }

    #[test]
    fn test_apply_set_speed_keeps_mode() {
        let mut state = StripState::new();
        state.apply(Command::SetMode(LedMode::Loading));
        state.apply(Command::SetSpeed(45));
        assert_eq!(state.mode, LedMode::Loading);
        assert_eq!(state.chase.speed_ms, 45);
    }

    #[test]
    fn test_apply_set_color_keeps_speed() {
        let mut state = StripState::new();
        state.apply(Command::SetColor(RGB8 {
            r: 255,
            g: 0,
            b: 255,
        }));
        assert_eq!(
            state.chase.color,
            RGB8 {
                r: 255,
                g: 0,
                b: 255
            }
        );
        assert_eq!(state.chase.speed_ms, DEFAULT_CHASE_SPEED_MS);
    }

    #[test]
    fn test_apply_noop_changes_nothing() {
        let mut state = StripState::new();
        state.apply(Command::SetMode(LedMode::SolidPink));
        let before = state;
        state.apply(Command::NoOp);
        state.apply(Command::Unrecognized);
        assert_eq!(state, before);
    }

    #[test]
    fn test_chase_settings_survive_mode_switches() {
        let mut state = StripState::new();
        state.apply(Command::SetMode(LedMode::Loading));
        state.apply(Command::SetSpeed(5));
        state.apply(Command::SetColor(RGB8 { r: 1, g: 2, b: 3 }));
        state.apply(Command::SetMode(LedMode::SolidRed));
        state.apply(Command::SetMode(LedMode::Loading));
        assert_eq!(state.chase.speed_ms, 5);
        assert_eq!(state.chase.color, RGB8 { r: 1, g: 2, b: 3 });
    }
}
