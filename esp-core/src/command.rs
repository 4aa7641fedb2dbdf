//! Kommando-Parser: Text → [`Command`]
//!
//! Pure Functions ohne Hardware-Dependencies (testbar!)
//!
//! Der Parser ist total: jeder Input-Text - auch leerer oder kaputter -
//! ergibt ein gültiges Kommando, schlimmstenfalls `NoOp`/`Unrecognized`.
//! Es gibt keinen Fehler-Typ und keine Exception-Pfade.

use rgb::RGB8;

use crate::types::{Command, LedMode};

/// Dekodiert einen Kommando-Text
///
/// Vokabular (case-sensitive, exakter Ganz-String-Match):
/// - `"red"`, `"green"`, `"blue"`, `"purple"`, `"pink"`, `"rainbow"`,
///   `"loading"`, `"none"` → Modus-Wechsel
/// - `"s,<n>"` → Tick-Delay der Loading-Animation
/// - `"c,<R>,<G>,<B>"` → Farbe der Loading-Animation
///
/// Fehlen bei `"c,"` Felder, wird das Kommando stillschweigend als `NoOp`
/// verworfen - es wird keine Teil-Farbe übernommen.
///
/// # Beispiele
///
/// ```
/// # use esp_core::{parse_command, Command, LedMode};
/// assert_eq!(parse_command("red"), Command::SetMode(LedMode::SolidRed));
/// assert_eq!(parse_command("s,45"), Command::SetSpeed(45));
/// assert_eq!(parse_command(""), Command::NoOp);
/// ```
pub fn parse_command(text: &str) -> Command {
    if text.is_empty() {
        return Command::NoOp;
    }

    // Modus-Keywords: exakter Match, "Red" oder "red " matchen NICHT
    match text {
        "red" => return Command::SetMode(LedMode::SolidRed),
        "green" => return Command::SetMode(LedMode::SolidGreen),
        "blue" => return Command::SetMode(LedMode::SolidBlue),
        "purple" => return Command::SetMode(LedMode::SolidPurple),
        "pink" => return Command::SetMode(LedMode::SolidPink),
        "rainbow" => return Command::SetMode(LedMode::Rainbow),
        "loading" => return Command::SetMode(LedMode::Loading),
        "none" => return Command::SetMode(LedMode::Off),
        _ => {}
    }

    if let Some(rest) = text.strip_prefix("s,") {
        // Negative Werte werden unverändert übernommen (kein Clamping)
        return Command::SetSpeed(parse_i32_or_zero(rest));
    }

    if let Some(rest) = text.strip_prefix("c,") {
        // Erwartete Form: c,<R>,<G>,<B> mit genau drei Feldern
        let mut fields = rest.splitn(3, ',');
        return match (fields.next(), fields.next(), fields.next()) {
            (Some(r), Some(g), Some(b)) => Command::SetColor(RGB8 {
                // `as u8` übernimmt die unteren 8 Bit - Werte außerhalb
                // 0-255 wickeln um, es findet kein Range-Check statt
                r: parse_i32_or_zero(r) as u8,
                g: parse_i32_or_zero(g) as u8,
                b: parse_i32_or_zero(b) as u8,
            }),
            _ => Command::NoOp,
        };
    }

    Command::Unrecognized
}

/// Permissive Integer-Konvertierung: `0` statt Fehler
///
/// Whitespace um das Feld wird toleriert; alles was danach kein
/// vollständiger Integer ist, ergibt `0`. Diese Defaulting-Policy ist
/// Absicht und gehört zum Kommando-Protokoll.
pub fn parse_i32_or_zero(field: &str) -> i32 {
    field.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_noop() {
        assert_eq!(parse_command(""), Command::NoOp);
    }

    #[test]
    fn test_mode_keywords() {
        assert_eq!(parse_command("red"), Command::SetMode(LedMode::SolidRed));
        assert_eq!(
            parse_command("green"),
            Command::SetMode(LedMode::SolidGreen)
        );
        assert_eq!(parse_command("blue"), Command::SetMode(LedMode::SolidBlue));
        assert_eq!(
            parse_command("purple"),
            Command::SetMode(LedMode::SolidPurple)
        );
        assert_eq!(parse_command("pink"), Command::SetMode(LedMode::SolidPink));
        assert_eq!(parse_command("rainbow"), Command::SetMode(LedMode::Rainbow));
        assert_eq!(parse_command("loading"), Command::SetMode(LedMode::Loading));
        assert_eq!(parse_command("none"), Command::SetMode(LedMode::Off));
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        assert_eq!(parse_command("Red"), Command::Unrecognized);
        assert_eq!(parse_command("RAINBOW"), Command::Unrecognized);
    }

    #[test]
    fn test_keywords_match_whole_string() {
        assert_eq!(parse_command("red "), Command::Unrecognized);
        assert_eq!(parse_command("redd"), Command::Unrecognized);
        assert_eq!(parse_command(" red"), Command::Unrecognized);
    }

    #[test]
    fn test_set_speed() {
        assert_eq!(parse_command("s,45"), Command::SetSpeed(45));
        assert_eq!(parse_command("s,0"), Command::SetSpeed(0));
    }

    #[test]
    fn test_set_speed_non_numeric_defaults_to_zero() {
        assert_eq!(parse_command("s,abc"), Command::SetSpeed(0));
        assert_eq!(parse_command("s,"), Command::SetSpeed(0));
    }

    #[test]
    fn test_set_speed_negative_passes_through() {
        assert_eq!(parse_command("s,-5"), Command::SetSpeed(-5));
    }

    #[test]
    fn test_set_color() {
        assert_eq!(
            parse_command("c,255,0,255"),
            Command::SetColor(RGB8 {
                r: 255,
                g: 0,
                b: 255
            })
        );
    }

    #[test]
    fn test_set_color_missing_field_is_noop() {
        assert_eq!(parse_command("c,10,20"), Command::NoOp);
        assert_eq!(parse_command("c,10"), Command::NoOp);
        assert_eq!(parse_command("c,"), Command::NoOp);
    }

    #[test]
    fn test_set_color_non_numeric_field_defaults_to_zero() {
        assert_eq!(
            parse_command("c,x,20,y"),
            Command::SetColor(RGB8 { r: 0, g: 20, b: 0 })
        );
    }

    #[test]
    fn test_set_color_wraps_out_of_range_values() {
        // 300 = 0x12C → untere 8 Bit = 44; -1 → 255
        assert_eq!(
            parse_command("c,300,-1,256"),
            Command::SetColor(RGB8 {
                r: 44,
                g: 255,
                b: 0
            })
        );
    }

    #[test]
    fn test_unknown_text_is_unrecognized() {
        assert_eq!(parse_command("disco"), Command::Unrecognized);
        assert_eq!(parse_command("x,1,2,3"), Command::Unrecognized);
    }

    #[test]
    fn test_parse_i32_or_zero() {
        assert_eq!(parse_i32_or_zero("45"), 45);
        assert_eq!(parse_i32_or_zero(" 45 "), 45);
        assert_eq!(parse_i32_or_zero("-5"), -5);
        assert_eq!(parse_i32_or_zero("abc"), 0);
        assert_eq!(parse_i32_or_zero(""), 0);
        assert_eq!(parse_i32_or_zero("45abc"), 0);
    }
}
