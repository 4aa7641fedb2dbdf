// Konsolen-Task - Lokale Diagnose über USB-Serial-JTAG
//
// Liest zeilenweise Text von der seriellen Konsole. Jede Zeile geht
// durch denselben Kommando-Parser wie die Funk-Kommandos und wird
// zusätzlich als Echo an alle verbundenen Clients weitergereicht -
// so lässt sich der Strip auch ohne Client direkt am Gerät steuern.
use defmt::{info, warn};
use embedded_io_async::Read;
use esp_hal::usb_serial_jtag::UsbSerialJtag;

use crate::{Command, CommandSender, ConsoleLine, EchoPublisher, parse_command};

/// Konsolen-Task - läuft parallel zu anderen Tasks
///
/// # Parameter
/// - `usb_device`: USB_DEVICE Peripheral (Serial-JTAG Controller)
/// - `command_sender`: Channel Sender für dekodierte Kommandos
/// - `echo_publisher`: PubSub Publisher für das Zeilen-Echo an Clients
#[embassy_executor::task]
pub async fn console_task(
    usb_device: esp_hal::peripherals::USB_DEVICE<'static>,
    command_sender: CommandSender,
    echo_publisher: EchoPublisher,
) {
    let mut serial = UsbSerialJtag::new(usb_device).into_async();
    info!("Konsole: Task gestartet");

    let mut line = ConsoleLine::new();
    let mut read_buffer = [0u8; 64];

    loop {
        let count = match serial.read(&mut read_buffer).await {
            Ok(count) => count,
            Err(_) => {
                warn!("Konsole: Lesefehler, versuche weiter");
                continue;
            }
        };

        for &byte in &read_buffer[..count] {
            match byte {
                b'\r' | b'\n' => {
                    if !line.is_empty() {
                        handle_line(&line, command_sender, &echo_publisher).await;
                        line.clear();
                    }
                }
                _ => {
                    // Zeilen über der Kommando-Maximallänge sind kein
                    // gültiger Input - verwerfen statt abschneiden
                    if line.push(byte as char).is_err() {
                        warn!("Konsole: Zeile zu lang, verworfen");
                        line.clear();
                    }
                }
            }
        }
    }
}

/// Verarbeitet eine komplette Konsolen-Zeile
///
/// Echo zuerst: die rohe Zeile geht immer an die Clients raus, auch wenn
/// sie kein gültiges Kommando ist. Danach läuft sie durch den Parser.
async fn handle_line(
    line: &ConsoleLine,
    command_sender: CommandSender,
    echo_publisher: &EchoPublisher,
) {
    echo_publisher.publish_immediate(line.clone());

    let command = parse_command(line.as_str());
    match command {
        Command::NoOp | Command::Unrecognized => {
            info!("Konsole: '{}' ist kein Kommando, nur Echo", line.as_str());
        }
        _ => {
            info!("Konsole: Kommando {}", command);
            command_sender.send(command).await;
        }
    }
}
