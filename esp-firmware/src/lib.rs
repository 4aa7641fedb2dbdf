// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;
pub mod web;

// Re-exports von esp-core
pub use esp_core::{
    Command, LedError, LedMode, RenderPhase, StripState, StripWriter, parse_command, render_frame,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::channel::{Receiver, Sender};
use embassy_sync::pubsub::{PubSubChannel, Publisher, Subscriber};

use crate::config::COMMAND_MAX_LEN;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Publisher<'static, NoopRawMutex, ConsoleLine, 2, 8, 1>
// Nutze:  EchoPublisher

/// Eine Text-Zeile von der seriellen Konsole
///
/// Wird unverändert an verbundene Clients weitergereicht (Echo) und
/// parallel durch den Kommando-Parser geschickt.
pub type ConsoleLine = heapless::String<COMMAND_MAX_LEN>;

/// Channel für dekodierte Kommandos (WebSocket/Konsole → Render-Loop)
/// - 1: Nachrichten-Kapazität (nur ein Command zur Zeit)
///
/// Kommandos werden VOR dem Channel-Übergang dekodiert; der Render-Loop
/// liest dadurch nie ein halb geschriebenes Kommando (Single-Writer/
/// Single-Reader Handoff an der Transport-Grenze).
pub type CommandChannel = embassy_sync::channel::Channel<NoopRawMutex, Command, 1>;

/// Sender für Kommandos (WebSocket-Handler und Konsolen-Task)
pub type CommandSender = Sender<'static, NoopRawMutex, Command, 1>;

/// Receiver für Kommandos (der Render-Loop ist der einzige Leser)
pub type CommandReceiver = Receiver<'static, NoopRawMutex, Command, 1>;

/// PubSubChannel für Konsolen-Echo an die Clients
/// - 2: Nachrichten-Kapazität im Queue
/// - 8: Maximale Anzahl Subscribers (bis zu 8 WebSocket-Clients)
/// - 1: Publish WaitResult Slots
pub type EchoChannel = PubSubChannel<NoopRawMutex, ConsoleLine, 2, 8, 1>;

/// Publisher für Konsolen-Echo (Konsolen-Task)
pub type EchoPublisher = Publisher<'static, NoopRawMutex, ConsoleLine, 2, 8, 1>;

/// Subscriber für Konsolen-Echo (eine Instanz pro WebSocket-Connection)
pub type EchoSubscriber = Subscriber<'static, NoopRawMutex, ConsoleLine, 2, 8, 1>;
