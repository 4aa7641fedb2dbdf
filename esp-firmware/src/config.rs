// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED-Strip Konfiguration
// ============================================================================

/// GPIO-Pin für die Datenleitung des Strips (WS2812/WS2815)
pub const STRIP_DATA_PIN: u8 = 2;

/// Anzahl der Pixel im Strip
pub const STRIP_LEN: usize = 80;

/// Globale Helligkeit (0-255)
/// Wird im Strip-Writer auf jeden Pixel angewendet
pub const STRIP_BRIGHTNESS: u8 = 128;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Basis-Kadenz des Render-Loops in Millisekunden
/// Gilt für statische Modi (Off/Solid); animierte Modi bringen
/// ihr eigenes Delay mit (Rainbow fix, Loading konfigurierbar)
pub const IDLE_FRAME_DELAY_MS: u64 = 10;

// ============================================================================
// Kommando-Protokoll
// ============================================================================

/// Maximale Länge eines Kommando-Texts in Bytes
/// Reicht für das längste Kommando "c,255,255,255" mit Reserve
pub const COMMAND_MAX_LEN: usize = 64;

// ============================================================================
// WiFi Konfiguration
// ============================================================================

/// WiFi SSID (Netzwerk-Name)
/// Wird zur Build-Zeit aus der Environment Variable WIFI_SSID geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_SSID: &str = env!(
    "WIFI_SSID",
    "WiFi SSID nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// WiFi Passwort
/// Wird zur Build-Zeit aus der Environment Variable WIFI_PASSWORD geladen
/// Setze diese in .env file (siehe .env.example)
pub const WIFI_PASSWORD: &str = env!(
    "WIFI_PASSWORD",
    "WiFi Password nicht gesetzt! Erstelle .env file (siehe .env.example)"
);

/// Heap-Größe für WiFi (Bytes)
/// WiFi benötigt dynamischen Speicher für Pakete
pub const WIFI_HEAP_SIZE: usize = 65536; // 64 KB

/// Zusätzliche Heap-Größe (Bytes)
pub const EXTRA_HEAP_SIZE: usize = 36864; // 36 KB

// Gesamt-Heap: ~100 KB für WiFi-Stack

// ============================================================================
// mDNS-Konfiguration (Auffindbarkeit im Netz)
// ============================================================================

/// mDNS Hostname (ohne .local suffix)
/// Der Strip ist erreichbar unter: <MDNS_HOSTNAME>.local
pub const MDNS_HOSTNAME: &str = "led";

/// mDNS TTL (Time To Live) in Sekunden
pub const MDNS_TTL_SECS: u32 = 120;

/// mDNS Reconnect Delay in Sekunden
/// Wartezeit nach Fehler vor erneutem Versuch
pub const MDNS_RECONNECT_DELAY_SECS: u64 = 5;

/// mDNS Port (Standard: 5353 laut RFC 6762)
pub const MDNS_PORT: u16 = 5353;

/// mDNS IPv4 Multicast-Adresse (224.0.0.251 laut RFC 6762)
pub const MDNS_MULTICAST_ADDR: [u8; 4] = [224, 0, 0, 251];

/// UDP Buffer-Größen für mDNS (TX, RX in Bytes)
pub const MDNS_UDP_BUFFER_SIZE: usize = 512;

/// mDNS Receive/Send Buffer-Größen in Bytes
/// 1500 Bytes = Standard MTU für Ethernet/WiFi
pub const MDNS_PACKET_BUFFER_SIZE: usize = 1500;

// ============================================================================
// HTTP Server Konfiguration (WebSocket-Transport)
// ============================================================================

/// HTTP Buffer-Größe in Bytes
/// Für HTTP Request/Response Headers und Body
pub const HTTP_BUFFER_SIZE: usize = 1024;

/// TCP RX Buffer-Größe in Bytes
pub const TCP_RX_BUFFER_SIZE: usize = 1024;

/// TCP TX Buffer-Größe in Bytes
pub const TCP_TX_BUFFER_SIZE: usize = 1024;

/// WebSocket Message Buffer-Größe in Bytes
/// Kommandos sind kurze Text-Frames (< COMMAND_MAX_LEN Bytes)
pub const WEBSOCKET_BUFFER_SIZE: usize = 512;
