// Web-Modul für HTTP Server und WebSocket
// Organisiert alle Web-bezogenen Komponenten

// HTML-Datei zur Compile-Zeit einbinden
// Die Datei wird direkt ins Binary eingebettet
pub const INDEX_HTML: &str = include_str!("index.html");
