// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Channels
// (WebSocket/Konsole → Strip, Konsole → WebSocket-Echo).

pub mod console;
pub mod mdns;
pub mod server;
pub mod strip;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use console::console_task;
pub use mdns::mdns_responder_task;
pub use server::server_task;
pub use strip::strip_render_task;
pub use wifi::{connection_task, dhcp_task, net_task};
