// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter dem StripWriter Trait
// aus esp-core, um Testbarkeit und Wartbarkeit zu verbessern.

pub mod strip_writer;

pub use strip_writer::{RmtStripWriter, STRIP_RMT_BUFFER_SIZE};
