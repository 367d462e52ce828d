//! Utility helpers - logging setup, progress spinner, terminal styling

pub mod logging;
pub mod progress;
pub mod styling;

pub use logging::*;
pub use progress::*;
pub use styling::*;
