//! Ambient services shared by the SDK crates: configuration read from the
//! environment and console logging.

pub mod config;
pub mod logging;

pub use config::Config;
pub use logging::Logger;
