//! # Board Bring-up Module
//!
//! Startup and console infrastructure shared by the binary.
//!
//! ## Submodules
//!
//! - `init`: phase runner used by the boot sequence
//! - `status`: component status tracking for the boot log
//! - `logger`: `log` backend over the serial console
//!
//! ## Example
//!
//! ```ignore
//! use crate::kernel::init_phase;
//!
//! init_phase("Display", || display.init(&mut board))?;
//! ```

pub mod init;
pub mod logger;
pub mod status;

pub use init::init_phase;
pub use logger::SerialLogger;
pub use status::{all_components_ready, register_component, update_component_status, InitStatus};
