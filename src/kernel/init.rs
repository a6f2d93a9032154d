//! Bring-up phases
use log::{error, info};

use crate::kernel::status::{register_component, update_component_status, InitStatus};

/// Run one bring-up phase, tracking and logging its outcome.
pub fn init_phase<F>(name: &'static str, init_fn: F) -> Result<(), &'static str>
where
    F: FnOnce() -> Result<(), &'static str>,
{
    register_component(name);
    update_component_status(name, InitStatus::InProgress);
    info!("Initializing {}...", name);

    match init_fn() {
        Ok(()) => {
            update_component_status(name, InitStatus::Completed);
            info!("  {} initialized", name);
            Ok(())
        }
        Err(e) => {
            update_component_status(name, InitStatus::Failed(e));
            error!("  {} failed: {}", name, e);
            Err(e)
        }
    }
}
