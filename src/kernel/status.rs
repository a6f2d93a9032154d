use core::fmt;

use heapless::Vec;
use log::warn;
use spin::Mutex;

/// Bring-up phases tracked at once.
pub const MAX_COMPONENTS: usize = 8;

/// Board bring-up status tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStatus {
    NotStarted,
    InProgress,
    Completed,
    Failed(&'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct ComponentStatus {
    pub name: &'static str,
    pub status: InitStatus,
}

static INIT_STATUS: Mutex<Vec<ComponentStatus, MAX_COMPONENTS>> = Mutex::new(Vec::new());

impl ComponentStatus {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            status: InitStatus::NotStarted,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.status, InitStatus::Completed)
    }
}

/// Track a bring-up component. Registering a name twice is a no-op.
pub fn register_component(name: &'static str) {
    let mut components = INIT_STATUS.lock();
    if components.iter().any(|c| c.name == name) {
        return;
    }
    if components.push(ComponentStatus::new(name)).is_err() {
        warn!("status table full, {} not tracked", name);
    }
}

pub fn update_component_status(name: &'static str, status: InitStatus) {
    let mut components = INIT_STATUS.lock();
    if let Some(comp) = components.iter_mut().find(|c| c.name == name) {
        comp.status = status;
    }
}

pub fn component_status(name: &str) -> Option<InitStatus> {
    INIT_STATUS
        .lock()
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.status)
}

/// Check if all components are initialized
pub fn all_components_ready() -> bool {
    let components = INIT_STATUS.lock();
    !components.is_empty() && components.iter().all(|c| c.is_complete())
}

impl fmt::Display for InitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitStatus::NotStarted => write!(f, "Not Started"),
            InitStatus::InProgress => write!(f, "In Progress"),
            InitStatus::Completed => write!(f, "Completed"),
            InitStatus::Failed(err) => write!(f, "Failed: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    // The table is global; each test uses its own component names.

    #[test]
    fn test_register_and_update() {
        register_component("status-test-a");
        assert_eq!(component_status("status-test-a"), Some(InitStatus::NotStarted));
        update_component_status("status-test-a", InitStatus::Failed("no device"));
        assert_eq!(component_status("status-test-a"), Some(InitStatus::Failed("no device")));
        register_component("status-test-a");
        assert_eq!(component_status("status-test-a"), Some(InitStatus::Failed("no device")));
    }

    #[test]
    fn test_unknown_component() {
        update_component_status("status-test-missing", InitStatus::Completed);
        assert_eq!(component_status("status-test-missing"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InitStatus::Completed), "Completed");
        assert_eq!(format!("{}", InitStatus::Failed("timeout")), "Failed: timeout");
    }
}
