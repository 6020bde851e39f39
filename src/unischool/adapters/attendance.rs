use super::SchoolManagementApp;
use crate::systems::AttendanceSystem;
use tracing::debug;

/// Presents [`AttendanceSystem::mark_attendance`] as `integrate`.
#[derive(Debug)]
pub struct AttendanceAdapter {
    system: AttendanceSystem,
}

impl AttendanceAdapter {
    pub fn new(system: AttendanceSystem) -> Self {
        Self { system }
    }
}

impl SchoolManagementApp for AttendanceAdapter {
    fn integrate(&self) -> String {
        debug!(system = self.name(), "integrating");
        self.system.mark_attendance()
    }

    fn name(&self) -> &'static str {
        "attendance"
    }
}
