use super::SchoolManagementApp;
use crate::systems::LibrarySystem;
use tracing::debug;

#[derive(Debug)]
pub struct LibraryAdapter {
    system: LibrarySystem,
}

impl LibraryAdapter {
    pub fn new(system: LibrarySystem) -> Self {
        Self { system }
    }
}

impl SchoolManagementApp for LibraryAdapter {
    fn integrate(&self) -> String {
        debug!(system = self.name(), "integrating");
        self.system.manage_books()
    }

    fn name(&self) -> &'static str {
        "library"
    }
}
