use super::SchoolManagementApp;
use crate::systems::GradingSystem;
use tracing::debug;

#[derive(Debug)]
pub struct GradingAdapter {
    system: GradingSystem,
}

impl GradingAdapter {
    pub fn new(system: GradingSystem) -> Self {
        Self { system }
    }
}

impl SchoolManagementApp for GradingAdapter {
    fn integrate(&self) -> String {
        debug!(system = self.name(), "integrating");
        self.system.record_grades()
    }

    fn name(&self) -> &'static str {
        "grading"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::GRADING_CONFIRMATION;

    #[test]
    fn forwards_to_record_grades() {
        let adapter = GradingAdapter::new(GradingSystem::new());
        assert_eq!(adapter.integrate(), GRADING_CONFIRMATION);
        assert_eq!(adapter.integrate(), adapter.integrate());
    }
}
