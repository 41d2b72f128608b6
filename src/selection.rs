use std::sync::Arc;

use crate::content::{Catalog, ProjectRecord};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Empty,
    Showing(Arc<ProjectRecord>),
}

/// Where a click inside the open overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Surface,
    CloseControl,
}

impl ClickTarget {
    pub fn dismisses(self) -> bool {
        !matches!(self, ClickTarget::Surface)
    }
}

/// Keys that open a focused project card.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Owns the at-most-one project shown in the detail overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn current(&self) -> Option<&Arc<ProjectRecord>> {
        match &self.state {
            SelectionState::Empty => None,
            SelectionState::Showing(p) => Some(p),
        }
    }

    pub fn is_showing(&self) -> bool {
        self.current().is_some()
    }

    pub fn select(&mut self, project: Arc<ProjectRecord>) {
        log::debug!("showing project {}", project.id);
        self.state = SelectionState::Showing(project);
    }

    /// Selects the catalog project with `id`. Unknown ids leave the state alone.
    pub fn select_id(&mut self, catalog: &Catalog, id: &str) -> bool {
        match catalog.project(id) {
            Some(p) => {
                self.select(Arc::clone(p));
                true
            }
            None => {
                log::warn!("no project with id {id}");
                false
            }
        }
    }

    /// Returns true if a project was showing.
    pub fn clear(&mut self) -> bool {
        let was_showing = self.is_showing();
        self.state = SelectionState::Empty;
        was_showing
    }

    pub fn dismiss(&mut self, target: ClickTarget) -> bool {
        if target.dismisses() {
            self.clear()
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{catalog, tests::project};

    #[test]
    fn test_select_then_clear() {
        let catalog = catalog().expect("embedded catalog should be valid");
        for p in &catalog.projects {
            let mut ctrl = SelectionController::new();
            ctrl.select(Arc::clone(p));
            assert_eq!(ctrl.state(), &SelectionState::Showing(Arc::clone(p)));
            assert!(ctrl.clear());
            assert_eq!(ctrl.state(), &SelectionState::Empty);
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut ctrl = SelectionController::new();
        assert!(!ctrl.clear());
        assert!(!ctrl.clear());
        assert_eq!(ctrl, SelectionController::new());
    }

    #[test]
    fn test_later_selection_replaces_earlier() {
        let a = project("a", "A");
        let b = project("b", "B");
        let mut ctrl = SelectionController::new();
        ctrl.select(a);
        ctrl.select(Arc::clone(&b));
        assert_eq!(ctrl.current(), Some(&b));
    }

    #[test]
    fn test_surface_click_does_not_dismiss() {
        let mut ctrl = SelectionController::new();
        ctrl.select(project("a", "A"));
        assert!(!ctrl.dismiss(ClickTarget::Surface));
        assert!(ctrl.is_showing());
        assert!(ctrl.dismiss(ClickTarget::Backdrop));
        assert!(!ctrl.is_showing());

        ctrl.select(project("a", "A"));
        assert!(ctrl.dismiss(ClickTarget::CloseControl));
        assert!(!ctrl.dismiss(ClickTarget::CloseControl));
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
        assert!(!is_activation_key("a"));
    }

    #[test]
    fn test_select_id() {
        let catalog = catalog().expect("embedded catalog should be valid");
        let mut ctrl = SelectionController::new();
        assert!(ctrl.select_id(catalog, "workout-tracker"));
        assert_eq!(
            ctrl.current().map(|p| p.title.as_str()),
            Some("Workout Tracker")
        );
        assert!(!ctrl.select_id(catalog, "not-a-project"));
        assert_eq!(ctrl.current().map(|p| p.id.as_str()), Some("workout-tracker"));
    }
}
