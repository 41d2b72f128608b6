use crate::{
    contact::ContactForm,
    section::{SectionLayout, SectionTracker, Viewport},
    selection::SelectionController,
};

/// All mutable page state, owned by the composition root.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    pub tracker: SectionTracker,
    pub selection: SelectionController,
    pub contact: ContactForm,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount: start following scroll and take the initial reading, if the
    /// viewport could be measured.
    pub fn mount<L>(&mut self, viewport: Option<Viewport>, layout: &L)
    where
        L: SectionLayout + ?Sized,
    {
        self.tracker.attach();
        if let Some(viewport) = viewport {
            self.tracker.handle_scroll(viewport, layout);
        }
    }

    pub fn teardown(&mut self) {
        self.tracker.detach();
        self.contact.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        contact::ContactField,
        content::catalog,
        section::{tests::stacked_layout, SectionId},
    };

    fn viewport(scroll_y: f64) -> Viewport {
        Viewport {
            scroll_y,
            height: 900.0,
        }
    }

    #[test]
    fn test_page_flow() {
        let catalog = catalog().expect("embedded catalog should be valid");
        let layout = stacked_layout();
        let mut page = PageState::new();
        page.mount(Some(viewport(0.0)), &layout);
        assert_eq!(page.tracker.active(), SectionId::Hero);

        // scroll down to the gallery and open a card
        assert!(page.tracker.handle_scroll(viewport(600.0), &layout));
        assert_eq!(page.tracker.active(), SectionId::Projects);
        assert!(page.selection.select_id(catalog, "workout-tracker"));
        let title = page.selection.current().map(|p| p.title.clone());
        assert_eq!(title.as_deref(), Some("Workout Tracker"));
        page.selection.clear();
        assert!(!page.selection.is_showing());

        // on to the contact form
        page.tracker.handle_scroll(viewport(3000.0), &layout);
        assert_eq!(page.tracker.active(), SectionId::Contact);
        page.contact.update_field(ContactField::Name, "Ada");
        page.contact.update_field(ContactField::Email, "ada@example.com");
        page.contact.update_field(ContactField::Message, "Hi");
        let submission = page.contact.submit().expect("submit should be accepted");
        assert!(page.contact.acknowledged());
        assert!(page.contact.expire(submission.ticket));
        assert!(!page.contact.acknowledged());
        assert_eq!(page.contact.field(ContactField::Name), "");
        assert_eq!(page.contact.field(ContactField::Email), "");
        assert_eq!(page.contact.field(ContactField::Message), "");
    }

    #[test]
    fn test_teardown_stops_scroll_updates() {
        let layout = stacked_layout();
        let mut page = PageState::new();
        page.mount(Some(viewport(1400.0)), &layout);
        assert_eq!(page.tracker.active(), SectionId::Skills);

        page.teardown();
        let before = page.clone();
        for scroll in [0.0, 800.0, 2500.0, 3100.0] {
            assert!(!page.tracker.handle_scroll(viewport(scroll), &layout));
        }
        assert_eq!(page, before);
        // second teardown is harmless
        page.teardown();
        assert_eq!(page, before);
    }

    #[test]
    fn test_mount_without_viewport_still_attaches() {
        let layout = stacked_layout();
        let mut page = PageState::new();
        page.mount(None, &layout);
        assert!(page.tracker.is_attached());
        assert_eq!(page.tracker.active(), SectionId::Hero);
        assert!(page.tracker.handle_scroll(viewport(1000.0), &layout));
    }

    #[test]
    fn test_teardown_cancels_pending_reset() {
        let mut page = PageState::new();
        page.contact.update_field(ContactField::Message, "Hi");
        let submission = page.contact.submit().unwrap();
        page.teardown();
        assert!(!page.contact.expire(submission.ticket));
        assert_eq!(page.contact.field(ContactField::Message), "Hi");
        assert!(!page.contact.acknowledged());
    }
}
