use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

/// Vertical regions of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Hero,
    Projects,
    Skills,
    About,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::About,
        SectionId::Contact,
    ];

    /// DOM id of the section element.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::About => "about",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::About => "About",
            SectionId::Contact => "Contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub fn midpoint(&self) -> f64 {
        self.scroll_y + self.height / 2.0
    }
}

/// Document-space extent of a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Source of section geometry. `None` means the section isn't rendered yet.
pub trait SectionLayout {
    fn span(&self, id: SectionId) -> Option<SectionSpan>;
}

impl SectionLayout for [(SectionId, SectionSpan)] {
    fn span(&self, id: SectionId) -> Option<SectionSpan> {
        self.iter().find(|(s, _)| *s == id).map(|(_, span)| *span)
    }
}

impl<const N: usize> SectionLayout for [(SectionId, SectionSpan); N] {
    fn span(&self, id: SectionId) -> Option<SectionSpan> {
        self.as_slice().span(id)
    }
}

impl<L: SectionLayout + ?Sized> SectionLayout for &L {
    fn span(&self, id: SectionId) -> Option<SectionSpan> {
        (**self).span(id)
    }
}

/// First section (in `SectionId::ALL` order) containing `midpoint`, or `current`
/// when none does.
pub fn track<L>(current: SectionId, midpoint: f64, layout: &L) -> SectionId
where
    L: SectionLayout + ?Sized,
{
    SectionId::ALL
        .into_iter()
        .find(|id| layout.span(*id).is_some_and(|span| span.contains(midpoint)))
        .unwrap_or(current)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionTracker {
    active: SectionId,
    attached: bool,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Safe to call more than once.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Returns true if the active section changed.
    pub fn handle_scroll<L>(&mut self, viewport: Viewport, layout: &L) -> bool
    where
        L: SectionLayout + ?Sized,
    {
        if !self.attached {
            return false;
        }
        let next = track(self.active, viewport.midpoint(), layout);
        if next == self.active {
            return false;
        }
        log::debug!("active section {} -> {}", self.active, next);
        self.active = next;
        true
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    // 800px tall sections stacked from the top of the document
    pub(crate) fn stacked_layout() -> [(SectionId, SectionSpan); 5] {
        SectionId::ALL.map(|id| {
            let i = SectionId::ALL.iter().position(|s| *s == id).unwrap() as f64;
            (
                id,
                SectionSpan {
                    top: i * 800.0,
                    height: 800.0,
                },
            )
        })
    }

    fn viewport(scroll_y: f64) -> Viewport {
        Viewport {
            scroll_y,
            height: 600.0,
        }
    }

    fn attached() -> SectionTracker {
        let mut tracker = SectionTracker::new();
        tracker.attach();
        tracker
    }

    #[test]
    fn test_section_ids() {
        assert_eq!(SectionId::default(), SectionId::Hero);
        assert_eq!("skills".parse::<SectionId>(), Ok(SectionId::Skills));
        assert!("timeline".parse::<SectionId>().is_err());
        assert_eq!(SectionId::Contact.anchor(), "#contact");
    }

    #[test]
    fn test_span_is_half_open() {
        let span = SectionSpan {
            top: 100.0,
            height: 50.0,
        };
        assert!(span.contains(100.0));
        assert!(span.contains(149.9));
        assert!(!span.contains(150.0));
        assert!(!span.contains(99.0));
    }

    #[test]
    fn test_track_midpoint() {
        let layout = stacked_layout();
        // midpoint 300
        assert_eq!(track(SectionId::Hero, viewport(0.0).midpoint(), &layout), SectionId::Hero);
        // midpoint 1000
        assert_eq!(
            track(SectionId::Hero, viewport(700.0).midpoint(), &layout),
            SectionId::Projects
        );
        // midpoint exactly on the boundary belongs to the lower section
        assert_eq!(track(SectionId::Hero, 2400.0, &layout), SectionId::About);
    }

    #[test]
    fn test_overlap_prefers_enumeration_order() {
        let layout = [
            (
                SectionId::About,
                SectionSpan {
                    top: 0.0,
                    height: 1000.0,
                },
            ),
            (
                SectionId::Skills,
                SectionSpan {
                    top: 0.0,
                    height: 1000.0,
                },
            ),
        ];
        assert_eq!(track(SectionId::Hero, 500.0, &layout), SectionId::Skills);
    }

    #[test]
    fn test_no_match_keeps_current() {
        let layout = stacked_layout();
        assert_eq!(track(SectionId::About, 10_000.0, &layout), SectionId::About);
        assert_eq!(track(SectionId::Skills, -5.0, &layout), SectionId::Skills);
    }

    #[test]
    fn test_missing_sections_skipped() {
        let full = stacked_layout();
        let partial = &full[2..];
        // hero and projects not rendered yet
        assert_eq!(track(SectionId::Hero, 300.0, partial), SectionId::Hero);
        assert_eq!(track(SectionId::Hero, 1700.0, partial), SectionId::Skills);
    }

    #[test]
    fn test_exactly_one_active_for_every_offset() {
        let layout = stacked_layout();
        let mut scroll = 0.0;
        while scroll < 3700.0 {
            let mid = viewport(scroll).midpoint();
            let containing = SectionId::ALL
                .iter()
                .filter(|id| layout.span(**id).unwrap().contains(mid))
                .count();
            assert_eq!(containing, 1);
            let active = track(SectionId::Hero, mid, &layout);
            assert!(layout.span(active).unwrap().contains(mid));
            scroll += 37.0;
        }
    }

    #[test]
    fn test_handle_scroll_is_idempotent() {
        let layout = stacked_layout();
        let mut tracker = attached();
        assert!(tracker.handle_scroll(viewport(1500.0), &layout));
        assert_eq!(tracker.active(), SectionId::Skills);
        let snapshot = tracker.clone();
        assert!(!tracker.handle_scroll(viewport(1500.0), &layout));
        assert_eq!(tracker, snapshot);
    }

    #[test]
    fn test_detached_tracker_ignores_scroll() {
        let layout = stacked_layout();
        let mut tracker = SectionTracker::new();
        assert!(!tracker.handle_scroll(viewport(3000.0), &layout));
        assert_eq!(tracker.active(), SectionId::Hero);

        tracker.attach();
        assert!(tracker.handle_scroll(viewport(3000.0), &layout));
        tracker.detach();
        tracker.detach();
        assert!(!tracker.is_attached());
        assert!(!tracker.handle_scroll(viewport(0.0), &layout));
        assert_eq!(tracker.active(), SectionId::Contact);
    }
}
