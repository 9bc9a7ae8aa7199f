//! Section Tracker
//!
//! Decides which page section the navigation highlights, from visibility
//! reports delivered by the browser's intersection observer.

use std::fmt;

/// Fraction of a section that must be visible for it to become active
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Browsers report ratios that land a hair under the threshold they fired for
const RATIO_EPSILON: f64 = 1e-3;

/// Scroll-anchored regions of the page, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Skills,
    Experience,
    Projects,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Element id of the section
    pub fn id(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    /// Navigation label
    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Hero",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Contact gets a call-to-action button on desktop instead of a link
    pub fn in_desktop_links(&self) -> bool {
        *self != Section::Contact
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One visibility report for a tagged element
#[derive(Debug, Clone, PartialEq)]
pub struct Visibility {
    /// Element id
    pub id: String,
    pub is_intersecting: bool,
    /// Visible fraction of the element, `[0, 1]`
    pub ratio: f64,
}

impl Visibility {
    pub fn new(id: impl Into<String>, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
            ratio,
        }
    }
}

/// Tracks the active section.
///
/// Starts at [`Section::Hero`]. A report that meets the threshold makes its
/// section active; the last such report in a batch wins. Reports below the
/// threshold, or for unknown ids, never change the active section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionTracker {
    active: Section,
    threshold: f64,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}

impl SectionTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            active: Section::Hero,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[cfg(test)]
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    /// Apply a batch of reports. Returns whether the active section changed.
    pub fn observe(&mut self, reports: impl IntoIterator<Item = Visibility>) -> bool {
        let before = self.active;

        for report in reports {
            if !report.is_intersecting || report.ratio + RATIO_EPSILON < self.threshold {
                continue;
            }
            if let Some(section) = Section::from_id(&report.id) {
                self.active = section;
            }
        }

        self.active != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("blog"), None);
    }

    #[test]
    fn test_initial_section_is_hero() {
        let tracker = SectionTracker::default();
        assert_eq!(tracker.active(), Section::Hero);
        assert_eq!(tracker.threshold(), VISIBILITY_THRESHOLD);
    }

    #[test]
    fn test_section_becomes_active_at_threshold() {
        let mut tracker = SectionTracker::default();

        assert!(tracker.observe([Visibility::new("skills", true, 0.5)]));
        assert_eq!(tracker.active(), Section::Skills);

        // Slightly under due to float rounding still counts
        assert!(tracker.observe([Visibility::new("projects", true, 0.4996)]));
        assert!(tracker.is_active(Section::Projects));
    }

    #[test]
    fn test_below_threshold_keeps_last_known() {
        let mut tracker = SectionTracker::default();
        tracker.observe([Visibility::new("experience", true, 0.8)]);

        let changed = tracker.observe([
            Visibility::new("projects", true, 0.2),
            Visibility::new("experience", false, 0.0),
        ]);

        assert!(!changed);
        assert_eq!(tracker.active(), Section::Experience);
    }

    #[test]
    fn test_never_crossing_stays_hero() {
        let mut tracker = SectionTracker::default();
        for ratio in [0.0, 0.1, 0.3, 0.45] {
            tracker.observe([Visibility::new("contact", true, ratio)]);
        }
        assert_eq!(tracker.active(), Section::Hero);
    }

    #[test]
    fn test_last_report_in_batch_wins() {
        let mut tracker = SectionTracker::default();
        tracker.observe([
            Visibility::new("skills", true, 0.9),
            Visibility::new("testimonials", true, 0.6),
        ]);
        assert_eq!(tracker.active(), Section::Testimonials);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut tracker = SectionTracker::default();
        assert!(!tracker.observe([Visibility::new("footer", true, 1.0)]));
        assert_eq!(tracker.active(), Section::Hero);
    }

    #[test]
    fn test_contact_is_not_a_desktop_link() {
        let links: Vec<_> = Section::ALL
            .into_iter()
            .filter(Section::in_desktop_links)
            .collect();
        assert_eq!(links.len(), 5);
        assert!(!links.contains(&Section::Contact));
    }
}
