pub const SECTION_IDS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];
pub const SECTION_SWITCH_DELAY_MS: u32 = 300;
pub const ENTRANCE_STAGGER_MS: u32 = 100;

pub struct SectionRouter {
    current: &'static str,
    in_transition: bool,
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRouter {
    pub fn new() -> Self {
        Self {
            current: SECTION_IDS[0],
            in_transition: false,
        }
    }

    pub fn current(&self) -> &'static str {
        self.current
    }

    pub fn in_transition(&self) -> bool {
        self.in_transition
    }

    pub fn begin(&mut self, section_id: &str) -> bool {
        if self.in_transition {
            return false;
        }

        let Some(known) = SECTION_IDS.iter().copied().find(|id| *id == section_id) else {
            return false;
        };

        self.current = known;
        self.in_transition = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_transition = false;
    }

    pub fn neighbor(&self, delta: i32) -> Option<&'static str> {
        let index = SECTION_IDS.iter().position(|id| *id == self.current)?;
        let target = index as i32 + delta;

        if target < 0 || target >= SECTION_IDS.len() as i32 {
            return None;
        }

        Some(SECTION_IDS[target as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_activates_known_section() {
        let mut router = SectionRouter::new();

        assert!(router.begin("skills"));
        assert_eq!(router.current(), "skills");
        assert!(router.in_transition());
    }

    #[test]
    fn request_during_transition_is_dropped_not_queued() {
        let mut router = SectionRouter::new();

        assert!(router.begin("about"));
        assert!(!router.begin("projects"));
        assert_eq!(router.current(), "about");

        router.finish();
        assert!(router.begin("projects"));
        assert_eq!(router.current(), "projects");
    }

    #[test]
    fn unknown_section_is_a_no_op_and_does_not_wedge_the_guard() {
        let mut router = SectionRouter::new();

        assert!(!router.begin("downloads"));
        assert!(!router.in_transition());
        assert_eq!(router.current(), "home");

        assert!(router.begin("contact"));
    }

    #[test]
    fn neighbor_walks_the_fixed_order_and_stops_at_the_edges() {
        let mut router = SectionRouter::new();

        assert_eq!(router.neighbor(-1), None);
        assert_eq!(router.neighbor(1), Some("about"));

        router.begin("contact");
        router.finish();
        assert_eq!(router.neighbor(1), None);
        assert_eq!(router.neighbor(-1), Some("projects"));
    }
}
