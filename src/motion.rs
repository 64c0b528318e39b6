pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_TICK_MS: u32 = 16;
pub const SKILL_BAR_STAGGER_MS: u32 = 200;
pub const FADE_IN_STAGGER_SECS: f64 = 0.1;

pub const PARALLAX_DEBOUNCE_MS: u32 = 16;
pub const NAV_HIGHLIGHT_DEBOUNCE_MS: u32 = 100;
pub const GLITCH_DEBOUNCE_MS: u32 = 200;
pub const GLITCH_PROBABILITY: f64 = 0.1;
pub const GLITCH_ANIMATION_MS: u32 = 300;
pub const NAV_SCROLL_OFFSET: f64 = 100.0;

pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = f64::from(duration_ms.max(1)) / f64::from(tick_ms.max(1));
        Self {
            target: target as f64,
            increment: target as f64 / ticks,
            current: 0.0,
        }
    }

    pub fn advance(&mut self) -> u64 {
        self.current = (self.current + self.increment).min(self.target);
        self.current.floor() as u64
    }

    pub fn done(&self) -> bool {
        self.current >= self.target
    }
}

pub fn parallax_offset(scrolled: f64, index: usize) -> f64 {
    -(scrolled * (0.5 + index as f64 * 0.1))
}

pub fn mouse_drift(mouse_x: f64, mouse_y: f64, index: usize) -> (f64, f64) {
    let speed = (index + 1) as f64 * 0.5;
    ((mouse_x - 0.5) * speed, (mouse_y - 0.5) * speed)
}

pub fn particle_position_percent(sample: f64) -> f64 {
    sample * 100.0
}

pub fn particle_duration_secs(sample: f64) -> f64 {
    sample * 3.0 + 3.0
}

pub fn fade_in_delay_secs(index: usize) -> f64 {
    index as f64 * FADE_IN_STAGGER_SECS
}

pub fn glitch_triggers(sample: f64) -> bool {
    sample < GLITCH_PROBABILITY
}

pub fn section_in_view<'a>(sections: &[(&'a str, f64, f64)], scroll_y: f64) -> Option<&'a str> {
    let mut current = None;

    for (id, top, height) in sections {
        let threshold = top - NAV_SCROLL_OFFSET;
        if scroll_y >= threshold && scroll_y < threshold + height {
            current = Some(*id);
        }
    }

    current
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_terminates_at_exactly_the_target_without_overshoot() {
        let mut counter = CounterAnimation::new(250, COUNTER_DURATION_MS, COUNTER_TICK_MS);
        let mut last = 0;
        let mut ticks = 0;

        while !counter.done() {
            last = counter.advance();
            assert!(last <= 250);
            ticks += 1;
            assert!(ticks <= 10_000, "counter never terminated");
        }

        assert_eq!(last, 250);
        assert_eq!(ticks, 125);
    }

    #[test]
    fn counter_clamps_when_the_increment_does_not_divide_the_target() {
        let mut counter = CounterAnimation::new(7, 100, 16);

        let mut last = 0;
        while !counter.done() {
            last = counter.advance();
            assert!(last <= 7);
        }

        assert_eq!(last, 7);
    }

    #[test]
    fn parallax_speed_grows_with_particle_index() {
        assert_eq!(parallax_offset(100.0, 0), -50.0);
        assert!((parallax_offset(100.0, 2) + 70.0).abs() < 1e-9);
        assert!(parallax_offset(100.0, 2) < parallax_offset(100.0, 0));
        assert_eq!(parallax_offset(0.0, 5), 0.0);
    }

    #[test]
    fn mouse_drift_is_centered_and_scaled() {
        assert_eq!(mouse_drift(0.5, 0.5, 3), (0.0, 0.0));
        assert_eq!(mouse_drift(1.0, 0.0, 1), (0.5, -0.5));
    }

    #[test]
    fn glitch_threshold_matches_the_fixed_probability() {
        assert!(glitch_triggers(0.0));
        assert!(glitch_triggers(0.099));
        assert!(!glitch_triggers(0.1));
        assert!(!glitch_triggers(0.9));
    }

    #[test]
    fn scroll_highlight_picks_the_last_section_containing_the_offset() {
        let sections = [
            ("home", 0.0, 600.0),
            ("about", 600.0, 600.0),
            ("skills", 1_200.0, 600.0),
        ];

        assert_eq!(section_in_view(&sections, 0.0), Some("home"));
        assert_eq!(section_in_view(&sections, 520.0), Some("about"));
        assert_eq!(section_in_view(&sections, 1_150.0), Some("skills"));
        assert_eq!(section_in_view(&sections, 5_000.0), None);
    }

    #[test]
    fn particle_seeds_land_in_their_fixed_ranges() {
        assert_eq!(particle_position_percent(0.25), 25.0);
        assert_eq!(particle_duration_secs(0.0), 3.0);
        assert_eq!(particle_duration_secs(0.5), 4.5);
        assert!(particle_duration_secs(0.999) < 6.0);
    }
}
