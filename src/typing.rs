pub const SUBTITLE_TYPE_MS: u32 = 80;
pub const SUBTITLE_ERASE_MS: u32 = 40;
pub const SUBTITLE_PAUSE_MS: u32 = 900;
pub const SUBTITLE_ERASE_START_DELAY_MS: u32 = 400;
pub const GREETING_TYPE_MS: u32 = 100;

pub const CODE_WINDOW_REVEAL_MS: u32 = 200;
pub const CODE_LINE_START_MS: u32 = 500;
pub const CODE_LINE_STAGGER_MS: u32 = 400;
pub const CODE_CHAR_MS: u32 = 20;
pub const CODE_CURSOR_LINGER_MS: u32 = 500;
pub const COMPILE_LEAD_MS: u32 = 800;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Erasing,
}

pub struct SubtitleFrame {
    pub text: String,
    pub next_step_ms: u32,
}

pub struct SubtitleCycle {
    phrases: Vec<String>,
    phrase: usize,
    shown: usize,
    phase: Phase,
}

impl SubtitleCycle {
    pub fn new(phrases: Vec<String>) -> Option<Self> {
        let phrases: Vec<String> = phrases
            .into_iter()
            .filter(|phrase| !phrase.is_empty())
            .collect();

        if phrases.is_empty() {
            return None;
        }

        Some(Self {
            phrases,
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
        })
    }

    pub fn step(&mut self) -> SubtitleFrame {
        let phrase_len = self.current_phrase_chars();

        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(phrase_len);

                if self.shown == phrase_len {
                    self.phase = Phase::Erasing;
                    SubtitleFrame {
                        text: self.rendered(),
                        next_step_ms: SUBTITLE_PAUSE_MS + SUBTITLE_ERASE_START_DELAY_MS,
                    }
                } else {
                    SubtitleFrame {
                        text: self.rendered(),
                        next_step_ms: SUBTITLE_TYPE_MS,
                    }
                }
            }
            Phase::Erasing => {
                self.shown = self.shown.saturating_sub(1);

                if self.shown == 0 {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                    self.shown = 1;
                    SubtitleFrame {
                        text: self.rendered(),
                        next_step_ms: SUBTITLE_TYPE_MS,
                    }
                } else {
                    SubtitleFrame {
                        text: self.rendered(),
                        next_step_ms: SUBTITLE_ERASE_MS,
                    }
                }
            }
        }
    }

    fn current_phrase_chars(&self) -> usize {
        self.phrases[self.phrase].chars().count()
    }

    fn rendered(&self) -> String {
        char_prefix(&self.phrases[self.phrase], self.shown)
    }
}

pub fn char_prefix(text: &str, count: usize) -> String {
    text.chars().take(count).collect()
}

// Precondition: embedded tags are well formed. An unterminated `<` run is
// emitted as a single trailing chunk instead of being split mid-tag.
pub fn markup_chunks(source: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut rest = source;

    while !rest.is_empty() {
        if let Some(stripped) = rest.strip_prefix('<') {
            match stripped.find('>') {
                Some(close) => {
                    let split = close + 2;
                    chunks.push(rest[..split].to_string());
                    rest = &rest[split..];
                }
                None => {
                    chunks.push(rest.to_string());
                    rest = "";
                }
            }
        } else {
            let first = rest.chars().next().map(char::len_utf8).unwrap_or(1);
            chunks.push(rest[..first].to_string());
            rest = &rest[first..];
        }
    }

    chunks
}

pub fn code_line_start_ms(index: usize) -> u32 {
    CODE_LINE_START_MS + index as u32 * CODE_LINE_STAGGER_MS
}

pub fn compile_start_ms(line_count: usize) -> u32 {
    CODE_LINE_START_MS + line_count as u32 * CODE_LINE_STAGGER_MS + COMPILE_LEAD_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle(phrases: &[&str]) -> SubtitleCycle {
        SubtitleCycle::new(phrases.iter().map(ToString::to_string).collect())
            .expect("non-empty phrase list")
    }

    #[test]
    fn types_pauses_erases_then_rotates_to_the_next_phrase() {
        let mut subtitle = cycle(&["ab", "cd"]);

        let first = subtitle.step();
        assert_eq!(first.text, "a");
        assert_eq!(first.next_step_ms, SUBTITLE_TYPE_MS);

        let full = subtitle.step();
        assert_eq!(full.text, "ab");
        assert_eq!(
            full.next_step_ms,
            SUBTITLE_PAUSE_MS + SUBTITLE_ERASE_START_DELAY_MS
        );

        let erased_once = subtitle.step();
        assert_eq!(erased_once.text, "a");
        assert_eq!(erased_once.next_step_ms, SUBTITLE_ERASE_MS);

        let rotated = subtitle.step();
        assert_eq!(rotated.text, "c");
        assert_eq!(rotated.next_step_ms, SUBTITLE_TYPE_MS);
    }

    #[test]
    fn rendered_text_never_exceeds_the_target_phrase() {
        let phrases = ["Full Stack Developer", "Flutter Developer"];
        let longest = phrases
            .iter()
            .map(|phrase| phrase.chars().count())
            .max()
            .expect("phrases");
        let mut subtitle = cycle(&phrases);

        for _ in 0..1_000 {
            let frame = subtitle.step();
            assert!(frame.text.chars().count() <= longest);
            assert!(phrases
                .iter()
                .any(|phrase| phrase.starts_with(frame.text.as_str())));
        }
    }

    #[test]
    fn a_replacement_cycle_starts_over_from_the_first_phrase() {
        let mut subtitle = cycle(&["alpha", "beta"]);
        for _ in 0..3 {
            subtitle.step();
        }

        let mut replacement = cycle(&["منشئ", "مطور"]);
        let frame = replacement.step();
        assert_eq!(frame.text.chars().count(), 1);
        assert!("منشئ".starts_with(frame.text.as_str()));
    }

    #[test]
    fn arabic_phrases_step_on_character_boundaries() {
        let mut subtitle = cycle(&["مطور ويب"]);

        for expected in 1..="مطور ويب".chars().count() {
            let frame = subtitle.step();
            assert_eq!(frame.text.chars().count(), expected);
        }
    }

    #[test]
    fn empty_phrase_lists_are_rejected() {
        assert!(SubtitleCycle::new(Vec::new()).is_none());
        assert!(SubtitleCycle::new(vec![String::new()]).is_none());
    }

    #[test]
    fn markup_chunks_keep_tag_runs_atomic() {
        assert_eq!(markup_chunks("ab"), vec!["a", "b"]);
        assert_eq!(
            markup_chunks("<span class=\"keyword\">const</span>"),
            vec![
                "<span class=\"keyword\">",
                "c",
                "o",
                "n",
                "s",
                "t",
                "</span>"
            ]
        );
    }

    #[test]
    fn markup_chunks_emit_an_unterminated_run_whole() {
        assert_eq!(markup_chunks("a<span"), vec!["a", "<span"]);
    }

    #[test]
    fn markup_chunks_respect_multibyte_characters() {
        assert_eq!(markup_chunks("é<b>م</b>"), vec!["é", "<b>", "م", "</b>"]);
    }

    #[test]
    fn reveal_schedule_offsets_follow_list_position() {
        assert_eq!(code_line_start_ms(0), 500);
        assert_eq!(code_line_start_ms(3), 1_700);
        assert_eq!(compile_start_ms(8), 4_500);
    }
}
