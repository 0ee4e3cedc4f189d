//! Hero typing animation, split into a pure state machine (testable on the
//! host) and driven by a timeout chain in `components::typed`.

pub const PHRASES: &[&str] = &["Projects", "Solutions", "Innovation", "Excellence"];

pub const TYPE_DELAY_MS: u32 = 120;
pub const DELETE_DELAY_MS: u32 = 80;
pub const HOLD_DELAY_MS: u32 = 2000;
pub const NEXT_PHRASE_DELAY_MS: u32 = 400;

#[derive(Clone, Debug, PartialEq)]
pub struct TypingState {
    phrases: &'static [&'static str],
    phrase: usize,
    chars: usize,
    deleting: bool,
}

impl TypingState {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        assert!(!phrases.is_empty());
        Self {
            phrases,
            phrase: 0,
            chars: 0,
            deleting: false,
        }
    }

    /// Advances one transition and returns the visible prefix plus the delay
    /// before the next tick. Invariant: `chars` moves one step per tick, so
    /// the phrase slice below is always on a char boundary (phrases are
    /// ASCII).
    pub fn tick(&mut self) -> (&'static str, u32) {
        let phrase = self.phrases[self.phrase];
        let delay = if self.deleting {
            self.chars -= 1;
            if self.chars == 0 {
                self.deleting = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
                NEXT_PHRASE_DELAY_MS
            } else {
                DELETE_DELAY_MS
            }
        } else {
            self.chars += 1;
            if self.chars == phrase.len() {
                self.deleting = true;
                HOLD_DELAY_MS
            } else {
                TYPE_DELAY_MS
            }
        };
        (&phrase[..self.chars], delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_forward_then_holds() {
        let mut state = TypingState::new(&["Projects"]);
        for expected in ["P", "Pr", "Pro", "Proj", "Proje", "Projec", "Project"] {
            assert_eq!(state.tick(), (expected, TYPE_DELAY_MS));
        }
        assert_eq!(state.tick(), ("Projects", HOLD_DELAY_MS));
    }

    #[test]
    fn deletes_back_to_empty_then_pauses() {
        let mut state = TypingState::new(&["Hi"]);
        state.tick();
        assert_eq!(state.tick(), ("Hi", HOLD_DELAY_MS));
        assert_eq!(state.tick(), ("H", DELETE_DELAY_MS));
        assert_eq!(state.tick(), ("", NEXT_PHRASE_DELAY_MS));
    }

    #[test]
    fn wraps_circularly_through_all_phrases() {
        let phrases: &[&str] = &["ab", "cd"];
        let mut state = TypingState::new(phrases);
        let mut seen = Vec::new();
        // Two full type/delete cycles land back on the first phrase.
        for _ in 0..2 {
            loop {
                let (text, delay) = state.tick();
                if delay == HOLD_DELAY_MS {
                    seen.push(text);
                }
                if delay == NEXT_PHRASE_DELAY_MS {
                    break;
                }
            }
        }
        assert_eq!(seen, vec!["ab", "cd"]);
        assert_eq!(state.tick(), ("a", TYPE_DELAY_MS));
    }
}
