use std::time::Duration;

const DEFAULT_TYPE_DELAY_MS: u64 = 40;
const DEFAULT_DELETE_DELAY_MS: u64 = 24;
const DEFAULT_HOLD_MS: u64 = 1400;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TypingTimings {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold: Duration,
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(DEFAULT_TYPE_DELAY_MS),
            delete_delay: Duration::from_millis(DEFAULT_DELETE_DELAY_MS),
            hold: Duration::from_millis(DEFAULT_HOLD_MS),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

pub struct TypingCycle {
    phrases: &'static [&'static str],
    index: usize,
    shown: String,
    phase: Phase,
}

impl TypingCycle {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        assert!(!phrases.is_empty(), "typing cycle requires at least one phrase");

        Self {
            phrases,
            index: 0,
            shown: String::new(),
            phase: Phase::Typing,
        }
    }

    pub fn displayed(&self) -> &str {
        &self.shown
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    fn current_phrase(&self) -> &'static str {
        self.phrases[self.index]
    }

    pub fn delay(&self, timings: TypingTimings) -> Duration {
        match self.phase {
            Phase::Typing => timings.type_delay,
            Phase::Holding => timings.hold,
            Phase::Deleting => timings.delete_delay,
        }
    }

    pub fn advance(&mut self) {
        match self.phase {
            Phase::Typing => {
                let phrase = self.current_phrase();

                if let Some(next) = phrase[self.shown.len()..].chars().next() {
                    self.shown.push(next);
                }

                if self.shown.len() == phrase.len() {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                self.shown.pop();

                if self.shown.is_empty() {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}
