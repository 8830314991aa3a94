use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::features::questions::models::Question;

/// Chooses which candidate the quiz asks next
pub trait QuestionPicker: Send + Sync {
    /// Index in `0..len`; never called with `len == 0`
    fn pick(&self, len: usize) -> usize;
}

/// Uniform choice from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl QuestionPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform choice from a seeded RNG, reproducible across runs
#[derive(Debug)]
pub struct SeededPicker {
    rng: Mutex<StdRng>,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl QuestionPicker for SeededPicker {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// One candidate chosen by `picker`, or `None` when there are none
pub fn select_question(candidates: Vec<Question>, picker: &dyn QuestionPicker) -> Option<Question> {
    if candidates.is_empty() {
        return None;
    }
    let index = picker.pick(candidates.len()).min(candidates.len() - 1);
    candidates.into_iter().nth(index)
}
