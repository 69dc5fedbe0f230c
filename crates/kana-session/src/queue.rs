use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use kana_core::settings::settings;
use kana_core::words::Word;
use tracing::warn;

/// Cycles through a word list, optionally in shuffled order.
pub struct WordQueue {
    words: Vec<Word>,
    next: usize,
    shuffle: bool,
    reshuffle_on_wrap: bool,
    rng: StdRng,
}

impl WordQueue {
    /// Create a queue with the `[session]` settings and an entropy-seeded RNG.
    pub fn new(words: Vec<Word>) -> Self {
        let s = &settings().session;
        Self::with_rng(words, s.shuffle_words, s.reshuffle_on_wrap, StdRng::from_entropy())
    }

    /// Create a queue whose shuffles are reproducible from `seed`.
    pub fn seeded(words: Vec<Word>, seed: u64) -> Self {
        let s = &settings().session;
        Self::with_rng(
            words,
            s.shuffle_words,
            s.reshuffle_on_wrap,
            StdRng::seed_from_u64(seed),
        )
    }

    /// Create a queue that yields words in list order forever.
    pub fn in_order(words: Vec<Word>) -> Self {
        Self::with_rng(words, false, false, StdRng::seed_from_u64(0))
    }

    pub fn with_rng(words: Vec<Word>, shuffle: bool, reshuffle_on_wrap: bool, rng: StdRng) -> Self {
        let mut queue = Self {
            words: usable_words(words),
            next: 0,
            shuffle,
            reshuffle_on_wrap,
            rng,
        };
        if queue.shuffle {
            queue.words.shuffle(&mut queue.rng);
        }
        queue
    }

    /// Go back to the first word. A shuffled queue that reshuffles on wrap
    /// also draws a fresh order.
    pub fn rewind(&mut self) {
        self.next = 0;
        if self.shuffle && self.reshuffle_on_wrap {
            self.words.shuffle(&mut self.rng);
        }
    }

    /// Next word, wrapping to the start when the list is exhausted.
    /// `None` only for an empty list.
    pub fn next_word(&mut self) -> Option<&Word> {
        if self.words.is_empty() {
            return None;
        }
        if self.next >= self.words.len() {
            self.next = 0;
            if self.shuffle && self.reshuffle_on_wrap {
                self.words.shuffle(&mut self.rng);
            }
        }
        let word = &self.words[self.next];
        self.next += 1;
        Some(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in their current order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

/// Drop words whose reading is blank: they would be complete before the
/// first keystroke.
fn usable_words(words: Vec<Word>) -> Vec<Word> {
    let total = words.len();
    let usable: Vec<Word> = words
        .into_iter()
        .filter(|w| !w.kana.trim().is_empty())
        .collect();
    if usable.len() < total {
        warn!(dropped = total - usable.len(), "words with blank readings dropped");
    }
    usable
}
