//! Testimonial card stack on the home page.
//!
//! The top card flies off, then the deck advances. After the last card the
//! deck wraps and every card re-enters the stack.

#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;

/// How long the fly-out transition runs before the deck advances.
pub const FLY_OUT_MS: u32 = 800;

/// Resting transform of one card in the stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub rotate_deg: f64,
    pub z_index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardState {
    /// Visible in the stack.
    Stacked,
    /// Flying off the top of the stack.
    Leaving,
    /// Already shown this round.
    Dismissed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewDeck {
    len: usize,
    current: usize,
    leaving: Option<usize>,
}

impl ReviewDeck {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0, leaving: None }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.leaving.is_some()
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn pose(&self, index: usize) -> CardPose {
        CardPose { rotate_deg: index as f64 * 2.0 - self.len as f64 / 2.0, z_index: self.len.saturating_sub(index) }
    }

    pub fn card_state(&self, index: usize) -> CardState {
        if self.leaving == Some(index) {
            CardState::Leaving
        } else if index < self.current {
            CardState::Dismissed
        } else {
            CardState::Stacked
        }
    }

    /// Start flying the top card off. Returns the card index, or `None` while
    /// a card is already leaving or the deck is empty.
    pub fn begin_advance(&mut self) -> Option<usize> {
        if self.len == 0 || self.leaving.is_some() {
            return None;
        }
        self.leaving = Some(self.current);
        self.leaving
    }

    /// Finish the fly-out and move to the next card. Returns `true` when the
    /// deck wrapped back to the first card.
    pub fn finish_advance(&mut self) -> bool {
        if self.leaving.take().is_none() {
            return false;
        }
        self.current = (self.current + 1) % self.len;
        self.current == 0
    }
}
