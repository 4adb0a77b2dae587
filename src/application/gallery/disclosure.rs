// SPDX-License-Identifier: MPL-2.0
//! Progressive "see more" reveal of the thumbnail grid.
//!
//! The grid starts with a prefix of the gallery plus, optionally, the last
//! item so the final photo is always reachable. Each reveal extends the
//! prefix. Indices are global media indices throughout; a visible position
//! only exists for highlighting the active thumbnail.

/// Which thumbnails are currently rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    total: usize,
    prefix: usize,
    reveal_batch: usize,
    keep_last_visible: bool,
}

impl Disclosure {
    /// Creates the initial disclosure for `total` items.
    #[must_use]
    pub fn new(total: usize, initial_visible: usize, reveal_batch: usize, keep_last_visible: bool) -> Self {
        Self {
            total,
            prefix: initial_visible.min(total),
            reveal_batch: reveal_batch.max(1),
            keep_last_visible,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    fn shows_trailing_last(&self) -> bool {
        self.keep_last_visible && self.prefix < self.total
    }

    /// Number of rendered thumbnails.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.prefix + usize::from(self.shows_trailing_last())
    }

    /// Global indices of rendered thumbnails, in grid order.
    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.prefix).collect();
        if self.shows_trailing_last() {
            indices.push(self.total - 1);
        }
        indices
    }

    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        index < self.prefix || self.shows_trailing_last() && index + 1 == self.total
    }

    /// Grid position of a global index, `None` while it is hidden.
    #[must_use]
    pub fn visible_position(&self, index: usize) -> Option<usize> {
        if index < self.prefix {
            Some(index)
        } else if self.shows_trailing_last() && index + 1 == self.total {
            Some(self.prefix)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.visible_count() >= self.total
    }

    /// Reveals the next batch and returns the newly shown global indices.
    ///
    /// Returns an empty list once every thumbnail is visible.
    pub fn reveal_more(&mut self) -> Vec<usize> {
        if self.is_complete() {
            return Vec::new();
        }
        let previous = self.prefix;
        let had_trailing = self.shows_trailing_last();
        self.prefix = (self.prefix + self.reveal_batch).min(self.total);

        (previous..self.prefix)
            .filter(|&index| !(had_trailing && index + 1 == self.total))
            .collect()
    }
}
