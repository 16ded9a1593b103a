//! Edit history on top of the stateless filters.
//!
//! An [`EditSession`] keeps the decoded original and a stack of filtered
//! results. Every [`EditSession::apply`] filters the *original*, never the
//! current image, so edits do not compound: picking "sepia 0.2" after
//! "contrast 100" shows sepia on the untouched photo. Undo pops the stack
//! and falls back to the original once it is empty.

use tracing::{debug, warn};

use crate::buffer::PixelBuffer;
use crate::error::FilterResult;
use crate::filters::Filter;

/// One applied edit.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub filter: Filter,
    pub result: PixelBuffer,
}

/// Original image plus an undo stack of filtered results.
#[derive(Debug, Clone)]
pub struct EditSession {
    original: PixelBuffer,
    history: Vec<HistoryEntry>,
    history_limit: Option<usize>,
}

impl EditSession {
    pub fn new(original: PixelBuffer) -> Self {
        Self {
            original,
            history: Vec::new(),
            history_limit: None,
        }
    }

    /// Keep at most `limit` results (at least one); the oldest are dropped first.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        let limit = limit.max(1);
        self.history_limit = Some(limit);
        self.trim_history();
        self
    }

    /// The baseline every filter is applied to.
    pub fn original(&self) -> &PixelBuffer {
        &self.original
    }

    /// The most recent result, or the original when nothing has been applied.
    pub fn current(&self) -> &PixelBuffer {
        self.history
            .last()
            .map(|entry| &entry.result)
            .unwrap_or(&self.original)
    }

    /// Filter the original and push the result.
    ///
    /// On error nothing changes and the current image stays on display.
    pub fn apply(&mut self, filter: Filter) -> FilterResult<&PixelBuffer> {
        let result = match filter.apply(&self.original) {
            Ok(result) => result,
            Err(e) => {
                warn!(%filter, error = %e, "Edit refused");
                return Err(e);
            }
        };

        debug!(%filter, depth = self.history.len() + 1, "Applied edit");
        self.history.push(HistoryEntry { filter, result });
        self.trim_history();
        Ok(self.current())
    }

    /// Drop the latest result and return what is now current.
    pub fn undo(&mut self) -> &PixelBuffer {
        if let Some(entry) = self.history.pop() {
            debug!(filter = %entry.filter, depth = self.history.len(), "Undid edit");
        }
        self.current()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Filter that produced the current image, if any.
    pub fn last_filter(&self) -> Option<Filter> {
        self.history.last().map(|entry| entry.filter)
    }

    /// `(original, current)` for a before/after view.
    pub fn compare(&self) -> (&PixelBuffer, &PixelBuffer) {
        (&self.original, self.current())
    }

    /// Start over from a new photo. History is cleared.
    pub fn replace_original(&mut self, original: PixelBuffer) {
        debug!(
            width = original.width(),
            height = original.height(),
            dropped = self.history.len(),
            "Replaced original"
        );
        self.original = original;
        self.history.clear();
    }

    /// Discard all edits, keeping the original.
    pub fn reset(&mut self) {
        debug!(dropped = self.history.len(), "Reset edits");
        self.history.clear();
    }

    fn trim_history(&mut self) {
        if let Some(limit) = self.history_limit {
            if self.history.len() > limit {
                let excess = self.history.len() - limit;
                self.history.drain(..excess);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Pixel;
    use crate::error::FilterError;
    use crate::filters::{amplify_brightness, apply_sepia, Channel};

    fn photo() -> PixelBuffer {
        PixelBuffer::from_pixels(
            2,
            1,
            vec![Pixel::new(200, 100, 50, 255), Pixel::new(10, 20, 30, 128)],
        )
        .unwrap()
    }

    #[test]
    fn test_new_session_shows_original() {
        let session = EditSession::new(photo());
        assert_eq!(session.current(), &photo());
        assert!(!session.can_undo());
        assert_eq!(session.last_filter(), None);
    }

    #[test]
    fn test_apply_filters_original_not_current() {
        let mut session = EditSession::new(photo());
        session.apply(Filter::Brightness(50)).unwrap();
        session.apply(Filter::Brightness(50)).unwrap();

        // Second edit does not stack on the first
        assert_eq!(session.current(), &amplify_brightness(&photo(), 50).unwrap());
        assert_eq!(session.original(), &photo());
        assert_eq!(session.history_len(), 2);
    }

    #[test]
    fn test_undo_walks_back_to_original() {
        let mut session = EditSession::new(photo());
        session.apply(Filter::Brightness(10)).unwrap();
        session.apply(Filter::Sepia(0.1)).unwrap();
        assert_eq!(session.last_filter(), Some(Filter::Sepia(0.1)));

        let current = session.undo().clone();
        assert_eq!(current, amplify_brightness(&photo(), 10).unwrap());

        assert_eq!(session.undo(), &photo());
        assert!(!session.can_undo());

        // Undo with empty history stays on the original
        assert_eq!(session.undo(), &photo());
    }

    #[test]
    fn test_failed_edit_keeps_state() {
        let mut session = EditSession::new(photo());
        session.apply(Filter::Sepia(0.2)).unwrap();

        let err = session.apply(Filter::Contrast(259)).unwrap_err();
        assert!(matches!(err, FilterError::InvalidParameter(_)));
        assert_eq!(session.history_len(), 1);
        assert_eq!(session.current(), &apply_sepia(&photo(), 0.2).unwrap());

        let err = session
            .apply(Filter::AmplifyChannel { channel: Channel::Red, amount: 0, reverse: true })
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidParameter(_)));
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_empty_original_refuses_edits() {
        let mut session = EditSession::new(PixelBuffer::new(0, 0));
        let err = session.apply(Filter::Grey(0.0)).unwrap_err();
        assert!(matches!(err, FilterError::InvalidBuffer(_)));
        assert!(!session.can_undo());
    }

    #[test]
    fn test_replace_original_clears_history() {
        let mut session = EditSession::new(photo());
        session.apply(Filter::Sketch(0.0)).unwrap();

        let next = PixelBuffer::filled(3, 3, Pixel::new(1, 2, 3, 4));
        session.replace_original(next.clone());
        assert_eq!(session.current(), &next);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_compare_and_reset() {
        let mut session = EditSession::new(photo());
        session.apply(Filter::Grey(0.0)).unwrap();

        let (before, after) = session.compare();
        assert_eq!(before, &photo());
        assert_ne!(before, after);

        session.reset();
        assert_eq!(session.current(), &photo());
    }

    #[test]
    fn test_history_limit_drops_oldest() {
        let mut session = EditSession::new(photo()).with_history_limit(2);
        session.apply(Filter::Brightness(1)).unwrap();
        session.apply(Filter::Brightness(2)).unwrap();
        session.apply(Filter::Brightness(3)).unwrap();

        assert_eq!(session.history_len(), 2);
        let filters: Vec<Filter> = session.history().iter().map(|e| e.filter).collect();
        assert_eq!(filters, vec![Filter::Brightness(2), Filter::Brightness(3)]);

        session.undo();
        session.undo();
        assert_eq!(session.current(), &photo());
    }
}
