/// Tracks which entries of a collection have completed, keyed by entry
/// position at dispatch time rather than by arrival order.
#[derive(Debug, Clone)]
pub struct CompletionTracker {
    done: Vec<bool>,
    remaining: usize,
}

impl CompletionTracker {
    pub fn new(len: usize) -> Self {
        Self { done: vec![false; len], remaining: len }
    }

    /// Marks `index` complete. Returns `false` for an unknown index or an
    /// entry that already completed.
    pub fn complete(&mut self, index: usize) -> bool {
        match self.done.get_mut(index) {
            Some(done) if !*done => {
                *done = true;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn is_complete(&self, index: usize) -> bool {
        self.done.get(index).copied().unwrap_or(false)
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    pub fn completed(&self) -> usize {
        self.done.len() - self.remaining
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_done_only_after_every_entry() {
        let mut fixture = CompletionTracker::new(3);

        fixture.complete(2);
        fixture.complete(0);
        assert!(!fixture.is_done());

        fixture.complete(1);
        assert!(fixture.is_done());
        assert_eq!(fixture.completed(), 3);
    }

    #[test]
    fn test_repeated_completion_is_not_counted() {
        let mut fixture = CompletionTracker::new(2);

        assert!(fixture.complete(1));
        assert!(!fixture.complete(1));

        assert!(!fixture.is_done());
        assert!(fixture.is_complete(1));
        assert!(!fixture.is_complete(0));
        assert_eq!(fixture.completed(), 1);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let mut fixture = CompletionTracker::new(1);
        assert!(!fixture.complete(5));
        assert!(!fixture.is_done());
    }

    #[test]
    fn test_empty_tracker_is_done() {
        let fixture = CompletionTracker::new(0);
        assert!(fixture.is_done());
        assert!(fixture.is_empty());
    }
}
