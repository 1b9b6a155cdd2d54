//! Transient "Copied!" feedback for copy controls
//!
//! After a successful copy the initiating control shows [`COPIED_LABEL`]
//! and is disabled until its revert fires, then shows [`COPY_LABEL`] again.
//! Each control is tracked independently by key.

use std::collections::HashSet;
use std::hash::Hash;
use std::time::Duration;

use tracing::trace;

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

#[derive(Debug, Clone)]
pub struct CopyFeedback<K> {
    active: HashSet<K>,
    duration: Duration,
}

impl<K: Eq + Hash + Clone + std::fmt::Debug> CopyFeedback<K> {
    pub fn new(duration: Duration) -> Self {
        Self {
            active: HashSet::new(),
            duration,
        }
    }

    /// How long a control stays in its copied state
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Switch `key` into its copied state. Returns `false` when the control
    /// is still disabled from an earlier copy.
    pub fn begin(&mut self, key: K) -> bool {
        if self.active.contains(&key) {
            return false;
        }
        trace!(?key, "copy feedback started");
        self.active.insert(key);
        true
    }

    /// Revert `key` to its original label. Returns whether it was active.
    pub fn revert(&mut self, key: &K) -> bool {
        let was_active = self.active.remove(key);
        if was_active {
            trace!(?key, "copy feedback reverted");
        }
        was_active
    }

    pub fn is_disabled(&self, key: &K) -> bool {
        self.active.contains(key)
    }

    pub fn label(&self, key: &K) -> &'static str {
        if self.is_disabled(key) {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copied_then_reverted() {
        let mut feedback = CopyFeedback::new(Duration::from_millis(2000));

        assert_eq!(feedback.label(&1), COPY_LABEL);
        assert!(feedback.begin(1));
        assert_eq!(feedback.label(&1), COPIED_LABEL);
        assert!(feedback.is_disabled(&1));

        assert!(feedback.revert(&1));
        assert_eq!(feedback.label(&1), COPY_LABEL);
        assert!(!feedback.is_disabled(&1));
        assert!(!feedback.revert(&1));
    }

    #[test]
    fn test_disabled_control_ignores_second_copy() {
        let mut feedback = CopyFeedback::new(Duration::from_millis(2000));

        assert!(feedback.begin("a"));
        assert!(!feedback.begin("a"));
        assert!(feedback.begin("b"));

        // Controls revert independently
        assert!(feedback.revert(&"a"));
        assert!(feedback.is_disabled(&"b"));
        assert_eq!(feedback.label(&"a"), COPY_LABEL);
    }
}
