//! Cache backend that only records invalidations.

use crate::TagAwareCache;
use parking_lot::Mutex;
use t3composer_core::{Error, Result};

/// Records every tag list it is asked to invalidate.
///
/// Used to preview purges and in tests. A failing recorder rejects each
/// call with a cache error after recording it.
#[derive(Debug, Default)]
pub struct RecordingCache {
    calls: Mutex<Vec<Vec<String>>>,
    failure: Option<String>,
}

impl RecordingCache {
    /// Create an accepting recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder whose backend always fails with `message`.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Mutex::default(),
            failure: Some(message.into()),
        }
    }

    /// Tag lists in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().clone()
    }

    /// Tags of the most recent call.
    #[must_use]
    pub fn last(&self) -> Option<Vec<String>> {
        self.calls.lock().last().cloned()
    }

    /// Forget recorded calls.
    pub fn reset(&self) {
        self.calls.lock().clear();
    }
}

impl TagAwareCache for RecordingCache {
    fn invalidate_tags(&self, tags: &[String]) -> Result<bool> {
        self.calls.lock().push(tags.to_vec());
        match &self.failure {
            Some(message) => Err(Error::cache(message.clone())),
            None => Ok(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let cache = RecordingCache::new();
        cache.invalidate_tags(&["a".to_string()]).unwrap();
        cache.invalidate_tags(&["b".to_string(), "c".to_string()]).unwrap();

        assert_eq!(cache.calls().len(), 2);
        assert_eq!(cache.last(), Some(vec!["b".to_string(), "c".to_string()]));

        cache.reset();
        assert!(cache.calls().is_empty());
    }

    #[test]
    fn failing_still_records() {
        let cache = RecordingCache::failing("unreachable");
        let err = cache.invalidate_tags(&["release".to_string()]).unwrap_err();
        assert_eq!(err.code(), t3composer_core::ErrorCode::E0601);
        assert_eq!(cache.calls().len(), 1);
    }
}
