use crate::models::EntryId;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh entry identifiers. Injected into the app state so tests can
/// use a deterministic sequence.
pub trait IdGenerator: Send + Sync + 'static {
    fn next_id(&self) -> EntryId;
}

/// Hex ids from random v4 uuids.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&self) -> EntryId {
        EntryId::new(Uuid::new_v4().simple().to_string())
    }
}

/// Monotonic counter: `1`, `2`, `3`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> EntryId {
        let value = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        EntryId::new(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sequential_ids_count_up_from_one() {
        let ids = SequentialIds::new();
        let issued: Vec<String> = (0..3).map(|_| ids.next_id().to_string()).collect();
        assert_eq!(issued, ["1", "2", "3"]);
    }

    #[test]
    fn random_ids_do_not_repeat() {
        let ids = RandomIds;
        let issued: HashSet<EntryId> = (0..500).map(|_| ids.next_id()).collect();
        assert_eq!(issued.len(), 500);
        assert!(issued.iter().all(|id| id.as_str().len() == 32));
    }
}
