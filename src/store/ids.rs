//! Item id generation.
//!
//! The store never invents ids itself; it asks an [`IdGenerator`]. Production
//! code uses [`CuidGenerator`], which produces collision-resistant ids in the
//! style of `cuid` (`c` + timestamp + counter + fingerprint, all base 36).
//! Tests use [`SequentialIds`] for deterministic, readable ids.

use crate::domain::ItemId;

/// Source of fresh, unique item ids.
pub trait IdGenerator {
    /// Returns an id never returned before by this generator.
    fn next_id(&mut self) -> ItemId;
}

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

fn pad(mut s: String, width: usize) -> String {
    while s.len() < width {
        s.insert(0, '0');
    }
    s
}

/// Timestamp-and-counter id generator.
///
/// Uniqueness within a generator is guaranteed by the monotonically
/// increasing counter, which is never truncated. The fingerprint separates
/// generators created at different instants.
#[derive(Debug, Clone)]
pub struct CuidGenerator {
    counter: u64,
    fingerprint: String,
}

impl CuidGenerator {
    const BLOCK: usize = 4;

    #[must_use]
    pub fn new() -> Self {
        let nanos = chrono::Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default()
            .unsigned_abs();
        let fingerprint = base36(nanos % 36_u64.pow(Self::BLOCK as u32));
        Self {
            counter: 0,
            fingerprint: pad(fingerprint, Self::BLOCK),
        }
    }
}

impl Default for CuidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for CuidGenerator {
    fn next_id(&mut self) -> ItemId {
        let timestamp = chrono::Utc::now().timestamp_millis().unsigned_abs();
        let counter = pad(base36(self.counter), Self::BLOCK);
        self.counter += 1;
        ItemId::new(format!(
            "c{}{counter}{}",
            base36(timestamp),
            self.fingerprint
        ))
    }
}

/// Deterministic generator yielding `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("item")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        let id = ItemId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn base36_encodes_known_values() {
        assert_eq!(base36(0), "0");
        assert_eq!(base36(35), "z");
        assert_eq!(base36(36), "10");
        assert_eq!(pad(base36(1), 4), "0001");
    }

    #[test]
    fn cuid_ids_are_unique_and_prefixed() {
        let mut ids = CuidGenerator::new();
        let generated: Vec<ItemId> = (0..500).map(|_| ids.next_id()).collect();
        let unique: HashSet<&ItemId> = generated.iter().collect();

        assert_eq!(unique.len(), generated.len());
        assert!(generated.iter().all(|id| id.as_str().starts_with('c')));
    }

    #[test]
    fn sequential_ids_count_from_one() {
        let mut ids = SequentialIds::new("t");
        assert_eq!(ids.next_id().as_str(), "t-1");
        assert_eq!(ids.next_id().as_str(), "t-2");
    }
}
