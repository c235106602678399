use crate::models::{Availability, Condition, PartIdentity};
use std::collections::HashMap;

/// Per-run memo of remote lookups, so repeated queries never re-hit the API.
///
/// Misses are cached too: a description that resolved to nothing stays
/// unresolved for the rest of the run.
#[derive(Debug, Default)]
pub struct ResponseCache {
    /// Description -> resolved identity
    parts: HashMap<String, Option<PartIdentity>>,
    /// (number, type, condition) -> stock figures
    availability: HashMap<(String, String, Condition), Availability>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn availability_key(part: &PartIdentity, condition: Condition) -> (String, String, Condition) {
        (part.number.clone(), part.item_type.clone(), condition)
    }

    /// Cached resolution for a description; `None` if never looked up
    pub fn part(&self, description: &str) -> Option<&Option<PartIdentity>> {
        self.parts.get(description)
    }

    pub fn insert_part(&mut self, description: &str, part: Option<PartIdentity>) {
        self.parts.insert(description.to_string(), part);
    }

    pub fn availability(&self, part: &PartIdentity, condition: Condition) -> Option<Availability> {
        self.availability
            .get(&Self::availability_key(part, condition))
            .copied()
    }

    pub fn insert_availability(
        &mut self,
        part: &PartIdentity,
        condition: Condition,
        availability: Availability,
    ) {
        self.availability
            .insert(Self::availability_key(part, condition), availability);
    }

    pub fn clear(&mut self) {
        self.parts.clear();
        self.availability.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brick() -> PartIdentity {
        PartIdentity {
            number: "3001".to_string(),
            item_type: "PART".to_string(),
        }
    }

    #[test]
    fn remembers_misses() {
        let mut cache = ResponseCache::new();
        assert!(cache.part("Mystery Part").is_none());

        cache.insert_part("Mystery Part", None);
        assert_eq!(cache.part("Mystery Part"), Some(&None));
    }

    #[test]
    fn availability_keyed_by_condition() {
        let mut cache = ResponseCache::new();
        let figures = Availability {
            total_quantity: Some(120),
            total_lots: Some(8),
        };
        cache.insert_availability(&brick(), Condition::New, figures);

        assert_eq!(cache.availability(&brick(), Condition::New), Some(figures));
        assert_eq!(cache.availability(&brick(), Condition::Used), None);
    }

    #[test]
    fn clear_empties_both_maps() {
        let mut cache = ResponseCache::new();
        cache.insert_part("Brick 2 x 4", Some(brick()));
        cache.insert_availability(&brick(), Condition::Used, Availability::unavailable());

        cache.clear();
        assert!(cache.part("Brick 2 x 4").is_none());
        assert_eq!(cache.availability(&brick(), Condition::Used), None);
    }
}
