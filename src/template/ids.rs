//! Template identifiers and per-category id allocation
//!
//! Every category owns a fixed, contiguous `[start, end]` block of numeric ids.
//! Other systems key off this partitioning, so the table below is a durable
//! contract: changing it requires a manifest version bump.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::types::Category;

const ID_PREFIX: &str = "ID-t";

/// Identifier of a registered template, rendered as `ID-t<N>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TemplateId(u32);

impl TemplateId {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// The numeric suffix
    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ID_PREFIX, self.0)
    }
}

/// A string that does not have the `ID-t<digits>` shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid template id format: '{0}' (expected ID-t<number>)")]
pub struct InvalidTemplateId(pub String);

impl FromStr for TemplateId {
    type Err = InvalidTemplateId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(ID_PREFIX)
            // canonical form only: no sign, no leading zeros
            .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
            .filter(|d| d.len() == 1 || !d.starts_with('0'))
            .ok_or_else(|| InvalidTemplateId(s.to_string()))?;
        digits
            .parse()
            .map(TemplateId)
            .map_err(|_| InvalidTemplateId(s.to_string()))
    }
}

impl Serialize for TemplateId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Inclusive numeric id range reserved for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub start: u32,
    pub end: u32,
}

impl IdRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Number of ids in the range
    pub fn capacity(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn contains(&self, id: TemplateId) -> bool {
        (self.start..=self.end).contains(&id.number())
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl Category {
    /// The id block reserved for this category
    pub fn id_range(&self) -> IdRange {
        match self {
            Category::Core => IdRange::new(1, 50),
            Category::ScrollTrigger => IdRange::new(51, 150),
            Category::Svg => IdRange::new(151, 250),
            Category::Physics => IdRange::new(251, 350),
            Category::Text => IdRange::new(351, 450),
            Category::Advanced => IdRange::new(451, 550),
        }
    }
}

/// The category's range has no ids left
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("template limit reached for category {category}: range {start}..={end} is exhausted")]
pub struct RangeExhausted {
    pub category: Category,
    pub start: u32,
    pub end: u32,
}

/// Per-category id counters.
///
/// `peek` computes the next id without consuming it; `allocate` consumes it.
/// Ids are never handed out twice and never recycled.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    counters: HashMap<Category, u32>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next allocation in `category` would return
    pub fn peek(&self, category: Category) -> Result<TemplateId, RangeExhausted> {
        let range = category.id_range();
        let next = range.start + self.allocated(category);
        if next > range.end {
            return Err(RangeExhausted {
                category,
                start: range.start,
                end: range.end,
            });
        }
        Ok(TemplateId(next))
    }

    /// Consume and return the next id in `category`
    pub fn allocate(&mut self, category: Category) -> Result<TemplateId, RangeExhausted> {
        let id = self.peek(category)?;
        *self.counters.entry(category).or_insert(0) += 1;
        Ok(id)
    }

    /// How many ids have been handed out in `category`
    pub fn allocated(&self, category: Category) -> u32 {
        self.counters.get(&category).copied().unwrap_or(0)
    }

    /// How many ids are still free in `category`
    pub fn remaining(&self, category: Category) -> u32 {
        category
            .id_range()
            .capacity()
            .saturating_sub(self.allocated(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_and_parse() {
        let id = TemplateId::new(42);
        assert_eq!(id.to_string(), "ID-t42");
        assert_eq!("ID-t42".parse::<TemplateId>(), Ok(id));
    }

    #[test]
    fn test_id_parse_rejects_bad_shapes() {
        for bad in ["ID-t", "ID-tx1", "id-t1", "ID-t-1", "T1", "", "ID-t0451", "ID-t00"] {
            assert!(bad.parse::<TemplateId>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_ranges_do_not_overlap() {
        let ranges: Vec<IdRange> = Category::ALL.iter().map(|c| c.id_range()).collect();
        for pair in ranges.windows(2) {
            assert!(pair[0].end < pair[1].start);
        }
        assert!(ranges.iter().all(|r| r.capacity() <= 100));
    }

    #[test]
    fn test_allocation_is_sequential_per_category() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.allocate(Category::Core).unwrap().to_string(), "ID-t1");
        assert_eq!(ids.allocate(Category::ScrollTrigger).unwrap().to_string(), "ID-t51");
        assert_eq!(ids.allocate(Category::Core).unwrap().to_string(), "ID-t2");
        assert_eq!(ids.allocated(Category::Core), 2);
        assert_eq!(ids.remaining(Category::Core), 48);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.peek(Category::Text).unwrap(), TemplateId::new(351));
        assert_eq!(ids.peek(Category::Text).unwrap(), TemplateId::new(351));
        assert_eq!(ids.allocate(Category::Text).unwrap(), TemplateId::new(351));
        assert_eq!(ids.peek(Category::Text).unwrap(), TemplateId::new(352));
    }

    #[test]
    fn test_exhaustion_is_sticky_and_leaves_counter_alone() {
        let mut ids = IdAllocator::new();
        for _ in 0..50 {
            ids.allocate(Category::Core).unwrap();
        }
        let err = ids.allocate(Category::Core).unwrap_err();
        assert_eq!(
            err,
            RangeExhausted {
                category: Category::Core,
                start: 1,
                end: 50
            }
        );
        assert!(ids.allocate(Category::Core).is_err());
        assert_eq!(ids.allocated(Category::Core), 50);
        assert_eq!(ids.remaining(Category::Core), 0);
    }
}
