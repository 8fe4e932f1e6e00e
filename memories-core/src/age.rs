//! Age bucketing and labeling.
//!
//! Memories arrive from the API oldest-to-newest and are displayed grouped
//! by contiguous runs of identical `(years, months)` ages. Grouping never
//! reorders: concatenating the groups reproduces the input exactly.

use std::fmt;

use crate::types::{Age, Memory};

/// A maximal run of consecutive memories sharing one [`Age`] bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeGroup {
    /// The bucket, taken from the run's first memory.
    pub age: Age,
    /// The run's memories, in API order.
    pub memories: Vec<Memory>,
}

/// Partition an ordered memory sequence into maximal runs of equal
/// `(years, months)`.
///
/// A new run starts exactly when either field differs from the **run's
/// first element**; the run head is the comparison anchor, not the
/// immediately preceding item.
#[must_use]
pub fn group_by_age(memories: &[Memory]) -> Vec<AgeGroup> {
    let mut groups: Vec<AgeGroup> = Vec::new();

    for memory in memories {
        match groups.last_mut() {
            Some(group) if group.age == memory.age() => group.memories.push(memory.clone()),
            _ => groups.push(AgeGroup {
                age: memory.age(),
                memories: vec![memory.clone()],
            }),
        }
    }

    groups
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.years, self.months) {
            (0, 0) => write!(f, "newborn"),
            (0, m) => write!(f, "{m} month{}", plural(m)),
            (y, 0) => write!(f, "{y} year{}", plural(y)),
            (y, m) => write!(f, "{y} year{}, {m} month{}", plural(y), plural(m)),
        }
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}
