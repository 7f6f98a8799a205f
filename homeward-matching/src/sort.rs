//! Herd ordering for intake lists and transport rosters.

use std::cmp::Ordering;

use homeward_core::Dog;
use thiserror::Error;

/// Field the herd is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriteria {
    /// Highest priority first.
    Priority,
    /// Youngest first.
    Age,
    /// Lightest first.
    Weight,
}

impl SortCriteria {
    /// Return the criteria as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Age => "age",
            Self::Weight => "weight",
        }
    }

    /// Ordering of `a` relative to `b` under this criteria.
    #[must_use]
    pub fn compare(self, a: &Dog, b: &Dog) -> Ordering {
        match self {
            Self::Priority => b.priority.cmp(&a.priority),
            Self::Age => a.age.cmp(&b.age),
            Self::Weight => a.weight_kg.cmp(&b.weight_kg),
        }
    }
}

impl std::fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`SortCriteria`] selector fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort criteria '{0}', expected 'priority', 'age', or 'weight'")]
pub struct SortCriteriaParseError(String);

impl std::str::FromStr for SortCriteria {
    type Err = SortCriteriaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(Self::Priority),
            "age" => Ok(Self::Age),
            "weight" => Ok(Self::Weight),
            _ => Err(SortCriteriaParseError(s.to_owned())),
        }
    }
}

/// Selector for the sorting implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    /// Stable merge sort.
    Merge,
    /// In-place quicksort.
    Quick,
}

impl SortAlgorithm {
    /// Return the selector as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }
}

impl std::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`SortAlgorithm`] selector fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort algorithm '{0}', expected 'merge' or 'quick'")]
pub struct SortAlgorithmParseError(String);

impl std::str::FromStr for SortAlgorithm {
    type Err = SortAlgorithmParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "merge" => Ok(Self::Merge),
            "quick" => Ok(Self::Quick),
            _ => Err(SortAlgorithmParseError(s.to_owned())),
        }
    }
}

/// Sort the herd in place by `criteria` using the selected algorithm.
///
/// Merge is the stable standard sort, so dogs comparing equal keep their
/// input order; quicksort gives no such guarantee.
pub fn sort_dogs(dogs: &mut [Dog], criteria: SortCriteria, algorithm: SortAlgorithm) {
    match algorithm {
        SortAlgorithm::Merge => dogs.sort_by(|a, b| criteria.compare(a, b)),
        SortAlgorithm::Quick => quicksort(dogs, criteria),
    }
}

fn quicksort(dogs: &mut [Dog], criteria: SortCriteria) {
    if dogs.len() <= 1 {
        return;
    }
    let pivot = partition(dogs, criteria);
    let (low, high) = dogs.split_at_mut(pivot);
    quicksort(low, criteria);
    if let Some((_, rest)) = high.split_first_mut() {
        quicksort(rest, criteria);
    }
}

/// Lomuto partition around the last element.
fn partition(dogs: &mut [Dog], criteria: SortCriteria) -> usize {
    let last = dogs.len().saturating_sub(1);
    let mut store = 0;
    for probe in 0..last {
        let before_pivot = match (dogs.get(probe), dogs.get(last)) {
            (Some(a), Some(p)) => criteria.compare(a, p) != Ordering::Greater,
            _ => false,
        };
        if before_pivot {
            dogs.swap(probe, store);
            store += 1;
        }
    }
    dogs.swap(store, last);
    store
}

#[cfg(test)]
#[expect(
    clippy::indexing_slicing,
    reason = "tests index adjacent pairs from windows of known width"
)]
mod tests {
    use super::*;
    use homeward_core::test_support::sample_dogs;
    use rstest::rstest;
    use std::str::FromStr;

    fn field(dogs: &[Dog], criteria: SortCriteria) -> Vec<u32> {
        dogs.iter()
            .map(|dog| match criteria {
                SortCriteria::Priority => dog.priority,
                SortCriteria::Age => dog.age,
                SortCriteria::Weight => dog.weight_kg,
            })
            .collect()
    }

    #[rstest]
    #[case(SortAlgorithm::Merge)]
    #[case(SortAlgorithm::Quick)]
    fn priority_orders_highest_first(#[case] algorithm: SortAlgorithm) {
        let mut dogs = sample_dogs();
        sort_dogs(&mut dogs, SortCriteria::Priority, algorithm);
        let priorities = field(&dogs, SortCriteria::Priority);
        assert!(priorities.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[rstest]
    #[case(SortCriteria::Age)]
    #[case(SortCriteria::Weight)]
    fn age_and_weight_order_ascending(#[case] criteria: SortCriteria) {
        let mut dogs = sample_dogs();
        sort_dogs(&mut dogs, criteria, SortAlgorithm::Quick);
        let keys = field(&dogs, criteria);
        assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[rstest]
    fn both_algorithms_agree_on_distinct_keys() {
        let mut by_merge = sample_dogs();
        let mut by_quick = sample_dogs();
        sort_dogs(&mut by_merge, SortCriteria::Weight, SortAlgorithm::Merge);
        sort_dogs(&mut by_quick, SortCriteria::Weight, SortAlgorithm::Quick);
        assert_eq!(by_merge, by_quick);
    }

    #[rstest]
    fn merge_is_stable_on_equal_keys() {
        let mut dogs = sample_dogs();
        for dog in &mut dogs {
            dog.age = 3;
        }
        let before: Vec<String> = dogs.iter().map(|dog| dog.id.clone()).collect();
        sort_dogs(&mut dogs, SortCriteria::Age, SortAlgorithm::Merge);
        let after: Vec<String> = dogs.iter().map(|dog| dog.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[rstest]
    fn selectors_parse_and_reject() {
        assert_eq!(SortCriteria::from_str("Priority"), Ok(SortCriteria::Priority));
        assert_eq!(SortAlgorithm::from_str("quick"), Ok(SortAlgorithm::Quick));
        assert!(SortCriteria::from_str("height").is_err());
        assert!(SortAlgorithm::from_str("bubble").is_err());
    }
}
