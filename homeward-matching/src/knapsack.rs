//! Transport allocation as a 0/1 knapsack over dog priorities.

use homeward_core::Dog;

/// Dogs chosen for a transport run of bounded payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportPlan {
    /// Identifiers of the selected dogs, in input order.
    pub selected: Vec<String>,
    /// Sum of the selected dogs' priorities.
    pub total_priority: u32,
    /// Sum of the selected dogs' weights in kilograms.
    pub total_weight: u32,
}

/// Pick the subset of dogs maximizing total priority within `capacity_kg`.
///
/// Bottom-up dynamic programming over (dog, remaining capacity), followed
/// by a backward walk over the table to recover which dogs the optimum
/// took. No dogs or zero capacity yields an empty plan.
///
/// # Examples
/// ```
/// use homeward_core::{Dog, Energy, Size};
/// use homeward_matching::plan_transport;
///
/// let dogs = vec![
///     Dog::new("D1", "Luna", Size::Small, Energy::Low)
///         .with_weight_kg(10)
///         .with_priority(60),
///     Dog::new("D2", "Toto", Size::Medium, Energy::Medium)
///         .with_weight_kg(20)
///         .with_priority(100),
///     Dog::new("D3", "Rex", Size::Large, Energy::High)
///         .with_weight_kg(30)
///         .with_priority(120),
/// ];
/// let plan = plan_transport(&dogs, 50);
/// assert_eq!(plan.total_priority, 220);
/// assert_eq!(plan.total_weight, 50);
/// assert_eq!(plan.selected, vec!["D2".to_owned(), "D3".to_owned()]);
/// ```
#[must_use]
#[expect(
    clippy::indexing_slicing,
    reason = "the dp table dimensions are fixed up front"
)]
pub fn plan_transport(dogs: &[Dog], capacity_kg: u32) -> TransportPlan {
    let capacity = usize::try_from(capacity_kg).unwrap_or(0);
    if dogs.is_empty() || capacity == 0 {
        return TransportPlan::default();
    }

    let mut table = vec![vec![0_u32; capacity + 1]; dogs.len() + 1];
    for (i, dog) in dogs.iter().enumerate() {
        let weight = usize::try_from(dog.weight_kg).unwrap_or(usize::MAX);
        for room in 0..=capacity {
            let without = table[i][room];
            table[i + 1][room] = if weight <= room {
                without.max(table[i][room - weight].saturating_add(dog.priority))
            } else {
                without
            };
        }
    }

    let mut picked = Vec::new();
    let mut total_weight = 0_u32;
    let mut room = capacity;
    for i in (0..dogs.len()).rev() {
        if table[i + 1][room] != table[i][room] {
            let dog = &dogs[i];
            picked.push(dog.id.clone());
            total_weight = total_weight.saturating_add(dog.weight_kg);
            room -= usize::try_from(dog.weight_kg).unwrap_or(0);
        }
    }
    picked.reverse();

    TransportPlan {
        selected: picked,
        total_priority: table[dogs.len()][capacity],
        total_weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeward_core::test_support::sample_dogs;
    use homeward_core::{Energy, Size};
    use rstest::rstest;

    fn dog(id: &str, weight_kg: u32, priority: u32) -> Dog {
        Dog::new(id, id, Size::Medium, Energy::Medium)
            .with_weight_kg(weight_kg)
            .with_priority(priority)
    }

    #[rstest]
    fn textbook_instance_takes_the_two_heavier_dogs() {
        let dogs = vec![dog("D1", 10, 60), dog("D2", 20, 100), dog("D3", 30, 120)];
        let plan = plan_transport(&dogs, 50);
        assert_eq!(plan.total_priority, 220);
        assert_eq!(plan.total_weight, 50);
        assert_eq!(plan.selected, vec!["D2".to_owned(), "D3".to_owned()]);
    }

    #[rstest]
    #[case(Vec::new(), 50)]
    #[case(vec![dog("D1", 10, 60)], 0)]
    fn degenerate_inputs_yield_an_empty_plan(#[case] dogs: Vec<Dog>, #[case] capacity: u32) {
        let plan = plan_transport(&dogs, capacity);
        assert_eq!(plan, TransportPlan::default());
    }

    #[rstest]
    fn dogs_too_heavy_for_the_van_are_left_out() {
        let dogs = vec![dog("D1", 40, 5), dog("D2", 8, 1)];
        let plan = plan_transport(&dogs, 10);
        assert_eq!(plan.selected, vec!["D2".to_owned()]);
        assert_eq!(plan.total_priority, 1);
        assert_eq!(plan.total_weight, 8);
    }

    #[rstest]
    fn payload_never_exceeds_capacity_on_the_sample_herd() {
        let plan = plan_transport(&sample_dogs(), 40);
        assert!(plan.total_weight <= 40);
        assert!(plan.total_priority > 0);
    }

    #[rstest]
    fn selection_keeps_input_order() {
        let dogs = vec![dog("D3", 5, 1), dog("D1", 5, 1), dog("D2", 5, 1)];
        let plan = plan_transport(&dogs, 15);
        assert_eq!(
            plan.selected,
            vec!["D3".to_owned(), "D1".to_owned(), "D2".to_owned()]
        );
    }
}
