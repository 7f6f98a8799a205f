//! Greedy single-adopter matching.

use homeward_core::{Adopter, Dog};

use crate::score::{MatchConfig, compatibility_score, household_allows};

/// Dogs handed to one adopter, with the running totals of the assignment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdopterMatch {
    /// Identifier of the adopter.
    pub adopter_id: String,
    /// Identifiers of the assigned dogs, best scoring first.
    pub dogs: Vec<String>,
    /// Sum of the compatibility scores of the assigned dogs.
    pub total_score: f32,
    /// Sum of the adoption fees of the assigned dogs.
    pub total_cost: u32,
}

/// Match `adopter` against the herd by descending compatibility score.
///
/// Every dog is scored, the candidates are ranked (dog id breaks score
/// ties, so the result is deterministic), and the adopter takes feasible
/// dogs in rank order. A dog the budget cannot cover is skipped rather
/// than ending the walk, so a cheaper lower-ranked dog can still be taken.
/// The walk stops once `max_dogs` is reached.
///
/// # Examples
/// ```
/// use homeward_core::{Adopter, Dog, Energy, Size};
/// use homeward_matching::{MatchConfig, assign_greedy};
///
/// let dogs = vec![
///     Dog::new("D1", "Luna", Size::Small, Energy::Low).good_with_kids(),
///     Dog::new("D2", "Rex", Size::Large, Energy::Medium),
/// ];
/// let adopter = Adopter::new("P1", "Ana").with_kids();
/// let matched = assign_greedy(&dogs, &adopter, &MatchConfig::default());
/// assert_eq!(matched.dogs, vec!["D1".to_owned()]);
/// assert_eq!(matched.total_cost, 7000);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the match total accumulates compatibility scores"
)]
pub fn assign_greedy(dogs: &[Dog], adopter: &Adopter, config: &MatchConfig) -> AdopterMatch {
    let mut ranked: Vec<(&Dog, f32)> = dogs
        .iter()
        .map(|dog| (dog, compatibility_score(dog, adopter, &config.weights)))
        .collect();
    ranked.sort_by(|(a, left), (b, right)| {
        right.total_cmp(left).then_with(|| a.id.cmp(&b.id))
    });

    let capacity = usize::try_from(adopter.max_dogs).unwrap_or(usize::MAX);
    let mut matched = AdopterMatch {
        adopter_id: adopter.id.clone(),
        ..AdopterMatch::default()
    };
    for (dog, score) in ranked {
        if matched.dogs.len() == capacity {
            break;
        }
        if !household_allows(dog, adopter) {
            continue;
        }
        let cost = config.cost_model.cost(dog);
        let Some(spent) = matched.total_cost.checked_add(cost) else {
            continue;
        };
        if spent > adopter.budget {
            log::debug!(
                "adopter {} skips dog {}: fee {cost} exceeds remaining budget",
                adopter.id,
                dog.id
            );
            continue;
        }
        matched.dogs.push(dog.id.clone());
        matched.total_score += score;
        matched.total_cost = spent;
    }
    matched
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests use expect for readable failures"
)]
mod tests {
    use super::*;
    use homeward_core::test_support::{sample_adopters, sample_dogs};
    use homeward_core::{Energy, Size};
    use rstest::rstest;

    fn adopter(id: &str) -> Adopter {
        sample_adopters()
            .into_iter()
            .find(|candidate| candidate.id == id)
            .expect("sample adopter")
    }

    #[rstest]
    fn kid_household_takes_only_kid_compatible_dogs() {
        let matched = assign_greedy(&sample_dogs(), &adopter("P1"), &MatchConfig::default());
        assert_eq!(matched.dogs.len(), 2);
        let dogs = sample_dogs();
        for id in &matched.dogs {
            let dog = dogs
                .iter()
                .find(|dog| &dog.id == id)
                .expect("assigned dog exists");
            assert!(dog.good_with_kids);
        }
    }

    #[rstest]
    fn budget_violations_skip_rather_than_stop() {
        let config = MatchConfig::default();
        // Rex costs 16000, past Carla's budget; Luna at 7000 still fits.
        let dogs = vec![
            Dog::new("D1", "Rex", Size::Large, Energy::Medium)
                .special_needs()
                .good_with_kids(),
            Dog::new("D2", "Luna", Size::Small, Energy::Low).good_with_kids(),
        ];
        let carla = Adopter::new("P3", "Carla")
            .with_budget(7_500)
            .with_garden()
            .with_preferred_energy(3);
        let matched = assign_greedy(&dogs, &carla, &config);
        assert_eq!(matched.dogs, vec!["D2".to_owned()]);
        assert_eq!(matched.total_cost, 7000);
    }

    #[rstest]
    fn stops_at_the_dog_limit() {
        let matched = assign_greedy(&sample_dogs(), &adopter("P2"), &MatchConfig::default());
        assert!(matched.dogs.len() <= 2);
        assert!(matched.total_cost <= 35_000);
    }

    #[rstest]
    fn ties_break_on_dog_id() {
        let dogs = vec![
            Dog::new("D2", "Twin", Size::Small, Energy::Low),
            Dog::new("D1", "Twin", Size::Small, Energy::Low),
        ];
        let solo = Adopter::new("P1", "Ana").with_max_dogs(1);
        let matched = assign_greedy(&dogs, &solo, &MatchConfig::default());
        assert_eq!(matched.dogs, vec!["D1".to_owned()]);
    }

    #[rstest]
    fn empty_herd_yields_empty_match() {
        let matched = assign_greedy(&[], &adopter("P1"), &MatchConfig::default());
        assert!(matched.dogs.is_empty());
        assert_eq!(matched.total_score, 0.0);
        assert_eq!(matched.total_cost, 0);
    }
}
