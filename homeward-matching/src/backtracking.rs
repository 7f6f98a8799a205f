//! Exhaustive multi-adopter assignment by backtracking.

use homeward_core::{Adopter, Dog};

use crate::greedy::AdopterMatch;
use crate::score::{MatchConfig, compatibility_score, household_allows};

/// A complete assignment of dogs to adopters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchPlan {
    /// One entry per adopter, in the order the adopters were given.
    pub matches: Vec<AdopterMatch>,
    /// Sum of the per-adopter scores.
    pub total_score: f32,
}

/// Partial assignment for one adopter during the search.
struct Slot<'a> {
    adopter: &'a Adopter,
    dogs: Vec<usize>,
    spent: u32,
    score: f32,
    capacity: usize,
}

/// Best complete assignment seen so far.
struct Best {
    score: f32,
    assignment: Vec<Vec<usize>>,
}

/// Find the score-maximizing feasible assignment of dogs to adopters.
///
/// Every dog is either left at the shelter or given to one adopter, subject
/// to each adopter's dog limit, budget, and household constraints. The
/// search tries both options for each dog in turn, backtracking over
/// explicitly owned state, and keeps the highest-scoring complete
/// assignment. Ties keep the first assignment found, so the result is
/// deterministic. An empty herd or empty adopter list yields an empty plan.
///
/// The search is exponential in the herd size and meant for the shelter-
/// sized instances the service handles, not for bulk batches.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "plan totals accumulate compatibility scores"
)]
pub fn assign_all(dogs: &[Dog], adopters: &[Adopter], config: &MatchConfig) -> MatchPlan {
    if dogs.is_empty() || adopters.is_empty() {
        return MatchPlan::default();
    }

    let mut slots: Vec<Slot<'_>> = adopters
        .iter()
        .map(|adopter| Slot {
            adopter,
            dogs: Vec::new(),
            spent: 0,
            score: 0.0,
            capacity: usize::try_from(adopter.max_dogs).unwrap_or(usize::MAX),
        })
        .collect();
    let mut best: Option<Best> = None;
    explore(dogs, config, 0, &mut slots, &mut best);

    let Some(found) = best else {
        return MatchPlan::default();
    };
    log::debug!(
        "assignment search settled on total score {:.2}",
        found.score
    );
    let matches = adopters
        .iter()
        .zip(found.assignment)
        .map(|(adopter, picked)| to_match(dogs, adopter, &picked, config))
        .collect();
    MatchPlan {
        matches,
        total_score: found.score,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "running scores accumulate compatibility scores"
)]
fn explore(
    dogs: &[Dog],
    config: &MatchConfig,
    index: usize,
    slots: &mut [Slot<'_>],
    best: &mut Option<Best>,
) {
    let Some(dog) = dogs.get(index) else {
        let total: f32 = slots.iter().map(|slot| slot.score).sum();
        if best.as_ref().is_none_or(|seen| total > seen.score) {
            *best = Some(Best {
                score: total,
                assignment: slots.iter().map(|slot| slot.dogs.clone()).collect(),
            });
        }
        return;
    };

    // Leave the dog at the shelter.
    explore(dogs, config, index + 1, slots, best);

    for position in 0..slots.len() {
        let Some(slot) = slots.get_mut(position) else {
            continue;
        };
        if slot.dogs.len() == slot.capacity || !household_allows(dog, slot.adopter) {
            continue;
        }
        let cost = config.cost_model.cost(dog);
        let Some(spent) = slot.spent.checked_add(cost) else {
            continue;
        };
        if spent > slot.adopter.budget {
            continue;
        }
        let score = compatibility_score(dog, slot.adopter, &config.weights);

        slot.dogs.push(index);
        slot.spent = spent;
        slot.score += score;
        explore(dogs, config, index + 1, slots, best);
        if let Some(undo) = slots.get_mut(position) {
            undo.dogs.pop();
            undo.spent -= cost;
            undo.score -= score;
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "match totals accumulate compatibility scores"
)]
fn to_match(dogs: &[Dog], adopter: &Adopter, picked: &[usize], config: &MatchConfig) -> AdopterMatch {
    let mut matched = AdopterMatch {
        adopter_id: adopter.id.clone(),
        ..AdopterMatch::default()
    };
    for &index in picked {
        let Some(dog) = dogs.get(index) else {
            continue;
        };
        matched.dogs.push(dog.id.clone());
        matched.total_score += compatibility_score(dog, adopter, &config.weights);
        matched.total_cost += config.cost_model.cost(dog);
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
    use crate::greedy::assign_greedy;
    use homeward_core::test_support::{sample_adopters, sample_dogs};
    use homeward_core::{Energy, Size};
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    fn empty_inputs_yield_an_empty_plan() {
        let config = MatchConfig::default();
        let no_dogs = assign_all(&[], &sample_adopters(), &config);
        assert!(no_dogs.matches.is_empty());
        assert_eq!(no_dogs.total_score, 0.0);

        let no_adopters = assign_all(&sample_dogs(), &[], &config);
        assert!(no_adopters.matches.is_empty());
    }

    #[rstest]
    fn no_dog_is_assigned_twice() {
        let plan = assign_all(&sample_dogs(), &sample_adopters(), &MatchConfig::default());
        let mut seen = HashSet::new();
        for matched in &plan.matches {
            for id in &matched.dogs {
                assert!(seen.insert(id.clone()), "dog {id} assigned twice");
            }
        }
    }

    #[rstest]
    fn every_match_honours_its_constraints() {
        let config = MatchConfig::default();
        let dogs = sample_dogs();
        let adopters = sample_adopters();
        let plan = assign_all(&dogs, &adopters, &config);
        assert_eq!(plan.matches.len(), adopters.len());

        for (matched, adopter) in plan.matches.iter().zip(&adopters) {
            assert_eq!(matched.adopter_id, adopter.id);
            assert!(matched.dogs.len() <= usize::try_from(adopter.max_dogs).unwrap_or(usize::MAX));
            assert!(matched.total_cost <= adopter.budget);
            for id in &matched.dogs {
                let dog = dogs.iter().find(|dog| &dog.id == id).expect("assigned dog");
                assert!(!adopter.has_kids || dog.good_with_kids);
                assert!(!dog.needs_garden() || adopter.has_garden);
            }
        }
    }

    #[rstest]
    fn beats_or_ties_the_greedy_single_adopter_walk() {
        let config = MatchConfig::default();
        let dogs = sample_dogs();
        for adopter in sample_adopters() {
            let greedy = assign_greedy(&dogs, &adopter, &config);
            let plan = assign_all(&dogs, std::slice::from_ref(&adopter), &config);
            assert!(plan.total_score >= greedy.total_score - 1e-4);
        }
    }

    #[rstest]
    fn prefers_the_higher_scoring_adopter_for_a_contested_dog() {
        let config = MatchConfig::default();
        let dogs = vec![Dog::new("D1", "Luna", Size::Small, Energy::Medium).good_with_kids()];
        // Ana's kids bonus makes her the better home for the only dog.
        let adopters = vec![
            Adopter::new("P1", "Ana").with_kids(),
            Adopter::new("P2", "Bruno"),
        ];
        let plan = assign_all(&dogs, &adopters, &config);
        let ana = plan.matches.first().expect("match for Ana");
        let bruno = plan.matches.get(1).expect("match for Bruno");
        assert_eq!(ana.dogs, vec!["D1".to_owned()]);
        assert!(bruno.dogs.is_empty());
    }

    #[rstest]
    fn an_unaffordable_herd_stays_at_the_shelter() {
        let config = MatchConfig::default();
        let dogs = vec![Dog::new("D1", "Rex", Size::Large, Energy::Medium).special_needs()];
        let adopters = vec![Adopter::new("P1", "Ana").with_budget(1_000).with_garden()];
        let plan = assign_all(&dogs, &adopters, &config);
        assert_eq!(plan.total_score, 0.0);
        let ana = plan.matches.first().expect("match entry");
        assert!(ana.dogs.is_empty());
    }
}
