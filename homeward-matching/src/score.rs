//! Compatibility scoring between dogs and adopter profiles.

use homeward_core::{Adopter, CostModel, Dog};

/// Additive weights applied by [`compatibility_score`].
///
/// The defaults are the shelter network's tuning constants, kept as named
/// configuration rather than scattered literals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Bonus when the adopter has kids and the dog is good with them.
    pub kids: f32,
    /// Bonus when the dog needs a garden and the adopter has one.
    pub garden: f32,
    /// Weight of the energy-preference term.
    pub energy: f32,
    /// Weight of the size term.
    pub size: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            kids: 3.0,
            garden: 2.0,
            energy: 2.0,
            size: 1.0,
        }
    }
}

/// Matching configuration: scoring weights plus the adoption fee schedule.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MatchConfig {
    /// Weights fed to [`compatibility_score`].
    pub weights: ScoreWeights,
    /// Fee schedule used for budget feasibility.
    pub cost_model: CostModel,
}

/// Score how well `dog` suits `adopter` under `weights`.
///
/// The score is a weighted sum of four terms: a kids bonus, a garden bonus,
/// an energy term that decays with the gap between the dog's energy level
/// and the adopter's preference (clamped at zero once the gap reaches five),
/// and a size term favouring smaller dogs. Scores are always non-negative
/// and finite for non-negative weights.
///
/// # Examples
/// ```
/// use homeward_core::{Adopter, Dog, Energy, Size};
/// use homeward_matching::{ScoreWeights, compatibility_score};
///
/// let dog = Dog::new("D1", "Luna", Size::Small, Energy::Low).good_with_kids();
/// let adopter = Adopter::new("P1", "Ana").with_kids();
/// let score = compatibility_score(&dog, &adopter, &ScoreWeights::default());
/// // kids 3.0 + energy 2.0 * (1 - 3/5) + size 1.0 * (3 - 1) / 2
/// assert!((score - 4.8).abs() < 1e-5);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "scores are weighted sums of bounded terms"
)]
pub fn compatibility_score(dog: &Dog, adopter: &Adopter, weights: &ScoreWeights) -> f32 {
    let mut score = 0.0;
    if adopter.has_kids && dog.good_with_kids {
        score += weights.kids;
    }
    if dog.needs_garden() && adopter.has_garden {
        score += weights.garden;
    }
    let gap = f32::from(dog.energy.level().abs_diff(adopter.preferred_energy));
    score += weights.energy * (1.0 - gap / 5.0).max(0.0);
    score += weights.size * f32::from(3 - dog.size.tier()) / 2.0;
    score
}

/// Household constraints that rule a pairing out regardless of budget.
///
/// An adopter with kids only receives kid-compatible dogs, and a dog that
/// needs a garden only goes to an adopter with one.
pub(crate) const fn household_allows(dog: &Dog, adopter: &Adopter) -> bool {
    (!adopter.has_kids || dog.good_with_kids) && (!dog.needs_garden() || adopter.has_garden)
}

#[cfg(test)]
mod tests {
    use super::*;
    use homeward_core::{Energy, Size};
    use rstest::rstest;

    fn close(actual: f32, expected: f32) -> bool {
        (actual - expected).abs() < 1e-5
    }

    #[rstest]
    fn weights_default_to_tuning_constants() {
        let weights = ScoreWeights::default();
        assert_eq!(weights.kids, 3.0);
        assert_eq!(weights.garden, 2.0);
        assert_eq!(weights.energy, 2.0);
        assert_eq!(weights.size, 1.0);
    }

    #[rstest]
    fn kids_bonus_needs_both_sides() {
        let weights = ScoreWeights::default();
        let dog = Dog::new("D1", "Luna", Size::Medium, Energy::Medium).good_with_kids();
        let shy = Dog::new("D2", "Toto", Size::Medium, Energy::Medium);
        let with_kids = Adopter::new("P1", "Ana").with_kids();
        let without = Adopter::new("P2", "Bruno");

        let base = compatibility_score(&dog, &without, &weights);
        assert!(close(compatibility_score(&dog, &with_kids, &weights), base + 3.0));
        assert!(close(compatibility_score(&shy, &with_kids, &weights), base));
    }

    #[rstest]
    fn garden_bonus_applies_to_large_dogs_only() {
        let weights = ScoreWeights::default();
        let large = Dog::new("D1", "Rex", Size::Large, Energy::Medium);
        let small = Dog::new("D2", "Luna", Size::Small, Energy::Medium);
        let gardener = Adopter::new("P1", "Ana").with_garden();
        let flat = Adopter::new("P2", "Bruno");

        assert!(close(
            compatibility_score(&large, &gardener, &weights)
                - compatibility_score(&large, &flat, &weights),
            2.0,
        ));
        assert!(close(
            compatibility_score(&small, &gardener, &weights),
            compatibility_score(&small, &flat, &weights),
        ));
    }

    #[rstest]
    #[case(Energy::Low, 3, 2.0 * (1.0 - 1.0 / 5.0))]
    #[case(Energy::Medium, 5, 2.0)]
    #[case(Energy::High, 1, 0.0)]
    fn energy_term_decays_with_the_gap(
        #[case] energy: Energy,
        #[case] preferred: u8,
        #[case] expected: f32,
    ) {
        let weights = ScoreWeights {
            kids: 0.0,
            garden: 0.0,
            energy: 2.0,
            size: 0.0,
        };
        let dog = Dog::new("D1", "Luna", Size::Small, energy);
        let adopter = Adopter::new("P1", "Ana").with_preferred_energy(preferred);
        assert!(close(compatibility_score(&dog, &adopter, &weights), expected));
    }

    #[rstest]
    #[case(Size::Small, 1.0)]
    #[case(Size::Medium, 0.5)]
    #[case(Size::Large, 0.0)]
    fn size_term_favours_smaller_dogs(#[case] size: Size, #[case] expected: f32) {
        let weights = ScoreWeights {
            kids: 0.0,
            garden: 0.0,
            energy: 0.0,
            size: 1.0,
        };
        let dog = Dog::new("D1", "Luna", size, Energy::Medium);
        let adopter = Adopter::new("P1", "Ana");
        assert!(close(compatibility_score(&dog, &adopter, &weights), expected));
    }

    #[rstest]
    fn household_constraints_are_symmetric_in_neither_direction() {
        let picky = Adopter::new("P1", "Ana").with_kids();
        let gardener = Adopter::new("P2", "Bruno").with_garden();
        let shy_large = Dog::new("D1", "Rex", Size::Large, Energy::Low);
        let friendly_small =
            Dog::new("D2", "Luna", Size::Small, Energy::Low).good_with_kids();

        assert!(!household_allows(&shy_large, &picky));
        assert!(household_allows(&shy_large, &gardener));
        assert!(household_allows(&friendly_small, &picky));
        assert!(household_allows(&friendly_small, &gardener));
    }
}
