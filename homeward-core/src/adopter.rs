//! Adopters and their placement constraints.

/// Mid-scale default for [`Adopter::preferred_energy`].
pub const DEFAULT_PREFERRED_ENERGY: u8 = 5;

/// A prospective adopter with budget and household constraints.
///
/// # Examples
/// ```
/// use homeward_core::Adopter;
///
/// let adopter = Adopter::new("P1", "Ana")
///     .with_budget(15_000)
///     .with_max_dogs(2)
///     .with_kids();
/// assert_eq!(adopter.max_dogs, 2);
/// assert_eq!(adopter.preferred_energy, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adopter {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Total adoption budget.
    pub budget: u32,
    /// Whether the household has a secure outdoor space.
    pub has_garden: bool,
    /// Whether children live in the household.
    pub has_kids: bool,
    /// Maximum number of dogs this adopter will take.
    pub max_dogs: u32,
    /// Preferred dog energy on the 1..=10 scale.
    #[cfg_attr(feature = "serde", serde(default = "default_preferred_energy"))]
    pub preferred_energy: u8,
}

#[cfg(feature = "serde")]
const fn default_preferred_energy() -> u8 {
    DEFAULT_PREFERRED_ENERGY
}

impl Adopter {
    /// Construct an adopter with a single-dog allowance and default budget.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            budget: 20_000,
            has_garden: false,
            has_kids: false,
            max_dogs: 1,
            preferred_energy: DEFAULT_PREFERRED_ENERGY,
        }
    }

    /// Set the budget while returning `self` for chaining.
    #[must_use]
    pub const fn with_budget(mut self, budget: u32) -> Self {
        self.budget = budget;
        self
    }

    /// Set the dog allowance while returning `self` for chaining.
    #[must_use]
    pub const fn with_max_dogs(mut self, max_dogs: u32) -> Self {
        self.max_dogs = max_dogs;
        self
    }

    /// Set the preferred energy level while returning `self` for chaining.
    #[must_use]
    pub const fn with_preferred_energy(mut self, preferred_energy: u8) -> Self {
        self.preferred_energy = preferred_energy;
        self
    }

    /// Mark the household as having a secure outdoor space.
    #[must_use]
    pub const fn with_garden(mut self) -> Self {
        self.has_garden = true;
        self
    }

    /// Mark the household as having children.
    #[must_use]
    pub const fn with_kids(mut self) -> Self {
        self.has_kids = true;
        self
    }
}
