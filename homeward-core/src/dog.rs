//! Rescue dogs and their derived adoption cost.
//!
//! Size and energy are closed enums so matching code gets compile-time
//! safety instead of stringly-typed tiers, while `FromStr`/`Display` keep
//! the snapshot boundary ergonomic.

use thiserror::Error;

/// Physical size class of a dog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Size {
    /// Up to roughly 10 kg.
    Small,
    /// Between the small and large tiers.
    Medium,
    /// Needs space; only placed with garden-owning adopters.
    Large,
}

impl Size {
    /// Numeric tier used by the cost model and the size preference bonus.
    #[must_use]
    pub const fn tier(self) -> u8 {
        match self {
            Self::Small => 1,
            Self::Medium => 2,
            Self::Large => 3,
        }
    }

    /// Return the size as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Size`] from a string fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown size '{0}'")]
pub struct SizeParseError(String);

impl std::str::FromStr for Size {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(SizeParseError(s.to_owned())),
        }
    }
}

/// Energy level of a dog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Energy {
    /// Calm, happy with short walks.
    Low,
    /// Average exercise needs.
    Medium,
    /// Needs sustained daily activity.
    High,
}

impl Energy {
    /// Ordinal position on the 1..=10 energy scale used for scoring.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Low => 2,
            Self::Medium => 5,
            Self::High => 8,
        }
    }

    /// Return the energy level as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Energy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an [`Energy`] from a string fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown energy level '{0}'")]
pub struct EnergyParseError(String);

impl std::str::FromStr for Energy {
    type Err = EnergyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(EnergyParseError(s.to_owned())),
        }
    }
}

/// A rescue dog awaiting adoption or transport.
///
/// # Examples
/// ```
/// use homeward_core::{Dog, Energy, Size};
///
/// let dog = Dog::new("D1", "Luna", Size::Small, Energy::Low);
/// assert_eq!(dog.id, "D1");
/// assert!(!dog.needs_garden());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dog {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Size class.
    pub size: Size,
    /// Body weight in whole kilograms; the transport capacity unit.
    pub weight_kg: u32,
    /// Age in years.
    pub age: u32,
    /// Energy level.
    pub energy: Energy,
    /// Whether the dog is safe around children.
    pub good_with_kids: bool,
    /// Whether the dog needs a high-care adopter profile.
    pub special_needs: bool,
    /// Adoption priority; the value maximised by transport planning.
    pub priority: u32,
}

impl Dog {
    /// Construct a dog with neutral defaults for the remaining attributes.
    ///
    /// # Examples
    /// ```
    /// use homeward_core::{Dog, Energy, Size};
    ///
    /// let dog = Dog::new("D2", "Toto", Size::Medium, Energy::High)
    ///     .with_weight_kg(18)
    ///     .with_priority(6);
    /// assert_eq!(dog.weight_kg, 18);
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        size: Size,
        energy: Energy,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size,
            weight_kg: 10,
            age: 1,
            energy,
            good_with_kids: false,
            special_needs: false,
            priority: 1,
        }
    }

    /// Set the body weight while returning `self` for chaining.
    #[must_use]
    pub const fn with_weight_kg(mut self, weight_kg: u32) -> Self {
        self.weight_kg = weight_kg;
        self
    }

    /// Set the age while returning `self` for chaining.
    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Set the adoption priority while returning `self` for chaining.
    #[must_use]
    pub const fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Mark the dog as safe around children.
    #[must_use]
    pub const fn good_with_kids(mut self) -> Self {
        self.good_with_kids = true;
        self
    }

    /// Mark the dog as needing a high-care adopter profile.
    #[must_use]
    pub const fn special_needs(mut self) -> Self {
        self.special_needs = true;
        self
    }

    /// Whether the dog needs a secure outdoor space.
    ///
    /// Derived from size: only large dogs require a garden.
    #[must_use]
    pub const fn needs_garden(&self) -> bool {
        matches!(self.size, Size::Large)
    }
}

/// Configuration constants for the derived adoption cost.
///
/// The magnitudes are tuning constants inherited from the shelter network's
/// fee schedule, kept as named configuration rather than scattered literals.
///
/// # Examples
/// ```
/// use homeward_core::{CostModel, Dog, Energy, Size};
///
/// let model = CostModel::default();
/// let dog = Dog::new("D3", "Rex", Size::Large, Energy::Medium).special_needs();
/// assert_eq!(model.cost(&dog), 5000 + 3 * 2000 + 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    /// Flat fee charged for every adoption.
    pub base: u32,
    /// Per-size-tier surcharge.
    pub size_surcharge: u32,
    /// Surcharge for special-needs dogs.
    pub special_needs_surcharge: u32,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            base: 5000,
            size_surcharge: 2000,
            special_needs_surcharge: 5000,
        }
    }
}

impl CostModel {
    /// Monetary cost of adopting `dog` under this model.
    #[must_use]
    pub const fn cost(&self, dog: &Dog) -> u32 {
        let special = if dog.special_needs {
            self.special_needs_surcharge
        } else {
            0
        };
        self.base + dog.size.tier() as u32 * self.size_surcharge + special
    }
}
