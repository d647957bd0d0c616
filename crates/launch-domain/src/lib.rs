//! # Launch Miner - Domain Model
//!
//! Entities for rocket launch analytics: launches, the rockets (launch
//! vehicles) flown, and the launch service providers that build and operate
//! them. These types are shared by the persistence, analytics and CLI crates.
//!
//! Rockets and providers are value types. Two independently constructed
//! instances with the same identifying fields are equal, hash identically and
//! sort together, so they can be used directly as grouping keys.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// ENUMS
// =============================================================================

/// Outcome of a launch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaunchOutcome {
    Successful,
    Failed,
}

impl LaunchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Successful => "SUCCESSFUL",
            Self::Failed => "FAILED",
        }
    }
}

// =============================================================================
// ENTITY TYPES
// =============================================================================

/// Launch service provider (LSP) - organization operating and/or
/// manufacturing rockets.
///
/// Identity is `(name, founded_year, country)`. The declared revenue is
/// informational and never takes part in equality, hashing or ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchServiceProvider {
    pub name: String,
    pub founded_year: i32,
    pub country: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<Decimal>,
}

impl LaunchServiceProvider {
    /// Create a provider, rejecting an empty name or country.
    pub fn new(
        name: impl Into<String>,
        founded_year: i32,
        country: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let provider = Self {
            name: name.into(),
            founded_year,
            country: country.into(),
            revenue: None,
        };
        provider.validate()?;
        Ok(provider)
    }

    /// Attach a declared revenue figure.
    #[must_use]
    pub fn with_revenue(mut self, revenue: Decimal) -> Self {
        self.revenue = Some(revenue);
        self
    }

    /// Check the identifying fields of a provider built outside `new`.
    pub fn validate(&self) -> Result<(), DomainError> {
        require("LaunchServiceProvider", "name", &self.name)?;
        require("LaunchServiceProvider", "country", &self.country)
    }

    fn key(&self) -> (&str, i32, &str) {
        (&self.name, self.founded_year, &self.country)
    }
}

impl PartialEq for LaunchServiceProvider {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for LaunchServiceProvider {}

impl Hash for LaunchServiceProvider {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for LaunchServiceProvider {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Name, then founding year, then country.
impl Ord for LaunchServiceProvider {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Rocket (launch vehicle).
///
/// Identity is `(name, country, manufacturer)`. Payload capacities are
/// free-form descriptive strings and are not part of identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    pub name: String,
    pub country: String,
    pub manufacturer: LaunchServiceProvider,

    // Payload capacity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_to_leo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_to_gto: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass_to_other: Option<String>,
}

impl Rocket {
    /// Create a rocket, rejecting an empty name or country.
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        manufacturer: LaunchServiceProvider,
    ) -> Result<Self, DomainError> {
        let rocket = Self {
            name: name.into(),
            country: country.into(),
            manufacturer,
            mass_to_leo: None,
            mass_to_gto: None,
            mass_to_other: None,
        };
        rocket.validate()?;
        Ok(rocket)
    }

    #[must_use]
    pub fn with_mass_to_leo(mut self, mass: impl Into<String>) -> Self {
        self.mass_to_leo = Some(mass.into());
        self
    }

    #[must_use]
    pub fn with_mass_to_gto(mut self, mass: impl Into<String>) -> Self {
        self.mass_to_gto = Some(mass.into());
        self
    }

    #[must_use]
    pub fn with_mass_to_other(mut self, mass: impl Into<String>) -> Self {
        self.mass_to_other = Some(mass.into());
        self
    }

    /// Check identifying fields, including the manufacturer's.
    pub fn validate(&self) -> Result<(), DomainError> {
        require("Rocket", "name", &self.name)?;
        require("Rocket", "country", &self.country)?;
        self.manufacturer.validate()
    }

    fn key(&self) -> (&str, &str, &LaunchServiceProvider) {
        (&self.name, &self.country, &self.manufacturer)
    }
}

impl PartialEq for Rocket {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Rocket {}

impl Hash for Rocket {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Rocket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Name, then country, then manufacturer.
impl Ord for Rocket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Launch entity - one recorded attempt to send a rocket to an orbit.
///
/// `provider` is the operator of record and may differ from
/// `rocket.manufacturer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launch {
    pub launch_date: NaiveDate,
    pub rocket: Rocket,
    pub provider: LaunchServiceProvider,
    pub price: Decimal,
    pub outcome: LaunchOutcome,
    pub orbit: String,

    #[serde(default)]
    pub launch_site: String,
}

impl Launch {
    /// Create a launch, rejecting a negative price or an empty orbit.
    pub fn new(
        launch_date: NaiveDate,
        rocket: Rocket,
        provider: LaunchServiceProvider,
        price: Decimal,
        outcome: LaunchOutcome,
        orbit: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let launch = Self {
            launch_date,
            rocket,
            provider,
            price,
            outcome,
            orbit: orbit.into(),
            launch_site: String::new(),
        };
        launch.validate()?;
        Ok(launch)
    }

    #[must_use]
    pub fn with_launch_site(mut self, site: impl Into<String>) -> Self {
        self.launch_site = site.into();
        self
    }

    /// Calendar year of the launch date
    #[must_use]
    pub fn year(&self) -> i32 {
        self.launch_date.year()
    }

    #[must_use]
    pub fn is_successful(&self) -> bool {
        self.outcome == LaunchOutcome::Successful
    }

    /// Check every invariant a launch must hold before it is queried.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.price < Decimal::ZERO {
            return Err(DomainError::NegativePrice { price: self.price });
        }
        require("Launch", "orbit", &self.orbit)?;
        self.rocket.validate()?;
        self.provider.validate()
    }
}

fn require(entity: &'static str, field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField { entity, field });
    }
    Ok(())
}

// =============================================================================
// ERRORS
// =============================================================================

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Missing required field: {entity}.{field}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("Launch price must be non-negative, got {price}")]
    NegativePrice { price: Decimal },
}
