use serde::{Deserialize, Serialize};

use super::errors::ProductError;
use crate::domain::rating::errors::RatingError;
use crate::domain::rating::identifier;

/// Lowest rating a user can give.
pub const MIN_RATING: i32 = 1;
/// Highest rating a user can give, also the number of stars on a widget.
pub const MAX_RATING: i32 = 5;

/// Opaque product identifier.
///
/// Never empty and never ends with the star suffix grammar (`_<digit>Stars`),
/// so a widget identifier built from it can always be split back apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Result<Self, ProductError> {
        let id = id.into();
        if id.trim().is_empty() || identifier::has_star_suffix(&id) {
            return Err(ProductError::InvalidId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProductId {
    type Error = ProductError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// A single user rating, always within `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i32) -> Result<Self, RatingError> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(RatingError::InvalidRating(value));
        }
        Ok(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i32> for Rating {
    type Error = RatingError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Floor of the mean of a product's ratings, between 0 and `MAX_RATING`.
///
/// Zero is only ever used to draw a widget for a product nobody rated yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AverageRating(u8);

impl AverageRating {
    pub fn new(value: i32) -> Option<Self> {
        (0..=MAX_RATING).contains(&value).then_some(Self(value as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for AverageRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Floor of the arithmetic mean; `None` for an empty slice.
pub fn average_rating(ratings: &[Rating]) -> Option<AverageRating> {
    if ratings.is_empty() {
        return None;
    }
    let sum: u64 = ratings.iter().map(|r| u64::from(r.value())).sum();
    let mean = sum / ratings.len() as u64;
    Some(AverageRating(mean as u8))
}
