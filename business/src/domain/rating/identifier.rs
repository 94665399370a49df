//! Widget identifiers of the form `<productId>_<n>Stars`.
//!
//! Each star of a widget is addressed by the product it belongs to and its
//! 1-based position. The string form only exists at the UI boundary; inside
//! the crate the pair travels as a [`StarRatingId`].

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::RatingError;
use crate::domain::product::value_objects::{ProductId, Rating};

const STAR_SUFFIX_PATTERN: &str = r"_([0-9])Stars$";

static STAR_SUFFIX: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(STAR_SUFFIX_PATTERN).ok());

/// True when `value` ends with the `_<digit>Stars` suffix.
pub fn has_star_suffix(value: &str) -> bool {
    STAR_SUFFIX.as_ref().is_some_and(|re| re.is_match(value))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StarRatingId {
    product_id: ProductId,
    star: u8,
}

impl StarRatingId {
    pub fn new(product_id: ProductId, rating: Rating) -> Self {
        Self {
            product_id,
            star: rating.value(),
        }
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Star position as written in the identifier. Decoded identifiers may
    /// carry any single digit, so this is not guaranteed to be a valid rating.
    pub fn star(&self) -> u8 {
        self.star
    }

    pub fn rating(&self) -> Result<Rating, RatingError> {
        Rating::new(i32::from(self.star))
    }

    pub fn into_parts(self) -> (ProductId, u8) {
        (self.product_id, self.star)
    }
}

pub fn encode(product_id: &ProductId, rating: Rating) -> String {
    format!("{}_{}Stars", product_id, rating)
}

/// Splits at the suffix anchored at the end of `identifier`.
pub fn decode(identifier: &str) -> Result<StarRatingId, RatingError> {
    let captures = STAR_SUFFIX
        .as_ref()
        .and_then(|re| re.captures(identifier))
        .ok_or(RatingError::MalformedIdentifier)?;

    let suffix = captures.get(0).ok_or(RatingError::MalformedIdentifier)?;
    let star = captures
        .get(1)
        .and_then(|m| m.as_str().parse::<u8>().ok())
        .ok_or(RatingError::MalformedIdentifier)?;

    let product_id = ProductId::new(&identifier[..suffix.start()])
        .map_err(|_| RatingError::MalformedIdentifier)?;

    Ok(StarRatingId { product_id, star })
}

impl std::fmt::Display for StarRatingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}Stars", self.product_id, self.star)
    }
}

impl std::str::FromStr for StarRatingId {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}
