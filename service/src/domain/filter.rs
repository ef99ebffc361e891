//! Search [`Filter`] definitions.

use std::str::FromStr;

use derive_more::{AsRef, Display};
use serde::Serialize;

use common::Price;

use super::property::{Category, Kind, Property, Status};

/// Set of search constraints extracted from a natural-language query.
///
/// Every field except `property_type` is optional: an absent field means
/// "no constraint on that dimension", not "match nothing".
#[derive(Clone, Debug, Default, Serialize)]
pub struct Filter {
    /// Bedroom [`Category`] to match exactly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bhk: Option<Category>,

    /// Inclusive price ceiling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Price>,

    /// [`City`] to look for in property locations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,

    /// Construction [`Status`] to match exactly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,

    /// Requested [`Kind`] of property.
    ///
    /// Always present, defaulting to [`Kind::Residential`].
    pub property_type: Kind,
}

impl Filter {
    /// Indicates whether the given [`Property`] satisfies every constraint
    /// of this [`Filter`].
    ///
    /// Constraints apply conjunctively: exact match for `bhk` and
    /// `status`, inclusive ceiling for `max_price` (a [`Property`] without
    /// a price never matches a price-constrained [`Filter`]), and
    /// case-insensitive landmark/address substring match for `city`.
    ///
    /// `property_type` is advisory only and constrains nothing.
    // TODO: Confirm with product whether `property_type` should constrain
    //       the search; matching on it would change result counts.
    #[must_use]
    pub fn matches(&self, property: &Property) -> bool {
        self.bhk
            .as_ref()
            .is_none_or(|bhk| property.category == *bhk)
            && self.max_price.is_none_or(|max| {
                property.price.is_some_and(|price| price <= max)
            })
            && self
                .status
                .as_ref()
                .is_none_or(|status| property.status == *status)
            && self
                .city
                .as_ref()
                .is_none_or(|city| property.located_in(city))
    }

    /// Indicates whether this [`Filter`] carries no informative
    /// constraints (nothing besides the always-present `property_type`).
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.bhk.is_none()
            && self.max_price.is_none()
            && self.city.is_none()
            && self.status.is_none()
    }

    /// Returns a copy of this [`Filter`] with the price ceiling lifted.
    #[must_use]
    pub fn without_max_price(&self) -> Self {
        Self {
            max_price: None,
            ..self.clone()
        }
    }
}

/// City mentioned in a search query, in its capitalized form.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
pub struct City(String);

impl City {
    /// Creates a new [`City`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `city` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(city: impl Into<String>) -> Self {
        Self(city.into())
    }

    /// Creates a new [`City`] if the given `city` is valid.
    #[must_use]
    pub fn new(city: impl Into<String>) -> Option<Self> {
        let city = city.into();
        Self::check(&city).then_some(Self(city))
    }

    /// Checks whether the given `city` is a valid [`City`].
    fn check(city: impl AsRef<str>) -> bool {
        let city = city.as_ref();
        city.trim() == city && !city.is_empty() && city.len() <= 512
    }
}

impl FromStr for City {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `City`")
    }
}
