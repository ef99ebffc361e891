//! [`Property`] definitions.

use std::{fmt, str::FromStr};

use derive_more::{AsRef, Display, From};
use serde::Serialize;

use common::Price;

use super::filter::City;

/// Property listed in the static dataset.
///
/// One row of the pre-joined table. Loaded once at startup and never
/// mutated afterwards.
#[derive(Clone, Debug)]
pub struct Property {
    /// [`ProjectName`] of this [`Property`].
    pub name: ProjectName,

    /// Bedroom [`Category`] of this [`Property`].
    pub category: Category,

    /// [`Price`] of this [`Property`], if listed.
    pub price: Option<Price>,

    /// [`CarpetArea`] of this [`Property`], if known.
    pub carpet_area: Option<CarpetArea>,

    /// Construction [`Status`] of this [`Property`].
    pub status: Status,

    /// [`Landmark`] this [`Property`] is located at.
    pub location: Landmark,

    /// [`FullAddress`] of this [`Property`], if known.
    pub full_address: Option<FullAddress>,

    /// Number of bathrooms in this [`Property`], if known.
    pub bathrooms: Option<Bathrooms>,

    /// Number of balconies in this [`Property`], if known.
    pub balcony: Option<Balcony>,

    /// [`Furnishing`] of this [`Property`], if known.
    pub furnishing: Option<Furnishing>,

    /// [`PossessionDate`] of this [`Property`], if announced.
    pub possession: Option<PossessionDate>,

    /// [`Slug`] identifying this [`Property`], if assigned.
    pub slug: Option<Slug>,

    /// Floor plan [`ImageRef`] of this [`Property`], if any.
    pub image: Option<ImageRef>,
}

impl Property {
    /// Indicates whether this [`Property`] is located in the given `city`,
    /// judging by its [`Landmark`] or [`FullAddress`] (case-insensitive
    /// substring match).
    #[must_use]
    pub fn located_in(&self, city: &City) -> bool {
        let needle = AsRef::<str>::as_ref(city).to_lowercase();
        AsRef::<str>::as_ref(&self.location)
            .to_lowercase()
            .contains(&needle)
            || self.full_address.as_ref().is_some_and(|a| {
                AsRef::<str>::as_ref(a).to_lowercase().contains(&needle)
            })
    }
}

/// Name of the project a [`Property`] belongs to.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
pub struct ProjectName(String);

impl ProjectName {
    /// Placeholder for rows missing a project name.
    #[must_use]
    pub fn unknown() -> Self {
        Self("Unknown".into())
    }

    /// Creates a new [`ProjectName`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`ProjectName`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`ProjectName`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for ProjectName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `ProjectName`")
    }
}

/// Bedroom category label of a [`Property`] (e.g. `3BHK`), or `Unknown`
/// for rows missing one.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
pub struct Category(String);

impl Category {
    /// Placeholder for rows missing a bedroom category.
    #[must_use]
    pub fn unknown() -> Self {
        Self("Unknown".into())
    }

    /// Creates a new bedroom-count [`Category`] out of the given number of
    /// bedrooms (kept verbatim, so `03` stays `03BHK`).
    #[must_use]
    pub fn bhk(count: &str) -> Self {
        Self(format!("{count}BHK"))
    }

    /// Creates a new [`Category`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `label` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Creates a new [`Category`] if the given `label` is valid.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Option<Self> {
        let label = label.into();
        Self::check(&label).then_some(Self(label))
    }

    /// Checks whether the given `label` is a valid [`Category`].
    fn check(label: impl AsRef<str>) -> bool {
        let label = label.as_ref();
        label.trim() == label && !label.is_empty() && label.len() <= 512
    }
}

impl FromStr for Category {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Category`")
    }
}

/// Construction status of a [`Property`].
///
/// The two recognized labels are `READY_TO_MOVE` and `UNDER_CONSTRUCTION`;
/// any other label found in the dataset is carried through unchanged.
#[derive(Clone, Debug, Eq, PartialEq, strum::EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Ready for possession.
    ReadyToMove,

    /// Still being built.
    UnderConstruction,

    /// Unrecognized raw label, kept as-is.
    #[strum(default)]
    Other(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadyToMove => f.write_str("READY_TO_MOVE"),
            Self::UnderConstruction => f.write_str("UNDER_CONSTRUCTION"),
            Self::Other(label) => f.write_str(label),
        }
    }
}

impl Status {
    /// Placeholder [`Status`] for rows missing one.
    #[must_use]
    pub fn unknown() -> Self {
        Self::Other("Unknown".into())
    }

    /// Parses a [`Status`] from the given raw `label`.
    ///
    /// Never fails: unrecognized labels become [`Status::Other`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        label
            .parse()
            .unwrap_or_else(|_| Self::Other(label.to_owned()))
    }

    /// Returns the human-readable form of this [`Status`].
    #[must_use]
    pub fn humanized(&self) -> String {
        match self {
            Self::ReadyToMove => "Ready to Move".to_owned(),
            Self::UnderConstruction => "Under Construction".to_owned(),
            Self::Other(label) => label.clone(),
        }
    }
}

impl Serialize for Status {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Kind of a [`Property`] requested in a search query.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    /// Office or other commercial space.
    Commercial,

    /// Apartment housing.
    #[default]
    Residential,

    /// Standalone villa or house.
    Villa,
}

/// Carpet area of a [`Property`], in square feet.
#[derive(Clone, Copy, Debug, Display, Eq, From, PartialEq)]
pub struct CarpetArea(rust_decimal::Decimal);

/// Number of bathrooms in a [`Property`].
pub type Bathrooms = u8;

/// Number of balconies in a [`Property`].
pub type Balcony = u8;

/// Landmark locating a [`Property`], or `Not specified` for rows missing
/// one.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
pub struct Landmark(String);

impl Landmark {
    /// Placeholder label for rows missing a landmark.
    pub const NOT_SPECIFIED: &'static str = "Not specified";

    /// Placeholder [`Landmark`] for rows missing one.
    #[must_use]
    pub fn not_specified() -> Self {
        Self(Self::NOT_SPECIFIED.into())
    }

    /// Creates a new [`Landmark`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `landmark` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(landmark: impl Into<String>) -> Self {
        Self(landmark.into())
    }

    /// Creates a new [`Landmark`] if the given `landmark` is valid.
    #[must_use]
    pub fn new(landmark: impl Into<String>) -> Option<Self> {
        let landmark = landmark.into();
        Self::check(&landmark).then_some(Self(landmark))
    }

    /// Checks whether the given `landmark` is a valid [`Landmark`].
    fn check(landmark: impl AsRef<str>) -> bool {
        let landmark = landmark.as_ref();
        landmark.trim() == landmark
            && !landmark.is_empty()
            && landmark.len() <= 512
    }
}

impl FromStr for Landmark {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Landmark`")
    }
}

/// Full postal address of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
pub struct FullAddress(String);

impl FullAddress {
    /// Creates a new [`FullAddress`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `address` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Creates a new [`FullAddress`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`FullAddress`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        address.trim() == address && !address.is_empty() && address.len() <= 512
    }
}

impl FromStr for FullAddress {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `FullAddress`")
    }
}

/// URL slug identifying a [`Property`] on the listing site.
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq, Serialize)]
#[as_ref(forward)]
pub struct Slug(String);

impl Slug {
    /// Creates a new [`Slug`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `slug` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Creates a new [`Slug`] if the given `slug` is valid.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Option<Self> {
        let slug = slug.into();
        Self::check(&slug).then_some(Self(slug))
    }

    /// Checks whether the given `slug` is a valid [`Slug`].
    fn check(slug: impl AsRef<str>) -> bool {
        let slug = slug.as_ref();
        slug.trim() == slug && !slug.is_empty() && slug.len() <= 512
    }
}

impl FromStr for Slug {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Slug`")
    }
}

/// Furnishing label of a [`Property`] (e.g. `SEMI_FURNISHED`).
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(forward)]
#[from(&str, String)]
pub struct Furnishing(String);

/// Announced possession date label of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(forward)]
#[from(&str, String)]
pub struct PossessionDate(String);

/// Reference to a floor plan image of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, From, PartialEq)]
#[as_ref(forward)]
#[from(&str, String)]
pub struct ImageRef(String);

#[cfg(test)]
mod spec {
    use super::{Category, Status};

    #[test]
    fn status_parses_known_labels() {
        assert_eq!(Status::from_label("READY_TO_MOVE"), Status::ReadyToMove);
        assert_eq!(
            Status::from_label("UNDER_CONSTRUCTION"),
            Status::UnderConstruction,
        );
    }

    #[test]
    fn status_carries_unknown_labels_through() {
        assert_eq!(
            Status::from_label("PRE_LAUNCH"),
            Status::Other("PRE_LAUNCH".into()),
        );
        assert_eq!(Status::unknown().to_string(), "Unknown");
    }

    #[test]
    fn status_humanizes() {
        assert_eq!(Status::ReadyToMove.humanized(), "Ready to Move");
        assert_eq!(Status::UnderConstruction.humanized(), "Under Construction");
        assert_eq!(Status::Other("Unknown".into()).humanized(), "Unknown");
    }

    #[test]
    fn category_keeps_bedroom_count_verbatim() {
        assert_eq!(Category::bhk("3").to_string(), "3BHK");
        assert_eq!(Category::bhk("03").to_string(), "03BHK");
    }
}
