//! [`Property`]-related read projections.

use serde::Serialize;

use common::Price;

use crate::domain::property::{Balcony, Landmark, Property};

/// Sentinel shown where a value is not available.
pub const NOT_AVAILABLE: &str = "N/A";

/// Sentinel shown for properties without a listed price.
pub const PRICE_ON_REQUEST: &str = "Price on request";

/// Sentinel shown for properties without a known full address.
pub const ADDRESS_NOT_AVAILABLE: &str = "Address not available";

/// Sentinel shown for missing furnishing and possession labels.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Sentinel slug for properties without one.
pub const MISSING_SLUG: &str = "#";

/// Caller-facing card of a single [`Property`], with every value rendered
/// ready for display.
///
/// Missing source values degrade to their sentinels; nothing here can
/// fail to render.
#[derive(Clone, Debug, Serialize)]
pub struct Card {
    /// Project name.
    pub title: String,

    /// Bedroom category label.
    #[serde(rename = "type")]
    pub category: String,

    /// Price in the Indian display convention, or [`PRICE_ON_REQUEST`].
    pub price: String,

    /// Raw numeric price in rupees, kept for aggregate statistics.
    pub price_raw: Option<Price>,

    /// Carpet area in square feet, or [`NOT_AVAILABLE`].
    pub carpet_area: String,

    /// Landmark label.
    pub location: String,

    /// Full address, or [`ADDRESS_NOT_AVAILABLE`].
    pub full_address: String,

    /// Human-readable construction status.
    pub status: String,

    /// Number of bathrooms, or [`NOT_AVAILABLE`].
    pub bathrooms: String,

    /// Number of balconies (0 when unknown).
    pub balcony: Balcony,

    /// Furnishing label, or [`NOT_SPECIFIED`].
    pub furnished: String,

    /// Possession date label, or [`NOT_SPECIFIED`].
    pub possession: String,

    /// Listing slug, or [`MISSING_SLUG`].
    pub slug: String,

    /// Floor plan image reference, if any.
    pub image: Option<String>,
}

impl From<&Property> for Card {
    fn from(property: &Property) -> Self {
        Self {
            title: property.name.to_string(),
            category: property.category.to_string(),
            price: property
                .price
                .map_or_else(|| PRICE_ON_REQUEST.to_owned(), |p| p.to_string()),
            price_raw: property.price,
            carpet_area: property.carpet_area.map_or_else(
                || NOT_AVAILABLE.to_owned(),
                |area| format!("{area} sq.ft"),
            ),
            location: property.location.to_string(),
            full_address: property.full_address.as_ref().map_or_else(
                || ADDRESS_NOT_AVAILABLE.to_owned(),
                ToString::to_string,
            ),
            status: property.status.humanized(),
            bathrooms: property
                .bathrooms
                .map_or_else(|| NOT_AVAILABLE.to_owned(), |b| b.to_string()),
            balcony: property.balcony.unwrap_or_default(),
            furnished: property
                .furnishing
                .as_ref()
                .map_or_else(|| NOT_SPECIFIED.to_owned(), ToString::to_string),
            possession: property
                .possession
                .as_ref()
                .map_or_else(|| NOT_SPECIFIED.to_owned(), ToString::to_string),
            slug: property
                .slug
                .as_ref()
                .map_or_else(|| MISSING_SLUG.to_owned(), ToString::to_string),
            image: property.image.as_ref().map(ToString::to_string),
        }
    }
}

impl Card {
    /// Indicates whether this [`Card`] shows a property ready to move
    /// into, judging by its display status label.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.status.contains("Ready")
    }

    /// Returns the location label, if it names an actual place rather
    /// than the missing-landmark placeholder.
    #[must_use]
    pub fn specified_location(&self) -> Option<&str> {
        (self.location != Landmark::NOT_SPECIFIED)
            .then_some(self.location.as_str())
    }
}

#[cfg(test)]
mod spec {
    use common::Price;

    use crate::domain::property::{
        Category, FullAddress, Landmark, ProjectName, Property, Status,
    };

    use super::Card;

    fn bare_property() -> Property {
        Property {
            name: ProjectName::new("Skyline Towers").unwrap(),
            category: Category::bhk("3"),
            price: None,
            carpet_area: None,
            status: Status::unknown(),
            location: Landmark::not_specified(),
            full_address: None,
            bathrooms: None,
            balcony: None,
            furnishing: None,
            possession: None,
            slug: None,
            image: None,
        }
    }

    #[test]
    fn missing_values_degrade_to_sentinels() {
        let card = Card::from(&bare_property());

        assert_eq!(card.price, "Price on request");
        assert_eq!(card.price_raw, None);
        assert_eq!(card.carpet_area, "N/A");
        assert_eq!(card.full_address, "Address not available");
        assert_eq!(card.bathrooms, "N/A");
        assert_eq!(card.balcony, 0);
        assert_eq!(card.furnished, "Not specified");
        assert_eq!(card.possession, "Not specified");
        assert_eq!(card.slug, "#");
        assert_eq!(card.image, None);
        assert_eq!(card.status, "Unknown");
    }

    #[test]
    fn price_renders_in_its_tier() {
        let priced = |rupees: u64| {
            Card::from(&Property {
                price: Price::new(rupees.into()),
                ..bare_property()
            })
        };

        assert_eq!(priced(10_000_000).price, "₹1.00 Cr");
        assert_eq!(priced(100_000).price, "₹1.00 L");
        assert_eq!(priced(99_999).price, "₹99,999");
    }

    #[test]
    fn status_humanizes_known_labels_and_keeps_others() {
        let with_status = |status: Status| {
            Card::from(&Property {
                status,
                ..bare_property()
            })
        };

        assert_eq!(with_status(Status::ReadyToMove).status, "Ready to Move");
        assert_eq!(
            with_status(Status::UnderConstruction).status,
            "Under Construction",
        );
        assert_eq!(
            with_status(Status::Other("SOLD_OUT".into())).status,
            "SOLD_OUT",
        );
    }

    #[test]
    fn present_values_render_directly() {
        let card = Card::from(&Property {
            price: Price::new(12_000_000.into()),
            carpet_area: Some(rust_decimal::Decimal::from(1250).into()),
            location: Landmark::new("Wakad").unwrap(),
            full_address: FullAddress::new("Survey 12, Wakad, Pune"),
            bathrooms: Some(2),
            balcony: Some(1),
            ..bare_property()
        });

        assert_eq!(card.title, "Skyline Towers");
        assert_eq!(card.category, "3BHK");
        assert_eq!(card.price, "₹1.20 Cr");
        assert_eq!(card.carpet_area, "1250 sq.ft");
        assert_eq!(card.location, "Wakad");
        assert_eq!(card.full_address, "Survey 12, Wakad, Pune");
        assert_eq!(card.bathrooms, "2");
        assert_eq!(card.balcony, 1);
    }

    #[test]
    fn readiness_derives_from_the_display_label() {
        let ready = Card::from(&Property {
            status: Status::ReadyToMove,
            ..bare_property()
        });
        let other = Card::from(&bare_property());

        assert!(ready.is_ready());
        assert!(!other.is_ready());
    }

    #[test]
    fn unspecified_location_is_hidden() {
        assert_eq!(Card::from(&bare_property()).specified_location(), None);
        assert_eq!(
            Card::from(&Property {
                location: Landmark::new("Baner").unwrap(),
                ..bare_property()
            })
            .specified_location(),
            Some("Baner"),
        );
    }
}
