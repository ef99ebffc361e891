//! Search outcome [`Summary`] composition.

use derive_more::Display;
use itertools::Itertools as _;
use rust_decimal::Decimal;
use serde::Serialize;

use common::Price;

use crate::domain::Filter;

use super::property::Card;

/// Natural-language summary of a search outcome.
///
/// Composition is total: any combination of results and filters yields a
/// well-formed sentence.
#[derive(Clone, Debug, Display, Eq, PartialEq, Serialize)]
pub struct Summary(String);

impl Summary {
    /// Composes a [`Summary`] of a non-empty result set.
    #[must_use]
    pub fn found(results: &[Card], filter: &Filter) -> Self {
        let count = results.len();
        let bhk = filter.bhk.as_ref().map_or("properties", AsRef::as_ref);
        let city = filter.city.as_ref().map_or("your area", AsRef::as_ref);

        let range = PriceStats::of(results)
            .map_or_else(|| "various price points".to_owned(), |s| s.range());

        let ready = results.iter().filter(|card| card.is_ready()).count();
        let construction = count - ready;

        let mut text = format!(
            "Found {count} {bhk} {} in {city}. ",
            if count == 1 { "property" } else { "properties" },
        );
        text.push_str(&format!("Prices range from {range}. "));
        if ready > 0 {
            text.push_str(&format!(
                "{ready} {} ready to move. ",
                if ready == 1 { "is" } else { "are" },
            ));
        }
        if construction > 0 {
            text.push_str(&format!("{construction} under construction. "));
        }

        let locations = results
            .iter()
            .filter_map(Card::specified_location)
            .unique()
            .take(3)
            .join(", ");
        text.push_str(&format!(
            "Popular locations include {}.",
            if locations.is_empty() {
                city
            } else {
                locations.as_str()
            },
        ));

        Self(text)
    }

    /// Composes a [`Summary`] for a search that found nothing, given how
    /// many `alternatives` the same search without its price ceiling
    /// would find.
    #[must_use]
    pub fn no_matches(filter: &Filter, alternatives: usize) -> Self {
        let bhk = filter.bhk.as_ref().map_or("properties", AsRef::as_ref);
        let city =
            filter.city.as_ref().map_or("this location", AsRef::as_ref);

        let mut text = format!(
            "No {bhk} properties found matching your exact criteria in \
             {city}. ",
        );
        if alternatives > 0 {
            text.push_str(&format!(
                "However, {alternatives} properties are available if you \
                 adjust your budget. ",
            ));
        } else {
            text.push_str(
                "Try exploring nearby areas or different configurations.",
            );
        }

        Self(text)
    }
}

/// Aggregate statistics over the strictly-positive raw prices of a result
/// set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriceStats {
    /// Lowest price.
    pub min: Price,

    /// Highest price.
    pub max: Price,

    /// Arithmetic mean price.
    pub mean: Price,
}

impl PriceStats {
    /// Calculates [`PriceStats`] over the given `results`.
    ///
    /// [`Card`]s without a price, or with a non-positive one, are excluded
    /// from this statistic only. [`None`] is returned if nothing remains.
    #[must_use]
    pub fn of(results: &[Card]) -> Option<Self> {
        let prices = results
            .iter()
            .filter_map(|card| card.price_raw)
            .filter(|price| price.rupees() > Decimal::ZERO)
            .collect::<Vec<_>>();

        let min = prices.iter().copied().min()?;
        let max = prices.iter().copied().max()?;
        let sum = prices.iter().map(Price::rupees).sum::<Decimal>();
        let mean = Price::new(sum / Decimal::from(prices.len()))?;

        Some(Self { min, max, mean })
    }

    /// Renders the lowest-to-highest range of these [`PriceStats`] in
    /// crore denomination.
    #[must_use]
    pub fn range(&self) -> String {
        format!(
            "₹{:.2} Cr to ₹{:.2} Cr",
            self.min.in_crores(),
            self.max.in_crores(),
        )
    }
}
