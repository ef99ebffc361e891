//! Free-text query [`Extractor`].

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing as log;

use common::{
    price::{RUPEES_PER_CRORE, RUPEES_PER_LAKH},
    Price,
};

use crate::domain::{
    filter::City,
    property::{Category, Kind, Status},
    Filter,
};

/// Price patterns, in priority order: a qualifier phrase anywhere in the
/// query beats a bare currency mention.
///
/// Both capture the amount and the unit token. The unit alternation order
/// matters: `cr` is tried before `crore` and `lakh` before `lakhs`, so the
/// captured unit may be a prefix of the written one.
const PRICE_PATTERNS: &[&str] = &[
    r"(?:under|below|less than|upto|up to)\s*₹?\s*([\d.]+)\s*(cr|crore|lakh|l|lakhs)",
    r"₹?\s*([\d.]+)\s*(cr|crore|lakh|l|lakhs)",
];

/// Status keyword groups, in priority order: the first group with any
/// keyword present in the query wins.
const STATUS_KEYWORDS: &[(Status, &[&str])] = &[
    (
        Status::ReadyToMove,
        &["ready", "ready to move", "ready-to-move", "immediate"],
    ),
    (
        Status::UnderConstruction,
        &["under construction", "upcoming", "pre-launch", "construction"],
    ),
];

/// Property kind keyword groups, in priority order. Queries mentioning
/// none of these are [`Kind::Residential`].
const KIND_KEYWORDS: &[(Kind, &[&str])] = &[
    (Kind::Commercial, &["office", "commercial"]),
    (Kind::Villa, &["villa", "house"]),
];

/// Extractor of a structured search [`Filter`] out of free-text queries.
///
/// A set of ordered matcher rules, each evaluated first-match-wins.
/// Compile one per process and reuse it.
#[derive(Clone, Debug)]
pub struct Extractor {
    /// Compiled [`PRICE_PATTERNS`], in priority order.
    price_rules: Vec<Regex>,

    /// Known city names, lowercased, in recognition order.
    cities: Vec<String>,
}

impl Extractor {
    /// Creates a new [`Extractor`] recognizing the given `cities`.
    #[must_use]
    pub fn new(cities: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        Self {
            price_rules: PRICE_PATTERNS
                .iter()
                .map(|pattern| Regex::new(pattern).expect("valid regex"))
                .collect(),
            cities: cities
                .into_iter()
                .map(|city| city.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Extracts a search [`Filter`] from the given free-text `query`.
    ///
    /// Total: any input produces a well-formed [`Filter`], possibly one
    /// with no informative constraints at all.
    #[must_use]
    pub fn extract(&self, query: &str) -> Filter {
        let query = query.to_lowercase();

        let filter = Filter {
            bhk: Self::bhk(&query),
            max_price: self.max_price(&query),
            city: self.city(&query),
            status: Self::status(&query),
            property_type: Self::kind(&query),
        };
        log::debug!(?filter, "extracted search filter");
        filter
    }

    /// Extracts the bedroom [`Category`], if the query mentions one.
    ///
    /// Only the first mention is used.
    fn bhk(query: &str) -> Option<Category> {
        /// An integer immediately followed (up to whitespace) by a `BHK`
        /// token, any case.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"(?i)(\d+)\s*bhk").expect("valid regex")
        });

        REGEX.captures(query).map(|caps| Category::bhk(&caps[1]))
    }

    /// Extracts the price ceiling, if the query mentions one.
    ///
    /// Rules are tried in priority order and the first one whose amount
    /// parses wins; a matched but unparseable amount is skipped, so the
    /// extraction never fails. Amounts convert per Indian numbering:
    /// crore units scale by 10 000 000, lakh units by 100 000.
    fn max_price(&self, query: &str) -> Option<Price> {
        self.price_rules.iter().find_map(|rule| {
            let caps = rule.captures(query)?;
            let amount = caps[1].parse::<Decimal>().ok()?;
            let scale = if caps[2].contains("cr") {
                RUPEES_PER_CRORE
            } else {
                RUPEES_PER_LAKH
            };
            Price::new(amount * Decimal::from(scale))
        })
    }

    /// Extracts the first known [`City`] contained in the query,
    /// capitalized.
    ///
    /// Cities are tried in recognition-list order, not query order, and
    /// unknown localities are silently dropped.
    fn city(&self, query: &str) -> Option<City> {
        self.cities
            .iter()
            .find(|city| query.contains(city.as_str()))
            .and_then(|city| City::new(capitalize(city)))
    }

    /// Extracts the construction [`Status`], if the query mentions one.
    fn status(query: &str) -> Option<Status> {
        STATUS_KEYWORDS
            .iter()
            .find(|(_, keywords)| {
                keywords.iter().any(|keyword| query.contains(keyword))
            })
            .map(|(status, _)| status.clone())
    }

    /// Extracts the requested property [`Kind`]. Always succeeds,
    /// defaulting to [`Kind::Residential`].
    fn kind(query: &str) -> Kind {
        KIND_KEYWORDS
            .iter()
            .find(|(_, keywords)| {
                keywords.iter().any(|keyword| query.contains(keyword))
            })
            .map_or_else(Kind::default, |(kind, _)| *kind)
    }
}

/// Uppercases the first character of the given string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod spec {
    use common::Price;

    use crate::domain::property::{Category, Kind, Status};

    use super::Extractor;

    fn extractor() -> Extractor {
        Extractor::new(crate::DEFAULT_CITIES)
    }

    fn price(rupees: u64) -> Price {
        Price::new(rupees.into()).unwrap()
    }

    #[test]
    fn full_query() {
        let filter = extractor().extract("3BHK flat in Pune under ₹1.2 Cr");

        assert_eq!(filter.bhk, Some(Category::bhk("3")));
        assert_eq!(filter.max_price, Some(price(12_000_000)));
        assert_eq!(filter.city.as_ref().map(AsRef::as_ref), Some("Pune"));
        assert_eq!(filter.status, None);
        assert_eq!(filter.property_type, Kind::Residential);
    }

    #[test]
    fn status_and_city() {
        let filter = extractor().extract("Ready to move 2BHK in Mumbai");

        assert_eq!(filter.bhk, Some(Category::bhk("2")));
        assert_eq!(filter.city.as_ref().map(AsRef::as_ref), Some("Mumbai"));
        assert_eq!(filter.status, Some(Status::ReadyToMove));
        assert_eq!(filter.max_price, None);
    }

    #[test]
    fn commercial_with_lakh_budget() {
        let filter = extractor().extract("Office space under 50 lakhs");

        assert_eq!(filter.max_price, Some(price(5_000_000)));
        assert_eq!(filter.property_type, Kind::Commercial);
        assert_eq!(filter.bhk, None);
        assert_eq!(filter.city, None);
    }

    #[test]
    fn bhk_matches_any_case_and_spacing() {
        let e = extractor();

        assert_eq!(e.extract("2bhk").bhk, Some(Category::bhk("2")));
        assert_eq!(e.extract("2 BHK").bhk, Some(Category::bhk("2")));
        assert_eq!(e.extract("10 Bhk").bhk, Some(Category::bhk("10")));
        assert_eq!(e.extract("a flat").bhk, None);
    }

    #[test]
    fn first_bhk_mention_wins() {
        assert_eq!(
            extractor().extract("2BHK or 3BHK").bhk,
            Some(Category::bhk("2")),
        );
    }

    #[test]
    fn bare_price_mention_is_a_fallback() {
        let e = extractor();

        assert_eq!(
            e.extract("flat around ₹75 lakh").max_price,
            Some(price(7_500_000)),
        );
        assert_eq!(e.extract("upto 2 crore").max_price, Some(price(20_000_000)));
        // The qualifier rule wins over the earlier bare mention.
        assert_eq!(
            e.extract("2 cr flat for less than 1.5 cr").max_price,
            Some(price(15_000_000)),
        );
    }

    #[test]
    fn unparseable_amount_is_skipped() {
        assert_eq!(extractor().extract("under 1.2.3 cr").max_price, None);
    }

    #[test]
    fn city_recognition_follows_list_order() {
        let e = extractor();

        // `pune` precedes `mumbai` in the recognition list.
        assert_eq!(
            e.extract("in Mumbai or Pune").city.map(|c| c.to_string()),
            Some("Pune".to_owned()),
        );
        assert_eq!(e.extract("flat in Springfield").city, None);
        assert_eq!(
            e.extract("flat in CHEMBUR").city.map(|c| c.to_string()),
            Some("Chembur".to_owned()),
        );
    }

    #[test]
    fn ready_keywords_win_over_construction_ones() {
        let e = extractor();

        assert_eq!(
            e.extract("ready or under construction").status,
            Some(Status::ReadyToMove),
        );
        assert_eq!(
            e.extract("upcoming pre-launch project").status,
            Some(Status::UnderConstruction),
        );
        assert_eq!(
            e.extract("immediate possession").status,
            Some(Status::ReadyToMove),
        );
    }

    #[test]
    fn villa_and_house_map_to_villa() {
        let e = extractor();

        assert_eq!(e.extract("villa in Baner").property_type, Kind::Villa);
        assert_eq!(e.extract("a house").property_type, Kind::Villa);
        assert_eq!(e.extract("commercial plot").property_type, Kind::Commercial);
        assert_eq!(e.extract("2BHK flat").property_type, Kind::Residential);
    }

    #[test]
    fn blank_query_extracts_nothing_but_a_kind() {
        let filter = extractor().extract("hmm");

        assert!(filter.is_unconstrained());
        assert_eq!(filter.property_type, Kind::Residential);
    }
}
