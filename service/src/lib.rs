//! Service contains the business logic of the application.

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod domain;
pub mod extract;
pub mod infra;
pub mod query;
pub mod read;

use smart_default::SmartDefault;

pub use self::{extract::Extractor, query::Query};

/// Default set of known city names recognized in search queries, in
/// recognition order.
pub const DEFAULT_CITIES: &[&str] = &[
    "pune",
    "mumbai",
    "bangalore",
    "delhi",
    "hyderabad",
    "chennai",
    "chembur",
    "wakad",
    "baner",
];

/// [`Service`] configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct Config {
    /// Known city names recognized in search queries, in recognition
    /// order.
    #[default(_code = "DEFAULT_CITIES.iter().map(|c| (*c).to_owned()).collect()")]
    pub cities: Vec<String>,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Ds> {
    /// Configuration of this [`Service`].
    config: Config,

    /// Query [`Extractor`] of this [`Service`].
    extractor: Extractor,

    /// [`Dataset`] of this [`Service`].
    ///
    /// [`Dataset`]: infra::Dataset
    dataset: Ds,
}

impl<Ds> Service<Ds> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, dataset: Ds) -> Self {
        let extractor = Extractor::new(&config.cities);
        Self {
            config,
            extractor,
            dataset,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the dataset of this [`Service`].
    #[must_use]
    pub fn dataset(&self) -> &Ds {
        &self.dataset
    }

    /// Extracts a search [`Filter`] from the given free-text `message`.
    ///
    /// [`Filter`]: domain::Filter
    #[must_use]
    pub fn extract(&self, message: &str) -> domain::Filter {
        self.extractor.extract(message)
    }
}
