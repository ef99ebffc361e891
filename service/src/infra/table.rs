//! In-memory property [`Table`].

use std::{convert::Infallible, fs, io, path::Path, sync::Arc};

use derive_more::{Display, Error as StdError, From};
use rust_decimal::{prelude::ToPrimitive as _, Decimal};
use serde::Deserialize;
use tracerr::Traced;
use tracing as log;

use common::{
    operations::{By, Select},
    Price,
};

use crate::{
    domain::{
        property::{
            Category, FullAddress, Furnishing, ImageRef, Landmark,
            PossessionDate, ProjectName, Slug, Status,
        },
        Filter, Property,
    },
    read,
};

use super::Dataset;

/// Immutable, [`Arc`]-shared table of every known [`Property`].
///
/// Loaded once at startup; requests only ever read it, so it's shared
/// between them without any locking.
#[derive(Clone, Debug)]
pub struct Table {
    /// Rows of this [`Table`], in source order.
    rows: Arc<[Property]>,
}

impl Table {
    /// Loads a [`Table`] from the pre-joined CSV file at the given `path`.
    ///
    /// Malformed values inside rows degrade to their sentinels and never
    /// fail the load; only an unreadable file or structurally broken CSV
    /// does.
    ///
    /// # Errors
    ///
    /// Errors if the file cannot be read or is not valid CSV.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Traced<LoadError>> {
        let path = path.as_ref();
        let file = fs::File::open(path)
            .map_err(|e| tracerr::new!(LoadError::from(e)))?;

        let table = Self::from_reader(file)?;
        log::info!(
            rows = table.len(),
            path = %path.display(),
            "property table loaded",
        );
        Ok(table)
    }

    /// Reads a [`Table`] out of the given CSV `source`.
    ///
    /// # Errors
    ///
    /// Errors if the source is not valid CSV.
    pub fn from_reader(
        source: impl io::Read,
    ) -> Result<Self, Traced<LoadError>> {
        let mut rows = Vec::new();
        for row in csv::Reader::from_reader(source).into_deserialize() {
            let row: Row =
                row.map_err(|e| tracerr::new!(LoadError::from(e)))?;
            rows.push(row.into());
        }
        Ok(Self { rows: rows.into() })
    }

    /// Returns the number of [`Property`]s in this [`Table`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Indicates whether this [`Table`] holds no [`Property`]s at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Selects the [`Card`]s of every [`Property`] matching the given
    /// [`Filter`], in source order.
    ///
    /// [`Card`]: read::property::Card
    #[must_use]
    pub fn select(&self, filter: &Filter) -> Vec<read::property::Card> {
        self.rows
            .iter()
            .filter(|property| filter.matches(property))
            .map(Into::into)
            .collect()
    }
}

impl Dataset<Select<By<Vec<read::property::Card>, Filter>>> for Table {
    type Ok = Vec<read::property::Card>;
    type Err = Infallible;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<read::property::Card>, Filter>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.select(&by.into_inner()))
    }
}

/// Error of loading a [`Table`].
#[derive(Debug, Display, From, StdError)]
pub enum LoadError {
    /// Failed to read the CSV source.
    Io(io::Error),

    /// Malformed CSV payload.
    Csv(csv::Error),
}

/// Raw CSV row of the merged property table, prior to cleanup.
///
/// Every column arrives as an optional string; numeric and enum-like
/// columns are coerced during the [`Property`] conversion, with anything
/// unparseable degrading to an absent value.
#[derive(Debug, Deserialize)]
struct Row {
    /// `projectName` column.
    #[serde(rename = "projectName")]
    project_name: Option<String>,

    /// `type` column (bedroom category label).
    #[serde(rename = "type")]
    category: Option<String>,

    /// `price` column, rupees.
    price: Option<String>,

    /// `carpetArea` column, square feet.
    #[serde(rename = "carpetArea")]
    carpet_area: Option<String>,

    /// `status` column.
    status: Option<String>,

    /// `landmark` column.
    landmark: Option<String>,

    /// `fullAddress` column.
    #[serde(rename = "fullAddress")]
    full_address: Option<String>,

    /// `bathrooms` column, may be written as a float.
    bathrooms: Option<String>,

    /// `balcony` column, may be written as a float.
    balcony: Option<String>,

    /// `furnishedType` column.
    #[serde(rename = "furnishedType")]
    furnished: Option<String>,

    /// `possessionDate` column.
    #[serde(rename = "possessionDate")]
    possession: Option<String>,

    /// `slug` column.
    slug: Option<String>,

    /// `floorPlanImage` column.
    #[serde(rename = "floorPlanImage")]
    image: Option<String>,
}

impl From<Row> for Property {
    fn from(row: Row) -> Self {
        Self {
            name: row
                .project_name
                .and_then(ProjectName::new)
                .unwrap_or_else(ProjectName::unknown),
            category: row
                .category
                .and_then(Category::new)
                .unwrap_or_else(Category::unknown),
            price: row
                .price
                .as_deref()
                .and_then(|price| price.parse::<Price>().ok()),
            carpet_area: row
                .carpet_area
                .as_deref()
                .and_then(|area| area.parse::<Decimal>().ok())
                .map(Into::into),
            status: row
                .status
                .as_deref()
                .map_or_else(Status::unknown, Status::from_label),
            location: row
                .landmark
                .and_then(Landmark::new)
                .unwrap_or_else(Landmark::not_specified),
            full_address: row.full_address.and_then(FullAddress::new),
            bathrooms: row.bathrooms.as_deref().and_then(parse_count),
            balcony: row.balcony.as_deref().and_then(parse_count),
            furnishing: row.furnished.map(Furnishing::from),
            possession: row.possession.map(PossessionDate::from),
            slug: row.slug.and_then(Slug::new),
            image: row.image.map(ImageRef::from),
        }
    }
}

/// Parses a count column that may be written as a float (e.g. `2.0`),
/// truncating any fractional part.
fn parse_count(raw: &str) -> Option<u8> {
    raw.parse::<Decimal>().ok().and_then(|count| count.to_u8())
}
