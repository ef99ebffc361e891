//! [`Query`] collection related to multiple [`Property`]s.

use common::operations::By;

use crate::{domain::Filter, read};
#[cfg(doc)]
use crate::{domain::Property, Query};

use super::DatasetQuery;

/// Queries the [`read::property::Card`]s of every [`Property`] matching a
/// [`Filter`], in dataset order.
pub type Search = DatasetQuery<By<Vec<read::property::Card>, Filter>>;
