//! Property listing endpoint definitions.

use axum::{Extension, Json};
use serde::Serialize;
use service::{domain::Filter, query, read, Query as _};

use crate::Service;

/// Maximum number of property cards returned by the listing endpoint.
const RESULTS_CAP: usize = 20;

/// Listing response body.
#[derive(Clone, Debug, Serialize)]
pub struct Response {
    /// Property cards, capped at [`RESULTS_CAP`].
    pub properties: Vec<read::property::Card>,

    /// Total number of properties, before capping.
    pub count: usize,
}

/// Listing endpoint: returns the first [`RESULTS_CAP`] properties of the
/// dataset, for smoke testing.
#[tracing::instrument(skip_all, fields(http.route = "/api/properties"))]
pub async fn properties(
    Extension(service): Extension<Service>,
) -> Json<Response> {
    let cards = service
        .execute(query::properties::Search::by(Filter::default()))
        .await
        .unwrap_or_else(|e| match e {});

    let count = cards.len();
    let mut properties = cards;
    properties.truncate(RESULTS_CAP);

    Json(Response { properties, count })
}
