//! [`Query`] answering a chat message end to end.

use std::convert::Infallible;

use common::operations::{By, Select};

use crate::{
    domain::Filter,
    infra::Dataset,
    read::{self, Summary},
    Service,
};

use super::{properties, Query};

/// [`Query`] answering a natural-language property-search message:
/// extracts a [`Filter`], runs the search, and composes a [`Summary`].
///
/// When the search comes back empty, a second, read-only search without
/// the price ceiling runs purely to count alternatives for the
/// [`Summary`]; the answer's [`Filter`] is left untouched.
#[derive(Clone, Debug)]
pub struct Answer {
    /// Free-text message to answer.
    pub message: String,
}

impl<Ds> Query<Answer> for Service<Ds>
where
    Ds: Dataset<
        Select<By<Vec<read::property::Card>, Filter>>,
        Ok = Vec<read::property::Card>,
        Err = Infallible,
    >,
{
    type Ok = read::chat::Answer;
    type Err = Infallible;

    async fn execute(
        &self,
        Answer { message }: Answer,
    ) -> Result<Self::Ok, Self::Err> {
        let filter = self.extract(&message);

        let properties =
            self.execute(properties::Search::by(filter.clone())).await?;

        let summary = if properties.is_empty() {
            let alternatives = self
                .execute(properties::Search::by(filter.without_max_price()))
                .await?
                .len();
            Summary::no_matches(&filter, alternatives)
        } else {
            Summary::found(&properties, &filter)
        };

        Ok(read::chat::Answer {
            filter,
            properties,
            summary,
        })
    }
}

#[cfg(test)]
mod spec {
    use crate::{infra::Table, Config, Query as _, Service};

    use super::Answer;

    /// Fixture table with two 3BHK flats in Pune, one 4BHK in Pune, and
    /// one 2BHK in Mumbai.
    const CSV: &str = "\
projectName,status,type,carpetArea,price,balcony,bathrooms,furnishedType,landmark,fullAddress,slug,possessionDate,floorPlanImage
Green Acres,READY_TO_MOVE,3BHK,1200,12000000,2,2,FURNISHED,Wakad,\"Survey 12, Wakad, Pune 411057\",green-acres,Dec 2024,plan-a.png
Sun Heights,UNDER_CONSTRUCTION,3BHK,1100,9500000,1,2,,Baner,\"Baner Road, Pune 411045\",sun-heights,Mar 2026,
Royal Palms,READY_TO_MOVE,4BHK,2100,25000000,3,4,SEMI_FURNISHED,Koregaon Park,\"Koregaon Park, Pune 411001\",royal-palms,,
Sea Breeze,UNDER_CONSTRUCTION,2BHK,800,15000000,1,2,,Chembur,\"Chembur East, Mumbai 400071\",sea-breeze,Jun 2026,
";

    fn service() -> Service<Table> {
        let table = Table::from_reader(CSV.as_bytes()).unwrap();
        Service::new(Config::default(), table)
    }

    #[tokio::test]
    async fn answers_a_search_hit() {
        let answer = service()
            .execute(Answer {
                message: "3BHK flat in Pune under ₹1.3 Cr".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(answer.properties.len(), 2);
        assert_eq!(answer.properties[0].title, "Green Acres");
        assert_eq!(answer.properties[1].title, "Sun Heights");
        assert_eq!(
            answer.summary.to_string(),
            "Found 2 3BHK properties in Pune. \
             Prices range from ₹0.95 Cr to ₹1.20 Cr. \
             1 is ready to move. \
             1 under construction. \
             Popular locations include Wakad, Baner.",
        );
    }

    #[tokio::test]
    async fn counts_alternatives_when_only_the_budget_blocks() {
        let answer = service()
            .execute(Answer {
                message: "4BHK in Pune under 10 lakhs".to_owned(),
            })
            .await
            .unwrap();

        assert!(answer.properties.is_empty());
        assert_eq!(
            answer.summary.to_string(),
            "No 4BHK properties found matching your exact criteria in \
             Pune. \
             However, 1 properties are available if you adjust your \
             budget. ",
        );
        // The caller-visible filter still carries the ceiling.
        assert!(answer.filter.max_price.is_some());
    }

    #[tokio::test]
    async fn suggests_exploring_when_nothing_matches_at_all() {
        let answer = service()
            .execute(Answer {
                message: "7BHK in Chennai".to_owned(),
            })
            .await
            .unwrap();

        assert!(answer.properties.is_empty());
        assert_eq!(
            answer.summary.to_string(),
            "No 7BHK properties found matching your exact criteria in \
             Chennai. \
             Try exploring nearby areas or different configurations.",
        );
    }
}
