//! Chat endpoint definitions.

use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use service::{domain::Filter, query, read, Query as _};

use crate::{Error, Service};

/// Maximum number of property cards returned in one chat response.
const RESULTS_CAP: usize = 10;

/// Messages answered with the [`GREETING_RESPONSE`] instead of a search.
const GREETINGS: &[&str] =
    &["hi", "hello", "hey", "hii", "hlo", "sup", "yo", "namaste"];

/// Words turning a message into a usage-help request.
const HELP_WORDS: &[&str] =
    &["help", "how to use", "what can you do", "commands"];

/// Canned reply to a greeting.
const GREETING_RESPONSE: &str = "Hello! 👋 I'm your property search \
    assistant. I can help you find properties based on your requirements. \
    Try asking me things like:\n\n\
    • '3BHK flat in Pune under ₹1.2 Cr'\n\
    • 'Ready to move 2BHK in Mumbai'\n\
    • 'Office space under 50 lakhs'\n\n\
    What would you like to search for?";

/// Canned reply to a usage-help request.
const HELP_RESPONSE: &str = "I can help you find properties! 🏠 You can \
    search by:\n\n\
    • BHK type (1BHK, 2BHK, 3BHK, etc.)\n\
    • Budget (under ₹1.2 Cr, under 50 lakhs)\n\
    • City (Pune, Mumbai, etc.)\n\
    • Status (ready to move, under construction)\n\
    • Property type (office, villa, residential)\n\n\
    Just describe what you're looking for in natural language!";

/// Canned reply to a message yielding no informative search filters.
const NOT_UNDERSTOOD_RESPONSE: &str = "I couldn't understand your query. \
    🤔 Please try to include details like:\n\n\
    • Number of BHK (e.g., 2BHK, 3BHK)\n\
    • Budget (e.g., under ₹1.2 Cr)\n\
    • City (e.g., Pune, Mumbai)\n\
    • Status (e.g., ready to move)\n\n\
    For example: '3BHK flat in Pune under ₹1.2 Cr'";

/// Chat request body.
#[derive(Clone, Debug, Deserialize)]
pub struct Request {
    /// Free-text message to answer.
    #[serde(default)]
    pub message: String,
}

/// Chat response body.
#[derive(Clone, Debug, Serialize)]
pub struct Response {
    /// Natural-language summary of the outcome.
    pub summary: String,

    /// Matching property cards, capped at [`RESULTS_CAP`].
    pub properties: Vec<read::property::Card>,

    /// Filters extracted from the message, if a search ran.
    pub filters: Option<Filter>,

    /// Total number of matches, before capping.
    pub count: usize,

    /// Original message, echoed back.
    pub query: String,
}

impl Response {
    /// Creates a canned [`Response`] carrying no search outcome.
    fn canned(summary: &str, query: String) -> Self {
        Self {
            summary: summary.to_owned(),
            properties: Vec::new(),
            filters: None,
            count: 0,
            query,
        }
    }
}

/// Chat endpoint: answers a free-text property-search message.
///
/// Greetings, usage-help requests, and messages yielding no informative
/// search filters short-circuit to canned replies; empty messages are
/// rejected with a 400.
///
/// # Errors
///
/// Errors if the message is empty or whitespace-only.
#[tracing::instrument(skip_all, fields(http.route = "/api/chat"))]
pub async fn chat(
    Extension(service): Extension<Service>,
    Json(request): Json<Request>,
) -> Result<Json<Response>, Error> {
    let message = request.message.trim().to_owned();
    if message.is_empty() {
        return Err(Error::bad_request("Message is required"));
    }

    let lowered = message.to_lowercase();
    if is_greeting(&lowered) {
        return Ok(Json(Response::canned(GREETING_RESPONSE, message)));
    }
    if asks_for_help(&lowered) {
        return Ok(Json(Response::canned(HELP_RESPONSE, message)));
    }

    let answer = service
        .execute(query::chat::Answer {
            message: message.clone(),
        })
        .await
        .unwrap_or_else(|e| match e {});

    if answer.filter.is_unconstrained() {
        return Ok(Json(Response::canned(NOT_UNDERSTOOD_RESPONSE, message)));
    }

    let count = answer.properties.len();
    let mut properties = answer.properties;
    properties.truncate(RESULTS_CAP);

    Ok(Json(Response {
        summary: answer.summary.to_string(),
        properties,
        filters: Some(answer.filter),
        count,
        query: message,
    }))
}

/// Indicates whether the whole lowercased `message` is a greeting.
fn is_greeting(message: &str) -> bool {
    GREETINGS.contains(&message)
}

/// Indicates whether the lowercased `message` asks for usage help.
fn asks_for_help(message: &str) -> bool {
    HELP_WORDS.iter().any(|word| message.contains(word))
}

#[cfg(test)]
mod spec {
    use axum::{Extension, Json};
    use service::{infra::Table, Config, Service};

    use super::{asks_for_help, chat, is_greeting, Request};

    const CSV: &str = "\
projectName,status,type,carpetArea,price,balcony,bathrooms,furnishedType,landmark,fullAddress,slug,possessionDate,floorPlanImage
Green Acres,READY_TO_MOVE,3BHK,1200,12000000,2,2,FURNISHED,Wakad,\"Survey 12, Wakad, Pune 411057\",green-acres,Dec 2024,plan-a.png
";

    fn service() -> Service<Table> {
        Service::new(
            Config::default(),
            Table::from_reader(CSV.as_bytes()).unwrap(),
        )
    }

    fn request(message: &str) -> Json<Request> {
        Json(Request {
            message: message.to_owned(),
        })
    }

    #[test]
    fn recognizes_greetings_only_as_whole_messages() {
        assert!(is_greeting("hi"));
        assert!(is_greeting("namaste"));
        assert!(!is_greeting("hi, find me a flat in pune"));
    }

    #[test]
    fn recognizes_help_requests_by_substring() {
        assert!(asks_for_help("help"));
        assert!(asks_for_help("what can you do for me?"));
        assert!(!asks_for_help("2bhk in pune"));
    }

    #[tokio::test]
    async fn rejects_empty_messages() {
        let error = chat(Extension(service()), request("   "))
            .await
            .unwrap_err();

        assert_eq!(error.status_code, http::StatusCode::BAD_REQUEST);
        assert_eq!(error.message, "Message is required");
    }

    #[tokio::test]
    async fn short_circuits_greetings() {
        let Json(response) = chat(Extension(service()), request("Hello"))
            .await
            .unwrap();

        assert!(response.summary.starts_with("Hello!"));
        assert!(response.properties.is_empty());
        assert!(response.filters.is_none());
        assert_eq!(response.count, 0);
        assert_eq!(response.query, "Hello");
    }

    #[tokio::test]
    async fn short_circuits_uninformative_messages() {
        let Json(response) =
            chat(Extension(service()), request("good weather today"))
                .await
                .unwrap();

        assert!(response.summary.starts_with("I couldn't understand"));
        assert!(response.filters.is_none());
    }

    #[tokio::test]
    async fn answers_a_search() {
        let Json(response) =
            chat(Extension(service()), request("3BHK in Pune"))
                .await
                .unwrap();

        assert_eq!(response.count, 1);
        assert_eq!(response.properties.len(), 1);
        assert_eq!(response.properties[0].title, "Green Acres");
        let filters = response.filters.unwrap();
        assert_eq!(filters.bhk.as_ref().map(AsRef::as_ref), Some("3BHK"));
        assert_eq!(response.query, "3BHK in Pune");
    }
}
