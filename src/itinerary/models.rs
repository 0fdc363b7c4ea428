use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Trip parameters posted by the client. Missing fields become empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TripRequest {
    pub source: String,
    pub destination: String,
    /// `YYYY-MM-DD`
    pub start_date: String,
    /// `YYYY-MM-DD`
    pub end_date: String,
    /// Accepts a JSON string or number.
    #[serde(deserialize_with = "string_or_number")]
    #[schema(value_type = String)]
    pub budget: String,
    pub preferences: String,
    pub trip_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItineraryResponse {
    pub itinerary_text: String,
    pub pdf_path: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Budget {
        Text(String),
        Number(serde_json::Number),
        Null(()),
    }

    Ok(match Budget::deserialize(deserializer)? {
        Budget::Text(text) => text,
        Budget::Number(number) => number.to_string(),
        Budget::Null(()) => String::new(),
    })
}
