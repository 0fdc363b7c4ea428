use super::models::TripRequest;

/// Build the natural-language prompt sent to the model.
///
/// Caller fields are interpolated as-is.
pub fn build_prompt(request: &TripRequest, duration: i64) -> String {
    format!(
        concat!(
            "Generate a detailed {duration}-day travel itinerary from {source} to {destination} ",
            "with a budget of Rs. {budget}. Preferences: {preferences}.  Trip type: {trip_type}. ",
            "Format the itinerary with 'Day X:' followed by activities for each day and then ",
            "followed by each day budget as 'Day X Budget: Rs. Y'. ",
            "Include travel tips and local cuisine recommendations. ",
            "Use plain text and avoid Markdown or bullet points."
        ),
        duration = duration,
        source = request.source,
        destination = request.destination,
        budget = request.budget,
        preferences = request.preferences,
        trip_type = request.trip_type,
    )
}
