//! Stylist service - builds the recommendation request and calls the model
//!
//! The "hard" styling work (color theory, outfit coherence) is delegated to
//! the model; this service's job is the request contract: fail fast when the
//! weather input is missing, serialize the catalog through the allow-listed
//! DTO, state the closed-world constraint and the exact response schema, and
//! call the provider with low-randomness decoding so the output stays
//! schema-compliant. The closed-world constraint is advisory on the model
//! side and backstopped by the response mapper.

use crate::application::dto::CatalogItemDto;
use crate::application::ports::outbound::{ChatMessage, LlmPort, LlmRequest};
use crate::application::services::response_mapper::map_response;
use crate::domain::entities::ClothingItem;
use crate::domain::value_objects::{
    ClientProfile, FailureKind, RecommendationResult, WeatherReading,
};

/// Decoding temperature for outfit selection; kept low so the selection is
/// reproducible-ish and the JSON schema is respected.
const STYLIST_TEMPERATURE: f32 = 0.3;

/// Service for generating outfit recommendations
pub struct StylistService<L: LlmPort> {
    llm: L,
}

impl<L: LlmPort> StylistService<L> {
    pub fn new(llm: L) -> Self {
        Self { llm }
    }

    /// Run one recommendation action
    ///
    /// The request is never sent without weather context; a prior weather
    /// lookup failure surfaces here as `MissingInput`. Provider faults are
    /// wrapped, never propagated raw.
    pub async fn recommend(
        &self,
        weather: Option<&WeatherReading>,
        event: &str,
        catalog: &[ClothingItem],
        profile: &ClientProfile,
    ) -> RecommendationResult {
        let Some(weather) = weather else {
            return RecommendationResult::failure(
                FailureKind::MissingInput,
                "weather data is missing",
            );
        };

        let prompt = self.build_prompt(weather, event, catalog, profile);
        tracing::debug!(chars = prompt.len(), event, "sending stylist prompt");

        let request = LlmRequest::new(vec![ChatMessage::user(prompt)])
            .with_temperature(STYLIST_TEMPERATURE)
            .with_json_output(true);

        let response = match self.llm.generate(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "model call failed");
                return RecommendationResult::failure(
                    FailureKind::ProviderError,
                    format!("model call failed: {e}"),
                );
            }
        };

        map_response(&response.content, catalog)
    }

    /// Build the single instruction block sent as the user message
    fn build_prompt(
        &self,
        weather: &WeatherReading,
        event: &str,
        catalog: &[ClothingItem],
        profile: &ClientProfile,
    ) -> String {
        let items: Vec<CatalogItemDto> = catalog.iter().map(CatalogItemDto::from).collect();
        let catalog_json = serde_json::to_value(&items)
            .map(|value| format!("{value:#}"))
            .unwrap_or_else(|_| "[]".to_string());
        let profile_json = serde_json::to_value(profile)
            .map(|value| format!("{value:#}"))
            .unwrap_or_else(|_| "{}".to_string());

        format!(
            r##"[ROLE]
You are an expert personal stylist and you MUST use exclusively the items from the wardrobe provided. You know how to build a harmonious palette using the chromatic circle (complementary, analogous, triadic colors), skin undertones (cool, warm, neutral), and seasonal trends. You personalize every look to flatter the client and create coherent, unique styles aligned with the client's identity.

[AVAILABLE WARDROBE]
{catalog_json}

[CONTEXT]
Event: {event}
Temperature: {temperature}°C
Conditions: {conditions}
Client profile: {profile_json}

[STRICT INSTRUCTIONS]
1. Use ONLY items from the wardrobe above
2. Return 2 complete outfits, each with:
   - 1 top + 1 bottom + 1 pair of shoes + 0-1 accessory
3. JSON response format:

{{
  "outfits": [
    {{
      "name": "Outfit name",
      "items": [
        {{
          "id": ITEM_ID,
          "category": "category",
          "name": "exact name"
        }}
      ],
      "color_palette": ["#HEX"],
      "justification": "Detailed technical explanation of why this combination works"
    }}
  ]
}}
"##,
            temperature = weather.temperature,
            conditions = weather.conditions,
        )
    }
}
