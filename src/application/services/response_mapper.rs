//! Response validation and mapping
//!
//! The model is instructed to reply with a bare JSON object, but replies
//! frequently arrive wrapped in a markdown code fence, with string item ids,
//! or with items that do not exist in the catalog. This module is the
//! program-side backstop for the closed-world constraint: it strips the
//! fence once, parses, validates the top-level shape, and resolves every
//! item reference against the catalog that produced the request.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::ClothingItem;
use crate::domain::value_objects::{
    FailureKind, OutfitItemRef, OutfitRecommendation, RecommendationResult,
};

/// Remove a markdown code-fence wrapper, if present
///
/// Handles both ```json and bare ``` fences. Idempotent: unfenced text is
/// returned unchanged apart from surrounding whitespace.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

/// Validate raw model output and map item references onto the catalog
///
/// Parse failures preserve the original text in `raw_text` so callers can
/// surface it for debugging; a structurally valid reply with unresolvable
/// item references degrades tolerantly by dropping those references.
pub fn map_response(raw: &str, catalog: &[ClothingItem]) -> RecommendationResult {
    let cleaned = strip_code_fence(raw);

    let body: Value = match serde_json::from_str(cleaned) {
        Ok(value) => value,
        Err(e) => {
            return RecommendationResult::failure_with_raw(
                FailureKind::MalformedResponse,
                format!("model reply is not valid JSON: {e}"),
                raw,
            );
        }
    };

    let Some(outfits_value) = body.get("outfits") else {
        return RecommendationResult::failure_with_raw(
            FailureKind::MalformedResponse,
            "model reply has no \"outfits\" field",
            body.to_string(),
        );
    };

    let wire_outfits: Vec<WireOutfit> = match serde_json::from_value(outfits_value.clone()) {
        Ok(outfits) => outfits,
        Err(e) => {
            return RecommendationResult::failure_with_raw(
                FailureKind::MalformedResponse,
                format!("\"outfits\" has an unexpected shape: {e}"),
                body.to_string(),
            );
        }
    };

    let outfits = wire_outfits
        .into_iter()
        .map(|outfit| resolve_outfit(outfit, catalog))
        .collect();

    RecommendationResult::Success { outfits }
}

/// One outfit as the model wrote it, before catalog resolution
#[derive(Debug, Deserialize)]
struct WireOutfit {
    name: Option<String>,
    #[serde(default)]
    items: Vec<WireItemRef>,
    #[serde(default)]
    color_palette: Vec<String>,
    #[serde(default, alias = "style_notes")]
    justification: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireItemRef {
    #[serde(default)]
    id: Option<WireId>,
    category: Option<String>,
    name: Option<String>,
}

/// Item ids arrive as JSON numbers or as numeric strings; the prompt's schema
/// example uses a string placeholder, so models produce both.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(i64),
    Text(String),
}

impl WireId {
    fn as_catalog_id(&self) -> Option<u32> {
        match self {
            WireId::Number(n) => u32::try_from(*n).ok(),
            WireId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireId::Number(n) => write!(f, "{n}"),
            WireId::Text(s) => f.write_str(s),
        }
    }
}

fn resolve_outfit(outfit: WireOutfit, catalog: &[ClothingItem]) -> OutfitRecommendation {
    let WireOutfit {
        name,
        items: wire_items,
        color_palette,
        justification,
    } = outfit;
    let outfit_name = name.unwrap_or_else(|| "Untitled outfit".to_string());

    let mut items = Vec::with_capacity(wire_items.len());
    for item_ref in wire_items {
        let resolved = item_ref
            .id
            .as_ref()
            .and_then(WireId::as_catalog_id)
            .and_then(|id| catalog.iter().find(|entry| entry.id == id));

        match resolved {
            Some(entry) => items.push(OutfitItemRef {
                id: entry.id,
                category: item_ref
                    .category
                    .unwrap_or_else(|| entry.category.as_str().to_string()),
                name: item_ref.name.unwrap_or_else(|| entry.name.clone()),
            }),
            None => {
                let id = item_ref
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "<none>".to_string());
                tracing::warn!(
                    outfit = %outfit_name,
                    item_id = %id,
                    "dropping item reference not present in the catalog"
                );
            }
        }
    }

    OutfitRecommendation {
        name: outfit_name,
        items,
        color_palette,
        justification: justification.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::entities::Category;

    use super::*;

    fn catalog() -> Vec<ClothingItem> {
        vec![
            ClothingItem {
                id: 0,
                category: Category::Tops,
                name: "Blouse".to_string(),
                color: "#D72638".to_string(),
                material: "silk".to_string(),
                formality: 4,
            },
            ClothingItem {
                id: 1,
                category: Category::Bottoms,
                name: "Dress pants".to_string(),
                color: "#011627".to_string(),
                material: "wool".to_string(),
                formality: 4,
            },
            ClothingItem {
                id: 2,
                category: Category::Shoes,
                name: "Heels".to_string(),
                color: "#541388".to_string(),
                material: "leather".to_string(),
                formality: 5,
            },
        ]
    }

    fn valid_reply() -> String {
        r##"{
            "outfits": [
                {
                    "name": "Evening look",
                    "items": [
                        {"id": 0, "category": "tops", "name": "Blouse"},
                        {"id": "1", "category": "bottoms", "name": "Dress pants"},
                        {"id": 2, "category": "shoes", "name": "Heels"}
                    ],
                    "color_palette": ["#D72638", "#011627"],
                    "justification": "Deep analogous palette with a formal line."
                }
            ]
        }"##
        .to_string()
    }

    #[test]
    fn strip_code_fence_is_idempotent_on_unfenced_text() {
        let text = r#"{"outfits": []}"#;
        assert_eq!(strip_code_fence(text), text);
        assert_eq!(strip_code_fence(strip_code_fence(text)), text);
    }

    #[test]
    fn strip_code_fence_removes_json_fences() {
        let fenced = "```json\n{\"outfits\": []}\n```";
        assert_eq!(strip_code_fence(fenced), "{\"outfits\": []}");

        let bare = "```\n{\"outfits\": []}\n```";
        assert_eq!(strip_code_fence(bare), "{\"outfits\": []}");
    }

    #[test]
    fn fenced_reply_still_maps_to_success() {
        let fenced = format!("```json\n{}\n```", valid_reply());
        let result = map_response(&fenced, &catalog());
        assert!(result.is_success());
    }

    #[test]
    fn maps_a_valid_reply_and_accepts_string_ids() {
        let result = map_response(&valid_reply(), &catalog());

        let RecommendationResult::Success { outfits } = result else {
            panic!("expected success, got {result:?}");
        };
        assert_eq!(outfits.len(), 1);
        assert_eq!(outfits[0].name, "Evening look");
        let ids: Vec<u32> = outfits[0].items.iter().map(|item| item.id).collect();
        assert_eq!(ids, [0, 1, 2]);
        assert_eq!(outfits[0].color_palette, ["#D72638", "#011627"]);
    }

    #[test]
    fn truncated_json_fails_with_the_original_text_preserved() {
        let truncated = r#"{"outfits": ["#;
        let result = map_response(truncated, &catalog());

        let RecommendationResult::Failure {
            kind, raw_text, ..
        } = result
        else {
            panic!("expected failure");
        };
        assert_eq!(kind, FailureKind::MalformedResponse);
        assert_eq!(raw_text.as_deref(), Some(truncated));
    }

    #[test]
    fn missing_outfits_field_is_malformed() {
        let result = map_response(r#"{"tenues": []}"#, &catalog());

        let RecommendationResult::Failure {
            kind,
            message,
            raw_text,
        } = result
        else {
            panic!("expected failure");
        };
        assert_eq!(kind, FailureKind::MalformedResponse);
        assert!(message.contains("outfits"));
        assert!(raw_text.is_some());
    }

    #[test]
    fn non_array_outfits_is_malformed() {
        let result = map_response(r#"{"outfits": "none"}"#, &catalog());
        let RecommendationResult::Failure { kind, .. } = result else {
            panic!("expected failure");
        };
        assert_eq!(kind, FailureKind::MalformedResponse);
    }

    #[test]
    fn unknown_item_ids_are_dropped_without_failing_the_response() {
        let reply = r#"{
            "outfits": [
                {
                    "name": "Optimistic look",
                    "items": [
                        {"id": 0, "category": "tops", "name": "Blouse"},
                        {"id": 99, "category": "shoes", "name": "Invented sneakers"},
                        {"id": "not-a-number", "category": "bottoms", "name": "Ghost pants"}
                    ]
                }
            ]
        }"#;
        let result = map_response(reply, &catalog());

        let RecommendationResult::Success { outfits } = result else {
            panic!("expected success");
        };
        assert_eq!(outfits[0].items.len(), 1);
        assert_eq!(outfits[0].items[0].id, 0);
    }

    #[test]
    fn missing_item_fields_fall_back_to_catalog_values() {
        let reply = r#"{"outfits": [{"name": "Minimal", "items": [{"id": 2}]}]}"#;
        let result = map_response(reply, &catalog());

        let RecommendationResult::Success { outfits } = result else {
            panic!("expected success");
        };
        assert_eq!(outfits[0].items[0].category, "shoes");
        assert_eq!(outfits[0].items[0].name, "Heels");
    }

    #[test]
    fn style_notes_alias_is_accepted_for_justification() {
        let reply = r#"{"outfits": [{"name": "Aliased", "items": [], "style_notes": "Clean lines"}]}"#;
        let result = map_response(reply, &catalog());

        let RecommendationResult::Success { outfits } = result else {
            panic!("expected success");
        };
        assert_eq!(outfits[0].justification, "Clean lines");
    }
}
