//! Standalone outfit recommendation
//!
//! Usage: `recommend <weather_json> <event_type> <clothes_json> <profile_json>`.
//! Runs the same requester/validator pair as the server and pretty-prints the
//! `RecommendationResult` on stdout (non-ASCII preserved). Exits 0 on a
//! successful recommendation, non-zero on any failure or usage error.

use std::env;
use std::process::ExitCode;

use serde_json::json;

use ankhara_engine::application::dto::CatalogItemDto;
use ankhara_engine::application::services::StylistService;
use ankhara_engine::domain::entities::ClothingItem;
use ankhara_engine::domain::value_objects::{ClientProfile, WeatherReading};
use ankhara_engine::infrastructure::config::{
    self, DEFAULT_GROQ_BASE_URL, DEFAULT_GROQ_MODEL,
};
use ankhara_engine::infrastructure::groq::GroqClient;

const USAGE: &str = "Usage: recommend <weather_json> <event_type> <clothes_json> <profile_json>";

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    let [weather_json, event_type, clothes_json, profile_json] = args.as_slice() else {
        println!("{}", json!({"error": USAGE}));
        return ExitCode::FAILURE;
    };

    let weather: Option<WeatherReading> = match serde_json::from_str(weather_json) {
        Ok(weather) => weather,
        Err(e) => return input_error(format!("invalid weather JSON: {e}")),
    };
    let clothes: Vec<CatalogItemDto> = match serde_json::from_str(clothes_json) {
        Ok(clothes) => clothes,
        Err(e) => return input_error(format!("invalid clothes JSON: {e}")),
    };
    let catalog: Vec<ClothingItem> = match clothes
        .into_iter()
        .map(CatalogItemDto::into_domain)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(catalog) => catalog,
        Err(e) => return input_error(format!("invalid clothes JSON: {e}")),
    };
    let profile: ClientProfile = match serde_json::from_str(profile_json) {
        Ok(profile) => profile,
        Err(e) => return input_error(format!("invalid profile JSON: {e}")),
    };

    let api_key = match config::require_env("GROQ_API_KEY") {
        Ok(key) => key,
        Err(e) => return input_error(e.to_string()),
    };
    let base_url =
        env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_GROQ_BASE_URL.to_string());
    let model = env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_GROQ_MODEL.to_string());

    let service = StylistService::new(GroqClient::new(&base_url, &model, &api_key));
    let result = service
        .recommend(weather.as_ref(), event_type, &catalog, &profile)
        .await;

    match serde_json::to_string_pretty(&result) {
        Ok(pretty) => println!("{pretty}"),
        Err(e) => return input_error(format!("failed to encode result: {e}")),
    }

    if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn input_error(message: String) -> ExitCode {
    println!("{}", json!({"error": message}));
    ExitCode::FAILURE
}
