//! Standalone weather lookup
//!
//! Usage: `weather <location>`. Prints the current conditions as JSON on
//! stdout; any failure (including bad usage) prints `{"error": ...}` and
//! exits non-zero.

use std::env;
use std::process::ExitCode;

use serde_json::json;

use ankhara_engine::application::ports::outbound::WeatherPort;
use ankhara_engine::infrastructure::config::{self, DEFAULT_WEATHERSTACK_BASE_URL};
use ankhara_engine::infrastructure::weatherstack::WeatherstackClient;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    let [location] = args.as_slice() else {
        println!("{}", json!({"error": "Usage: weather <location>"}));
        return ExitCode::FAILURE;
    };

    let access_key = match config::require_env("WEATHERSTACK_API_KEY") {
        Ok(key) => key,
        Err(e) => {
            println!("{}", json!({"error": e.to_string()}));
            return ExitCode::FAILURE;
        }
    };
    let base_url = env::var("WEATHERSTACK_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_WEATHERSTACK_BASE_URL.to_string());

    let client = WeatherstackClient::new(&base_url, &access_key);
    match client.current(location).await {
        Ok(reading) => {
            println!(
                "{}",
                json!({
                    "temperature": reading.temperature,
                    "conditions": reading.conditions,
                    "precipitation": reading.precipitation,
                    "location": location,
                })
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", json!({"error": e.to_string()}));
            ExitCode::FAILURE
        }
    }
}
