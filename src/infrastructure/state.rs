//! Shared application state

use crate::application::services::wardrobe_service::{generate_catalog, COLOR_PALETTE};
use crate::domain::entities::ClothingItem;
use crate::domain::value_objects::ClientProfile;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::geoip::GeoIpClient;
use crate::infrastructure::groq::GroqClient;
use crate::infrastructure::weatherstack::WeatherstackClient;

/// Shared application state
///
/// The catalog and profile are generated once and are immutable for the
/// lifetime of the session; every recommendation request snapshots them.
pub struct AppState {
    pub config: AppConfig,
    pub llm_client: GroqClient,
    pub weather_client: WeatherstackClient,
    pub geo_client: GeoIpClient,
    pub catalog: Vec<ClothingItem>,
    pub profile: ClientProfile,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let llm_client = GroqClient::new(
            &config.groq_base_url,
            &config.groq_model,
            &config.groq_api_key,
        );
        let weather_client =
            WeatherstackClient::new(&config.weatherstack_base_url, &config.weatherstack_api_key);
        let geo_client = GeoIpClient::new(&config.geoip_base_url, &config.default_city);

        let catalog = generate_catalog(config.wardrobe_size);
        let profile = session_profile();

        Self {
            config,
            llm_client,
            weather_client,
            geo_client,
            catalog,
            profile,
        }
    }
}

/// The reference client profile used for the session
fn session_profile() -> ClientProfile {
    ClientProfile {
        morphology: "inverted triangle".to_string(),
        skin_tone: "#FFDAB9".to_string(),
        preferred_styles: [
            "elegant",
            "classic",
            "casual",
            "streetwear",
            "boho",
            "rock/grunge",
            "preppy",
            "athleisure",
            "vintage/retro",
            "urban chic",
            "glamour",
            "avant-garde",
            "business",
            "romantic",
            "casual chic",
        ]
        .iter()
        .map(|style| style.to_string())
        .collect(),
        size: "M".to_string(),
        color_palette: COLOR_PALETTE.iter().map(|color| color.to_string()).collect(),
        restrictions: vec!["no fluorescent prints".to_string()],
    }
}
