//! Client profile value object

use serde::{Deserialize, Serialize};

/// Styling profile for the client
///
/// Static configuration for the session; the recommendation flow only ever
/// reads it while building the model prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    /// Body morphology, e.g. "inverted triangle"
    pub morphology: String,
    /// Skin tone as hex RGB
    pub skin_tone: String,
    /// Styles the client gravitates toward
    pub preferred_styles: Vec<String>,
    /// Clothing size, e.g. "M"
    pub size: String,
    /// Colors the client likes wearing, in preference order
    pub color_palette: Vec<String>,
    /// Hard restrictions, e.g. "no fluorescent prints"
    pub restrictions: Vec<String>,
}
