//! Model value object representing an LLM model slug

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available LLM models (Value Object)
///
/// Models are addressed by their OpenRouter slug (`vendor/model-name`).
/// The known variants cover the default council roster; anything else is
/// carried through as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    ClaudeSonnet46,
    Gpt52,
    Grok41,
    KimiK25,
    Gemini3Pro,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the OpenRouter slug for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeSonnet46 => "anthropic/claude-sonnet-4-6",
            Model::Gpt52 => "openai/gpt-5.2",
            Model::Grok41 => "x-ai/grok-4.1",
            Model::KimiK25 => "moonshotai/kimi-k2-5",
            Model::Gemini3Pro => "google/gemini-3-pro",
            Model::Custom(s) => s,
        }
    }

    /// Vendor prefix of the slug (the part before `/`), if present
    pub fn vendor(&self) -> Option<&str> {
        self.as_str().split_once('/').map(|(vendor, _)| vendor)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "anthropic/claude-sonnet-4-6" => Model::ClaudeSonnet46,
            "openai/gpt-5.2" => Model::Gpt52,
            "x-ai/grok-4.1" => Model::Grok41,
            "moonshotai/kimi-k2-5" => Model::KimiK25,
            "google/gemini-3-pro" => Model::Gemini3Pro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().expect("Model::from_str is infallible"))
    }
}
