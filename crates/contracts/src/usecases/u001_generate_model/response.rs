use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Reply of the generation service.
///
/// Decoding is lenient and field by field: a field that is missing, `null` or
/// not a string is treated as absent, and empty strings for the optional
/// references count as absent too. One bad field never costs the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateReply {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub text: String,

    #[serde(
        default,
        deserialize_with = "non_blank_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,

    #[serde(
        rename = "stlUrl",
        default,
        deserialize_with = "non_blank_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub stl_url: Option<String>,

    /// Download name suggested by the service
    #[serde(
        default,
        deserialize_with = "non_blank_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub filename: Option<String>,
}

impl GenerateReply {
    pub fn has_model(&self) -> bool {
        self.stl_url.is_some()
    }
}

/// Any JSON value; only strings are kept
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseString {
    Text(String),
    Other(IgnoredAny),
}

impl LooseString {
    fn into_option(self) -> Option<String> {
        match self {
            LooseString::Text(s) => Some(s),
            LooseString::Other(_) => None,
        }
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(LooseString::deserialize(deserializer)?
        .into_option()
        .unwrap_or_default())
}

fn non_blank_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = LooseString::deserialize(deserializer)?.into_option();
    Ok(value.filter(|s| !s.trim().is_empty()))
}
