//! Creature records as served by the quiz API.

use serde::{Deserialize, Deserializer, Serialize};

/// A quiz subject: a named creature with a full image and a silhouette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    /// Identifier assigned by the API. Numeric ids are kept as strings.
    #[serde(default, deserialize_with = "deserialize_id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name, also the expected answer.
    #[serde(default)]
    pub name: String,
    /// Path or URL of the revealed image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Path or URL of the silhouette shown while guessing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silhouette: Option<String>,
}

impl Creature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_silhouette(mut self, silhouette: impl Into<String>) -> Self {
        self.silhouette = Some(silhouette.into());
        self
    }
}

/// Parse a creature list from a JSON array.
pub fn parse_creatures(json: &str) -> Result<Vec<Creature>, serde_json::Error> {
    serde_json::from_str(json)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawId> = Option::deserialize(deserializer)?;
    Ok(raw.map(|id| match id {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    }))
}
