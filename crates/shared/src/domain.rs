use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

macro_rules! id_newtype {
    ($name:ident) => {
        /// Record identifier kept as text. Accepts JSON strings, numbers and
        /// `{"$oid": ...}` objects.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                Value::deserialize(deserializer).map(|raw| Self(id_text(raw)))
            }
        }
    };
}

fn id_text(raw: Value) -> String {
    match raw {
        Value::String(text) => text,
        Value::Object(mut fields) => match fields.remove("$oid") {
            Some(Value::String(oid)) => oid,
            _ => Value::Object(fields).to_string(),
        },
        other => other.to_string(),
    }
}

/// `_id` wins over `id`; empty strings count as missing.
fn first_key<'a>(primary: Option<&'a str>, fallback: Option<&'a str>) -> Option<&'a str> {
    primary
        .filter(|id| !id.is_empty())
        .or_else(|| fallback.filter(|id| !id.is_empty()))
}

id_newtype!(ProfessionalId);
id_newtype!(EventId);
id_newtype!(PostId);

/// A member profile as served by `/api/professionals`.
///
/// Every field is optional; the backend is free to omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProfessionalId>,
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub fallback_id: Option<ProfessionalId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EventId>,
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub fallback_id: Option<EventId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw timestamp text; parsed at render time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
}

/// A social feed item (blog, recap, media drop).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PostId>,
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub fallback_id: Option<PostId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl Professional {
    pub fn key(&self) -> Option<&str> {
        first_key(
            self.id.as_ref().map(ProfessionalId::as_str),
            self.fallback_id.as_ref().map(ProfessionalId::as_str),
        )
    }
}

impl Event {
    pub fn key(&self) -> Option<&str> {
        first_key(
            self.id.as_ref().map(EventId::as_str),
            self.fallback_id.as_ref().map(EventId::as_str),
        )
    }
}

impl Post {
    pub fn key(&self) -> Option<&str> {
        first_key(
            self.id.as_ref().map(PostId::as_str),
            self.fallback_id.as_ref().map(PostId::as_str),
        )
    }
}

/// Hero search form values. Empty or absent fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl SearchParams {
    pub fn new(q: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            state: Some(state.into()),
        }
    }

    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }

    pub fn region(&self) -> &str {
        self.state.as_deref().unwrap_or_default()
    }

    /// Query pairs for `/api/professionals`. Empty values are left for the
    /// transport to drop.
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [("q", self.query()), ("state", self.region())]
    }
}
