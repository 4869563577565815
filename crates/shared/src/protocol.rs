use serde::{
    de::{self, DeserializeOwned},
    Deserialize, Serialize,
};
use serde_json::Value;

pub const PROFESSIONALS_PATH: &str = "/api/professionals";
pub const EVENTS_PATH: &str = "/api/events";
pub const POSTS_PATH: &str = "/api/posts";

/// Fixed filter sent with every events request; past events are never asked for.
pub const ONLY_FUTURE_EVENTS: (&str, &str) = ("only_future", "true");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Professionals,
    Events,
    Posts,
}

impl Collection {
    pub fn path(self) -> &'static str {
        match self {
            Collection::Professionals => PROFESSIONALS_PATH,
            Collection::Events => EVENTS_PATH,
            Collection::Posts => POSTS_PATH,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Collection::Professionals => "professionals",
            Collection::Events => "events",
            Collection::Posts => "posts",
        }
    }
}

/// `{ "items": [...] }` envelope shared by the three list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionResponse<T> {
    pub items: Vec<T>,
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: DeserializeOwned> CollectionResponse<T> {
    /// Parses a response body.
    ///
    /// A document without an `items` array (field missing, `null`, or the
    /// body being a non-object value) yields an empty list. Malformed JSON, a
    /// bare `null` body and items that do not decode as `T` are errors.
    pub fn from_json_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let mut document: Value = serde_json::from_slice(body)?;
        if document.is_null() {
            return Err(de::Error::custom("response body is null"));
        }
        let items = match document.get_mut("items").map(Value::take) {
            None | Some(Value::Null) => Vec::new(),
            Some(items) => serde_json::from_value(items)?,
        };
        Ok(Self { items })
    }
}
