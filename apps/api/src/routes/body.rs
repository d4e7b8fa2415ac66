//! Request body field types shared by the resource handlers.

use serde::{Deserialize, Deserializer};

/// Free-form text column that clients may also send as a JSON number
/// (`"population": 200000`, `"height": 1.72`). Numbers are kept as their
/// decimal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeText(pub String);

impl FreeText {
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for FreeText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => FreeText(text),
            Raw::Number(number) => FreeText(number.to_string()),
        })
    }
}

/// `Option<FreeText>` -> `Option<String>`.
pub fn text(value: Option<FreeText>) -> Option<String> {
    value.map(FreeText::into_inner)
}

/// Double-option variant of [`text`] for partial updates.
pub fn patch_text(value: Option<Option<FreeText>>) -> Option<Option<String>> {
    value.map(text)
}
