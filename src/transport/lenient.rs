use serde::Deserialize;
use serde::de::Error as DeError;

/// Integer field that the API returns either as a JSON number or as a numeric string
/// (`"SignStatus": 1` and `"TemplateType": "0"` both occur).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LenientInt(i64);

impl LenientInt {
    pub fn into_i32(self) -> Option<i32> {
        i32::try_from(self.0).ok()
    }

    pub fn into_i64(self) -> i64 {
        self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(i64),
    String(String),
}

impl<'de> Deserialize<'de> for LenientInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(Self(value)),
            Repr::String(text) => text
                .trim()
                .parse::<i64>()
                .map(Self)
                .map_err(|_| D::Error::custom(format!("expected an integer, got {text:?}"))),
        }
    }
}
