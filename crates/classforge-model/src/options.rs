use serde::{Deserialize, Deserializer};

/// Accepts both JSON booleans and their common string spellings
/// (`"true"`, `"yes"`, `"on"`, `"1"` and the negations).
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::String(s) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

/// Options controlling how the class builder treats descriptors.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildOptions {
    /// Reject instance members named `constructor`, `superclass` or
    /// `classname`. When off they are dropped and the bookkeeping wins.
    #[serde(deserialize_with = "deserialize_bool_or_string")]
    pub reject_reserved_members: bool,
    /// Borrow callables a mixin inherits, not only the ones it declares.
    #[serde(deserialize_with = "deserialize_bool_or_string")]
    pub borrow_inherited: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            reject_reserved_members: true,
            borrow_inherited: true,
        }
    }
}
