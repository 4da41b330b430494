use serde::{Deserialize, Deserializer};

// the front-end sends select values (category, difficulty) as strings, ids elsewhere as numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

pub fn deserialize_int_like<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(v) => Ok(v),
        IntOrString::Str(s) => s.trim().parse::<i64>().map_err(|_| {
            serde::de::Error::custom(format!("Wrong value {s}, can not parse to i64"))
        }),
    }
}
