use serde::{Deserialize, Deserializer};

// clients build the quiz category from the keys of the categories map, so the
// id may arrive as "3" as well as 3
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(i32),
        Text(String),
    }

    match Id::deserialize(deserializer)? {
        Id::Number(id) => Ok(id),
        Id::Text(value) => value.trim().parse::<i32>().map_err(|_| {
            serde::de::Error::custom(format!("Wrong value {value}, can not parse to i32"))
        }),
    }
}
