//! Lenient field decoders for hand-written documents

/// Accept either a single value or a sequence for a list field.
///
/// ```
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Doc {
///     #[serde(default, deserialize_with = "extcat_codec::one_or_many::deserialize")]
///     tags: Vec<String>,
/// }
///
/// let doc: Doc = serde_yaml::from_str("tags: solo").unwrap();
/// assert_eq!(doc.tags, vec!["solo".to_string()]);
/// ```
pub mod one_or_many {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany<T> {
        Many(Vec<T>),
        One(T),
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        })
    }
}
