//! Custom serde helpers for bridge wire formats.

/// Keeps an explicit `null` apart from an absent field.
///
/// Use with `#[serde(default, deserialize_with = "...")]` on an
/// `Option<Option<T>>`: absent is `None`, `null` is `Some(None)`. With
/// `skip_serializing_if = "Option::is_none"` both re-encode as they came in.
pub mod nullable {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Holder {
        #[serde(
            default,
            deserialize_with = "super::nullable::deserialize",
            skip_serializing_if = "Option::is_none"
        )]
        value: Option<Option<u16>>,
    }

    #[test]
    fn test_nullable_absent_null_and_set() {
        let absent: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.value, None);
        assert_eq!(serde_json::to_string(&absent).unwrap(), "{}");

        let null: Holder = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(null.value, Some(None));
        assert_eq!(serde_json::to_string(&null).unwrap(), r#"{"value":null}"#);

        let set: Holder = serde_json::from_str(r#"{"value": 366}"#).unwrap();
        assert_eq!(set.value, Some(Some(366)));
    }
}
