//! Field projection: entity → ordered JSON object

use crate::core::entity::Entity;
use crate::core::error::SyncError;
use crate::core::field::ValueEncoder;
use indexmap::IndexMap;
use serde_json::Value;

/// Reduce an entity to its configured field subset.
///
/// Fields appear in the output exactly in the order given, so
/// responses are deterministic and directly comparable in tests.
/// An unknown field name or an unencodable value kind is a
/// configuration error and propagates; it is never skipped.
pub fn project<T: Entity>(
    entity: &T,
    fields: &[String],
    encoder: &dyn ValueEncoder,
) -> Result<IndexMap<String, Value>, SyncError> {
    let mut output = IndexMap::with_capacity(fields.len());
    for name in fields {
        let value = entity
            .field(name)
            .ok_or_else(|| SyncError::UnknownField { field: name.clone() })?;
        output.insert(name.clone(), encoder.encode(&value)?);
    }
    Ok(output)
}

/// Convert a projection into a JSON object value
pub fn to_json(projection: IndexMap<String, Value>) -> Value {
    Value::Object(projection.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::{FieldValue, JsonValueEncoder};
    use chrono::{DateTime, TimeZone, Utc};

    #[derive(Clone, Debug)]
    struct Account {
        id: i64,
        username: String,
        joined: DateTime<Utc>,
        avatar: Vec<u8>,
    }

    impl Entity for Account {
        fn resource_name() -> &'static str {
            "accounts"
        }

        fn id(&self) -> i64 {
            self.id
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "id" => Some(FieldValue::Integer(self.id)),
                "username" => Some(FieldValue::String(self.username.clone())),
                "joined" => Some(FieldValue::DateTime(self.joined)),
                "avatar" => Some(FieldValue::Bytes(self.avatar.clone())),
                _ => None,
            }
        }
    }

    fn account() -> Account {
        Account {
            id: 1,
            username: "test1".to_string(),
            joined: Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap(),
            avatar: vec![0xde, 0xad],
        }
    }

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_projection_preserves_order() {
        let encoder = JsonValueEncoder::new();
        let projected = project(
            &account(),
            &fields(&["username", "id", "joined"]),
            &encoder,
        )
        .unwrap();

        let keys: Vec<&String> = projected.keys().collect();
        assert_eq!(keys, ["username", "id", "joined"]);
        assert_eq!(projected["id"], Value::from(1));
        assert_eq!(projected["joined"], Value::String("2024-01-15T08:00:00Z".to_string()));
    }

    #[test]
    fn test_unknown_field_propagates() {
        let encoder = JsonValueEncoder::new();
        let err = project(&account(), &fields(&["id", "nickname"]), &encoder).unwrap_err();

        assert!(matches!(err, SyncError::UnknownField { field } if field == "nickname"));
    }

    #[test]
    fn test_unencodable_value_propagates() {
        let encoder = JsonValueEncoder::new();
        let err = project(&account(), &fields(&["avatar"]), &encoder).unwrap_err();

        assert!(matches!(err, SyncError::Encoding(_)));
    }

    #[test]
    fn test_to_json_keeps_order() {
        let encoder = JsonValueEncoder::new();
        let projected = project(&account(), &fields(&["username", "id"]), &encoder).unwrap();
        let text = serde_json::to_string(&to_json(projected)).unwrap();

        assert_eq!(text, r#"{"username":"test1","id":1}"#);
    }
}
