//! Generic replies shared by several endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{"mensaje": ...}` reply returned by mutating endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageReply {
    #[serde(rename = "mensaje", default)]
    pub message: String,

    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Error body of a non-2xx reply.
///
/// `detail` is usually a string. Request validation failures carry a list
/// of entries instead, each with a human readable `msg`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Flatten `detail` into a single display string.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Array(entries) => {
                let messages: Vec<String> = entries
                    .iter()
                    .filter_map(|entry| match entry {
                        Value::String(s) => Some(s.clone()),
                        other => other
                            .get("msg")
                            .and_then(|m| m.as_str())
                            .map(|s| s.to_string()),
                    })
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "Correo o contraseña incorrectos."}"#).unwrap();
        assert_eq!(
            body.message().as_deref(),
            Some("Correo o contraseña incorrectos.")
        );
    }

    #[test]
    fn test_validation_list_detail() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail": [
                {"loc": ["body", "id_empleado"], "msg": "field required", "type": "missing"},
                {"loc": ["body", "nombre"], "msg": "str type expected", "type": "type_error"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            body.message().as_deref(),
            Some("field required; str type expected")
        );
    }

    #[test]
    fn test_missing_detail() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);

        let blank: ErrorBody = serde_json::from_str(r#"{"detail": "  "}"#).unwrap();
        assert_eq!(blank.message(), None);
    }

    #[test]
    fn test_message_reply_defaults() {
        let reply: MessageReply =
            serde_json::from_str(r#"{"estado": "Éxito", "mensaje": "Empleado registrado."}"#)
                .unwrap();
        assert_eq!(reply.message, "Empleado registrado.");
        assert_eq!(reply.status.as_deref(), Some("Éxito"));
    }
}
