use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::lead_models::Lead;

/// Body of `POST /api/contacto`. Every field is optional at the wire level so
/// that absent keys and `null` reach validation instead of failing decoding.
///
/// Values must be JSON strings. A number or boolean (e.g. a numeric
/// `telefono`) fails decoding and gets the same 400 as a missing field.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactPayload {
    pub nombre: Option<String>,
    pub telefono: Option<String>,
    pub caso: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactResponse {
    pub success: bool,
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

impl ContactPayload {
    pub fn into_lead(self) -> Result<Lead, ApiError> {
        match (present(self.nombre), present(self.telefono), present(self.caso)) {
            (Some(name), Some(phone), Some(case_description)) => Ok(Lead {
                name,
                phone,
                case_description,
            }),
            _ => Err(ApiError::MissingFields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(nombre: Option<&str>, telefono: Option<&str>, caso: Option<&str>) -> ContactPayload {
        ContactPayload {
            nombre: nombre.map(str::to_string),
            telefono: telefono.map(str::to_string),
            caso: caso.map(str::to_string),
        }
    }

    #[test]
    fn complete_payload_becomes_lead() {
        let lead = payload(Some("Ana Ruiz"), Some("6141234567"), Some("Despido injustificado"))
            .into_lead()
            .unwrap();
        assert_eq!(lead.name, "Ana Ruiz");
        assert_eq!(lead.phone, "6141234567");
        assert_eq!(lead.case_description, "Despido injustificado");
    }

    #[test]
    fn each_missing_field_is_rejected() {
        assert!(payload(None, Some("614"), Some("caso")).into_lead().is_err());
        assert!(payload(Some("Ana"), None, Some("caso")).into_lead().is_err());
        assert!(payload(Some("Ana"), Some("614"), None).into_lead().is_err());
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let err = payload(Some("Ana"), Some(""), Some("caso")).into_lead().unwrap_err();
        assert_eq!(err.to_string(), "Faltan campos obligatorios");
    }

    #[test]
    fn phone_format_is_not_checked() {
        assert!(payload(Some("Ana"), Some("llámame"), Some("caso")).into_lead().is_ok());
    }

    #[test]
    fn absent_keys_and_null_decode_to_none() {
        let decoded: ContactPayload =
            serde_json::from_str(r#"{"nombre": "Ana", "caso": null}"#).unwrap();
        assert_eq!(decoded.nombre.as_deref(), Some("Ana"));
        assert!(decoded.telefono.is_none());
        assert!(decoded.caso.is_none());
    }
}
