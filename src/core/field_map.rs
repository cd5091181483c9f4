use crate::domain::model::{AddressField, AddressRecord, DirectoryPayload};
use crate::utils::error::LookupError;
use serde_json::Value;

/// One row of a resolver-to-record field correspondence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCorrespondence {
    pub source: &'static str,
    pub target: AddressField,
}

const fn field(source: &'static str, target: AddressField) -> FieldCorrespondence {
    FieldCorrespondence { source, target }
}

/// ViaCEP vocabulary.
pub static VIACEP_FIELDS: &[FieldCorrespondence] = &[
    field("cep", AddressField::Cep),
    field("logradouro", AddressField::Address),
    field("bairro", AddressField::Neighborhood),
    field("localidade", AddressField::City),
    field("uf", AddressField::State),
    field("ibge", AddressField::Ibge),
    field("gia", AddressField::Gia),
    field("ddd", AddressField::Ddd),
    field("siafi", AddressField::Siafi),
];

/// Copies the mapped fields of `payload` into an [`AddressRecord`] verbatim.
///
/// Absent or null fields stay `None`. The postal code is mandatory and every
/// mapped value must be a string; anything else is a malformed payload.
pub fn map_payload(
    payload: &DirectoryPayload,
    table: &[FieldCorrespondence],
) -> std::result::Result<AddressRecord, LookupError> {
    let mut record = AddressRecord::default();
    let mut has_cep = false;

    for row in table {
        match payload.get(row.source) {
            None | Some(Value::Null) => {}
            Some(Value::String(value)) => {
                has_cep |= row.target == AddressField::Cep;
                record.set(row.target, value.clone());
            }
            Some(_) => {
                return Err(LookupError::Internal {
                    message: format!("directory field '{}' is not a string", row.source),
                });
            }
        }
    }

    if !has_cep {
        return Err(LookupError::Internal {
            message: "directory payload has no postal code".to_string(),
        });
    }

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> DirectoryPayload {
        DirectoryPayload::try_from(value).unwrap()
    }

    #[test]
    fn test_maps_viacep_payload_without_altering_values() {
        let payload = payload(json!({
            "cep": "01310-100",
            "logradouro": "Av Paulista",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP",
            "ibge": "3550308",
            "gia": "1004",
            "ddd": "11",
            "siafi": "7107"
        }));

        let record = map_payload(&payload, VIACEP_FIELDS).unwrap();

        assert_eq!(
            record,
            AddressRecord {
                cep: "01310-100".to_string(),
                address: Some("Av Paulista".to_string()),
                neighborhood: Some("Bela Vista".to_string()),
                city: Some("São Paulo".to_string()),
                state: Some("SP".to_string()),
                ibge: Some("3550308".to_string()),
                gia: Some("1004".to_string()),
                ddd: Some("11".to_string()),
                siafi: Some("7107".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_and_empty_fields() {
        let payload = payload(json!({
            "cep": "69900-000",
            "logradouro": "",
            "uf": "AC",
            "gia": null,
            "complemento": "ignored"
        }));

        let record = map_payload(&payload, VIACEP_FIELDS).unwrap();

        assert_eq!(record.address.as_deref(), Some(""));
        assert_eq!(record.state.as_deref(), Some("AC"));
        assert_eq!(record.gia, None);
        assert_eq!(record.city, None);
    }

    #[test]
    fn test_payload_without_cep_is_malformed() {
        let payload = payload(json!({"logradouro": "Av Paulista"}));
        let err = map_payload(&payload, VIACEP_FIELDS).unwrap_err();
        assert!(matches!(err, LookupError::Internal { .. }));
    }

    #[test]
    fn test_non_string_field_is_malformed() {
        let payload = payload(json!({"cep": "01310-100", "ddd": 11}));
        let err = map_payload(&payload, VIACEP_FIELDS).unwrap_err();
        assert!(matches!(err, LookupError::Internal { .. }));
    }

    #[test]
    fn test_alternate_table() {
        static ALT: &[FieldCorrespondence] = &[
            field("postal_code", AddressField::Cep),
            field("street", AddressField::Address),
        ];
        let payload = payload(json!({"postal_code": "01310100", "street": "Av Paulista"}));

        let record = map_payload(&payload, ALT).unwrap();
        assert_eq!(record.cep, "01310100");
        assert_eq!(record.address.as_deref(), Some("Av Paulista"));
    }
}
