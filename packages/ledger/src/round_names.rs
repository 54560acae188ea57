//! Canonical codec for the `default_round_names` column.
//!
//! Round labels are stored as one JSON-encoded string list. This is the only
//! encode/decode pair in the crate; `decode(encode(x)) == x` holds for every
//! valid label list.

use crate::errors::domain::{DomainError, InfraErrorKind};

pub fn encode(names: &[String]) -> Result<String, DomainError> {
    serde_json::to_string(names)
        .map_err(|e| DomainError::infra(InfraErrorKind::DataCorruption, e.to_string()))
}

pub fn decode(raw: &str) -> Result<Vec<String>, DomainError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("invalid round name list: {e}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::{decode, encode};

    #[test]
    fn round_trips_every_valid_list() {
        let cases: Vec<Vec<String>> = vec![
            vec![],
            vec!["Piros".into()],
            vec!["Piros".into(), "Felső".into(), "Alsó".into()],
            vec!["quotes \"inside\"".into(), "commas, too".into(), "".into()],
        ];

        for names in cases {
            let encoded = encode(&names).unwrap();
            assert_eq!(decode(&encoded).unwrap(), names);
        }
    }

    #[test]
    fn empty_column_decodes_to_empty_list() {
        assert_eq!(decode("").unwrap(), Vec::<String>::new());
        assert_eq!(decode("  ").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn garbage_is_reported_not_swallowed() {
        assert!(decode("not json").is_err());
        assert!(decode("{\"a\":1}").is_err());
    }
}
