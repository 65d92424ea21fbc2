use std::collections::BTreeMap;

use crate::cbor_value::CborValue;
use crate::error::CoseDecodeError;

/// A COSE header label (RFC 8152 §3.1: `int / tstr`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeaderKey {
    Int(i64),
    Text(String),
}

/// A decoded COSE header map.
///
/// When a label appears more than once, the last occurrence wins.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CoseHeaderMap {
    map: BTreeMap<HeaderKey, CborValue>,
}

impl CoseHeaderMap {
    /// Build a header map from decoded CBOR map entries.
    ///
    /// Labels must be integers in the `i64` range or text strings.
    pub fn from_entries(entries: Vec<(CborValue, CborValue)>) -> Result<Self, CoseDecodeError> {
        let mut map = BTreeMap::new();
        for (key, value) in entries {
            map.insert(header_key(key)?, value);
        }
        Ok(Self { map })
    }

    pub fn get(&self, label: i64) -> Option<&CborValue> {
        self.map.get(&HeaderKey::Int(label))
    }

    pub fn get_text_label(&self, label: &str) -> Option<&CborValue> {
        self.map.get(&HeaderKey::Text(label.to_string()))
    }

    pub fn contains_label(&self, label: i64) -> bool {
        self.map.contains_key(&HeaderKey::Int(label))
    }

    pub fn get_bytes(&self, label: i64) -> Option<&[u8]> {
        self.get(label).and_then(CborValue::as_bytes)
    }

    pub fn get_array(&self, label: i64) -> Option<&[CborValue]> {
        self.get(label).and_then(CborValue::as_array)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HeaderKey, &CborValue)> {
        self.map.iter()
    }
}

fn header_key(key: CborValue) -> Result<HeaderKey, CoseDecodeError> {
    match key {
        CborValue::Integer(i) => i64::try_from(i)
            .map(HeaderKey::Int)
            .map_err(|_| CoseDecodeError::InvalidUnprotectedHeader(format!("integer label {i} is out of range"))),
        CborValue::Text(s) => Ok(HeaderKey::Text(s)),
        other => Err(CoseDecodeError::InvalidUnprotectedHeader(format!(
            "unsupported header label type: {}",
            other.type_name()
        ))),
    }
}
