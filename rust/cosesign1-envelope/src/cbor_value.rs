// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use minicbor::data::Type;
use minicbor::Decoder;

use crate::error::CoseDecodeError;

/// Containers nested deeper than this are rejected as malformed.
pub const MAX_NESTING_DEPTH: usize = 128;

// Upper bound for pre-allocation from a declared container length; the
// declared length comes from untrusted input.
const MAX_PREALLOCATED_ITEMS: u64 = 1024;

/// A decoded CBOR data item.
///
/// Indefinite-length strings and containers are flattened into their
/// definite-length equivalents. Map entries keep their encoded order,
/// including duplicate keys.
#[derive(Debug, Clone, PartialEq)]
pub enum CborValue {
    Integer(i128),
    Bytes(Vec<u8>),
    Text(String),
    Array(Vec<CborValue>),
    Map(Vec<(CborValue, CborValue)>),
    Tag(u64, Box<CborValue>),
    Bool(bool),
    Null,
    Undefined,
    Float(f64),
    Simple(u8),
}

impl CborValue {
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            CborValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            CborValue::Bytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CborValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[CborValue]> {
        match self {
            CborValue::Array(a) => Some(a.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(CborValue, CborValue)]> {
        match self {
            CborValue::Map(m) => Some(m.as_slice()),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> Option<(u64, &CborValue)> {
        match self {
            CborValue::Tag(tag, inner) => Some((*tag, inner.as_ref())),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CborValue::Null)
    }

    /// Short name of the CBOR type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            CborValue::Integer(_) => "integer",
            CborValue::Bytes(_) => "byte string",
            CborValue::Text(_) => "text string",
            CborValue::Array(_) => "array",
            CborValue::Map(_) => "map",
            CborValue::Tag(_, _) => "tagged item",
            CborValue::Bool(_) => "bool",
            CborValue::Null => "null",
            CborValue::Undefined => "undefined",
            CborValue::Float(_) => "float",
            CborValue::Simple(_) => "simple value",
        }
    }
}

/// Decode `input` as exactly one CBOR data item.
///
/// Empty input, invalid or truncated encodings, and trailing bytes after the
/// item all fail with [`CoseDecodeError::MalformedInput`].
pub fn decode_cbor_value(input: &[u8]) -> Result<CborValue, CoseDecodeError> {
    if input.is_empty() {
        return Err(malformed("empty input"));
    }

    let mut dec = Decoder::new(input);
    let value = decode_item(&mut dec, 0)?;

    if dec.position() != input.len() {
        return Err(malformed(format!(
            "{} trailing bytes after the CBOR data item",
            input.len() - dec.position()
        )));
    }

    Ok(value)
}

fn malformed(msg: impl Into<String>) -> CoseDecodeError {
    CoseDecodeError::MalformedInput(msg.into())
}

fn decode_item(dec: &mut Decoder<'_>, depth: usize) -> Result<CborValue, CoseDecodeError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(malformed(format!("nesting deeper than {MAX_NESTING_DEPTH} levels")));
    }

    let value = match dec.datatype()? {
        Type::Null => {
            dec.null()?;
            CborValue::Null
        }
        Type::Undefined => {
            dec.undefined()?;
            CborValue::Undefined
        }
        Type::Bool => CborValue::Bool(dec.bool()?),
        Type::U8
        | Type::U16
        | Type::U32
        | Type::U64
        | Type::I8
        | Type::I16
        | Type::I32
        | Type::I64
        | Type::Int => CborValue::Integer(i128::from(dec.int()?)),
        Type::F16 => CborValue::Float(f64::from(dec.f16()?)),
        Type::F32 => CborValue::Float(f64::from(dec.f32()?)),
        Type::F64 => CborValue::Float(dec.f64()?),
        Type::Simple => CborValue::Simple(dec.simple()?),
        Type::Bytes => CborValue::Bytes(dec.bytes()?.to_vec()),
        Type::BytesIndef => {
            let mut out = Vec::new();
            for chunk in dec.bytes_iter()? {
                out.extend_from_slice(chunk?);
            }
            CborValue::Bytes(out)
        }
        Type::String => CborValue::Text(dec.str()?.to_string()),
        Type::StringIndef => {
            let mut out = String::new();
            for chunk in dec.str_iter()? {
                out.push_str(chunk?);
            }
            CborValue::Text(out)
        }
        Type::Array | Type::ArrayIndef => {
            let len = dec.array()?;
            CborValue::Array(decode_array_items(dec, len, depth)?)
        }
        Type::Map | Type::MapIndef => {
            let len = dec.map()?;
            CborValue::Map(decode_map_entries(dec, len, depth)?)
        }
        Type::Tag => {
            let tag = dec.tag()?;
            let inner = decode_item(dec, depth + 1)?;
            CborValue::Tag(tag.as_u64(), Box::new(inner))
        }
        Type::Break => return Err(malformed("unexpected break code")),
        other => return Err(malformed(format!("unsupported CBOR item: {other:?}"))),
    };

    Ok(value)
}

fn decode_array_items(dec: &mut Decoder<'_>, len: Option<u64>, depth: usize) -> Result<Vec<CborValue>, CoseDecodeError> {
    match len {
        Some(n) => {
            let mut out = Vec::with_capacity(n.min(MAX_PREALLOCATED_ITEMS) as usize);
            for _ in 0..n {
                out.push(decode_item(dec, depth + 1)?);
            }
            Ok(out)
        }
        None => {
            let mut out = Vec::new();
            while !consume_break(dec)? {
                out.push(decode_item(dec, depth + 1)?);
            }
            Ok(out)
        }
    }
}

fn decode_map_entries(
    dec: &mut Decoder<'_>,
    len: Option<u64>,
    depth: usize,
) -> Result<Vec<(CborValue, CborValue)>, CoseDecodeError> {
    match len {
        Some(n) => {
            let mut out = Vec::with_capacity(n.min(MAX_PREALLOCATED_ITEMS) as usize);
            for _ in 0..n {
                let key = decode_item(dec, depth + 1)?;
                let value = decode_item(dec, depth + 1)?;
                out.push((key, value));
            }
            Ok(out)
        }
        None => {
            let mut out = Vec::new();
            while !consume_break(dec)? {
                let key = decode_item(dec, depth + 1)?;
                let value = decode_item(dec, depth + 1)?;
                out.push((key, value));
            }
            Ok(out)
        }
    }
}

/// Steps over the break code closing an indefinite-length container.
/// Returns `false` (consuming nothing) if the next item is not a break.
fn consume_break(dec: &mut Decoder<'_>) -> Result<bool, CoseDecodeError> {
    if dec.datatype()? == Type::Break {
        dec.set_position(dec.position() + 1);
        return Ok(true);
    }
    Ok(false)
}
