use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    error::Result,
    payload::NdefPayload,
    tnf::{RecordKind, Tnf},
};

/// One record exactly as stored on the tag
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, uniffi::Record)]
pub struct NdefRecord {
    /// Raw 3-bit type name format
    pub tnf: u8,
    pub type_: Vec<u8>,
    pub id: Vec<u8>,
    pub payload: Vec<u8>,
}

/// A decoded record, the shape handed to the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub tnf: Tnf,
    pub id: String,
    #[serde(rename = "type")]
    pub type_: String,

    /// Content with protocol artifacts restored, e.g. the full URI
    pub payload: String,

    /// Content alone, e.g. the URI suffix without its abbreviated prefix
    pub data: String,

    pub raw_payload: Vec<u8>,

    /// Only present on text records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

impl NdefRecord {
    pub fn new(tnf: Tnf, type_: Vec<u8>, id: Vec<u8>, payload: Vec<u8>) -> Self {
        Self { tnf: tnf.code(), type_, id, payload }
    }

    pub fn kind(&self) -> RecordKind {
        RecordKind::classify(Tnf::from_code(self.tnf), &self.type_)
    }
}

impl Record {
    /// Interpret a stored record, text and URI payloads are unpacked
    pub fn decode(record: &NdefRecord) -> Result<Self> {
        let kind = record.kind();
        trace!(?kind, payload_length = record.payload.len(), "decoding record");

        let payload = NdefPayload::parse(kind, &record.payload)?;

        Ok(Self {
            tnf: kind.tnf(),
            id: String::from_utf8_lossy(&record.id).into_owned(),
            type_: String::from_utf8_lossy(&record.type_).into_owned(),
            payload: payload.display(),
            data: payload.data(),
            raw_payload: record.payload.clone(),
            language_code: payload.language_code().map(ToString::to_string),
        })
    }

    /// Placeholder record of a tag that holds no message but can be written
    pub fn empty_writable() -> Self {
        Self {
            tnf: Tnf::Empty,
            id: String::new(),
            type_: String::new(),
            payload: String::new(),
            data: String::new(),
            raw_payload: Vec::new(),
            language_code: Some(String::new()),
        }
    }

    pub fn kind(&self) -> RecordKind {
        RecordKind::classify(self.tnf, self.type_.as_bytes())
    }
}
