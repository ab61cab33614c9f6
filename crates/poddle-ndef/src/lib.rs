//! NDEF message codec
//!
//! Decodes raw tag messages into application records and encodes
//! application record descriptions back into NDEF bytes.

uniffi::setup_scaffolding!();

pub mod config;
pub mod decode;
pub mod description;
pub mod encode;
pub mod error;
pub mod header;
pub mod message;
pub mod parser;
pub mod payload;
pub mod record;
pub mod tnf;
pub mod uri_prefix;
pub mod writer;

pub use config::CodecConfig;
pub use decode::{TagSnapshot, TagTechnology, decode_message, decode_records, decode_tag};
pub use description::{RecordDescription, WriteRequest};
pub use encode::{encode_json, encode_records, encode_value};
pub use error::{NdefError, Result};
pub use message::{Message, MessageType, TagInfo};
pub use record::{NdefRecord, Record};
pub use tnf::{RecordKind, Tnf};
