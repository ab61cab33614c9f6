use serde::{Deserialize, Serialize};

use crate::{
    error::{NdefError, Result},
    record::Record,
};

/// Kind of message read from a tag, only NDEF is produced today
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Ndef,
}

/// Everything decoded from one tag interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
pub struct Message {
    /// Tag identifier as uppercase hex
    pub id: String,
    pub message_type: MessageType,

    /// NDEF type declared by the tag technology, empty when unknown
    #[serde(rename = "type")]
    pub type_: String,
    pub writable: bool,
    pub records: Vec<Record>,
}

/// What the platform tells us about the tag alongside its message
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, uniffi::Record)]
pub struct TagInfo {
    pub id: Vec<u8>,
    pub type_: String,
    pub writable: bool,
}

impl TagInfo {
    pub fn new(id: impl Into<Vec<u8>>, type_: impl Into<String>, writable: bool) -> Self {
        Self { id: id.into(), type_: type_.into(), writable }
    }

    /// Uppercase hex, two digits per byte so leading zero bytes are kept
    pub fn formatted_id(&self) -> String {
        hex::encode_upper(&self.id)
    }
}

impl Message {
    pub fn new(tag: &TagInfo, records: Vec<Record>) -> Self {
        Self {
            id: tag.formatted_id(),
            message_type: MessageType::Ndef,
            type_: tag.type_.clone(),
            writable: tag.writable,
            records,
        }
    }

    /// Stand-in for a tag that holds no message, a single empty record
    ///
    /// Only the tag id and writable flag carry over, the type stays empty.
    pub fn empty_writable(tag: &TagInfo) -> Self {
        let info = TagInfo { type_: String::new(), ..tag.clone() };
        Self::new(&info, vec![Record::empty_writable()])
    }

    /// Generic key-value form handed to the application
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|error| {
            NdefError::malformed(format!("message could not be converted to a value: {error}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tnf::Tnf;

    #[test]
    fn tag_id_keeps_leading_zero_bytes() {
        let tag = TagInfo::new(vec![0x00, 0x1A], "", false);
        assert_eq!(tag.formatted_id(), "001A");

        let tag = TagInfo::new(vec![0x00, 0x00, 0x0F], "", false);
        assert_eq!(tag.formatted_id(), "00000F");

        let tag = TagInfo::new(vec![0x04, 0xA2, 0x2B, 0xD2, 0x6C, 0x5E, 0x80], "", false);
        assert_eq!(tag.formatted_id(), "04A22BD26C5E80");

        assert_eq!(TagInfo::default().formatted_id(), "");
    }

    #[test]
    fn empty_writable_sentinel() {
        let tag = TagInfo::new(vec![0x00, 0x1A], "org.nfcforum.ndef.type2", true);
        let message = Message::empty_writable(&tag);

        assert_eq!(message.id, "001A");
        assert_eq!(message.type_, "");
        assert!(message.writable);
        assert_eq!(message.records.len(), 1);

        let read_only = TagInfo { writable: false, ..tag };
        assert!(!Message::empty_writable(&read_only).writable);

        let record = &message.records[0];
        assert_eq!(record.tnf, Tnf::Empty);
        assert_eq!(record.id, "");
        assert_eq!(record.type_, "");
        assert_eq!(record.payload, "");
        assert_eq!(record.data, "");
        assert!(record.raw_payload.is_empty());
        assert_eq!(record.language_code.as_deref(), Some(""));
    }

    #[test]
    fn serializes_to_application_shape() {
        let tag = TagInfo::new(vec![0xAB], "org.nfcforum.ndef.type2", true);
        let value = Message::empty_writable(&tag).to_value().unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": "AB",
                "message_type": "ndef",
                "type": "",
                "writable": true,
                "records": [{
                    "tnf": "empty",
                    "id": "",
                    "type": "",
                    "payload": "",
                    "data": "",
                    "rawPayload": [],
                    "languageCode": "",
                }],
            })
        );

        let back: Message = serde_json::from_value(value).unwrap();
        assert_eq!(back, Message::empty_writable(&tag));
    }

    #[test]
    fn decoded_message_keeps_the_tag_type() {
        let tag = TagInfo::new(vec![0x01], "org.nfcforum.ndef.type4", false);
        let message = Message::new(&tag, vec![Record::empty_writable()]);
        let value = message.to_value().unwrap();

        assert_eq!(value["type"], "org.nfcforum.ndef.type4");
        assert_eq!(value["writable"], false);
    }
}
