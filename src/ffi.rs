use poddle_ndef::{
    CodecConfig, Message, NdefError, NdefRecord, RecordDescription, TagInfo, TagSnapshot,
};

type Result<T, E = NdefError> = std::result::Result<T, E>;

/// Codec handle given to the platform glue
///
/// Holds nothing but configuration, so calls from any thread are independent.
#[derive(Debug, Clone, uniffi::Object)]
pub struct FfiNdefCodec {
    config: CodecConfig,
}

impl Default for FfiNdefCodec {
    fn default() -> Self {
        Self::new(None)
    }
}

#[uniffi::export]
impl FfiNdefCodec {
    /// `language` overrides the system language written into text records
    #[uniffi::constructor(default(language = None))]
    pub fn new(language: Option<String>) -> Self {
        let config = match language {
            Some(language) => CodecConfig::with_language(language),
            None => CodecConfig::default(),
        };

        Self { config }
    }

    #[uniffi::method]
    pub fn decode(&self, tag: TagInfo, bytes: Vec<u8>) -> Result<Message> {
        poddle_ndef::decode_message(&tag, &bytes)
    }

    /// Decode records the platform already split out of the message
    #[uniffi::method]
    pub fn decode_records(&self, tag: TagInfo, records: Vec<NdefRecord>) -> Result<Message> {
        poddle_ndef::decode_records(&tag, &records)
    }

    #[uniffi::method]
    pub fn decode_tag(&self, tag: TagSnapshot) -> Result<Option<Message>> {
        poddle_ndef::decode_tag(&tag)
    }

    /// Same as `decode_tag`, as the JSON key-value form
    #[uniffi::method]
    pub fn decode_tag_json(&self, tag: TagSnapshot) -> Result<Option<String>> {
        let Some(message) = poddle_ndef::decode_tag(&tag)? else {
            return Ok(None);
        };

        Ok(Some(message.to_value()?.to_string()))
    }

    #[uniffi::method]
    pub fn encode(&self, records: Vec<RecordDescription>) -> Result<Vec<u8>> {
        poddle_ndef::encode_records(records, &self.config)
    }

    /// Encode a `{"records": [...]}` JSON write request
    #[uniffi::method]
    pub fn encode_json(&self, json: String) -> Result<Vec<u8>> {
        poddle_ndef::encode_json(&json, &self.config)
    }

    #[uniffi::method]
    pub fn default_language_code(&self) -> String {
        self.config.default_language_code.clone()
    }
}

#[uniffi::export]
fn init_logging() {
    crate::logging::init();
}
