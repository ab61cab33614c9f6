use crate::{
    error::{NdefError, Result},
    tnf::RecordKind,
    uri_prefix,
};

/// Status byte bit selecting UTF-16 text
const UTF16_FLAG: u8 = 0x80;

/// Status byte bits holding the language code length
const LANGUAGE_LENGTH_MASK: u8 = 0x3F;

/// Longest language code a text record status byte can describe
pub const MAX_LANGUAGE_CODE_LENGTH: usize = LANGUAGE_LENGTH_MASK as usize;

/// A record payload, interpreted according to its record kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NdefPayload {
    Text(TextPayload),
    Uri(UriPayload),
    Data(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPayload {
    pub encoding: TextEncoding,
    pub language_code: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriPayload {
    pub prefix_code: u8,
    pub suffix: String,
}

impl NdefPayload {
    pub fn parse(kind: RecordKind, payload: &[u8]) -> Result<Self> {
        match kind {
            RecordKind::WellKnownText => TextPayload::decode(payload).map(Self::Text),
            RecordKind::WellKnownUri => UriPayload::decode(payload).map(Self::Uri),
            RecordKind::Empty
            | RecordKind::WellKnown
            | RecordKind::MimeMedia
            | RecordKind::AbsoluteUri
            | RecordKind::ExternalType
            | RecordKind::Unchanged
            | RecordKind::Unknown => Ok(Self::Data(payload.to_vec())),
        }
    }

    /// The full value an application should use, with protocol artifacts restored
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.text.clone(),
            Self::Uri(uri) => uri.uri(),
            Self::Data(data) => String::from_utf8_lossy(data).into_owned(),
        }
    }

    /// The decoded content alone, a URI without its abbreviated prefix
    pub fn data(&self) -> String {
        match self {
            Self::Text(text) => text.text.clone(),
            Self::Uri(uri) => uri.suffix.clone(),
            Self::Data(data) => String::from_utf8_lossy(data).into_owned(),
        }
    }

    pub fn language_code(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(&text.language_code),
            Self::Uri(_) | Self::Data(_) => None,
        }
    }
}

impl TextPayload {
    /// Parse `[status][language code][text]`
    pub fn decode(payload: &[u8]) -> Result<Self> {
        let Some((&status, rest)) = payload.split_first() else {
            return Err(NdefError::malformed("text record is missing its status byte"));
        };

        let encoding =
            if status & UTF16_FLAG == 0 { TextEncoding::Utf8 } else { TextEncoding::Utf16 };

        let language_length = (status & LANGUAGE_LENGTH_MASK) as usize;
        if language_length > rest.len() {
            return Err(NdefError::malformed(format!(
                "text record language code of {language_length} bytes overruns a payload of {} bytes",
                payload.len()
            )));
        }

        let (language_code, text) = rest.split_at(language_length);

        Ok(Self {
            encoding,
            language_code: String::from_utf8_lossy(language_code).into_owned(),
            text: encoding.decode(text),
        })
    }

    /// Build a UTF-8 text payload, the only encoding ever written
    pub fn encode(language_code: &str, text: &str) -> Result<Vec<u8>> {
        if !language_code.is_ascii() {
            return Err(NdefError::invalid(format!(
                "language code {language_code:?} is not ASCII"
            )));
        }

        let language_code = language_code.as_bytes();
        if language_code.len() > MAX_LANGUAGE_CODE_LENGTH {
            return Err(NdefError::invalid(format!(
                "language code is {} bytes, at most {MAX_LANGUAGE_CODE_LENGTH} fit in a text record",
                language_code.len()
            )));
        }

        let status = (language_code.len() & 0xFF) as u8;

        let mut payload = Vec::with_capacity(1 + language_code.len() + text.len());
        payload.push(status);
        payload.extend_from_slice(language_code);
        payload.extend_from_slice(text.as_bytes());

        Ok(payload)
    }
}

impl TextEncoding {
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Self::Utf16 => decode_utf16(bytes),
        }
    }
}

// big endian unless a byte order mark says otherwise
fn decode_utf16(bytes: &[u8]) -> String {
    let (bytes, little_endian) = match bytes {
        [0xFE, 0xFF, rest @ ..] => (rest, false),
        [0xFF, 0xFE, rest @ ..] => (rest, true),
        _ => (bytes, false),
    };

    let units = bytes
        .chunks_exact(2)
        .map(|chunk| {
            let pair = [chunk[0], chunk[1]];
            if little_endian { u16::from_le_bytes(pair) } else { u16::from_be_bytes(pair) }
        })
        .collect::<Vec<u16>>();

    let mut text = String::from_utf16_lossy(&units);
    if bytes.len() % 2 == 1 {
        text.push(char::REPLACEMENT_CHARACTER);
    }

    text
}

impl UriPayload {
    /// Parse `[prefix code][suffix]`
    pub fn decode(payload: &[u8]) -> Result<Self> {
        let Some((_, suffix)) = uri_prefix::expand(payload) else {
            return Err(NdefError::malformed("uri record is missing its prefix code"));
        };

        Ok(Self { prefix_code: payload[0], suffix: String::from_utf8_lossy(suffix).into_owned() })
    }

    pub fn encode(uri: &str) -> Vec<u8> {
        uri_prefix::compress(uri)
    }

    pub fn prefix(&self) -> &'static str {
        uri_prefix::prefix_for_code(self.prefix_code)
    }

    pub fn uri(&self) -> String {
        format!("{}{}", self.prefix(), self.suffix)
    }
}
