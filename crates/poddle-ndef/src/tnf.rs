use serde::{Deserialize, Serialize};

/// Record type identifier of a well-known text record
pub const RTD_TEXT: &[u8] = b"T";

/// Record type identifier of a well-known URI record
pub const RTD_URI: &[u8] = b"U";

/// Wire value of the reserved TNF, never produced, read back as `Unknown`
pub const TNF_RESERVED: u8 = 0x07;

/// Type Name Format, the 3-bit field of every record header
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    uniffi::Enum,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tnf {
    Empty,
    WellKnown,
    MimeMedia,
    AbsoluteUri,
    ExternalType,
    Unknown,
    Unchanged,
}

impl Tnf {
    /// Classify the 3-bit header value, anything unrecognised is `Unknown`
    pub fn from_code(code: u8) -> Self {
        match code {
            0x00 => Self::Empty,
            0x01 => Self::WellKnown,
            0x02 => Self::MimeMedia,
            0x03 => Self::AbsoluteUri,
            0x04 => Self::ExternalType,
            0x06 => Self::Unchanged,
            _ => Self::Unknown,
        }
    }

    pub const fn code(self) -> u8 {
        match self {
            Self::Empty => 0x00,
            Self::WellKnown => 0x01,
            Self::MimeMedia => 0x02,
            Self::AbsoluteUri => 0x03,
            Self::ExternalType => 0x04,
            Self::Unknown => 0x05,
            Self::Unchanged => 0x06,
        }
    }

    /// Parse an application label such as `"well_known"`
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }

    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// How a record's payload is interpreted, decided by its TNF and type
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Empty,
    WellKnownText,
    WellKnownUri,
    /// Any other well-known type, e.g. a smart poster
    WellKnown,
    MimeMedia,
    AbsoluteUri,
    ExternalType,
    Unchanged,
    Unknown,
}

impl RecordKind {
    pub fn classify(tnf: Tnf, type_: &[u8]) -> Self {
        match (tnf, type_) {
            (Tnf::Empty, _) => Self::Empty,
            (Tnf::WellKnown, b"T") => Self::WellKnownText,
            (Tnf::WellKnown, b"U") => Self::WellKnownUri,
            (Tnf::WellKnown, _) => Self::WellKnown,
            (Tnf::MimeMedia, _) => Self::MimeMedia,
            (Tnf::AbsoluteUri, _) => Self::AbsoluteUri,
            (Tnf::ExternalType, _) => Self::ExternalType,
            (Tnf::Unchanged, _) => Self::Unchanged,
            (Tnf::Unknown, _) => Self::Unknown,
        }
    }

    pub fn tnf(self) -> Tnf {
        match self {
            Self::Empty => Tnf::Empty,
            Self::WellKnownText | Self::WellKnownUri | Self::WellKnown => Tnf::WellKnown,
            Self::MimeMedia => Tnf::MimeMedia,
            Self::AbsoluteUri => Tnf::AbsoluteUri,
            Self::ExternalType => Tnf::ExternalType,
            Self::Unchanged => Tnf::Unchanged,
            Self::Unknown => Tnf::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_both_ways() {
        for code in 0x00..=0x06 {
            let tnf = Tnf::from_code(code);
            if code == 0x05 {
                assert_eq!(tnf, Tnf::Unknown);
            }
            assert_eq!(tnf.code(), code);
        }
    }

    #[test]
    fn reserved_and_out_of_range_are_unknown() {
        assert_eq!(Tnf::from_code(TNF_RESERVED), Tnf::Unknown);
        assert_eq!(Tnf::from_code(0xFF), Tnf::Unknown);
    }

    #[test]
    fn labels() {
        assert_eq!(Tnf::WellKnown.label(), "well_known");
        assert_eq!(Tnf::MimeMedia.to_string(), "mime_media");
        assert_eq!(Tnf::from_label("external_type"), Some(Tnf::ExternalType));
        assert_eq!(Tnf::from_label("absolute_uri"), Some(Tnf::AbsoluteUri));
        assert_eq!(Tnf::from_label("bogus"), None);
        assert_eq!(Tnf::from_label("WellKnown"), None);
    }

    #[test]
    fn classify_well_known_types() {
        assert_eq!(RecordKind::classify(Tnf::WellKnown, RTD_TEXT), RecordKind::WellKnownText);
        assert_eq!(RecordKind::classify(Tnf::WellKnown, RTD_URI), RecordKind::WellKnownUri);
        assert_eq!(RecordKind::classify(Tnf::WellKnown, b"Sp"), RecordKind::WellKnown);

        // only well-known records get text / uri treatment
        assert_eq!(RecordKind::classify(Tnf::MimeMedia, b"T"), RecordKind::MimeMedia);
        assert_eq!(RecordKind::classify(Tnf::ExternalType, b"U"), RecordKind::ExternalType);
        assert_eq!(RecordKind::WellKnownUri.tnf(), Tnf::WellKnown);
    }
}
