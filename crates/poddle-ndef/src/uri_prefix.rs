/// URI prefix codes as defined in NFC Forum RTD URI specification
///
/// Used in both directions: indexed by code when reading, scanned for the
/// longest matching prefix when writing.
pub const URI_PREFIXES: [(u8, &str); 36] = [
    (0x00, ""), // no prepending
    (0x01, "http://www."),
    (0x02, "https://www."),
    (0x03, "http://"),
    (0x04, "https://"),
    (0x05, "tel:"),
    (0x06, "mailto:"),
    (0x07, "ftp://anonymous:anonymous@"),
    (0x08, "ftp://ftp."),
    (0x09, "ftps://"),
    (0x0A, "sftp://"),
    (0x0B, "smb://"),
    (0x0C, "nfs://"),
    (0x0D, "ftp://"),
    (0x0E, "dav://"),
    (0x0F, "news:"),
    (0x10, "telnet://"),
    (0x11, "imap:"),
    (0x12, "rtsp://"),
    (0x13, "urn:"),
    (0x14, "pop:"),
    (0x15, "sip:"),
    (0x16, "sips:"),
    (0x17, "tftp:"),
    (0x18, "btspp://"),
    (0x19, "btl2cap://"),
    (0x1A, "btgoep://"),
    (0x1B, "tcpobex://"),
    (0x1C, "irdaobex://"),
    (0x1D, "file://"),
    (0x1E, "urn:epc:id:"),
    (0x1F, "urn:epc:tag:"),
    (0x20, "urn:epc:pat:"),
    (0x21, "urn:epc:raw:"),
    (0x22, "urn:epc:"),
    (0x23, "urn:nfc:"),
];

/// Prefix abbreviated by `code`, codes outside the table expand to nothing
pub fn prefix_for_code(code: u8) -> &'static str {
    URI_PREFIXES.get(code as usize).map(|(_, prefix)| *prefix).unwrap_or("")
}

/// Longest table entry that is a literal prefix of `uri`, `(0x00, "")` if none is
pub fn longest_prefix(uri: &str) -> (u8, &'static str) {
    URI_PREFIXES
        .iter()
        .filter(|(_, prefix)| uri.starts_with(prefix))
        .max_by_key(|(_, prefix)| prefix.len())
        .copied()
        .unwrap_or(URI_PREFIXES[0])
}

/// Split a URI record payload into its expanded prefix and the raw suffix,
/// `None` when the prefix code byte is missing
pub fn expand(payload: &[u8]) -> Option<(&'static str, &[u8])> {
    let (&code, suffix) = payload.split_first()?;
    Some((prefix_for_code(code), suffix))
}

/// Abbreviate `uri` into a URI record payload: prefix code then the remaining suffix
pub fn compress(uri: &str) -> Vec<u8> {
    let (code, prefix) = longest_prefix(uri);
    let suffix = &uri[prefix.len()..];

    let mut payload = Vec::with_capacity(1 + suffix.len());
    payload.push(code);
    payload.extend_from_slice(suffix.as_bytes());
    payload
}
