use crate::ingest::IngestError;

/// Decode an uploaded file into text.
///
/// Attempted encodings, in order: UTF-8 (with or without BOM), then UTF-16
/// little/big endian when a BOM says so. Session exports from the meeting
/// platforms we have seen are one of these three; anything else is an
/// `IngestError::Encoding` and the whole upload is rejected.
pub fn decode_upload(bytes: &[u8]) -> Result<String, IngestError> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return decode_utf16(&bytes[2..], u16::from_le_bytes);
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return decode_utf16(&bytes[2..], u16::from_be_bytes);
    }

    let without_bom = bytes.strip_prefix(b"\xEF\xBB\xBF".as_slice()).unwrap_or(bytes);

    std::str::from_utf8(without_bom)
        .map(str::to_string)
        .map_err(|e| IngestError::Encoding(format!("not valid UTF-8 or UTF-16: {e}")))
}

fn decode_utf16(body: &[u8], read_unit: fn([u8; 2]) -> u16) -> Result<String, IngestError> {
    if body.len() % 2 != 0 {
        return Err(IngestError::Encoding(
            "UTF-16 byte stream has odd length".to_string(),
        ));
    }

    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| read_unit([pair[0], pair[1]]))
        .collect();

    String::from_utf16(&units).map_err(|e| IngestError::Encoding(format!("invalid UTF-16: {e}")))
}
