// encoding.rs - Windows-1252 mojibake repair

use encoding_rs::WINDOWS_1252;

/// Repair text whose Windows-1252 bytes were previously misread as UTF-8.
///
/// The string is narrowed back to Windows-1252 bytes (keeping the raw UTF-8
/// bytes of any character the table cannot represent) and then re-read as
/// UTF-8, so corruption like "â‚¬" collapses back to "€". Text that is
/// already clean round-trips unchanged.
pub fn fix_encoding(text: &str) -> String {
    decode_utf8(&encode_cp1252(text))
}

/// Encode as Windows-1252; unmappable characters keep their UTF-8 bytes.
pub fn encode_cp1252(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    let mut buf = [0u8; 4];

    // The encoder escapes unmappables as numeric character references, so it
    // is driven one character at a time and its output discarded for any
    // character that fails to map.
    for ch in text.chars() {
        let utf8 = ch.encode_utf8(&mut buf);
        let (encoded, _, unmappable) = WINDOWS_1252.encode(utf8);
        if unmappable {
            bytes.extend_from_slice(utf8.as_bytes());
        } else {
            bytes.extend_from_slice(&encoded);
        }
    }

    bytes
}

/// Decode as UTF-8; invalid byte runs are decoded as Windows-1252 instead.
///
/// Only the minimal offending span reported by the UTF-8 validator falls back
/// to Windows-1252, so one bad byte never discards surrounding valid text.
/// Windows-1252 maps every byte, hence this can never fail.
pub fn decode_utf8(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(err) => {
                let valid_up_to = err.valid_up_to();
                // The prefix below valid_up_to is already validated.
                out.push_str(&String::from_utf8_lossy(&rest[..valid_up_to]));

                let bad_len = err.error_len().unwrap_or(rest.len() - valid_up_to);
                let bad_run = &rest[valid_up_to..valid_up_to + bad_len];
                let (fallback, _, _) = WINDOWS_1252.decode(bad_run);
                out.push_str(&fallback);

                rest = &rest[valid_up_to + bad_len..];
            }
        }
    }

    out
}
