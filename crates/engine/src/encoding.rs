use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Text encodings accepted by `--encoding`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    #[default]
    Utf8,
    /// UTF-8 with an optional leading byte order mark, which is dropped.
    Utf8Sig,
    /// UTF-16 with byte order taken from the BOM, little-endian without one.
    Utf16,
    Utf16Le,
    Utf16Be,
    Latin1,
    Ascii,
}

impl Encoding {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Sig => "utf-8-sig",
            Self::Utf16 => "utf-16",
            Self::Utf16Le => "utf-16-le",
            Self::Utf16Be => "utf-16-be",
            Self::Latin1 => "latin-1",
            Self::Ascii => "ascii",
        }
    }

    /// Decode raw file bytes into text.
    ///
    /// # Errors
    /// Returns a human-readable description of the first offending byte(s).
    pub fn decode(self, bytes: &[u8]) -> Result<String, String> {
        match self {
            Self::Utf8 => decode_utf8(bytes),
            Self::Utf8Sig => decode_utf8(bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)),
            Self::Utf16 => match bytes {
                [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes, 2),
                [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes, 2),
                _ => decode_utf16(bytes, u16::from_le_bytes, 0),
            },
            Self::Utf16Le => decode_utf16(bytes, u16::from_le_bytes, 0),
            Self::Utf16Be => decode_utf16(bytes, u16::from_be_bytes, 0),
            Self::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(pos) => Err(format!(
                    "byte 0x{:02x} in position {pos}: ordinal not in range(128)",
                    bytes[pos]
                )),
                None => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            },
        }
    }
}

fn decode_utf8(bytes: &[u8]) -> Result<String, String> {
    std::str::from_utf8(bytes).map(str::to_owned).map_err(|e| {
        let pos = e.valid_up_to();
        match e.error_len() {
            Some(_) => format!(
                "byte 0x{:02x} in position {pos}: invalid utf-8 sequence",
                bytes[pos]
            ),
            None => format!("bytes in position {pos}-{}: unexpected end of data", bytes.len() - 1),
        }
    })
}

/// `offset` is the number of BOM bytes already stripped, so error positions
/// refer to the original file.
fn decode_utf16(
    bytes: &[u8],
    from_bytes: fn([u8; 2]) -> u16,
    offset: usize,
) -> Result<String, String> {
    let chunks = bytes.chunks_exact(2);
    if !chunks.remainder().is_empty() {
        let pos = offset + bytes.len() - 1;
        return Err(format!(
            "byte 0x{:02x} in position {pos}: truncated data",
            bytes[bytes.len() - 1]
        ));
    }

    let units = chunks.map(|pair| from_bytes([pair[0], pair[1]]));
    let mut text = String::with_capacity(bytes.len() / 2);
    let mut consumed = 0usize;
    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(c) => {
                text.push(c);
                consumed += c.len_utf16();
            }
            Err(_) => {
                let pos = offset + consumed * 2;
                return Err(format!(
                    "bytes in position {pos}-{}: illegal UTF-16 surrogate",
                    pos + 1
                ));
            }
        }
    }
    Ok(text)
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" | "u8" => Ok(Self::Utf8),
            "utf-8-sig" | "utf8-sig" => Ok(Self::Utf8Sig),
            "utf-16" | "utf16" => Ok(Self::Utf16),
            "utf-16-le" | "utf-16le" | "utf16le" => Ok(Self::Utf16Le),
            "utf-16-be" | "utf-16be" | "utf16be" => Ok(Self::Utf16Be),
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" | "l1" => Ok(Self::Latin1),
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            _ => Err(format!("Unknown encoding: {s}")),
        }
    }
}

/// Text-mode newline translation: `\r\n` and lone `\r` become `\n`.
pub fn translate_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_owned();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
