//! Decoding of allow-list event payloads.

use gensourei_core::config::{AllowListConfig, PayloadEncoding};
use gensourei_core::types::AllowedIdentity;

/// Marker the event log puts in front of cloud variable names.
const CLOUD_PREFIX: char = '☁';

/// Turns raw event payloads into allow-list entries.
#[derive(Debug, Clone)]
pub struct PayloadDecoder {
    encoding: PayloadEncoding,
    alphabet: Vec<char>,
}

impl PayloadDecoder {
    /// Create a decoder for `encoding`. `alphabet` is only used by
    /// [`PayloadEncoding::DigitPairs`].
    pub fn new(encoding: PayloadEncoding, alphabet: &str) -> Self {
        Self {
            encoding,
            alphabet: alphabet.chars().collect(),
        }
    }

    /// Create a decoder from the allow-list configuration.
    pub fn from_config(config: &AllowListConfig) -> Self {
        Self::new(config.encoding, &config.alphabet)
    }

    /// Decode one payload. `None` means the payload is not a valid entry.
    pub fn decode(&self, value: &str) -> Option<AllowedIdentity> {
        match self.encoding {
            PayloadEncoding::Plain => AllowedIdentity::new(value),
            PayloadEncoding::DigitPairs => self.decode_digit_pairs(value.trim()),
        }
    }

    /// Each two-digit group is a 1-based index into the alphabet.
    fn decode_digit_pairs(&self, value: &str) -> Option<AllowedIdentity> {
        if value.is_empty() || value.len() % 2 != 0 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let mut decoded = String::with_capacity(value.len() / 2);
        for pair in value.as_bytes().chunks(2) {
            let index = usize::from(pair[0] - b'0') * 10 + usize::from(pair[1] - b'0');
            let c = index.checked_sub(1).and_then(|i| self.alphabet.get(i))?;
            decoded.push(*c);
        }
        AllowedIdentity::new(&decoded)
    }
}

/// Whether an event `name` refers to the configured `signal`, ignoring the
/// cloud-variable marker and ASCII case.
pub fn matches_signal(name: &str, signal: &str) -> bool {
    strip_cloud_prefix(name).eq_ignore_ascii_case(strip_cloud_prefix(signal))
}

fn strip_cloud_prefix(name: &str) -> &str {
    let name = name.trim();
    name.strip_prefix(CLOUD_PREFIX)
        .map(str::trim_start)
        .unwrap_or(name)
}
