//! audioBlockFormat identifiers (`AB_yyyyxxxx_zzzzzzzz`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AdmError, AdmResult};

/// ADM type code for object-based content
pub const TYPE_OBJECTS: u16 = 0x0003;

/// Identifier of one Objects audioBlockFormat
///
/// `channel` is the `xxxx` part shared with the parent audioChannelFormat;
/// `counter` numbers blocks within that channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AudioBlockFormatId {
    channel: u16,
    counter: u32,
}

impl AudioBlockFormatId {
    pub fn new(channel: u16, counter: u32) -> Self {
        Self { channel, counter }
    }

    #[inline]
    pub fn channel(self) -> u16 {
        self.channel
    }

    #[inline]
    pub fn counter(self) -> u32 {
        self.counter
    }

    /// Id of the block following this one in the same channel, if the
    /// counter has room
    pub fn next(self) -> Option<Self> {
        self.counter.checked_add(1).map(|counter| Self::new(self.channel, counter))
    }
}

impl fmt::Display for AudioBlockFormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AB_{TYPE_OBJECTS:04X}{:04X}_{:08X}", self.channel, self.counter)
    }
}

impl FromStr for AudioBlockFormatId {
    type Err = AdmError;

    fn from_str(s: &str) -> AdmResult<Self> {
        let bad =
            |reason: &str| AdmError::invalid("AudioBlockFormatId", format!("'{s}': {reason}"));

        let body = s.strip_prefix("AB_").ok_or_else(|| bad("missing AB_ prefix"))?;
        let (head, counter) = body.split_once('_').ok_or_else(|| bad("missing counter"))?;
        if head.len() != 8 || counter.len() != 8 {
            return Err(bad("expected AB_yyyyxxxx_zzzzzzzz"));
        }
        if !head.bytes().chain(counter.bytes()).all(|b| b.is_ascii_hexdigit()) {
            return Err(bad("not hexadecimal"));
        }
        let hex16 = |text: &str| u16::from_str_radix(text, 16).map_err(|_| bad("not hexadecimal"));

        let type_code = hex16(&head[..4])?;
        if type_code != TYPE_OBJECTS {
            return Err(bad("type is not Objects (0003)"));
        }
        let channel = hex16(&head[4..])?;
        let counter = u32::from_str_radix(counter, 16).map_err(|_| bad("not hexadecimal"))?;
        Ok(Self::new(channel, counter))
    }
}

impl TryFrom<String> for AudioBlockFormatId {
    type Error = AdmError;

    fn try_from(value: String) -> AdmResult<Self> {
        value.parse()
    }
}

impl From<AudioBlockFormatId> for String {
    fn from(id: AudioBlockFormatId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(AudioBlockFormatId::default().to_string(), "AB_00030000_00000000");
        assert_eq!(AudioBlockFormatId::new(0x1001, 2).to_string(), "AB_00031001_00000002");
        assert_eq!(AudioBlockFormatId::new(0xabcd, 0x1f).to_string(), "AB_0003ABCD_0000001F");
    }

    #[test]
    fn test_parse() {
        let id: AudioBlockFormatId = "AB_00031001_0000000a".parse().unwrap();
        assert_eq!(id.channel(), 0x1001);
        assert_eq!(id.counter(), 10);
        assert_eq!(id.next().map(AudioBlockFormatId::counter), Some(11));
    }

    #[test]
    fn test_next_at_counter_limit() {
        let last = AudioBlockFormatId::new(0x1001, u32::MAX);
        assert_eq!(last.next(), None);
    }

    #[test]
    fn test_serde_as_text() {
        let id = AudioBlockFormatId::new(0x1001, 3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"AB_00031001_00000003\"");
        assert_eq!(serde_json::from_str::<AudioBlockFormatId>(&json).unwrap(), id);

        assert!(serde_json::from_str::<AudioBlockFormatId>("\"AB_00011001_00000003\"").is_err());
        assert!(serde_json::from_str::<AudioBlockFormatId>("\"AB_1001\"").is_err());
    }

    #[test]
    fn test_reject_malformed() {
        for text in [
            "",
            "AC_00031001_00000001",
            "AB_00011001_00000001",
            "AB_0003100_00000001",
            "AB_00031001",
            "AB_0003100G_00000001",
            "AB_00031001_0000001",
        ] {
            assert!(text.parse::<AudioBlockFormatId>().is_err(), "accepted {text:?}");
        }
    }
}
