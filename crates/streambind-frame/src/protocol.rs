use serde::{Deserialize, Serialize};

/// Wire protocol for treating incoming and outgoing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireProtocol {
    /// Terminator-delimited text lines.
    Lines,
    /// Each transport chunk is one frame, verbatim.
    Raw,
    /// Frames delimited by the byte value 255.
    Data255,
    /// Zero-delimited frames, consistent-overhead byte stuffed.
    Cobs,
}

/// Structure of one message, determining how it is split into values.
///
/// The text structures only apply to [`WireProtocol::Lines`]; the byte
/// structures only apply to the binary protocols. [`WireProtocol::structures`]
/// is the authoritative option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStructure {
    SpaceSeparated,
    TabSeparated,
    CommaSeparated,
    ColonSeparated,
    SemicolonSeparated,
    EqualsSeparated,
    /// The whole line is one value.
    NoSeparation,
    /// One value per byte.
    OneValuePerByte,
    /// One value per 4-byte group, composed as a shifted integer sum.
    FourByteFloatGroups,
    /// One RGBA color per 4-byte group.
    FourByteColorGroups,
}

impl WireProtocol {
    /// The message structures valid for this protocol. The option set is
    /// rebuilt from this whenever the protocol changes.
    pub fn structures(self) -> &'static [MessageStructure] {
        match self {
            WireProtocol::Lines => &[
                MessageStructure::SpaceSeparated,
                MessageStructure::TabSeparated,
                MessageStructure::CommaSeparated,
                MessageStructure::ColonSeparated,
                MessageStructure::SemicolonSeparated,
                MessageStructure::EqualsSeparated,
                MessageStructure::NoSeparation,
            ],
            WireProtocol::Raw | WireProtocol::Data255 | WireProtocol::Cobs => &[
                MessageStructure::OneValuePerByte,
                MessageStructure::FourByteFloatGroups,
                MessageStructure::FourByteColorGroups,
            ],
        }
    }

    /// The structure selected when this protocol becomes active and the
    /// previous structure is incompatible.
    pub fn default_structure(self) -> MessageStructure {
        self.structures()[0]
    }

    /// Whether this protocol delivers text lines rather than byte frames.
    pub fn is_text(self) -> bool {
        matches!(self, WireProtocol::Lines)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            WireProtocol::Lines => "Lines",
            WireProtocol::Raw => "Raw",
            WireProtocol::Data255 => "Data255",
            WireProtocol::Cobs => "COBS",
        }
    }
}

impl MessageStructure {
    /// Whether this structure is in the option set of `protocol`.
    pub fn is_valid_for(self, protocol: WireProtocol) -> bool {
        protocol.structures().contains(&self)
    }

    /// The separator character for text structures that have one.
    pub fn separator(self) -> Option<char> {
        match self {
            MessageStructure::SpaceSeparated => Some(' '),
            MessageStructure::TabSeparated => Some('\t'),
            MessageStructure::CommaSeparated => Some(','),
            MessageStructure::ColonSeparated => Some(':'),
            MessageStructure::SemicolonSeparated => Some(';'),
            MessageStructure::EqualsSeparated => Some('='),
            _ => None,
        }
    }

    /// Whether this is a byte-positional structure.
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            MessageStructure::OneValuePerByte
                | MessageStructure::FourByteFloatGroups
                | MessageStructure::FourByteColorGroups
        )
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            MessageStructure::SpaceSeparated => "Space separated",
            MessageStructure::TabSeparated => "Tab separated",
            MessageStructure::CommaSeparated => "Comma (,) separated",
            MessageStructure::ColonSeparated => "Colon (:) separated",
            MessageStructure::SemicolonSeparated => "Semicolon (;) separated",
            MessageStructure::EqualsSeparated => "Equals (=) separated",
            MessageStructure::NoSeparation => "No separation",
            MessageStructure::OneValuePerByte => "1 value per byte",
            MessageStructure::FourByteFloatGroups => "4x4 (floats)",
            MessageStructure::FourByteColorGroups => "4x4 (RGBA colors)",
        }
    }
}

impl std::fmt::Display for WireProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for MessageStructure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
