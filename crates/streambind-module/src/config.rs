use serde::{Deserialize, Serialize};
use streambind_frame::{MessageStructure, WireProtocol};

use crate::error::{ModuleError, Result};

/// A streaming module's configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Disabled modules discard inbound data and refuse sends.
    pub enabled: bool,
    /// Wire protocol for framing inbound and outbound data.
    pub protocol: WireProtocol,
    /// Expected structure of one message.
    pub structure: MessageStructure,
    /// Whether eligible parsed messages auto-create value slots.
    pub auto_add: bool,
    /// Named mode (first token is the slot name) vs indexed mode.
    pub first_value_is_name: bool,
    /// Log each received message.
    pub log_incoming: bool,
    /// Log each sent message.
    pub log_outgoing: bool,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            protocol: WireProtocol::Lines,
            structure: MessageStructure::SpaceSeparated,
            auto_add: true,
            first_value_is_name: true,
            log_incoming: false,
            log_outgoing: false,
        }
    }
}

impl ModuleConfig {
    /// Check the protocol/structure pairing.
    pub fn validate(&self) -> Result<()> {
        if !self.structure.is_valid_for(self.protocol) {
            return Err(ModuleError::InvalidStructure {
                protocol: self.protocol,
                structure: self.structure,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        ModuleConfig::default().validate().unwrap();
    }

    #[test]
    fn mismatched_structure_is_rejected() {
        let config = ModuleConfig {
            protocol: WireProtocol::Cobs,
            structure: MessageStructure::CommaSeparated,
            ..ModuleConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ModuleError::InvalidStructure { .. })
        ));
    }

    #[test]
    fn serde_roundtrip() {
        let config = ModuleConfig {
            protocol: WireProtocol::Data255,
            structure: MessageStructure::FourByteColorGroups,
            auto_add: false,
            ..ModuleConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ModuleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
