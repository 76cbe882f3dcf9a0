use serde::{Deserialize, Serialize};
use streambind_values::ValueBindingTable;

use crate::config::ModuleConfig;
use crate::error::Result;

/// Persisted module state: configuration plus the full value table, slot
/// order included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleState {
    pub config: ModuleConfig,
    pub values: ValueBindingTable,
}

impl ModuleState {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from a JSON string and check the protocol/structure
    /// pairing before handing the state back.
    pub fn from_json(json: &str) -> Result<Self> {
        let state: Self = serde_json::from_str(json)?;
        state.config.validate()?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use streambind_frame::{MessageStructure, WireProtocol};
    use streambind_transport::MemoryTransport;
    use streambind_values::{Value, ValueSlot};

    use super::*;
    use crate::module::StreamModule;

    #[test]
    fn json_roundtrip_preserves_config_and_slot_order() {
        let mut values = ValueBindingTable::new();
        assert!(values.insert(ValueSlot::auto("Speed", Value::Float(10.0))));
        assert!(values.insert(ValueSlot::auto("Label", Value::String("hi".into()))));

        let state = ModuleState {
            config: ModuleConfig {
                protocol: WireProtocol::Cobs,
                structure: MessageStructure::FourByteFloatGroups,
                ..ModuleConfig::default()
            },
            values,
        };

        let json = state.to_json().unwrap();
        let back = ModuleState::from_json(&json).unwrap();
        assert_eq!(back, state);
        let names: Vec<_> = back.values.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Speed", "Label"]);
    }

    #[test]
    fn from_json_rejects_mismatched_structure() {
        let json = r#"{
            "config": {
                "enabled": true,
                "protocol": "cobs",
                "structure": "space_separated",
                "auto_add": true,
                "first_value_is_name": true,
                "log_incoming": false,
                "log_outgoing": false
            },
            "values": []
        }"#;
        assert!(ModuleState::from_json(json).is_err());
    }

    #[test]
    fn load_marks_every_slot_customizable() {
        let mut source =
            StreamModule::new("a", ModuleConfig::default(), MemoryTransport::new()).unwrap();
        source.receive(b"Speed 10\nName hello\n");
        let state = source.save_state();

        let mut restored =
            StreamModule::new("b", ModuleConfig::default(), MemoryTransport::new()).unwrap();
        restored.load_state(state).unwrap();

        assert_eq!(restored.values().len(), 2);
        assert_eq!(restored.values().value("Speed"), Some(&Value::Float(10.0)));
        for slot in restored.values().iter() {
            assert!(slot.user_customizable);
        }
    }
}
