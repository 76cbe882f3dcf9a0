use serde::{Deserialize, Serialize};

use crate::value::{Value, ValueKind};

/// A named, typed storage location for one inbound or outbound value.
///
/// The type is fixed at creation and never changes; only the value inside
/// the variant moves. Slots persist for the module's lifetime unless the
/// user removes them explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSlot {
    pub name: String,
    pub value: Value,
    /// Whether the user may edit this slot's definition.
    pub user_customizable: bool,
    /// Whether the user may remove this slot.
    pub user_removable: bool,
    /// When true, only the value (not the slot definition) is persisted.
    pub save_value_only: bool,
}

impl ValueSlot {
    /// A slot auto-created from incoming data: customizable, removable,
    /// persisted with its full definition.
    pub fn auto(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            user_customizable: true,
            user_removable: true,
            save_value_only: false,
        }
    }

    /// A slot added explicitly by the user.
    pub fn user(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
            user_customizable: true,
            user_removable: true,
            save_value_only: false,
        }
    }

    /// The slot's fixed type.
    pub fn kind(&self) -> ValueKind {
        self.value.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_slots_carry_the_expected_flags() {
        let slot = ValueSlot::auto("Speed", Value::Float(10.0));
        assert!(slot.user_customizable);
        assert!(slot.user_removable);
        assert!(!slot.save_value_only);
        assert_eq!(slot.kind(), ValueKind::Float);
    }

    #[test]
    fn serde_roundtrip_preserves_flags() {
        let slot = ValueSlot {
            name: "Hue".into(),
            value: Value::Float(0.25),
            user_customizable: false,
            user_removable: true,
            save_value_only: true,
        };
        let json = serde_json::to_string(&slot).unwrap();
        let back: ValueSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slot);
    }
}
