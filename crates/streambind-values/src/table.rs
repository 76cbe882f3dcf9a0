use serde::{Deserialize, Serialize};
use streambind_frame::MessageStructure;
use tracing::debug;

use crate::numeric::{looks_non_numeric, parse_float_lenient, parse_int_lenient};
use crate::slot::ValueSlot;
use crate::value::{Color, Value};

/// Per-message binding diagnostics.
///
/// Arity mismatches stay silent no-ops for the slot in question; `skipped`
/// makes them observable without changing that behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindSummary {
    /// Slots created by this message.
    pub created: u32,
    /// Slots whose value changed.
    pub updated: u32,
    /// Triggers fired.
    pub fired: u32,
    /// Updates dropped for a type or arity mismatch.
    pub skipped: u32,
}

/// Insertion-ordered, name-addressed set of typed value slots.
///
/// Names are unique. Index-based addressing uses the synthesized name
/// `"Value N"`; positional byte binding addresses slots purely by insertion
/// order. The slot set only ever grows during binding — structure switches
/// never retype or delete slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueBindingTable {
    slots: Vec<ValueSlot>,
}

impl ValueBindingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the table holds no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate slots in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ValueSlot> {
        self.slots.iter()
    }

    /// Look up a slot by exact name. Case-sensitive, no trimming.
    pub fn get(&self, name: &str) -> Option<&ValueSlot> {
        self.slots.iter().find(|slot| slot.name == name)
    }

    /// Current value of a named slot.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.get(name).map(|slot| &slot.value)
    }

    /// Slot at a position in insertion order.
    pub fn slot_at(&self, index: usize) -> Option<&ValueSlot> {
        self.slots.get(index)
    }

    /// Insert a slot. Fails (returns false) when the name is taken.
    pub fn insert(&mut self, slot: ValueSlot) -> bool {
        if self.index_of(&slot.name).is_some() {
            return false;
        }
        self.slots.push(slot);
        true
    }

    /// Remove a slot by name. Honors the removable flag; returns the slot
    /// when it was actually removed.
    pub fn remove(&mut self, name: &str) -> Option<ValueSlot> {
        let idx = self.index_of(name)?;
        if !self.slots[idx].user_removable {
            return None;
        }
        Some(self.slots.remove(idx))
    }

    /// Mark every slot user-customizable. Applied after loading persisted
    /// state so previously auto-created slots stay editable.
    pub fn mark_all_customizable(&mut self) {
        for slot in &mut self.slots {
            slot.user_customizable = true;
        }
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.name == name)
    }

    /// Bind a tokenized message in named mode: token[0] is the slot name,
    /// the rest are arguments.
    pub fn bind_named(&mut self, tokens: &[String], auto_add: bool) -> BindSummary {
        let mut summary = BindSummary::default();
        let Some((name, args)) = tokens.split_first() else {
            return summary;
        };

        match self.index_of(name) {
            None => {
                if !auto_add {
                    debug!(name = %name, "no slot and auto-add disabled, dropping update");
                    return summary;
                }
                let value = infer_named_value(args);
                self.slots.push(ValueSlot::auto(name.clone(), value));
                summary.created += 1;
            }
            Some(idx) => apply_named(&mut self.slots[idx], args, &mut summary),
        }
        summary
    }

    /// Bind a tokenized message in indexed mode: token[i] maps to the slot
    /// named `"Value i"`.
    pub fn bind_indexed(&mut self, tokens: &[String], auto_add: bool) -> BindSummary {
        let mut summary = BindSummary::default();

        for (i, token) in tokens.iter().enumerate() {
            let name = format!("Value {i}");
            let idx = match self.index_of(&name) {
                Some(idx) => Some(idx),
                None if auto_add => {
                    let value = if looks_non_numeric(token) {
                        Value::String(String::new())
                    } else {
                        Value::Float(0.0)
                    };
                    self.slots.push(ValueSlot::auto(name, value));
                    summary.created += 1;
                    Some(self.slots.len() - 1)
                }
                None => None,
            };

            let Some(idx) = idx else { continue };
            let slot = &mut self.slots[idx];
            match slot.value {
                Value::Float(_) => {
                    slot.value = Value::Float(parse_float_lenient(token));
                    summary.updated += 1;
                }
                Value::Int(_) => {
                    slot.value = Value::Int(parse_int_lenient(token));
                    summary.updated += 1;
                }
                Value::String(_) => {
                    slot.value = Value::String(token.clone());
                    summary.updated += 1;
                }
                Value::Trigger => summary.fired += 1,
                // A single token cannot fill a compound slot.
                _ => summary.skipped += 1,
            }
        }
        summary
    }

    /// Bind a byte frame positionally per the active byte structure. The
    /// slot set grows monotonically up to the frame's argument count and
    /// updates strictly by position, respecting each slot's fixed type.
    pub fn bind_bytes(
        &mut self,
        data: &[u8],
        structure: MessageStructure,
        auto_add: bool,
    ) -> BindSummary {
        let mut summary = BindSummary::default();

        match structure {
            MessageStructure::OneValuePerByte => {
                let num_args = data.len();
                if auto_add {
                    self.grow_positional(num_args, || Value::Int(0), &mut summary);
                }
                for (i, &b) in data.iter().enumerate().take(self.slots.len()) {
                    let slot = &mut self.slots[i];
                    if matches!(slot.value, Value::Int(_)) {
                        slot.value = Value::Int(b as i32);
                        summary.updated += 1;
                    } else {
                        summary.skipped += 1;
                    }
                }
            }
            MessageStructure::FourByteFloatGroups => {
                let num_args = data.len() / 4;
                if auto_add {
                    self.grow_positional(num_args, || Value::Float(0.0), &mut summary);
                }
                for i in 0..num_args.min(self.slots.len()) {
                    let group = [data[i * 4], data[i * 4 + 1], data[i * 4 + 2], data[i * 4 + 3]];
                    let slot = &mut self.slots[i];
                    if matches!(slot.value, Value::Float(_)) {
                        // Shifted-byte integer sum, not an IEEE-754 bit
                        // reinterpretation. Existing senders depend on it.
                        slot.value = Value::Float(i32::from_le_bytes(group) as f32);
                        summary.updated += 1;
                    } else {
                        summary.skipped += 1;
                    }
                }
            }
            MessageStructure::FourByteColorGroups => {
                let num_args = data.len() / 4;
                if auto_add {
                    self.grow_positional(
                        num_args,
                        || Value::Color(Color::from_bytes(0, 0, 0, 0)),
                        &mut summary,
                    );
                }
                for i in 0..num_args.min(self.slots.len()) {
                    let slot = &mut self.slots[i];
                    if matches!(slot.value, Value::Color(_)) {
                        slot.value = Value::Color(Color::from_bytes(
                            data[i * 4],
                            data[i * 4 + 1],
                            data[i * 4 + 2],
                            data[i * 4 + 3],
                        ));
                        summary.updated += 1;
                    } else {
                        summary.skipped += 1;
                    }
                }
            }
            // Option sets are rebuilt on protocol change, so a text
            // structure can never reach byte binding.
            _ => debug_assert!(false, "text structure in byte binding"),
        }
        summary
    }

    fn grow_positional(
        &mut self,
        num_args: usize,
        default: impl Fn() -> Value,
        summary: &mut BindSummary,
    ) {
        while self.slots.len() < num_args {
            let index = self.slots.len();
            self.slots
                .push(ValueSlot::auto(format!("Value {index}"), default()));
            summary.created += 1;
        }
    }
}

/// Infer a new slot's type from the arguments of a named-mode message.
fn infer_named_value(args: &[String]) -> Value {
    if !args.is_empty() && looks_non_numeric(&args[0]) {
        return Value::String(args.join(" "));
    }
    match args.len() {
        0 => Value::Trigger,
        1 => Value::Float(parse_float_lenient(&args[0])),
        2 => Value::Point2(parse_float_lenient(&args[0]), parse_float_lenient(&args[1])),
        3 => Value::Point3(
            parse_float_lenient(&args[0]),
            parse_float_lenient(&args[1]),
            parse_float_lenient(&args[2]),
        ),
        4 => Value::Color(Color::from_float_rgba(
            parse_float_lenient(&args[0]),
            parse_float_lenient(&args[1]),
            parse_float_lenient(&args[2]),
            parse_float_lenient(&args[3]),
        )),
        _ => Value::String(args.join(" ")),
    }
}

/// Apply a named-mode update to an existing slot, coercing by its fixed
/// type. Too few arguments is a silent no-op for this slot.
fn apply_named(slot: &mut ValueSlot, args: &[String], summary: &mut BindSummary) {
    let num_args = args.len();
    match slot.value {
        Value::Trigger => summary.fired += 1,
        Value::Float(_) => {
            if num_args >= 1 {
                slot.value = Value::Float(parse_float_lenient(&args[0]));
                summary.updated += 1;
            } else {
                summary.skipped += 1;
            }
        }
        Value::Int(_) => {
            if num_args >= 1 {
                slot.value = Value::Int(parse_int_lenient(&args[0]));
                summary.updated += 1;
            } else {
                summary.skipped += 1;
            }
        }
        Value::Point2(..) => {
            if num_args >= 2 {
                slot.value =
                    Value::Point2(parse_float_lenient(&args[0]), parse_float_lenient(&args[1]));
                summary.updated += 1;
            } else {
                summary.skipped += 1;
            }
        }
        Value::Point3(..) => {
            if num_args >= 3 {
                slot.value = Value::Point3(
                    parse_float_lenient(&args[0]),
                    parse_float_lenient(&args[1]),
                    parse_float_lenient(&args[2]),
                );
                summary.updated += 1;
            } else {
                summary.skipped += 1;
            }
        }
        Value::Color(_) => {
            if num_args >= 4 {
                slot.value = Value::Color(Color::from_float_rgba(
                    parse_float_lenient(&args[0]),
                    parse_float_lenient(&args[1]),
                    parse_float_lenient(&args[2]),
                    parse_float_lenient(&args[3]),
                ));
                summary.updated += 1;
            } else {
                summary.skipped += 1;
            }
        }
        Value::String(_) => {
            if num_args >= 1 {
                slot.value = Value::String(args.join(" "));
                summary.updated += 1;
            } else {
                summary.skipped += 1;
            }
        }
    }
}
