use streambind_frame::{encode_payload, FrameDecoder, MessageStructure, RawFrame, WireProtocol};
use streambind_transport::Transport;
use streambind_values::{tokenize, BindSummary, Value, ValueBindingTable};
use tracing::{debug, info, warn};

use crate::config::ModuleConfig;
use crate::error::{ModuleError, Result};
use crate::hooks::{ModuleObserver, ScriptHost};
use crate::route::{format_route, RouteParams};
use crate::state::ModuleState;

/// A streaming module: owns the decode → parse → bind pipeline for inbound
/// data and the format → encode → send pipeline for outbound values.
///
/// Single-threaded by design. Inbound chunks are pushed in synchronously;
/// hosts with a separate I/O thread marshal chunks over an
/// [`streambind_transport::inbound_queue`] channel first. No inbound failure
/// is fatal:
/// every stage drops the offending frame or update and keeps going.
pub struct StreamModule<T> {
    name: String,
    config: ModuleConfig,
    decoder: FrameDecoder,
    values: ValueBindingTable,
    transport: T,
    observers: Vec<Box<dyn ModuleObserver>>,
    scripts: Vec<Box<dyn ScriptHost>>,
}

impl<T: Transport> StreamModule<T> {
    /// Create a module with the given configuration and outbound transport.
    pub fn new(name: impl Into<String>, config: ModuleConfig, transport: T) -> Result<Self> {
        config.validate()?;
        let decoder = FrameDecoder::new(config.protocol);
        Ok(Self {
            name: name.into(),
            config,
            decoder,
            values: ValueBindingTable::new(),
            transport,
            observers: Vec::new(),
            scripts: Vec::new(),
        })
    }

    /// Module name, used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current configuration.
    pub fn config(&self) -> &ModuleConfig {
        &self.config
    }

    /// The value binding table.
    pub fn values(&self) -> &ValueBindingTable {
        &self.values
    }

    /// Mutable access for explicit user slot management.
    pub fn values_mut(&mut self) -> &mut ValueBindingTable {
        &mut self.values
    }

    /// Borrow the outbound transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the outbound transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Malformed frames dropped by the decoder so far.
    pub fn dropped_frames(&self) -> u64 {
        self.decoder.dropped_frames()
    }

    /// Register an activity observer.
    pub fn add_observer(&mut self, observer: Box<dyn ModuleObserver>) {
        self.observers.push(observer);
    }

    /// Register a script context to receive the data hook.
    pub fn add_script_host(&mut self, host: Box<dyn ScriptHost>) {
        self.scripts.push(host);
    }

    /// Enable or disable the module.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    /// Toggle slot auto-creation.
    pub fn set_auto_add(&mut self, auto_add: bool) {
        self.config.auto_add = auto_add;
    }

    /// Toggle named vs indexed addressing.
    pub fn set_first_value_is_name(&mut self, value: bool) {
        self.config.first_value_is_name = value;
    }

    /// Switch wire protocol. The structure option set is rebuilt atomically:
    /// an incompatible active structure falls back to the new protocol's
    /// default, and any retained partial input is discarded.
    pub fn set_protocol(&mut self, protocol: WireProtocol) {
        self.config.protocol = protocol;
        self.decoder.set_protocol(protocol);
        if !self.config.structure.is_valid_for(protocol) {
            self.config.structure = protocol.default_structure();
        }
    }

    /// Select a message structure from the active protocol's option set.
    pub fn set_structure(&mut self, structure: MessageStructure) -> Result<()> {
        if !structure.is_valid_for(self.config.protocol) {
            return Err(ModuleError::InvalidStructure {
                protocol: self.config.protocol,
                structure,
            });
        }
        self.config.structure = structure;
        Ok(())
    }

    /// Feed raw inbound bytes from the transport. Disabled modules discard.
    pub fn receive(&mut self, input: &[u8]) {
        if !self.config.enabled {
            debug!(module = %self.name, "module disabled, discarding input");
            return;
        }
        for frame in self.decoder.push(input) {
            self.handle_frame(frame);
        }
    }

    /// Feed one pre-split text line, as delivered by transports that split
    /// on line boundaries themselves. Stray terminator characters are
    /// removed wherever they appear.
    pub fn receive_line(&mut self, line: &str) {
        if !self.config.enabled {
            debug!(module = %self.name, "module disabled, discarding input");
            return;
        }
        let message: String = line.chars().filter(|c| *c != '\r' && *c != '\n').collect();
        self.handle_frame(RawFrame::Line(message));
    }

    fn handle_frame(&mut self, frame: RawFrame) {
        if self.config.log_incoming {
            match &frame {
                RawFrame::Line(line) => {
                    info!(module = %self.name, message = %line, "message received");
                }
                RawFrame::Bytes(bytes) => {
                    info!(module = %self.name, bytes = ?bytes.as_ref(), "data received");
                }
            }
        }

        for observer in &mut self.observers {
            observer.inbound_activity();
            observer.frame_received(&frame);
        }

        if frame.is_empty() {
            return;
        }

        match frame {
            RawFrame::Line(line) => {
                for script in &mut self.scripts {
                    script.on_data_line(&line);
                }
                self.bind_line(&line);
            }
            RawFrame::Bytes(bytes) => {
                for script in &mut self.scripts {
                    script.on_data_bytes(bytes.as_ref());
                }
                self.values
                    .bind_bytes(bytes.as_ref(), self.config.structure, self.config.auto_add);
            }
        }
    }

    fn bind_line(&mut self, line: &str) -> BindSummary {
        let tokens = tokenize(line, self.config.structure, self.config.first_value_is_name);
        if tokens.is_empty() {
            return BindSummary::default();
        }
        if self.config.first_value_is_name {
            self.values.bind_named(&tokens, self.config.auto_add)
        } else {
            self.values.bind_indexed(&tokens, self.config.auto_add)
        }
    }

    /// Send a message string through the active framing. Returns whether the
    /// bytes reached the transport; failures are logged, never retried.
    pub fn send_message(&mut self, message: &str) -> bool {
        if !self.can_send("message") {
            return false;
        }
        let sent = self.send_encoded(message.as_bytes());
        if sent && self.config.log_outgoing {
            info!(module = %self.name, message = %message, "sending");
        }
        sent
    }

    /// Send raw bytes through the active framing.
    pub fn send_bytes(&mut self, bytes: &[u8]) -> bool {
        if !self.can_send("data") {
            return false;
        }
        let sent = self.send_encoded(bytes);
        if sent && self.config.log_outgoing {
            info!(module = %self.name, len = bytes.len(), "sending bytes");
        }
        sent
    }

    /// Render a routed application value with its per-route parameters and
    /// send the result.
    pub fn route_value(&mut self, value: &Value, params: &RouteParams) -> bool {
        let message = format_route(value, params);
        self.send_message(&message)
    }

    fn can_send(&self, what: &str) -> bool {
        if !self.config.enabled {
            debug!(module = %self.name, "module disabled, not sending {what}");
            return false;
        }
        if !self.transport.is_ready() {
            warn!(module = %self.name, "can't send {what}, output is not connected");
            return false;
        }
        true
    }

    fn send_encoded(&mut self, payload: &[u8]) -> bool {
        let wire = match encode_payload(self.config.protocol, payload) {
            Ok(wire) => wire,
            Err(err) => {
                warn!(module = %self.name, error = %err, "encode failed, dropping send");
                return false;
            }
        };
        match self.transport.send(&wire) {
            Ok(()) => {
                for observer in &mut self.observers {
                    observer.outbound_activity();
                }
                true
            }
            Err(err) => {
                warn!(module = %self.name, error = %err, "transport send failed");
                false
            }
        }
    }

    /// Snapshot configuration and the full value table for persistence.
    pub fn save_state(&self) -> ModuleState {
        ModuleState {
            config: self.config.clone(),
            values: self.values.clone(),
        }
    }

    /// Restore persisted state. The decoder restarts clean and every loaded
    /// slot is re-marked user-customizable.
    pub fn load_state(&mut self, state: ModuleState) -> Result<()> {
        state.config.validate()?;
        self.config = state.config;
        self.decoder = FrameDecoder::new(self.config.protocol);
        self.values = state.values;
        self.values.mark_all_customizable();
        Ok(())
    }
}
