use streambind_frame::RawFrame;

/// Observer for module activity.
///
/// The UI layer (activity indicators, monitors) implements this; the module
/// publishes to every registered observer and never depends on one existing.
/// All methods default to no-ops.
pub trait ModuleObserver {
    /// A frame arrived and is about to be processed.
    fn inbound_activity(&mut self) {}

    /// Bytes were handed to the transport.
    fn outbound_activity(&mut self) {}

    /// Called once per decoded frame, before parsing.
    fn frame_received(&mut self, _frame: &RawFrame) {}
}

/// A registered script context.
///
/// The module calls the data hook on every registered host with each frame's
/// payload; return values are ignored and the scripting engine itself is the
/// host's concern.
pub trait ScriptHost {
    /// One text line was received.
    fn on_data_line(&mut self, line: &str);

    /// One byte frame was received.
    fn on_data_bytes(&mut self, data: &[u8]);
}
