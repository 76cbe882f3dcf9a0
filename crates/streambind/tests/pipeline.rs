//! End-to-end pipeline tests through the library facade.

use streambind::frame::{cobs_encode, MessageStructure, WireProtocol};
use streambind::module::{ModuleConfig, ModuleState, RouteParams, StreamModule};
use streambind::transport::MemoryTransport;
use streambind::values::Value;

#[test]
fn serial_line_session_binds_and_routes_back() {
    let mut module = StreamModule::new(
        "serial",
        ModuleConfig::default(),
        MemoryTransport::new(),
    )
    .expect("default config should be valid");

    // A burst of sensor traffic, split awkwardly across reads.
    module.receive(b"Speed 10\nHue 0.");
    module.receive(b"5\nGo\nLabel armed\n");

    assert_eq!(module.values().value("Speed"), Some(&Value::Float(10.0)));
    assert_eq!(module.values().value("Hue"), Some(&Value::Float(0.5)));
    assert_eq!(module.values().value("Go"), Some(&Value::Trigger));
    assert_eq!(
        module.values().value("Label"),
        Some(&Value::String("armed".to_string()))
    );

    // Route a value back out with a line ending.
    let params = RouteParams {
        prefix: "Speed ".to_string(),
        append_cr: false,
        append_nl: true,
    };
    assert!(module.route_value(&Value::Float(12.0), &params));
    assert_eq!(module.transport().sent(), &[b"Speed 12\n".to_vec()]);
}

#[test]
fn cobs_device_session_survives_garbage_frames() {
    let config = ModuleConfig {
        protocol: WireProtocol::Cobs,
        structure: MessageStructure::OneValuePerByte,
        ..ModuleConfig::default()
    };
    let mut module =
        StreamModule::new("device", config, MemoryTransport::new()).expect("config should be valid");

    // Well-formed frame, then a corrupt block, then another good frame.
    let good = cobs_encode(&[1, 2, 3]).expect("payload fits one block");
    module.receive(&good);
    module.receive(&[0xF0, 0x01, 0x00]);
    let good = cobs_encode(&[9, 8, 7]).expect("payload fits one block");
    module.receive(&good);

    assert_eq!(module.dropped_frames(), 1);
    assert_eq!(module.values().len(), 3);
    assert_eq!(module.values().value("Value 0"), Some(&Value::Int(9)));
    assert_eq!(module.values().value("Value 2"), Some(&Value::Int(7)));
}

#[test]
fn state_snapshot_restores_into_a_fresh_module() {
    let mut source = StreamModule::new(
        "source",
        ModuleConfig::default(),
        MemoryTransport::new(),
    )
    .expect("default config should be valid");
    source.receive(b"Speed 10\nPos 1 2\n");

    let json = source
        .save_state()
        .to_json()
        .expect("state should serialize");
    let state = ModuleState::from_json(&json).expect("state should deserialize");

    let mut restored = StreamModule::new(
        "restored",
        ModuleConfig::default(),
        MemoryTransport::new(),
    )
    .expect("default config should be valid");
    restored.load_state(state).expect("state should load");

    assert_eq!(restored.values().value("Speed"), Some(&Value::Float(10.0)));
    assert_eq!(
        restored.values().value("Pos"),
        Some(&Value::Point2(1.0, 2.0))
    );

    // The restored module keeps binding where the snapshot left off.
    restored.receive(b"Speed 11\n");
    assert_eq!(restored.values().value("Speed"), Some(&Value::Float(11.0)));
    assert_eq!(restored.values().len(), 2);
}
