use serde::{Deserialize, Serialize};
use streambind_values::Value;

/// Per-route formatting parameters.
///
/// One instance exists per (source value, destination module) pairing and is
/// owned by the routing layer, not by the module it targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteParams {
    /// Text placed before the stringified value.
    pub prefix: String,
    /// Append a carriage return.
    pub append_cr: bool,
    /// Append a newline. CR comes first when both are set.
    pub append_nl: bool,
}

impl Default for RouteParams {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            append_cr: false,
            append_nl: false,
        }
    }
}

impl RouteParams {
    /// Default parameters for routing a named source value: the value's
    /// name plus a space, no line ending.
    pub fn for_value(name: &str) -> Self {
        Self {
            prefix: format!("{name} "),
            append_cr: false,
            append_nl: false,
        }
    }
}

/// Render a routed value into its outbound message string:
/// `prefix + value (omitted for Trigger) + CR? + NL?`.
pub fn format_route(value: &Value, params: &RouteParams) -> String {
    let mut out = params.prefix.clone();
    if !matches!(value, Value::Trigger) {
        out.push_str(&value.to_string());
    }
    if params.append_cr {
        out.push('\r');
    }
    if params.append_nl {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use streambind_values::Color;

    #[test]
    fn prefix_value_and_endings() {
        let params = RouteParams {
            prefix: "Speed ".to_string(),
            append_cr: true,
            append_nl: true,
        };
        assert_eq!(format_route(&Value::Float(10.0), &params), "Speed 10\r\n");
    }

    #[test]
    fn trigger_sends_prefix_only() {
        let params = RouteParams::for_value("Go");
        assert_eq!(format_route(&Value::Trigger, &params), "Go ");
    }

    #[test]
    fn compound_values_space_join() {
        let params = RouteParams::default();
        assert_eq!(
            format_route(&Value::Point3(1.0, 2.5, -3.0), &params),
            "1 2.5 -3"
        );
        assert_eq!(
            format_route(&Value::Color(Color::from_bytes(255, 0, 0, 255)), &params),
            "#ff0000ff"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let params = RouteParams {
            prefix: "x=".to_string(),
            append_cr: false,
            append_nl: true,
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: RouteParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }
}
