use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Build from float channels in 0..1, clamped then scaled to 0..255.
    pub fn from_float_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
            a: channel(a),
        }
    }

    /// Build from raw byte channels.
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

/// A typed application value.
///
/// This is the closed set of types a slot can hold. A slot's variant is
/// fixed at creation; updates coerce incoming tokens into the existing
/// variant and never change it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Trigger,
    Float(f32),
    Int(i32),
    Point2(f32, f32),
    Point3(f32, f32, f32),
    Color(Color),
    String(String),
}

/// Discriminant of a [`Value`], used where only the type matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Trigger,
    Float,
    Int,
    Point2,
    Point3,
    Color,
    String,
}

impl Value {
    /// The variant discriminant.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Trigger => ValueKind::Trigger,
            Value::Float(_) => ValueKind::Float,
            Value::Int(_) => ValueKind::Int,
            Value::Point2(..) => ValueKind::Point2,
            Value::Point3(..) => ValueKind::Point3,
            Value::Color(_) => ValueKind::Color,
            Value::String(_) => ValueKind::String,
        }
    }

    /// Coerce to a float where the variant allows it.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f32),
            _ => None,
        }
    }
}

impl ValueKind {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            ValueKind::Trigger => "trigger",
            ValueKind::Float => "float",
            ValueKind::Int => "int",
            ValueKind::Point2 => "point2",
            ValueKind::Point3 => "point3",
            ValueKind::Color => "color",
            ValueKind::String => "string",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical text form of a value, as used by the route formatter.
///
/// Triggers render empty, points space-join their components, colors render
/// as `#rrggbbaa`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Trigger => Ok(()),
            Value::Float(v) => f.write_str(&format_float(*v)),
            Value::Int(v) => write!(f, "{v}"),
            Value::Point2(x, y) => write!(f, "{} {}", format_float(*x), format_float(*y)),
            Value::Point3(x, y, z) => write!(
                f,
                "{} {} {}",
                format_float(*x),
                format_float(*y),
                format_float(*z)
            ),
            Value::Color(c) => write!(f, "{c}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

/// Format a float without a trailing `.0` when it is integral.
pub fn format_float(v: f32) -> String {
    if v.is_finite() && v == v.trunc() && v.abs() < 9.0e18 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_floats_clamps_and_scales() {
        let c = Color::from_float_rgba(0.0, 0.5, 1.0, 2.0);
        assert_eq!(c, Color::from_bytes(0, 128, 255, 255));
        let c = Color::from_float_rgba(-1.0, 0.25, 0.75, 1.0);
        assert_eq!(c, Color::from_bytes(0, 64, 191, 255));
    }

    #[test]
    fn display_forms() {
        assert_eq!(Value::Float(10.0).to_string(), "10");
        assert_eq!(Value::Float(0.5).to_string(), "0.5");
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Point2(1.0, 2.5).to_string(), "1 2.5");
        assert_eq!(Value::Point3(1.0, 2.0, 3.0).to_string(), "1 2 3");
        assert_eq!(
            Value::Color(Color::from_bytes(255, 0, 16, 128)).to_string(),
            "#ff001080"
        );
        assert_eq!(Value::String("hi there".into()).to_string(), "hi there");
        assert_eq!(Value::Trigger.to_string(), "");
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Value::Trigger.kind(), ValueKind::Trigger);
        assert_eq!(Value::Point3(0.0, 0.0, 0.0).kind(), ValueKind::Point3);
        assert_eq!(Value::String(String::new()).kind(), ValueKind::String);
    }

    #[test]
    fn serde_roundtrip() {
        let values = vec![
            Value::Trigger,
            Value::Float(1.5),
            Value::Int(7),
            Value::Point2(0.5, -0.5),
            Value::Point3(1.0, 2.0, 3.0),
            Value::Color(Color::from_bytes(1, 2, 3, 4)),
            Value::String("hello".into()),
        ];
        let json = serde_json::to_string(&values).unwrap();
        let back: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn as_float_coercion() {
        assert_eq!(Value::Float(2.5).as_float(), Some(2.5));
        assert_eq!(Value::Int(4).as_float(), Some(4.0));
        assert_eq!(Value::Trigger.as_float(), None);
    }
}
