use std::fmt::Write as _;

use crate::error::Result;

/// In-memory tagged JSON value.
///
/// Objects keep their fields as an ordered pair list: emission preserves
/// insertion order while lookup goes by key.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
	Null,
	Bool(bool),
	I64(i64),
	U64(u64),
	F32(f32),
	F64(f64),
	String(Box<str>),
	Array(Vec<JsonValue>),
	Object(Vec<(Box<str>, JsonValue)>),
}

impl JsonValue {
	/// Parse JSON text into a value.
	pub fn parse(text: &str) -> Result<Self> {
		let parsed: serde_json::Value = serde_json::from_str(text)?;
		Ok(Self::from(&parsed))
	}

	/// Look up an object field by key.
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		match self {
			Self::Object(fields) => fields.iter().find(|(name, _)| name.as_ref() == key).map(|(_, value)| value),
			_ => None,
		}
	}

	/// True for the `null` value.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Logical value kind for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::I64(_) | Self::U64(_) | Self::F32(_) | Self::F64(_) => "number",
			Self::String(_) => "string",
			Self::Array(_) => "array",
			Self::Object(_) => "object",
		}
	}

	/// Render as compact JSON text, no inserted whitespace.
	pub fn to_text(&self) -> String {
		let mut out = String::new();
		self.write_to(&mut out);
		out
	}

	fn write_to(&self, out: &mut String) {
		match self {
			Self::Null => out.push_str("null"),
			Self::Bool(true) => out.push_str("true"),
			Self::Bool(false) => out.push_str("false"),
			Self::I64(value) => {
				let _ = write!(out, "{value}");
			}
			Self::U64(value) => {
				let _ = write!(out, "{value}");
			}
			// Shortest round-trip form; non-finite values have no JSON literal.
			Self::F32(value) => {
				if value.is_finite() {
					let _ = write!(out, "{value}");
				} else {
					out.push_str("null");
				}
			}
			Self::F64(value) => match serde_json::Number::from_f64(*value) {
				Some(number) => {
					let _ = write!(out, "{number}");
				}
				None => out.push_str("null"),
			},
			Self::String(value) => write_escaped(out, value),
			Self::Array(items) => {
				out.push('[');
				for (index, item) in items.iter().enumerate() {
					if index > 0 {
						out.push(',');
					}
					item.write_to(out);
				}
				out.push(']');
			}
			Self::Object(fields) => {
				out.push('{');
				for (index, (name, value)) in fields.iter().enumerate() {
					if index > 0 {
						out.push(',');
					}
					write_escaped(out, name);
					out.push(':');
					value.write_to(out);
				}
				out.push('}');
			}
		}
	}
}

impl From<&serde_json::Value> for JsonValue {
	fn from(value: &serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(value) => Self::Bool(*value),
			serde_json::Value::Number(number) => {
				if let Some(value) = number.as_i64() {
					Self::I64(value)
				} else if let Some(value) = number.as_u64() {
					Self::U64(value)
				} else {
					number.as_f64().map_or(Self::Null, Self::F64)
				}
			}
			serde_json::Value::String(value) => Self::String(value.as_str().into()),
			serde_json::Value::Array(items) => Self::Array(items.iter().map(Self::from).collect()),
			serde_json::Value::Object(fields) => {
				Self::Object(fields.iter().map(|(name, value)| (name.as_str().into(), Self::from(value))).collect())
			}
		}
	}
}

fn write_escaped(out: &mut String, text: &str) {
	out.push('"');
	for ch in text.chars() {
		match ch {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			'\u{08}' => out.push_str("\\b"),
			'\u{0c}' => out.push_str("\\f"),
			ch if ch < '\u{20}' => {
				let _ = write!(out, "\\u{:04x}", ch as u32);
			}
			ch => out.push(ch),
		}
	}
	out.push('"');
}
