//! Codec adapters for sequences and ordered maps.

use std::collections::BTreeMap;

use crate::codec::JsonCodec;
use crate::error::{JsonError, Result};
use crate::value::JsonValue;

impl<T: JsonCodec + Default> JsonCodec for Vec<T> {
	fn encode(&self) -> JsonValue {
		JsonValue::Array(self.iter().map(JsonCodec::encode).collect())
	}

	fn decode(&mut self, value: &JsonValue, at: &str) -> Result<()> {
		let JsonValue::Array(items) = value else {
			return Err(JsonError::ExpectedArray { at: at.to_owned(), got: value.kind() });
		};
		self.clear();
		for (index, item) in items.iter().enumerate() {
			let path = format!("{at}[{index}]");
			let mut element = T::default();
			// Null slots are holes, never structure violations.
			match item {
				JsonValue::Null => element.decode_null(false, &path)?,
				other => element.decode(other, &path)?,
			}
			self.push(element);
		}
		Ok(())
	}

	fn decode_null(&mut self, _required: bool, _at: &str) -> Result<()> {
		self.clear();
		Ok(())
	}
}

/// Ordered maps go over the wire as `[{"k":…,"v":…}]` so keys may be any
/// codec type, not just strings. Entry order follows key order.
impl<K: JsonCodec + Default + Ord, V: JsonCodec + Default> JsonCodec for BTreeMap<K, V> {
	fn encode(&self) -> JsonValue {
		let entries = self
			.iter()
			.map(|(key, value)| {
				JsonValue::Object(vec![("k".into(), key.encode()), ("v".into(), value.encode())])
			})
			.collect();
		JsonValue::Array(entries)
	}

	fn decode(&mut self, value: &JsonValue, at: &str) -> Result<()> {
		let JsonValue::Array(entries) = value else {
			return Err(JsonError::ExpectedArray { at: at.to_owned(), got: value.kind() });
		};
		self.clear();
		for (index, entry) in entries.iter().enumerate() {
			let path = format!("{at}[{index}]");
			if !matches!(entry, JsonValue::Object(_)) {
				return Err(JsonError::ExpectedObject { at: path, got: entry.kind() });
			}
			let mut key = K::default();
			decode_slot(&mut key, entry.get("k"), &format!("{path}.k"))?;
			let mut slot = V::default();
			decode_slot(&mut slot, entry.get("v"), &format!("{path}.v"))?;
			self.insert(key, slot);
		}
		Ok(())
	}

	fn decode_null(&mut self, _required: bool, _at: &str) -> Result<()> {
		self.clear();
		Ok(())
	}
}

// Absent and null entry members both fall back to the slot default.
fn decode_slot<T: JsonCodec>(slot: &mut T, member: Option<&JsonValue>, at: &str) -> Result<()> {
	match member {
		None | Some(JsonValue::Null) => slot.decode_null(false, at),
		Some(value) => slot.decode(value, at),
	}
}
