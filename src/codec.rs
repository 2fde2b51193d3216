use crate::error::Result;
use crate::value::JsonValue;

/// Per-type codec seam the field table dispatches through.
///
/// Implemented for scalars, smart buffers, sequences, ordered maps, owning
/// references, and (via `json_struct!`) declared structures.
pub trait JsonCodec {
	/// Encode the current value as a JSON value.
	fn encode(&self) -> JsonValue;

	/// Decode a non-null JSON value into `self` in place.
	fn decode(&mut self, value: &JsonValue, at: &str) -> Result<()>;

	/// Apply an explicit JSON `null` at this slot.
	///
	/// Every kind except by-value nested structures resets to its default
	/// regardless of `required`; structures reject `null` when mandatory.
	fn decode_null(&mut self, required: bool, at: &str) -> Result<()>;
}

macro_rules! signed_codec {
	($($ty:ty),+) => {$(
		impl JsonCodec for $ty {
			fn encode(&self) -> JsonValue {
				JsonValue::I64(i64::from(*self))
			}

			fn decode(&mut self, value: &JsonValue, _at: &str) -> Result<()> {
				*self = match value {
					JsonValue::I64(value) => *value as $ty,
					JsonValue::U64(value) => *value as $ty,
					JsonValue::F64(value) => *value as $ty,
					JsonValue::F32(value) => *value as $ty,
					_ => 0,
				};
				Ok(())
			}

			fn decode_null(&mut self, _required: bool, _at: &str) -> Result<()> {
				*self = 0;
				Ok(())
			}
		}
	)+};
}

macro_rules! unsigned_codec {
	($($ty:ty),+) => {$(
		impl JsonCodec for $ty {
			fn encode(&self) -> JsonValue {
				JsonValue::U64(u64::from(*self))
			}

			fn decode(&mut self, value: &JsonValue, _at: &str) -> Result<()> {
				*self = match value {
					JsonValue::I64(value) => *value as $ty,
					JsonValue::U64(value) => *value as $ty,
					JsonValue::F64(value) => *value as $ty,
					JsonValue::F32(value) => *value as $ty,
					_ => 0,
				};
				Ok(())
			}

			fn decode_null(&mut self, _required: bool, _at: &str) -> Result<()> {
				*self = 0;
				Ok(())
			}
		}
	)+};
}

signed_codec!(i8, i16, i32, i64);
unsigned_codec!(u8, u16, u32, u64);

impl JsonCodec for bool {
	fn encode(&self) -> JsonValue {
		JsonValue::Bool(*self)
	}

	fn decode(&mut self, value: &JsonValue, _at: &str) -> Result<()> {
		*self = matches!(value, JsonValue::Bool(true));
		Ok(())
	}

	fn decode_null(&mut self, _required: bool, _at: &str) -> Result<()> {
		*self = false;
		Ok(())
	}
}

impl JsonCodec for f32 {
	fn encode(&self) -> JsonValue {
		JsonValue::F32(*self)
	}

	fn decode(&mut self, value: &JsonValue, _at: &str) -> Result<()> {
		*self = match value {
			JsonValue::F32(value) => *value,
			JsonValue::F64(value) => *value as f32,
			JsonValue::I64(value) => *value as f32,
			JsonValue::U64(value) => *value as f32,
			_ => f32::NAN,
		};
		Ok(())
	}

	fn decode_null(&mut self, _required: bool, _at: &str) -> Result<()> {
		*self = f32::NAN;
		Ok(())
	}
}

impl JsonCodec for f64 {
	fn encode(&self) -> JsonValue {
		JsonValue::F64(*self)
	}

	fn decode(&mut self, value: &JsonValue, _at: &str) -> Result<()> {
		*self = match value {
			JsonValue::F64(value) => *value,
			JsonValue::F32(value) => f64::from(*value),
			JsonValue::I64(value) => *value as f64,
			JsonValue::U64(value) => *value as f64,
			_ => f64::NAN,
		};
		Ok(())
	}

	fn decode_null(&mut self, _required: bool, _at: &str) -> Result<()> {
		*self = f64::NAN;
		Ok(())
	}
}

impl JsonCodec for String {
	fn encode(&self) -> JsonValue {
		JsonValue::String(self.as_str().into())
	}

	fn decode(&mut self, value: &JsonValue, _at: &str) -> Result<()> {
		match value {
			JsonValue::String(value) => {
				self.clear();
				self.push_str(value);
			}
			_ => self.clear(),
		}
		Ok(())
	}

	fn decode_null(&mut self, _required: bool, _at: &str) -> Result<()> {
		self.clear();
		Ok(())
	}
}
