use crate::error::{JsonError, Result};
use crate::schema::Reflect;
use crate::value::JsonValue;

/// Encode a declared structure as an object, every field in table order.
pub fn encode_struct<T: Reflect>(value: &T) -> JsonValue {
	let fields = T::FIELDS
		.iter()
		.map(|field| (field.name.into(), (field.get)(value).encode()))
		.collect();
	JsonValue::Object(fields)
}

/// Decode an object into a declared structure.
///
/// Fields are visited in table order and the first violation aborts the
/// walk, so earlier fields may already hold decoded values when an error
/// comes back. A missing key fails mandatory fields and leaves optional
/// ones untouched; an explicit `null` is delegated to the field's own
/// null rule.
pub fn decode_struct<T: Reflect>(target: &mut T, value: &JsonValue, at: &str) -> Result<()> {
	if !matches!(value, JsonValue::Object(_)) {
		return Err(JsonError::ExpectedObject { at: at.to_owned(), got: value.kind() });
	}
	for field in T::FIELDS {
		let path = join_path(at, field.name);
		match value.get(field.name) {
			None if field.required => return Err(JsonError::MissingField { at: path }),
			None => {}
			Some(JsonValue::Null) => (field.get_mut)(target).decode_null(field.required, &path)?,
			Some(member) => (field.get_mut)(target).decode(member, &path)?,
		}
	}
	Ok(())
}

/// Apply an explicit `null` to a by-value structure slot.
///
/// Mandatory slots reject `null`; optional slots reset to the structure's
/// default without recursing into the field table.
pub fn decode_struct_null<T: Reflect>(target: &mut T, required: bool, at: &str) -> Result<()> {
	if required {
		return Err(JsonError::NullStruct { at: at.to_owned() });
	}
	*target = T::default();
	Ok(())
}

/// Compact JSON text of a declared structure.
pub fn to_json<T: Reflect>(value: &T) -> String {
	encode_struct(value).to_text()
}

/// Parse JSON text and decode it into a declared structure.
pub fn from_json<T: Reflect>(target: &mut T, text: &str) -> Result<()> {
	let value = JsonValue::parse(text)?;
	decode_struct(target, &value, "$")
}

pub(crate) fn join_path(at: &str, name: &str) -> String {
	format!("{at}.{name}")
}
