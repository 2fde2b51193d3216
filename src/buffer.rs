use crate::codec::JsonCodec;
use crate::error::Result;
use crate::value::JsonValue;

/// Byte buffer that picks its JSON form by sniffing its own content.
///
/// Encoding tries, in order: embedded JSON document, boolean literal,
/// signed integer, unsigned integer, finite float. Anything else goes out
/// as a JSON string, optionally truncated to a byte limit first. Decoding
/// stores the compact JSON text of whatever value arrives, so the buffer
/// round-trips foreign payloads without understanding them.
#[derive(Debug, Clone, Default, Eq)]
pub struct SmartBuffer {
	bytes: Vec<u8>,
	text_limit: Option<usize>,
}

type SniffRule = fn(&str) -> Option<JsonValue>;

// Order matters: first match wins.
const SNIFF_RULES: &[SniffRule] = &[embedded_json, boolean_literal, signed_integer, unsigned_integer, float_number];

impl SmartBuffer {
	/// Empty buffer, no truncation limit.
	pub fn new() -> Self {
		Self::default()
	}

	/// Raw content bytes.
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Content length in bytes.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// True when the buffer holds no bytes.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Cap the string fallback at `limit` bytes; `None` disables the cap.
	///
	/// The cap only applies when the content fails every sniff rule and is
	/// emitted as a plain string.
	pub fn set_text_limit(&mut self, limit: Option<usize>) {
		self.text_limit = limit;
	}

	fn fallback_string(&self) -> JsonValue {
		let slice = match self.text_limit {
			Some(limit) if limit < self.bytes.len() => &self.bytes[..limit],
			_ => &self.bytes[..],
		};
		JsonValue::String(String::from_utf8_lossy(slice).into_owned().into())
	}
}

impl JsonCodec for SmartBuffer {
	fn encode(&self) -> JsonValue {
		let Ok(text) = std::str::from_utf8(&self.bytes) else {
			return self.fallback_string();
		};
		for rule in SNIFF_RULES {
			if let Some(value) = rule(text) {
				return value;
			}
		}
		self.fallback_string()
	}

	fn decode(&mut self, value: &JsonValue, _at: &str) -> Result<()> {
		self.bytes = value.to_text().into_bytes();
		Ok(())
	}

	fn decode_null(&mut self, _required: bool, _at: &str) -> Result<()> {
		self.bytes.clear();
		Ok(())
	}
}

fn embedded_json(text: &str) -> Option<JsonValue> {
	let head = text.trim_start();
	if !head.starts_with('{') && !head.starts_with('[') {
		return None;
	}
	JsonValue::parse(text).ok()
}

fn boolean_literal(text: &str) -> Option<JsonValue> {
	match text.trim() {
		t if t.eq_ignore_ascii_case("true") => Some(JsonValue::Bool(true)),
		t if t.eq_ignore_ascii_case("false") => Some(JsonValue::Bool(false)),
		_ => None,
	}
}

fn signed_integer(text: &str) -> Option<JsonValue> {
	text.trim().parse::<i64>().ok().map(JsonValue::I64)
}

fn unsigned_integer(text: &str) -> Option<JsonValue> {
	text.trim().parse::<u64>().ok().map(JsonValue::U64)
}

fn float_number(text: &str) -> Option<JsonValue> {
	let value = text.trim().parse::<f64>().ok()?;
	value.is_finite().then_some(JsonValue::F64(value))
}

impl PartialEq for SmartBuffer {
	fn eq(&self, other: &Self) -> bool {
		self.bytes == other.bytes
	}
}

impl PartialEq<str> for SmartBuffer {
	fn eq(&self, other: &str) -> bool {
		self.bytes == other.as_bytes()
	}
}

impl PartialEq<&str> for SmartBuffer {
	fn eq(&self, other: &&str) -> bool {
		self.bytes == other.as_bytes()
	}
}

impl From<&str> for SmartBuffer {
	fn from(text: &str) -> Self {
		Self { bytes: text.as_bytes().to_vec(), text_limit: None }
	}
}

impl From<String> for SmartBuffer {
	fn from(text: String) -> Self {
		Self { bytes: text.into_bytes(), text_limit: None }
	}
}

impl From<&[u8]> for SmartBuffer {
	fn from(bytes: &[u8]) -> Self {
		Self { bytes: bytes.to_vec(), text_limit: None }
	}
}

impl From<Vec<u8>> for SmartBuffer {
	fn from(bytes: Vec<u8>) -> Self {
		Self { bytes, text_limit: None }
	}
}

#[cfg(test)]
mod tests {
	use test_case::test_case;

	use super::SmartBuffer;
	use crate::codec::JsonCodec;

	#[test_case(r#"{"b":1,"a":2}"#, r#"{"b":1,"a":2}"#; "embedded object, key order kept")]
	#[test_case("[1,2,3]", "[1,2,3]"; "embedded array")]
	#[test_case("TRUE", "true"; "boolean folds to lowercase")]
	#[test_case("False", "false"; "mixed case boolean")]
	#[test_case("-125", "-125"; "signed integer")]
	#[test_case("18446744073709551614", "18446744073709551614"; "unsigned beyond i64")]
	#[test_case("0.987", "0.987"; "finite float")]
	#[test_case("inf", "\"inf\""; "non finite float stays a string")]
	#[test_case("12abc", "\"12abc\""; "trailing garbage stays a string")]
	#[test_case("{broken", "\"{broken\""; "malformed embedded json stays a string")]
	fn content_sniffing_picks_the_first_matching_form(content: &str, expected: &str) {
		let buffer = SmartBuffer::from(content);
		assert_eq!(buffer.encode().to_text(), expected);
	}

	#[test]
	fn non_utf8_content_goes_out_lossy() {
		let buffer = SmartBuffer::from(&[0x66, 0xff, 0x6f][..]);
		assert_eq!(buffer.encode().to_text(), "\"f\u{fffd}o\"");
	}

	#[test]
	fn text_limit_truncates_only_the_string_fallback() {
		let mut buffer = SmartBuffer::from("abcdefgh");
		buffer.set_text_limit(Some(4));
		assert_eq!(buffer.encode().to_text(), "\"abcd\"");

		let mut number = SmartBuffer::from("123456789");
		number.set_text_limit(Some(4));
		assert_eq!(number.encode().to_text(), "123456789");
	}

	#[test]
	fn decode_stores_compact_text_of_the_value() {
		let mut buffer = SmartBuffer::new();
		let value = crate::value::JsonValue::parse(r#"{"n":5,"s":"x"}"#).expect("valid json");
		buffer.decode(&value, "$").expect("buffers accept any value");
		assert_eq!(buffer, r#"{"n":5,"s":"x"}"#);

		let quoted = crate::value::JsonValue::String("text".into());
		buffer.decode(&quoted, "$").expect("buffers accept any value");
		assert_eq!(buffer, "\"text\"");
	}

	#[test]
	fn null_empties_the_buffer() {
		let mut buffer = SmartBuffer::from("payload");
		buffer.decode_null(true, "$").expect("never fails");
		assert!(buffer.is_empty());
	}
}
