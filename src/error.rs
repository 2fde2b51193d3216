use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, JsonError>;

/// Errors produced while decoding JSON text into a declared structure.
///
/// Paths are rooted at `$`, e.g. `$.v3[0].p3`. Decoding stops at the first
/// violating field in declaration order; encoding has no failure path.
#[derive(Debug, Error)]
pub enum JsonError {
	/// Input text was not valid JSON; no field was touched.
	#[error("json parse: {0}")]
	Parse(#[from] serde_json::Error),
	/// A structure position held something other than an object.
	#[error("expected object at {at}, got {got}")]
	ExpectedObject {
		/// Path of the offending position.
		at: String,
		/// Actual value kind found.
		got: &'static str,
	},
	/// A sequence or map position held something other than an array.
	#[error("expected array at {at}, got {got}")]
	ExpectedArray {
		/// Path of the offending position.
		at: String,
		/// Actual value kind found.
		got: &'static str,
	},
	/// A mandatory field key was absent from the input object.
	#[error("missing mandatory field {at}")]
	MissingField {
		/// Path of the absent field.
		at: String,
	},
	/// A mandatory by-value structure field held an explicit null.
	#[error("mandatory object field {at} is null")]
	NullStruct {
		/// Path of the null field.
		at: String,
	},
}
