use crate::engine;
use crate::error::Result;
use crate::schema::Reflect;

/// Destination for diagnostic lines; injected rather than global.
pub trait TraceSink {
	/// Record one diagnostic line.
	fn append(&self, line: &str);
}

/// Codec front end with an optional trace sink.
///
/// Behaves exactly like [`Reflect::to_json`] and [`Reflect::from_json`];
/// the sink only observes failures, it never alters outcomes.
#[derive(Default)]
pub struct Codec<'a> {
	trace: Option<&'a dyn TraceSink>,
}

impl<'a> Codec<'a> {
	/// Codec without tracing.
	pub fn new() -> Self {
		Self { trace: None }
	}

	/// Codec reporting decode failures to `sink`.
	pub fn with_trace(sink: &'a dyn TraceSink) -> Self {
		Self { trace: Some(sink) }
	}

	/// Encode a declared structure as compact JSON text.
	pub fn to_json<T: Reflect>(&self, value: &T) -> String {
		engine::to_json(value)
	}

	/// Decode JSON text into a declared structure.
	pub fn from_json<T: Reflect>(&self, target: &mut T, text: &str) -> Result<()> {
		let outcome = engine::from_json(target, text);
		if let (Err(err), Some(sink)) = (&outcome, self.trace) {
			sink.append(&format!("json decode failed: {err}"));
		}
		outcome
	}
}
