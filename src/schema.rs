use crate::codec::JsonCodec;
use crate::error::Result;

/// One declared field: its wire key, presence rule, and typed accessors.
pub struct FieldDef<T> {
	/// Wire key, also the field's path segment in diagnostics.
	pub name: &'static str,
	/// Mandatory fields fail decode when their key is absent.
	pub required: bool,
	/// Shared accessor for encoding.
	pub get: for<'a> fn(&'a T) -> &'a dyn JsonCodec,
	/// Exclusive accessor for decoding.
	pub get_mut: for<'a> fn(&'a mut T) -> &'a mut dyn JsonCodec,
}

/// A structure with a declared, ordered field table.
///
/// Implemented through [`json_struct!`](crate::json_struct); the table
/// drives both encode and decode so the two can never disagree on keys
/// or order.
pub trait Reflect: Default + 'static {
	/// Field table in declaration order.
	const FIELDS: &'static [FieldDef<Self>];

	/// Encode as compact JSON text.
	fn to_json(&self) -> String {
		crate::engine::to_json(self)
	}

	/// Decode JSON text into `self`, stopping at the first violation.
	fn from_json(&mut self, text: &str) -> Result<()> {
		crate::engine::from_json(self, text)
	}
}

/// Declare the field table for a `Default` structure.
///
/// Each entry is `required` or `optional` followed by the field name;
/// entries list every serialized field in wire order. The macro implements
/// both [`Reflect`] and [`JsonCodec`](crate::JsonCodec), so declared
/// structures nest inside other declared structures, sequences, maps, and
/// owning references.
///
/// ```
/// use fieldjson::{json_struct, Reflect};
///
/// #[derive(Default)]
/// struct Point {
/// 	x: i32,
/// 	y: i32,
/// 	label: String,
/// }
///
/// json_struct!(Point { required x, required y, optional label });
///
/// assert_eq!(Point::default().to_json(), r#"{"x":0,"y":0,"label":""}"#);
/// ```
#[macro_export]
macro_rules! json_struct {
	($ty:ty { $($rule:ident $field:ident),+ $(,)? }) => {
		impl $crate::Reflect for $ty {
			const FIELDS: &'static [$crate::FieldDef<Self>] = &[
				$(
					$crate::FieldDef {
						name: stringify!($field),
						required: $crate::json_struct!(@required $rule),
						get: |item| &item.$field,
						get_mut: |item| &mut item.$field,
					},
				)+
			];
		}

		impl $crate::JsonCodec for $ty {
			fn encode(&self) -> $crate::JsonValue {
				$crate::encode_struct(self)
			}

			fn decode(&mut self, value: &$crate::JsonValue, at: &str) -> $crate::Result<()> {
				$crate::decode_struct(self, value, at)
			}

			fn decode_null(&mut self, required: bool, at: &str) -> $crate::Result<()> {
				$crate::decode_struct_null(self, required, at)
			}
		}
	};
	(@required required) => { true };
	(@required optional) => { false };
}
