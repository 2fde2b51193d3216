//! Field-table JSON codec with mandatory/optional field semantics.
//!
//! A structure declares an ordered table of fields through
//! [`json_struct!`]; the table drives both directions of the codec.
//! Encoding always emits every declared key in declaration order as
//! compact JSON. Decoding walks the same table and stops at the first
//! violation: a missing key fails mandatory fields and leaves optional
//! ones untouched, while an explicit `null` resets a field to its type
//! default (by-value nested structures reject `null` when mandatory).
//!
//! Beyond scalars and `String`, fields may be [`SmartBuffer`] (content
//! sniffing byte buffer), `Vec<T>` (holes kept as `null` slots),
//! `BTreeMap<K, V>` (encoded as `[{"k":…,"v":…}]` entry arrays), the
//! owning references [`Shared`] and [`Owned`], or further declared
//! structures.

mod buffer;
mod codec;
mod containers;
mod engine;
mod error;
mod ptr;
mod schema;
mod sink;
mod value;

pub use buffer::SmartBuffer;
pub use codec::JsonCodec;
pub use engine::{decode_struct, decode_struct_null, encode_struct, from_json, to_json};
pub use error::{JsonError, Result};
pub use ptr::{Owned, OwningRef, Shared};
pub use schema::{FieldDef, Reflect};
pub use sink::{Codec, TraceSink};
pub use value::JsonValue;
