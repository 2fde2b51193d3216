//! Owning reference fields: nullable single-owner slots.
//!
//! Both flavors encode as `null` when empty and as the pointee's encoding
//! otherwise. Decoding a non-null value always builds a fresh default
//! pointee first, so stale state never leaks through a reuse of the slot,
//! and sharing is never silently widened by decode.

use std::sync::Arc;

use crate::codec::JsonCodec;
use crate::error::Result;
use crate::value::JsonValue;

/// Nullable owning slot, independent of the ownership flavor.
pub trait OwningRef {
	/// Pointee type.
	type Target;

	/// True when the slot holds nothing.
	fn is_empty(&self) -> bool;

	/// Borrow the pointee, if any.
	fn target(&self) -> Option<&Self::Target>;

	/// Replace the pointee.
	fn put(&mut self, value: Self::Target);

	/// Empty the slot.
	fn clear(&mut self);
}

/// Reference-counted owning slot; clones share one pointee.
#[derive(Debug)]
pub struct Shared<T>(Option<Arc<T>>);

/// Uniquely owned slot.
#[derive(Debug)]
pub struct Owned<T>(Option<Box<T>>);

impl<T> Shared<T> {
	/// Slot holding `value`.
	pub fn new(value: T) -> Self {
		Self(Some(Arc::new(value)))
	}

	/// Borrow the pointee, if any.
	pub fn get(&self) -> Option<&T> {
		self.0.as_deref()
	}

	/// True when the slot holds nothing.
	pub fn is_empty(&self) -> bool {
		self.0.is_none()
	}
}

impl<T> Owned<T> {
	/// Slot holding `value`.
	pub fn new(value: T) -> Self {
		Self(Some(Box::new(value)))
	}

	/// Borrow the pointee, if any.
	pub fn get(&self) -> Option<&T> {
		self.0.as_deref()
	}

	/// True when the slot holds nothing.
	pub fn is_empty(&self) -> bool {
		self.0.is_none()
	}
}

impl<T> OwningRef for Shared<T> {
	type Target = T;

	fn is_empty(&self) -> bool {
		self.0.is_none()
	}

	fn target(&self) -> Option<&T> {
		self.0.as_deref()
	}

	fn put(&mut self, value: T) {
		self.0 = Some(Arc::new(value));
	}

	fn clear(&mut self) {
		self.0 = None;
	}
}

impl<T> OwningRef for Owned<T> {
	type Target = T;

	fn is_empty(&self) -> bool {
		self.0.is_none()
	}

	fn target(&self) -> Option<&T> {
		self.0.as_deref()
	}

	fn put(&mut self, value: T) {
		self.0 = Some(Box::new(value));
	}

	fn clear(&mut self) {
		self.0 = None;
	}
}

// Manual impls: an empty slot needs no bounds on T.
impl<T> Default for Shared<T> {
	fn default() -> Self {
		Self(None)
	}
}

impl<T> Default for Owned<T> {
	fn default() -> Self {
		Self(None)
	}
}

impl<T> Clone for Shared<T> {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}

impl<T: PartialEq> PartialEq for Shared<T> {
	fn eq(&self, other: &Self) -> bool {
		self.get() == other.get()
	}
}

impl<T: PartialEq> PartialEq for Owned<T> {
	fn eq(&self, other: &Self) -> bool {
		self.get() == other.get()
	}
}

fn encode_ref<P: OwningRef>(slot: &P) -> JsonValue
where
	P::Target: JsonCodec,
{
	match slot.target() {
		Some(value) => value.encode(),
		None => JsonValue::Null,
	}
}

fn decode_ref<P: OwningRef>(slot: &mut P, value: &JsonValue, at: &str) -> Result<()>
where
	P::Target: JsonCodec + Default,
{
	if value.is_null() {
		slot.clear();
		return Ok(());
	}
	let mut pointee = P::Target::default();
	pointee.decode(value, at)?;
	slot.put(pointee);
	Ok(())
}

impl<T: JsonCodec + Default> JsonCodec for Shared<T> {
	fn encode(&self) -> JsonValue {
		encode_ref(self)
	}

	fn decode(&mut self, value: &JsonValue, at: &str) -> Result<()> {
		decode_ref(self, value, at)
	}

	fn decode_null(&mut self, _required: bool, _at: &str) -> Result<()> {
		self.clear();
		Ok(())
	}
}

impl<T: JsonCodec + Default> JsonCodec for Owned<T> {
	fn encode(&self) -> JsonValue {
		encode_ref(self)
	}

	fn decode(&mut self, value: &JsonValue, at: &str) -> Result<()> {
		decode_ref(self, value, at)
	}

	fn decode_null(&mut self, _required: bool, _at: &str) -> Result<()> {
		self.clear();
		Ok(())
	}
}
