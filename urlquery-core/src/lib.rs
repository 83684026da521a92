#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod macros;

// Typed mutable views into values
mod slot;
pub use slot::*;

// Definition for `core::` types
mod impls_core;

// Definition for `alloc::` types
mod impls_alloc;

// Definition for `std::` types (that aren't in `alloc` or `core`)
#[cfg(feature = "std")]
mod impls_std;

// Type definitions
mod types;
pub use types::*;

/// Allows querying the [`Shape`] of a type, and handing out a [`Slot`] through which a decoder
/// can assign a value of this type in place.
///
/// Every field of a struct deriving `Queryable` must itself implement `Queryable`. Types with no
/// conversion rule still implement it: their slot is [`Slot::Other`], which decoders skip or
/// reject.
pub trait Queryable: Sized {
    /// The shape of this type
    const SHAPE: &'static Shape;

    /// Returns a typed, mutable view into this value.
    fn slot(&mut self) -> Slot<'_>;
}

/// A record whose fields can be visited one by one, by index.
///
/// This is implemented by `#[derive(Queryable)]` for structs, and is object safe so that a
/// decoder can walk any record through `&mut dyn Record`.
pub trait Record {
    /// The shape of the record. Its [`Def`] is always [`Def::Struct`].
    fn shape(&self) -> &'static Shape;

    /// Returns a slot for the field at `index` (in declaration order), or `None` if the index
    /// is out of bounds.
    ///
    /// Fields that are not exported hand out [`Slot::Sealed`].
    fn field_slot(&mut self, index: usize) -> Option<Slot<'_>>;
}

/// The error type returned by [`DecodeValues`] implementations.
pub type DecodeValuesError = alloc::boxed::Box<dyn core::error::Error + Send + Sync + 'static>;

/// Implemented by types that know how to decode themselves from a single query value, instead
/// of going through primitive conversion.
///
/// Use [`queryable_decoder!`] to expose an implementation to decoders.
pub trait DecodeValues {
    /// Decodes `value`, found under the query key `key`, into `self`.
    fn decode_values(&mut self, key: &str, value: &str) -> Result<(), DecodeValuesError>;
}
