#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub use urlquery_core::*;

/// Derive the [`Queryable`] and [`Record`] traits for a struct.
///
/// The derived implementation describes every field in declaration order: its declared name,
/// its shape, whether it is `pub` (only `pub` fields are assignable), and its annotation.
///
/// ```rust
/// # use urlquery::Queryable;
/// #[derive(Queryable)]
/// struct Page {
///     pub offset: u64,
///     pub limit: u32,
/// }
/// ```
///
/// Every field type must implement [`Queryable`]. Enums and generic structs are rejected.
///
/// # Field Attributes
///
/// ```rust
/// # use urlquery::Queryable;
/// # #[derive(Queryable)]
/// # struct Inner;
/// #[derive(Queryable)]
/// struct Search {
///     #[url("q")]
///     pub query: String,
///     #[url("q,seen")]
///     pub has_query: bool,
///     #[url("-")]
///     pub internal: u32,
///     #[url(flatten)]
///     pub inner: Inner,
/// }
/// ```
///
/// * `"name,option,..."` The annotation string. The first segment is the lookup name (empty
///   means "use the field's declared name"), the rest are options such as `seen`. The literal
///   `"-"` excludes the field. A field carries at most one annotation string.
///
/// * `flatten` Marks an embedded record.
pub use urlquery_macros::Queryable;
