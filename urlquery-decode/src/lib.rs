#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod values;
pub use values::Values;

mod tag;
pub use tag::{SKIP_SENTINEL, TagOptions, parse_tag};

mod convert;
pub use convert::{ParseBoolError, convert_str, parse_bool};

mod decode;
pub use decode::{decode, decode_slot};

mod error;
pub use error::{DecodeError, DecodeErrorKind};
