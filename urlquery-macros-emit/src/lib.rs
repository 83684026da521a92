#![doc = include_str!("../README.md")]

mod attributes;
pub use attributes::*;

mod process_struct;

mod derive;
pub use derive::*;
