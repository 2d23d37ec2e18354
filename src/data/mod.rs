//! Persistence formats for option records

pub mod codec;

pub use codec::{decode, encode, CodecError, RecordFormat};
