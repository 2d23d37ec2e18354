//! Value types making up a map option record

pub mod camera;
pub mod constants;
pub mod geo;
pub mod gravity;
pub mod image;
pub(crate) mod macros;
pub mod options;
