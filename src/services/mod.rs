// Service exports
pub mod decoder;

pub use decoder::{decode_rgb, DecodeError};
