// ADIF Multitool Library
// Log model, specification registry, codecs and commands used by adifmt

pub mod adif;
pub mod cmd;
pub mod codec;
pub mod compare;
pub mod error;
pub mod spec;
pub mod validate;

pub use error::{Error, Result};
