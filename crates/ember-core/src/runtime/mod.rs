//! Runtime data shared between the compiler and the execution engine.

pub mod value;

pub use value::Value;
