mod endianness;
mod error;
mod signatures;

pub use endianness::LittleEndianU32;
pub use error::Error;
pub use signatures::Signature;
