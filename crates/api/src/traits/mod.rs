//! Trait definitions for the protocols built on top of the curve arithmetic

pub mod agreement;
pub mod encryption;

pub use agreement::KeyAgreement;
pub use encryption::PointEncryption;
