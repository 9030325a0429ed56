//! Constants for traditional (pre-quantum) curve protocols

pub mod ecdh;
