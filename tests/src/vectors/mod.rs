//! Exchange scenarios with known outcomes, kept as TOML files under
//! `src/vectors/data`.

pub mod error;
pub mod loader;
pub mod model;
pub mod runner;

pub use error::{Result, VectorError};
pub use loader::{load_file, load_named};
pub use model::{Expected, ExchangeVector, VectorFile};
pub use runner::{check_vector, run_file};
