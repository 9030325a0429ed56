//! Data model of a vector file.
//!
//! ```toml
//! [[vector]]
//! name = "toy-p17"
//! input = { p = 17, a = 2, b = 2, generator_x = 5, generator_y = 1, private_a = 3, private_b = 5, message = 5 }
//!
//! [vector.expect]
//! public_a = "(10,6)"
//! ciphertext = "{(5,16),(10,6)}"
//! ```
//!
//! Points are written the way they are displayed, `(x,y)` or `O`. Only the
//! fields present under `expect` are checked.

use serde::{Deserialize, Serialize};
use toycurve_pke::ExchangeInput;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VectorFile {
    #[serde(rename = "vector")]
    pub vectors: Vec<ExchangeVector>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExchangeVector {
    pub name: String,
    pub input: ExchangeInput,
    pub expect: Expected,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Expected {
    pub point_count: Option<usize>,
    pub public_a: Option<String>,
    pub public_b: Option<String>,
    pub shared: Option<String>,
    pub bound: Option<i64>,
    pub slots: Option<i64>,
    pub encoded: Option<String>,
    pub ciphertext: Option<String>,
    /// Substring of the error message when the exchange must fail
    pub error: Option<String>,
}
