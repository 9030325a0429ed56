//! Constants for Elliptic Curve Diffie-Hellman over toy curves
//!
//! Each curve is in short Weierstrass form y² = x³ + ax + b over 𝔽ₚ.

/// Domain parameters of a named curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveConstants {
    /// Human readable name
    pub name: &'static str,
    /// Prime modulus p
    pub p: i64,
    /// Coefficient a
    pub a: i64,
    /// Coefficient b
    pub b: i64,
    /// Base point x-coordinate
    pub g_x: i64,
    /// Base point y-coordinate
    pub g_y: i64,
    /// Number of points including the point at infinity
    pub order: i64,
}

/// y² = x³ + 2x + 2 over 𝔽₁₇, G = (5, 1), cyclic group of order 19
pub const TOY_P17: CurveConstants = CurveConstants {
    name: "toy-p17",
    p: 17,
    a: 2,
    b: 2,
    g_x: 5,
    g_y: 1,
    order: 19,
};

/// y² = x³ + x + 1 over 𝔽₂₃, G = (3, 10), 28 points
pub const TOY_P23: CurveConstants = CurveConstants {
    name: "toy-p23",
    p: 23,
    a: 1,
    b: 1,
    g_x: 3,
    g_y: 10,
    order: 28,
};

/// y² = x³ + 2x + 3 over 𝔽₉₇, G = (3, 6), 100 points
pub const TOY_P97: CurveConstants = CurveConstants {
    name: "toy-p97",
    p: 97,
    a: 2,
    b: 3,
    g_x: 3,
    g_y: 6,
    order: 100,
};

/// Every named curve, smallest first
pub const ALL_CURVES: [CurveConstants; 3] = [TOY_P17, TOY_P23, TOY_P97];
