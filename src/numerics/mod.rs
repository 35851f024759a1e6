// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod vector;
    pub mod point;
    pub mod traits;
}

pub use types::point::Point3;
pub use types::traits::FloatingPoint;
pub use types::vector::{Vector3, FIXED_PRECISION};
