// src/numerics/types/point.rs
// Point3 names a position, Vector3 a displacement. Same storage.

use super::vector::Vector3;

/// Point3 is an alias to Vector3 to represent points in space.
pub type Point3<T = f64> = Vector3<T>;
