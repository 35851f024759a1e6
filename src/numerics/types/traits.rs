// src/numerics/types/traits.rs
// FloatingPoint bound shared by the vector types.

/// FloatingPoint is a minimal trait for the floating point types
/// accepted by the numerics types.
///
/// Note: We require Copy, PartialOrd, Display and the basic arithmetic ops
/// (including negation) on Self.
pub trait FloatingPoint:
Copy + PartialOrd + core::fmt::Debug + core::fmt::Display
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn one() -> Self;
}

impl FloatingPoint for f32 {
    fn one() -> Self { 1.0 }
}

impl FloatingPoint for f64 {
    fn one() -> Self { 1.0 }
}
