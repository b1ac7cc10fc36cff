#![doc=include_str!("../README.md")]

mod bank;
pub use bank::*;
mod float;
pub use float::*;
mod imm;
pub use imm::*;

/// The number of logical double-precision registers backed by the
/// [`RegisterBank`].
///
/// RV32D defines thirty-two floating point registers, `f0` through `f31`.
pub const FP_REGISTER_COUNT: usize = 32;

/// The number of 32-bit lanes in the [`RegisterBank`].
///
/// Each double-precision register occupies two lanes, so the bank carries
/// twice [`FP_REGISTER_COUNT`] lanes. Single-precision registers address
/// the same lanes one at a time.
pub const FP_LANE_COUNT: usize = FP_REGISTER_COUNT * 2;
