//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::PrimInt;

/// Increment `value` by `step`, wrapping around into the range `[0, size)`.
///
/// `value` is expected to already be in `[0, size)` and `size` must be
/// positive.
pub fn wrap_inc<T>(value: T, step: T, size: T) -> T
where
    T: PrimInt
{
    (value + step % size) % size
}

/// Decrement `value` by `step`, wrapping around into the range `[0, size)`.
///
/// Implemented as `(value + size - step) mod size` so that unsigned types
/// never underflow. `value` is expected to already be in `[0, size)` and
/// `size` must be positive.
pub fn wrap_dec<T>(value: T, step: T, size: T) -> T
where
    T: PrimInt
{
    (value + size - step % size) % size
}
