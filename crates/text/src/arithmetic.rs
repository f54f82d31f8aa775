//! Fixed-width integer arithmetic.
//!
//! Results wrap on overflow (two's complement), in debug and release builds
//! alike.

pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}
