#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
pub use error::*;

pub mod euler_angles;
pub use euler_angles::*;

pub mod vector;
pub use vector::*;

pub mod quaternion;
pub use quaternion::*;

#[cfg(test)]
mod tests;

pub const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;
