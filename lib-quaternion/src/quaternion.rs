use alloc::vec::Vec;
use core::{fmt, ops::{Add, Mul}};
use crate::*;

/// Quaternion `w + xi + yj + zk`. Every operation returns a new value and nothing is ever
/// normalized implicitly, so the magnitude is whatever the caller built.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion
{
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<[f64; 4]> for Quaternion {
    fn from(values: [f64; 4]) -> Self {
        Self {
            w: values[0],
            x: values[1],
            y: values[2],
            z: values[3],
        }
    }
}

impl TryFrom<&[f64]> for Quaternion {
    type Error = QuaternionError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match *values {
            [w, x, y, z] => Ok(Quaternion { w, x, y, z }),
            _ => {
                log::debug!("Rejected sequence of {} elements as quaternion", values.len());
                Err(QuaternionError::InvalidArgument { found: values.len() })
            }
        }
    }
}

impl From<&Quaternion> for Quaternion {
    fn from(other: &Quaternion) -> Self {
        *other
    }
}

impl Quaternion
{
    /// Create a new quaternion with the given values.
    ///
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Quaternion { w, x, y, z }
    }

    /// Returns the identity quaternion (no rotation)
    ///
    pub const fn identity() -> Self {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Constructs a quaternion from a scalar (w) and a vector (x, y, z)
    ///
    pub fn from_parts(w: f64, vector: Vector) -> Self {
        Quaternion {
            w,
            x: vector.x,
            y: vector.y,
            z: vector.z,
        }
    }

    #[inline]
    pub fn scalar(&self) -> f64 {
        self.w
    }

    #[inline]
    pub fn vector(&self) -> Vector {
        Vector::new(self.x, self.y, self.z)
    }

    /// Euclidean norm of all four components, zero for the zero quaternion.
    ///
    #[inline]
    pub fn norm(&self) -> f64 {
        libm::sqrt(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Compute the conjugate of the quaternion.
    ///
    pub fn conjugate(&self) -> Self {
        Quaternion::from_parts(self.w, -self.vector())
    }

    /// Hamilton product `self * other`. Not commutative.
    ///
    pub fn multiply(&self, other: &Quaternion) -> Quaternion {
        let (a, b) = (self.vector(), other.vector());
        Quaternion::from_parts(
            self.w * other.w - a.dot(&b),
            a.cross(&b) + b * self.w + a * other.w,
        )
    }

    /// Componentwise sum with a sequence that should hold `[w, x, y, z]`.
    ///
    pub fn try_add(&self, other: &[f64]) -> Result<Quaternion, QuaternionError> {
        Ok(*self + Quaternion::try_from(other)?)
    }

    /// Rotates the vector with `q * v * q^-1`, where `v` is the vector as a pure quaternion.
    ///
    /// Only a unit quaternion gives a pure rotation. Any other magnitude also scales the vector
    /// by the squared norm, which is accepted rather than corrected.
    ///
    pub fn rotate(&self, vector: &Vector) -> Vector {
        let vector_quat = Quaternion::from_parts(0.0, *vector);
        let rotated_quat = self * vector_quat * self.conjugate();

        // The scalar part is only ~0 due to rounding, so it is dropped rather than checked.
        rotated_quat.vector()
    }

    /// Rotate every vector in order.
    ///
    pub fn rotate_all(&self, vectors: &[Vector]) -> Vec<Vector> {
        log::trace!("Rotating {} vectors by {}", vectors.len(), self);
        vectors.iter().map(|v| self.rotate(v)).collect()
    }

    /// Approximate equality check with a given tolerance.
    ///
    pub fn approx_eq(&self, other: &Quaternion, tol: f64) -> bool {
        libm::fabs(self.x - other.x) <= tol
            && libm::fabs(self.y - other.y) <= tol
            && libm::fabs(self.z - other.z) <= tol
            && libm::fabs(self.w - other.w) <= tol
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Quaternion({:.4}, {:.4}, {:.4}, {:.4})", self.w, self.x, self.y, self.z)
    }
}

impl Mul<Quaternion> for &Quaternion {
    type Output = Quaternion;
    fn mul(self, other: Quaternion) -> Self::Output {
        self.multiply(&other)
    }
}
impl Mul<&Quaternion> for &Quaternion {
    type Output = Quaternion;
    fn mul(self, other: &Quaternion) -> Self::Output {
        self.multiply(other)
    }
}
impl Mul<Quaternion> for Quaternion {
    type Output = Quaternion;
    fn mul(self, other: Quaternion) -> Self::Output {
        self.multiply(&other)
    }
}
impl Mul<&Quaternion> for Quaternion {
    type Output = Quaternion;
    fn mul(self, other: &Quaternion) -> Self::Output {
        self.multiply(other)
    }
}

impl Mul<f64> for Quaternion
{
    type Output = Self;

    fn mul(self, other: f64) -> Self::Output {
        Quaternion {
            w: self.w * other,
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
        }
    }
}

impl Add for Quaternion
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Quaternion {
            w: self.w + other.w,
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Add<[f64; 4]> for Quaternion
{
    type Output = Self;

    fn add(self, other: [f64; 4]) -> Self::Output {
        self + Quaternion::from(other)
    }
}

/// Rotates one vector by the given quaternion, see [`Quaternion::rotate`].
///
pub fn rotate_vector(quaternion: &Quaternion, vector: &Vector) -> Vector {
    quaternion.rotate(vector)
}

/// Builds a single rotation from roll, pitch and yaw (degrees) and applies it to every vector.
///
pub fn rotate_vectors_by_euler(roll: f64, pitch: f64, yaw: f64, vectors: &[Vector]) -> Vec<Vector> {
    euler_to_quaternion(roll, pitch, yaw).rotate_all(vectors)
}
