use crate::*;

/// Orientation as a product of three rotations, applied yaw first, then pitch, then roll
/// (aerospace/ZYX convention). All angles are stored in radians.
///
/// Yaw = rotation around Z-axis
/// Roll = rotation around X-axis
/// Pitch = rotation around Y-axis
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerAngles
{
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl EulerAngles
{
    pub const fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        EulerAngles { yaw, pitch, roll }
    }

    /// Creates an all zeros euler angles instance, i.e. the identity/no rotation angles.
    ///
    pub const fn identity() -> Self {
        EulerAngles { yaw: 0.0, pitch: 0.0, roll: 0.0 }
    }

    /// Build from angles given in degrees. Note the argument order is roll, pitch, yaw, which
    /// differs from [`EulerAngles::new`].
    ///
    pub fn from_degrees(roll: f64, pitch: f64, yaw: f64) -> Self {
        EulerAngles::new(yaw * DEG_TO_RAD, pitch * DEG_TO_RAD, roll * DEG_TO_RAD)
    }
}

impl From<&EulerAngles> for Quaternion {
    /// The result is unit length by construction, it is not normalized afterwards.
    fn from(a: &EulerAngles) -> Self {
        let cy = libm::cos(a.yaw * 0.5);
        let sy = libm::sin(a.yaw * 0.5);
        let cp = libm::cos(a.pitch * 0.5);
        let sp = libm::sin(a.pitch * 0.5);
        let cr = libm::cos(a.roll * 0.5);
        let sr = libm::sin(a.roll * 0.5);

        Quaternion {
            w: cr * cp * cy + sr * sp * sy,
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
        }
    }
}

impl From<EulerAngles> for Quaternion {
    fn from(angles: EulerAngles) -> Self {
        Quaternion::from(&angles)
    }
}

/// Converts roll, pitch and yaw (in degrees) into a rotation quaternion.
///
pub fn euler_to_quaternion(roll: f64, pitch: f64, yaw: f64) -> Quaternion {
    Quaternion::from(EulerAngles::from_degrees(roll, pitch, yaw))
}
