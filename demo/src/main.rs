use std::{env, process::ExitCode};
use math::{euler_to_quaternion, rotate_vectors_by_euler, Quaternion, Vector};

/// Orientation used when no angles are passed on the command line.
static DEFAULT_ANGLES: [f64; 3] = [30.0, 45.0, 60.0];

/// Reads `roll pitch yaw` in degrees from the command line, falling back to the defaults.
fn parse_angles(args: &[String]) -> Result<[f64; 3], String> {
    if args.is_empty() {
        return Ok(DEFAULT_ANGLES);
    }
    if args.len() != 3 {
        return Err(format!("Expected 3 angles (roll pitch yaw), got {}", args.len()));
    }

    let mut angles = [0.0; 3];
    for (angle, arg) in angles.iter_mut().zip(args) {
        *angle = arg.parse().map_err(|_| format!("Invalid angle: {}", arg))?;
    }
    Ok(angles)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let [roll, pitch, yaw] = match parse_angles(&args) {
        Ok(angles) => angles,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let q1 = Quaternion::identity();
    let q2 = Quaternion::from([0.707, 0.707, 0.0, 0.0]);
    let q3 = Quaternion::from(&q2);
    log::info!("q1: {}", q1);
    log::info!("q2: {}", q2);
    log::info!("q3 (copy of q2): {}", q3);

    log::info!("q1 * q2: {}", q1 * q2);
    log::info!("q1 + q2: {}", q1 + q2);
    log::info!("q2 * 2: {}", q2 * 2.0);
    log::info!("Conjugate of q1: {}", q1.conjugate());

    let euler_quat = euler_to_quaternion(roll, pitch, yaw);
    log::info!("Quaternion from Euler angles ({}, {}, {}): {}", roll, pitch, yaw, euler_quat);

    let vector = Vector::new(0.0, 1.0, 0.0);
    log::info!("Source vector: {:?}", <[f64; 3]>::from(vector));
    log::info!("Rotated vector: {:?}", <[f64; 3]>::from(euler_quat.rotate(&vector)));

    let axes = [
        Vector::new(1.0, 0.0, 0.0),
        Vector::new(0.0, 1.0, 0.0),
        Vector::new(0.0, 0.0, 1.0),
    ];
    for (i, rotated) in rotate_vectors_by_euler(roll, pitch, yaw, &axes).iter().enumerate() {
        log::info!("Rotated vector {}: {:?}", i + 1, <[f64; 3]>::from(*rotated));
    }

    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_default_angles() {
        assert_eq!(parse_angles(&[]), Ok(DEFAULT_ANGLES));
    }

    #[test]
    fn test_parse_angles() {
        assert_eq!(parse_angles(&args(&["10", "-20.5", "90"])), Ok([10.0, -20.5, 90.0]));
    }

    #[test]
    fn test_parse_angles_errors() {
        assert!(parse_angles(&args(&["10", "20"])).is_err());
        assert_eq!(
            parse_angles(&args(&["10", "abc", "30"])),
            Err("Invalid angle: abc".to_string())
        );
    }
}
