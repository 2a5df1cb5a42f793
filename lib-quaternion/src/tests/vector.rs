use crate::*;

#[test]
fn test_cross_product_orthogonal_vectors() {
    let v1 = Vector { x: 1.0, y: 0.0, z: 0.0 };
    let v2 = Vector { x: 0.0, y: 1.0, z: 0.0 };
    let result = v1.cross(&v2);
    let expected = Vector { x: 0.0, y: 0.0, z: 1.0 };
    assert!(result.approx_eq(&expected, 1e-12));
}

#[test]
fn test_cross_product_parallel_vectors() {
    let v1 = Vector { x: 1.0, y: 2.0, z: 3.0 };
    let v2 = v1 * 2.0;
    let result = v1.cross(&v2);
    assert!(result.approx_eq(&Vector::zero(), 1e-12));
}

#[test]
fn test_dot_and_magnitude() {
    let v1 = Vector::new(3.0, -3.0, 1.0);
    let v2 = Vector::new(4.0, 9.0, 2.0);
    assert_eq!(v1.dot(&v2), -13.0);
    assert_eq!(Vector::new(2.0, 3.0, 6.0).magnitude(), 7.0);
    assert_eq!(Vector::zero().magnitude(), 0.0);
}

#[test]
fn test_array_conversions() {
    let v = Vector::from([1.5, -2.0, 0.25]);
    assert_eq!(v, Vector::new(1.5, -2.0, 0.25));
    assert_eq!(<[f64; 3]>::from(v), [1.5, -2.0, 0.25]);
    assert_eq!(-v + v, Vector::zero());
}
