// SPDX-License-Identifier: GPL-3.0-or-later
use std::f64::consts::FRAC_PI_2;

use vellum::{Matrix, Status};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_identity_leaves_points_alone() {
    let matrix = Matrix::identity();
    assert_eq!(matrix.transform_point(2.0, 3.0), (2.0, 3.0));
}

#[test]
fn test_translation_moves_points_not_distances() {
    let matrix = Matrix::translation(10.0, -2.0);
    assert_eq!(matrix.transform_point(1.0, 1.0), (11.0, -1.0));
    assert_eq!(matrix.transform_distance(1.0, 1.0), (1.0, 1.0));
}

#[test]
fn test_scaling() {
    let matrix = Matrix::scaling(2.0, 3.0);
    assert_eq!(matrix.transform_point(4.0, 4.0), (8.0, 12.0));
    assert_eq!(matrix.transform_distance(1.0, 1.0), (2.0, 3.0));
}

#[test]
fn test_rotation() {
    let matrix = Matrix::rotation(FRAC_PI_2);
    let (x, y) = matrix.transform_point(1.0, 0.0);
    assert!(close(x, 0.0));
    assert!(close(y, 1.0));
}

#[test]
fn test_invert_roundtrip() {
    let mut matrix = Matrix::scaling(2.0, 4.0);
    matrix.translate(1.0, 1.0);
    let point = matrix.transform_point(3.0, 5.0);
    matrix.invert().unwrap();
    let (x, y) = matrix.transform_point(point.0, point.1);
    assert!(close(x, 3.0));
    assert!(close(y, 5.0));
}

#[test]
fn test_singular_matrix_does_not_invert() {
    let mut matrix = Matrix::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    let err = matrix.invert().unwrap_err();
    assert_eq!(err.status(), Status::InvalidMatrix);
}

#[test]
fn test_multiply_applies_left_then_right() {
    let scale = Matrix::scaling(2.0, 2.0);
    let translate = Matrix::translation(10.0, 0.0);
    let combined = Matrix::multiply(&scale, &translate);
    assert_eq!(combined.transform_point(1.0, 1.0), (12.0, 2.0));
}
