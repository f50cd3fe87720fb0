//! Integration tests for matrix construction, dimension configs and JSON input.

use dense_matrix::{Fill, Matrix, MatrixConfig, MatrixError, MatrixInput};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ---------------------------------------------------------------------------
// Dimensions form
// ---------------------------------------------------------------------------

#[test]
fn dimensions_default_to_zero_fill() {
    let m = Matrix::<f64>::new(3, 2, Fill::default()).unwrap();
    assert_eq!(m.dimensions(), [3, 2]);
    assert!(m.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn dimensions_with_constant_fill() {
    let m = Matrix::new(3, 2, Fill::Constant(1.0)).unwrap();
    assert_eq!(m.dimensions(), [3, 2]);
    assert!(m.iter_rows().all(|row| row == [1.0, 1.0]));
}

#[test]
fn dimensions_with_random_fill() {
    let m: Matrix<f64> = Matrix::new(1, 2, Fill::random(StdRng::seed_from_u64(42))).unwrap();
    assert_eq!(m.dimensions(), [1, 2]);
    for &v in m.as_slice() {
        assert!(v > 0.0 && v < 1.0, "random fill out of range: {}", v);
        assert!(v.fract() != 0.0);
    }
    assert_ne!(m[(0, 0)], m[(0, 1)], "each cell should draw independently");
}

#[test]
fn generator_is_called_once_per_cell() {
    let mut next = 0;
    let m = Matrix::new(
        2,
        3,
        Fill::generator(|| {
            next += 1;
            next
        }),
    )
    .unwrap();
    assert_eq!(m.to_vec2(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert_eq!(next, 6);
}

#[test]
fn zero_dimensions_are_rejected() {
    assert_eq!(
        Matrix::<f64>::new(0, 2, Fill::Zero),
        Err(MatrixError::InvalidDimensions { rows: 0, cols: 2 })
    );
    assert!(Matrix::<f64>::filled(2, 0, 1.0).is_err());
}

// ---------------------------------------------------------------------------
// Values form
// ---------------------------------------------------------------------------

#[test]
fn values_form_copies_every_cell() {
    let m = Matrix::from_values(&[[5.0, 2.0, 1.0], [7.0, 4.0, 9.0]]).unwrap();
    assert_eq!(m.dimensions(), [2, 3]);
    assert_eq!(m[(0, 0)], 5.0);
    assert_eq!(m[(0, 1)], 2.0);
    assert_eq!(m[(0, 2)], 1.0);
    assert_eq!(m[(1, 0)], 7.0);
    assert_eq!(m[(1, 1)], 4.0);
    assert_eq!(m[(1, 2)], 9.0);
}

#[test]
fn values_form_rejects_irregular_rows() {
    let rows = vec![vec![1, 2], vec![3, 4, 5], vec![6, 7]];
    assert_eq!(
        Matrix::from_values(&rows),
        Err(MatrixError::ShapeMismatch {
            row: 1,
            expected: 2,
            found: 3
        })
    );
}

#[test]
fn every_row_has_cols_elements() {
    let m = Matrix::from_values(&[[1, 2, 3], [4, 5, 6], [7, 8, 9], [0, 0, 0]]).unwrap();
    assert_eq!(m.iter_rows().count(), m.rows());
    assert!(m.iter_rows().all(|row| row.len() == m.cols()));
    assert_eq!(m.dimensions(), [m.rows(), m.cols()]);
}

// ---------------------------------------------------------------------------
// Tagged input, configs and JSON
// ---------------------------------------------------------------------------

#[test]
fn tagged_input_dispatches_on_variant() {
    let from_values = Matrix::try_from(MatrixInput::Values(vec![vec![1, 2], vec![3, 4]])).unwrap();
    assert_eq!(from_values.to_vec2(), vec![vec![1, 2], vec![3, 4]]);

    let from_dims = Matrix::from_input(MatrixInput::Dimensions {
        rows: 2,
        cols: 1,
        fill: Fill::Constant(7),
    })
    .unwrap();
    assert_eq!(from_dims.to_vec2(), vec![vec![7], vec![7]]);
}

#[test]
fn negative_dimensions_are_rejected() {
    let err = Matrix::from_input(MatrixInput::Dimensions::<f64> {
        rows: 3,
        cols: -1,
        fill: Fill::Zero,
    })
    .unwrap_err();
    assert_eq!(err, MatrixError::InvalidDimensions { rows: 3, cols: -1 });
}

#[test]
fn config_builds_constant_matrix() {
    let m = Matrix::from_config(&MatrixConfig::new(2, 2).with_fill(0.5)).unwrap();
    assert!(m.as_slice().iter().all(|&v| v == 0.5));
}

#[test]
fn json_array_is_values_form() -> anyhow::Result<()> {
    let input = MatrixInput::<f64>::from_json("[[5, 2, 1], [7, 4, 9]]")?;
    let m = Matrix::from_input(input)?;
    assert_eq!(m.dimensions(), [2, 3]);
    assert_eq!(m[(1, 2)], 9.0);
    Ok(())
}

#[test]
fn json_object_is_dimensions_form() -> anyhow::Result<()> {
    let m = Matrix::from_input(MatrixInput::<f64>::from_json(
        r#"{"rows": 3, "columns": 2, "values": 1}"#,
    )?)?;
    assert_eq!(m.dimensions(), [3, 2]);
    assert!(m.as_slice().iter().all(|&v| v == 1.0));
    Ok(())
}

#[test]
fn json_ragged_rows_are_a_shape_mismatch() {
    let input = MatrixInput::<f64>::from_json("[[1, 2], [3]]").unwrap();
    assert!(matches!(
        Matrix::from_input(input),
        Err(MatrixError::ShapeMismatch { row: 1, .. })
    ));
}

#[test]
fn json_empty_object_has_invalid_dimensions() {
    let input = MatrixInput::<f64>::from_json("{}").unwrap();
    assert_eq!(
        Matrix::from_input(input),
        Err(MatrixError::InvalidDimensions { rows: 0, cols: 0 })
    );
}

#[test]
fn json_oversized_dimensions_are_rejected() -> anyhow::Result<()> {
    let input = MatrixInput::<f64>::from_json(r#"{"rows": 9223372036854775807, "cols": 4}"#)?;
    assert_eq!(
        Matrix::from_input(input),
        Err(MatrixError::InvalidDimensions {
            rows: i64::MAX,
            cols: 4
        })
    );
    Ok(())
}

#[test]
fn json_scalars_are_invalid_arguments() {
    for text in ["42", "\"matrix\"", "true", "null", "[1, 2, 3]", "not json"] {
        let result = MatrixInput::<f64>::from_json(text);
        assert!(
            matches!(result, Err(MatrixError::InvalidArgument(_))),
            "{} should be rejected",
            text
        );
    }
}

#[test]
fn errors_render_readable_messages() {
    let err = MatrixInput::<f64>::from_json("7").unwrap_err();
    assert!(err.to_string().starts_with("You must supply an object or an array"));

    let err = Matrix::<f64>::identity(0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Matrix dimensions must be positive (got 0 rows, 0 columns)"
    );
}
