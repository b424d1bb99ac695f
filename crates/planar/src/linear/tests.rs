use super::*;
use crate::error::PlanarError;
use crate::points::Point;
use crate::scalar::{Dimensions, Slice};

#[test]
fn vector_operators() {
    assert_eq!(Vector::new(1, 1), Vector::new(1, 1));
    assert_ne!(Vector::new(1, 1), Vector::new(2, 2));

    assert!(Vector::new(1, 1) < Vector::new(2, 2));
    assert!(Vector::new(1, 3) < Vector::new(2, 2));
    assert!(Vector::new(2, 1) < Vector::new(2, 2));
    assert!(!(Vector::new(2, 2) < Vector::new(2, 2)));

    assert_eq!(Vector::new(1, 1) + Vector::new(1, 1), Vector::new(2, 2));
    assert_eq!(Vector::new(1, 1) - Vector::new(1, 1), Vector::new(0, 0));
    assert_eq!(Vector::new(1, 1) * 2, Vector::new(2, 2));
    assert_eq!(Vector::new(2, 2) / 2, Vector::new(1, 1));
}

#[test]
fn vector_display() {
    assert_eq!(Vector::new(1, 1).to_string(), "{x: 1, y: 1}");
    assert_eq!(Vector::new(1.0, 0.5).to_string(), "{x: 1, y: 0.5}");
}

#[test]
fn vector_magnitude() {
    assert_eq!(Vector::new(3, 4).magnitude(), 5.0);
}

#[test]
fn vector_nalgebra_round_trip() {
    let v: nalgebra::Vector2<f64> = Vector::new(1.5, -2.0).into();
    assert_eq!(v, nalgebra::Vector2::new(1.5, -2.0));
    assert_eq!(Vector::from(v), Vector::new(1.5, -2.0));
}

#[test]
fn matrix_from_flat_chunks_rows() {
    let flat: Vec<i32> = (0..6).collect();
    assert_eq!(
        Matrix::from_flat(flat.clone(), 2).unwrap(),
        Matrix::new(vec![vec![0, 1], vec![2, 3], vec![4, 5]]).unwrap()
    );
    assert_eq!(
        Matrix::from_flat(flat, 3).unwrap(),
        Matrix::new(vec![vec![0, 1, 2], vec![3, 4, 5]]).unwrap()
    );
}

#[test]
fn matrix_from_flat_rejects_partial_rows() {
    assert_eq!(
        Matrix::from_flat(vec![1, 2, 3], 2),
        Err(PlanarError::ChunkMismatch { len: 3, width: 2 })
    );
    assert!(Matrix::from_flat(vec![1], 0).is_err());
    assert!(Matrix::<i32>::from_flat(Vec::new(), 0).unwrap().is_empty());
}

#[test]
fn matrix_rejects_ragged_rows() {
    assert_eq!(
        Matrix::new(vec![vec![1, 2], vec![3]]),
        Err(PlanarError::RaggedRows {
            row: 1,
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn matrix_size() {
    assert_eq!(Matrix::<i32>::default().size(), Dimensions::new(0, 0));
    assert_eq!(
        Matrix::new(vec![vec![0, 0]]).unwrap().size(),
        Dimensions::new(1, 2)
    );
    assert_eq!(
        Matrix::new(vec![vec![0, 0], vec![0, 0]]).unwrap().size(),
        Dimensions::new(2, 2)
    );
}

#[test]
fn matrix_clear_empties() {
    let mut grid = Matrix::new(vec![vec![1, 2]]).unwrap();
    assert!(!grid.is_empty());
    grid.clear();
    assert!(grid.is_empty());
    assert_eq!(grid.size(), Dimensions::new(0, 0));
}

#[test]
fn matrix_zero_width_rows_are_the_empty_matrix() {
    let grid = Matrix::<i32>::new(vec![vec![], vec![]]).unwrap();
    assert_eq!(grid, Matrix::default());
    assert_eq!(grid.size(), Dimensions::new(0, 0));
    assert_eq!(Matrix::<i32>::new(Vec::new()).unwrap(), Matrix::default());
}

#[test]
fn matrix_get_uses_column_then_row() {
    let grid = Matrix::new(vec![vec![0, 1], vec![2, 3]]).unwrap();
    assert_eq!(grid.get(Point::new(0, 0)), Some(&0));
    assert_eq!(grid.get(Point::new(1, 0)), Some(&1));
    assert_eq!(grid.get(Point::new(0, 1)), Some(&2));
    assert_eq!(grid.get(Point::new(1, 1)), Some(&3));
    assert_eq!(grid.get(Point::new(2, 0)), None);
}

#[test]
fn matrix_slice() {
    let grid = Matrix::new(vec![
        vec![0, 0, 0, 0],
        vec![0, 1, 1, 1],
        vec![0, 1, 1, 1],
        vec![0, 0, 0, 0],
    ])
    .unwrap();

    assert_eq!(
        grid.slice(Slice::new(0, 2), Slice::new(0, 2)).unwrap(),
        Matrix::new(vec![vec![0, 0], vec![0, 1]]).unwrap()
    );
    assert_eq!(
        grid.slice(Slice::new(0, 3), Slice::new(0, 2)).unwrap(),
        Matrix::new(vec![vec![0, 0], vec![0, 1], vec![0, 1]]).unwrap()
    );
    assert_eq!(
        grid.slice(Slice::new(0, 2), Slice::new(0, 3)).unwrap(),
        Matrix::new(vec![vec![0, 0, 0], vec![0, 1, 1]]).unwrap()
    );
    assert_eq!(
        grid.slice(Slice::new(1, 3), Slice::new(1, 4)).unwrap(),
        Matrix::new(vec![vec![1, 1, 1], vec![1, 1, 1]]).unwrap()
    );
}

#[test]
fn matrix_slice_out_of_range() {
    let grid = Matrix::new(vec![vec![0, 1], vec![2, 3]]).unwrap();
    assert!(matches!(
        grid.slice(Slice::new(0, 3), Slice::new(0, 1)),
        Err(PlanarError::SliceOutOfRange { axis: "rows", .. })
    ));
    assert!(matches!(
        grid.slice(Slice::new(0, 1), Slice::new(2, 1)),
        Err(PlanarError::SliceOutOfRange { axis: "cols", .. })
    ));
}

#[test]
fn matrix_sum() {
    let grid = Matrix::new(vec![vec![0, 1, 2, 3]; 4]).unwrap();
    assert_eq!(grid.sum(), 24);
    assert_eq!(Matrix::<i32>::default().sum(), 0);
}

#[test]
fn matrix_serializes_as_rows() {
    let grid = Matrix::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let json = serde_json::to_string(&grid).unwrap();
    assert_eq!(json, "[[1,2],[3,4]]");
    let back: Matrix<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, grid);
    assert!(serde_json::from_str::<Matrix<i32>>("[[1,2],[3]]").is_err());
}
