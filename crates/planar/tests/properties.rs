//! Property tests for the planar value types.

use planar::prelude::*;
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -100.0f64..100.0
}

fn extent() -> impl Strategy<Value = f64> {
    0.0f64..100.0
}

fn bounds() -> impl Strategy<Value = Bounds> {
    (coord(), coord(), extent(), extent()).prop_map(|(x, y, w, h)| Bounds::new(x, y, w, h))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn size_arithmetic_never_goes_negative(
        w1 in -50i32..50, h1 in -50i32..50, w2 in -50i32..50, h2 in -50i32..50, k in -5i32..5
    ) {
        let a = Size::new(w1, h1);
        let b = Size::new(w2, h2);
        for s in [a + b, a - b, a * k, a.transpose(), a.scale_xy(b)] {
            prop_assert!(s.width() >= 0 && s.height() >= 0);
        }
    }

    #[test]
    fn enclose_contains_every_point(pts in prop::collection::vec((coord(), coord()), 1..40)) {
        let points: Vec<Point<f64>> = pts.iter().map(|&(x, y)| Point::new(x, y)).collect();
        let hull = Bounds::enclose(&points).unwrap();
        for p in &points {
            prop_assert!(hull.contains(*p));
        }
    }

    #[test]
    fn vector_order_matches_tuple_order(a in (-9i32..9, -9i32..9), b in (-9i32..9, -9i32..9)) {
        let (va, vb) = (Vector::new(a.0, a.1), Vector::new(b.0, b.1));
        prop_assert_eq!(va.partial_cmp(&vb), a.partial_cmp(&b));
    }

    #[test]
    fn grid_cells_cover_bounds(area in bounds(), rows in 1usize..6, cols in 1usize..6) {
        let cells = area.grid(Dimensions::new(rows, cols), Size::default(), Size::default());
        prop_assert_eq!(cells.size(), Dimensions::new(rows, cols));
        let covered = Bounds::from_matrix(&cells).unwrap();
        prop_assert!(close(covered.point.x(), area.point.x()));
        prop_assert!(close(covered.point.y(), area.point.y()));
        prop_assert!(close(covered.size.width(), area.size.width()));
        prop_assert!(close(covered.size.height(), area.size.height()));
    }

    #[test]
    fn overlap_is_symmetric(a in bounds(), b in bounds()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn scale_about_keeps_origin_fixed(area in bounds(), k in 0.1f64..5.0) {
        let origin = area.point;
        let scaled = area.scale_about(k, origin);
        prop_assert!(close(scaled.point.x(), origin.x()));
        prop_assert!(close(scaled.point.y(), origin.y()));
        prop_assert!(close(scaled.size.width(), area.size.width() * k));
    }

    #[test]
    fn rotation_preserves_distance(x in coord(), y in coord(), theta in -6.3f64..6.3, flip in any::<bool>()) {
        let origin = Point::new(1.0, -2.0);
        let p = Point::new(x, y);
        let q = Transformation::new(flip, theta).apply(p, origin);
        let (d0, d1) = (p.distance(origin), q.distance(origin));
        prop_assert!((d0 - d1).abs() < 1e-9 * (1.0 + d0));
    }

    #[test]
    fn from_flat_chunks_evenly(rows in 1usize..8, cols in 1usize..8) {
        let flat: Vec<i64> = (0..(rows * cols) as i64).collect();
        let grid = Matrix::from_flat(flat, cols).unwrap();
        prop_assert_eq!(grid.size(), Dimensions::new(rows, cols));
        prop_assert_eq!(grid.get(Point::new(cols - 1, rows - 1)), Some(&((rows * cols) as i64 - 1)));
    }
}
