use super::*;

fn canvas(w: f64, h: f64) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn compact_grid_uses_floor_division() {
    let l = Layout::Compact.lattice(canvas(50.0, 50.0), 0.5).unwrap();
    assert_eq!(l.lines, (50.0 / (0.5 * 3f64.sqrt())).floor() as usize);
    assert_eq!(l.lines, 57);
    assert_eq!(l.cols, 100);
    assert_eq!(l.len(), 5700);
    assert_eq!(l.col_step(), 1.0);
}

#[test]
fn squared_grid_uses_floor_division() {
    let l = Layout::Squared.lattice(canvas(50.0, 50.0), 0.5).unwrap();
    assert_eq!(l.lines, 70);
    assert_eq!(l.cols, 70);
    assert_eq!(l.overlay, 2.0);
    assert_eq!(l.row_offset, 0.5 * SQRT_2);
}

#[test]
fn each_layout_emits_lines_times_cols() {
    for layout in Layout::ALL {
        for (w, h, r) in [(50.0, 50.0, 0.5), (300.0, 300.0, 3.0), (17.0, 9.0, 1.25)] {
            let l = layout.lattice(canvas(w, h), r).unwrap();
            let circles = l.circles(Ease::Linear).unwrap();
            assert_eq!(circles.len(), l.lines * l.cols, "{layout:?} {w}x{h} r={r}");
        }
    }
}

#[test]
fn compact_offsets_even_rows_and_stacks_by_line_height() {
    let l = Layout::Compact.lattice(canvas(10.0, 10.0), 1.0).unwrap();
    let circles = l.circles(Ease::Linear).unwrap();
    assert_eq!(l.cols, 10);

    assert_eq!(circles[0].center, Point::new(1.0, 0.0));
    assert_eq!(circles[1].center, Point::new(3.0, 0.0));
    assert_eq!(circles[10].center, Point::new(0.0, 3f64.sqrt()));
    assert_eq!(circles[20].center.x, 1.0);
}

#[test]
fn squared_places_cells_on_diagonal() {
    let l = Layout::Squared.lattice(canvas(10.0, 10.0), 1.0).unwrap();
    let circles = l.circles(Ease::Linear).unwrap();
    assert_eq!(circles[0].center, Point::new(SQRT_2, 0.0));
    assert_eq!(circles[1].center.x, 1.0 * SQRT_2 * 2.0 + SQRT_2);
    assert_eq!(circles[l.cols].center, Point::new(0.0, SQRT_2));
}

#[test]
fn radius_grows_down_the_canvas_and_is_constant_per_row() {
    let l = Layout::Compact.lattice(canvas(20.0, 20.0), 1.0).unwrap();
    let circles = l.circles(Ease::Linear).unwrap();

    assert_eq!(circles[0].radius, 0.0);
    let mut prev = -1.0;
    for row in circles.chunks(l.cols) {
        assert!(row.iter().all(|c| c.radius == row[0].radius));
        assert!(row[0].radius > prev);
        prev = row[0].radius;
    }
}

#[test]
fn row_radius_matches_progress_formula() {
    let l = Layout::Compact.lattice(canvas(50.0, 50.0), 0.5).unwrap();
    let y = 40;
    let progress = 0.5 * (y as f64 / 57.0);
    let expected = progress * Ease::InQuad.apply(progress / 0.5) * 1.3;
    assert_eq!(l.row_radius(y, Ease::InQuad), expected);
}

#[test]
fn radii_are_finite_and_non_negative_for_every_curve() {
    for layout in Layout::ALL {
        for ease in Ease::ALL {
            let circles = layout.circles(canvas(40.0, 30.0), 0.75, ease).unwrap();
            assert!(!circles.is_empty());
            for c in &circles {
                assert!(c.radius.is_finite() && c.radius >= 0.0, "{layout:?} {ease}");
            }
        }
    }
}

#[test]
fn canvas_shorter_than_one_row_is_rejected() {
    let err = Layout::Compact.lattice(canvas(50.0, 0.8), 0.5).unwrap_err();
    assert!(matches!(err, HalftoneError::Validation(_)));

    let err = Layout::Squared.lattice(canvas(50.0, 0.7), 0.5).unwrap_err();
    assert!(matches!(err, HalftoneError::Validation(_)));
}

#[test]
fn canvas_narrower_than_one_column_is_rejected() {
    let err = Layout::Compact.circles(canvas(0.4, 50.0), 0.5, Ease::Linear);
    assert!(matches!(err, Err(HalftoneError::Validation(_))));
}

#[test]
fn bad_radius_is_rejected() {
    for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(Layout::Compact.lattice(canvas(10.0, 10.0), r).is_err());
    }
}

#[test]
fn oversized_lattice_is_rejected_instead_of_overflowing() {
    for layout in Layout::ALL {
        let err = layout.lattice(canvas(1e10, 1e10), 1e-5).unwrap_err();
        assert!(matches!(err, HalftoneError::Validation(_)), "{layout:?}");
        assert!(err.to_string().contains("exceeds the limit"), "{err}");
    }
}

#[test]
fn lattice_at_the_dot_limit_is_accepted() {
    // One row (height below two compact rows), MAX_CIRCLES columns at r = 1.
    let l = Layout::Compact
        .lattice(canvas(MAX_CIRCLES as f64, 2.0), 1.0)
        .unwrap();
    assert_eq!(l.lines, 1);
    assert_eq!(l.len(), MAX_CIRCLES);

    let err = Layout::Compact.lattice(canvas(MAX_CIRCLES as f64 + 1.0, 2.0), 1.0);
    assert!(matches!(err, Err(HalftoneError::Validation(_))));
}

#[test]
fn len_saturates_for_hand_built_lattices() {
    let mut l = Layout::Compact.lattice(canvas(10.0, 10.0), 1.0).unwrap();
    l.lines = usize::MAX;
    l.cols = 2;
    assert_eq!(l.len(), usize::MAX);
}

#[test]
fn negative_radius_is_an_evaluation_error() {
    let mut l = Layout::Compact.lattice(canvas(10.0, 10.0), 1.0).unwrap();
    l.overlay = -1.0;
    let err = l.circles(Ease::Linear).unwrap_err();
    assert!(matches!(err, HalftoneError::Evaluation(_)));
    assert!(err.to_string().contains("row 1"), "{err}");
}
