use shapematch::{
    bounding_box, outline_centroid, Figure, Point, ShapeMatchError, Signature, SIGNATURE_LEN,
};

/// Regular polygon with `sides` vertices on a circle of radius `r`.
fn regular_polygon(cx: i32, cy: i32, r: f64, sides: usize) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / sides as f64;
            Point::new(
                cx + (r * angle.cos()).round() as i32,
                cy + (r * angle.sin()).round() as i32,
            )
        })
        .collect()
}

fn rectangle(x0: i32, y0: i32, w: i32, h: i32) -> Vec<Point> {
    vec![
        Point::new(x0, y0),
        Point::new(x0 + w, y0),
        Point::new(x0 + w, y0 + h),
        Point::new(x0, y0 + h),
    ]
}

#[test]
fn centroid_lies_within_bounding_box() {
    let outlines = [
        regular_polygon(50, 50, 30.0, 12),
        rectangle(5, 90, 40, 7),
        vec![Point::new(0, 0), Point::new(100, 2), Point::new(40, 60)],
    ];
    for outline in &outlines {
        let centroid = outline_centroid(outline).unwrap();
        let bbox = bounding_box(outline).unwrap();
        assert!(bbox.contains(centroid), "centroid {centroid:?} outside {bbox:?}");
    }
}

#[test]
fn signature_has_canonical_shape() {
    let figure = Figure::from_outline(regular_polygon(100, 100, 60.0, 48), "polygon").unwrap();
    let signature = figure.signature().unwrap();

    assert_eq!(signature.values().len(), SIGNATURE_LEN);
    for value in signature.values() {
        assert!((0.0..=1.0).contains(value), "value {value} out of range");
    }
    assert!(signature.values().iter().any(|value| *value == 1.0));
}

#[test]
fn signature_is_deterministic() {
    let outline = regular_polygon(30, 40, 25.0, 17);
    let a = Figure::from_outline(outline.clone(), "a").unwrap();
    let b = Figure::from_outline(outline, "b").unwrap();
    assert_eq!(
        a.signature().unwrap().values(),
        b.signature().unwrap().values()
    );
}

#[test]
fn repeated_access_returns_the_cached_signature() {
    let figure = Figure::from_outline(regular_polygon(0, 0, 20.0, 9), "nonagon").unwrap();
    let first = figure.signature().unwrap().values().to_vec();
    let second = figure.signature().unwrap().values().to_vec();
    assert_eq!(first, second);
}

#[test]
fn supplied_signature_wins_over_recomputation() {
    // A sawtooth no circular outline would produce; reconstruction must hand
    // it back untouched.
    let values: Vec<f64> = (0..SIGNATURE_LEN)
        .map(|i| if i % 2 == 0 { 1.0 } else { 0.25 })
        .collect();
    let signature = Signature::from_values(values.clone()).unwrap();
    let figure = Figure::from_signature(signature, "sawtooth", Point::new(200, 200));

    assert_eq!(figure.signature().unwrap().values(), values.as_slice());
    assert_eq!(figure.outline().len(), SIGNATURE_LEN);
    assert_eq!(figure.centroid(), Point::new(200, 200));
}

#[test]
fn reconstructed_outline_surrounds_the_centroid() {
    let signature = Signature::from_values(vec![1.0; SIGNATURE_LEN]).unwrap();
    let figure = Figure::from_signature(signature, "ring", Point::new(500, 500));
    let bbox = bounding_box(figure.outline()).unwrap();
    assert!(bbox.contains(figure.centroid()));
    assert!(bbox.max_x > 500 && bbox.min_x < 500);
    assert!(bbox.max_y > 500 && bbox.min_y < 500);
}

#[test]
fn zero_area_outline_is_rejected() {
    let collinear = vec![Point::new(0, 0), Point::new(10, 10), Point::new(20, 20)];
    let err = Figure::from_outline(collinear, "line").err().unwrap();
    assert_eq!(err, ShapeMatchError::DegenerateOutline);
}

#[test]
fn short_outline_is_rejected() {
    let err = Figure::from_outline(vec![Point::new(0, 0)], "dot").err().unwrap();
    assert_eq!(err, ShapeMatchError::OutlineTooShort { len: 1 });
}
