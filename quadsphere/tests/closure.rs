use quadsphere::closure::{closure_error, sweep};
use quadsphere::{ClosureConfig, ProjectionError};

#[test]
fn default_sweep_statistics() {
    let stats = sweep(&ClosureConfig::default()).unwrap();

    assert_eq!(stats.samples, 200 * 200);
    assert_eq!(stats.min, 0.0);
    assert!(stats.max < 2.4e-4, "max closure error {:e}", stats.max);
    assert!(
        stats.mean > 3.0e-5 && stats.mean < 5.5e-5,
        "mean closure error {:e}",
        stats.mean
    );
    assert!(
        stats.std_dev > 2.5e-5 && stats.std_dev < 5.0e-5,
        "std_dev {:e}",
        stats.std_dev
    );
}

#[test]
fn narrower_extent_stays_below_face_maximum() {
    let stats = sweep(&ClosureConfig::new(51, 0.5)).unwrap();
    assert_eq!(stats.samples, 51 * 51);
    assert!(stats.max < 2.4e-4);
    assert_eq!(closure_error(0.0, 0.0), 0.0);
}

#[test]
fn rejects_degenerate_grid() {
    assert!(matches!(
        sweep(&ClosureConfig::new(1, 1.0)),
        Err(ProjectionError::InvalidParameter { .. })
    ));
}
