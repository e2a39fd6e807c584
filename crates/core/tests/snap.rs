use assert_approx_eq::assert_approx_eq;
use hexsnap::{
    ApothemSource, Orientation, SnapConfig, SnapError, Snapper, WorldPosition,
};

fn snapper(config: SnapConfig) -> Snapper {
    Snapper::new(config).unwrap()
}

#[test]
fn test_snap_planar_only() {
    let snapper = snapper(SnapConfig::default());
    let snapped = snapper
        .snap(WorldPosition::new(2.1, 0.37, 0.2), 1.0)
        .unwrap();
    // Vertical snapping is off by default, so y is untouched
    assert_eq!(snapped, WorldPosition::new(2.0, 0.37, 0.0));
}

#[test]
fn test_snap_vertical_only() {
    let snapper = snapper(SnapConfig {
        planar_snap_enabled: false,
        vertical_snap_enabled: true,
        vertical_interval: 0.5,
        ..Default::default()
    });
    let snapped = snapper
        .snap(WorldPosition::new(2.1, 0.8, 0.2), 1.0)
        .unwrap();
    assert_eq!(snapped, WorldPosition::new(2.1, 1.0, 0.2));
    // Ties go away from zero
    let snapped = snapper
        .snap(WorldPosition::new(0.0, -0.25, 0.0), 1.0)
        .unwrap();
    assert_eq!(snapped.y, -0.5);
}

#[test]
fn test_snap_both() {
    let snapper = snapper(SnapConfig {
        orientation: Orientation::FlatTop,
        apothem_source: ApothemSource::Custom,
        custom_apothem: 1.0,
        vertical_snap_enabled: true,
        vertical_interval: 1.0,
        ..Default::default()
    });
    // Scale is ignored for the custom apothem source
    let snapped = snapper
        .snap(WorldPosition::new(0.3, 2.6, -1.7), 100.0)
        .unwrap();
    assert_approx_eq!(snapped.x, 0.0);
    assert_eq!(snapped.y, 3.0);
    assert_approx_eq!(snapped.z, -2.0);
}

#[test]
fn test_snap_from_scale() {
    let snapper = snapper(SnapConfig::default());
    // With an apothem of 2.5, neighbors along the x axis are 5 apart
    let snapped = snapper
        .snap(WorldPosition::new(6.0, 0.0, 1.0), 2.5)
        .unwrap();
    assert_eq!(snapped, WorldPosition::new(5.0, 0.0, 0.0));

    // Negative scale can't be used as a grid size
    assert_eq!(
        snapper.snap(WorldPosition::new(6.0, 0.0, 1.0), -2.5),
        Err(SnapError::InvalidGridSize(-2.5))
    );
}

#[test]
fn test_snap_is_stable() {
    // Snapping an already snapped position shouldn't move it, since the host
    // will call this every frame
    for orientation in &[Orientation::PointTop, Orientation::FlatTop] {
        let snapper = snapper(SnapConfig {
            orientation: *orientation,
            vertical_snap_enabled: true,
            ..Default::default()
        });
        for i in -10..=10 {
            let position =
                WorldPosition::new(i as f64 * 1.37, i as f64 * 0.6, i as f64);
            let once = snapper.snap(position, 1.0).unwrap();
            let twice = snapper.snap(once, 1.0).unwrap();
            assert_approx_eq!(once.x, twice.x, 1e-9);
            assert_approx_eq!(once.y, twice.y, 1e-9);
            assert_approx_eq!(once.z, twice.z, 1e-9);
        }
    }
}

#[test]
fn test_snap_non_finite() {
    let snapper = snapper(SnapConfig {
        vertical_snap_enabled: true,
        ..Default::default()
    });
    assert!(matches!(
        snapper.snap(WorldPosition::new(f64::NAN, 0.0, 0.0), 1.0),
        Err(SnapError::NonFiniteInput { axis: "x", .. })
    ));
    assert!(matches!(
        snapper.snap(WorldPosition::new(0.0, f64::INFINITY, 0.0), 1.0),
        Err(SnapError::NonFiniteInput { axis: "y", .. })
    ));
}

#[test]
fn test_snap_overflow() {
    // Finite input that can't be snapped without overflowing
    let vertical = snapper(SnapConfig {
        planar_snap_enabled: false,
        vertical_snap_enabled: true,
        vertical_interval: 0.0001,
        ..Default::default()
    });
    assert!(matches!(
        vertical.snap(WorldPosition::new(0.0, 1e305, 0.0), 1.0),
        Err(SnapError::NonFiniteInput { axis: "y", .. })
    ));

    let planar = snapper(SnapConfig {
        orientation: Orientation::FlatTop,
        ..Default::default()
    });
    assert!(matches!(
        planar.snap(WorldPosition::new(1e308, 0.0, 0.0), 1e-300),
        Err(SnapError::NonFiniteInput { .. })
    ));
}
