use super::*;

#[test]
fn can_create_seeded_params() {
    let params = ClusteringParams::seeded(2., 5).unwrap();

    assert_eq!(params.method(), &ClusteringMethod::Seeded { radius_km: 2. });
    assert_eq!(params.min_count(), 5);
}

#[test]
fn can_create_grid_params() {
    let params = ClusteringParams::grid(2, 1).unwrap();

    assert_eq!(params.method(), &ClusteringMethod::Grid { precision: 2 });
    assert_eq!(params.min_count(), 1);
}

#[test]
fn can_use_default_params() {
    let params = ClusteringParams::default();

    assert_eq!(params.method(), &ClusteringMethod::Seeded { radius_km: DEFAULT_RADIUS_KM });
    assert_eq!(params.min_count(), DEFAULT_MIN_COUNT);
}

#[test]
fn can_reject_invalid_radius() {
    for radius_km in [0., -1., Float::NAN, Float::INFINITY] {
        let result = ClusteringParams::seeded(radius_km, 5);

        assert!(result.is_err(), "radius: {radius_km}");
    }
}

#[test]
fn can_reject_zero_min_count() {
    let seeded = ClusteringParams::seeded(2., 0);
    let grid = ClusteringParams::grid(2, 0);

    assert_eq!(seeded.unwrap_err().to_string(), "min count should be at least 1, got: '0'");
    assert!(grid.is_err());
}

#[test]
fn can_reject_too_high_grid_precision() {
    assert!(ClusteringParams::grid(MAX_GRID_PRECISION, 5).is_ok());
    assert!(ClusteringParams::grid(MAX_GRID_PRECISION + 1, 5).is_err());
}
