use super::*;
use crate::helpers::p;

#[test]
fn can_create_closed_ring() {
    let center = p(20., 78.);

    let ring = create_circle(&center, 1., 32);

    assert_eq!(ring.len(), 33);
    assert_eq!(ring.first(), ring.last());
}

#[test]
fn can_keep_all_vertices_on_radius() {
    let center = p(52.52, 13.405);

    let ring = create_circle(&center, 2.5, 16);

    ring.iter().for_each(|vertex| {
        let distance = center.distance_to_point(vertex);
        assert!((distance - 2.5).abs() < 1E-6, "unexpected distance: {distance}");
    });
}

#[test]
fn can_start_ring_at_north() {
    let center = p(0., 0.);

    let ring = create_circle(&center, 1., 4);

    assert!(ring[0].lat > 0.);
    assert!(ring[1].lng > 0.);
    assert!(ring[2].lat < 0.);
    assert!(ring[3].lng < 0.);
}

#[test]
#[should_panic]
fn cannot_create_circle_with_less_than_three_segments() {
    create_circle(&p(0., 0.), 1., 2);
}
