//! Distance ranking of facilities around a user coordinate.

use crate::facility::Facility;
use crate::geo::haversine_km;
use healthassist_types::Coordinate;

/// A facility paired with its distance from the user, when known.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedFacility {
    pub facility: Facility,
    pub distance_km: Option<f64>,
}

/// Order facilities by ascending distance from `origin`.
///
/// The sort is stable, so facilities at equal distance keep their fetch order. The input slice
/// is left untouched. Without an origin the fetch order is returned unchanged and no distances
/// are attached.
pub fn rank_by_distance(facilities: &[Facility], origin: Option<Coordinate>) -> Vec<RankedFacility> {
    let Some(origin) = origin else {
        return facilities
            .iter()
            .cloned()
            .map(|facility| RankedFacility {
                facility,
                distance_km: None,
            })
            .collect();
    };

    let mut ranked: Vec<RankedFacility> = facilities
        .iter()
        .cloned()
        .map(|facility| {
            let distance = haversine_km(origin, facility.coordinate());
            RankedFacility {
                facility,
                distance_km: Some(distance),
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        let a = a.distance_km.unwrap_or(f64::INFINITY);
        let b = b.distance_km.unwrap_or(f64::INFINITY);
        a.total_cmp(&b)
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::test_support::facility;

    fn ids(ranked: &[RankedFacility]) -> Vec<&str> {
        ranked.iter().map(|r| r.facility.id.as_str()).collect()
    }

    #[test]
    fn no_origin_preserves_fetch_order() {
        let fetched = vec![
            facility("best", 10.0, 10.0, 4.9),
            facility("good", 0.0, 0.1, 4.5),
            facility("ok", 0.0, 0.0, 3.0),
        ];

        let ranked = rank_by_distance(&fetched, None);
        assert_eq!(ids(&ranked), vec!["best", "good", "ok"]);
        assert!(ranked.iter().all(|r| r.distance_km.is_none()));
    }

    #[test]
    fn origin_sorts_ascending_without_touching_input() {
        let fetched = vec![
            facility("far", 0.0, 3.0, 4.9),
            facility("near", 0.0, 1.0, 4.5),
            facility("mid", 0.0, 2.0, 3.0),
        ];
        let origin = Coordinate {
            latitude: 0.0,
            longitude: 0.0,
        };

        let ranked = rank_by_distance(&fetched, Some(origin));
        assert_eq!(ids(&ranked), vec!["near", "mid", "far"]);
        assert_eq!(fetched[0].id, "far");

        let distances: Vec<f64> = ranked.iter().filter_map(|r| r.distance_km).collect();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        assert!(distances.iter().all(|d| *d >= 0.0));
        assert!((distances[0] - 111.19).abs() < 0.01);
    }

    #[test]
    fn equal_distances_keep_fetch_order() {
        let fetched = vec![
            facility("east", 0.0, 1.0, 4.9),
            facility("north", 1.0, 0.0, 4.0),
            facility("west", 0.0, -1.0, 3.0),
        ];
        let origin = Coordinate {
            latitude: 0.0,
            longitude: 0.0,
        };

        let ranked = rank_by_distance(&fetched, Some(origin));
        assert_eq!(ids(&ranked), vec!["east", "north", "west"]);
    }

    #[test]
    fn empty_list_stays_empty() {
        assert!(rank_by_distance(&[], None).is_empty());
    }
}
