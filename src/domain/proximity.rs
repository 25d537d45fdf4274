use super::ambulance::{Ambulance, RankedAmbulance};
use super::geo::{distance_km, GeoPoint};

/// Ranks `candidates` by great-circle distance from `origin` and retains
/// those strictly closer than or at `radius_km`, nearest first.
///
/// The lower bound is strict: a candidate located exactly at the origin
/// (distance zero) is excluded. The sort is stable, so candidates at equal
/// distance keep their input order. A NaN distance never qualifies.
pub fn nearby(
    origin: GeoPoint,
    candidates: Vec<Ambulance>,
    radius_km: f64,
) -> Vec<RankedAmbulance> {
    let mut ranked: Vec<RankedAmbulance> = candidates
        .into_iter()
        .map(|ambulance| {
            let distance_km = distance_km(origin, ambulance.location);
            RankedAmbulance {
                ambulance,
                distance_km,
            }
        })
        .collect();

    ranked.sort_by(|left, right| left.distance_km.total_cmp(&right.distance_km));
    ranked.retain(|candidate| candidate.distance_km > 0.0 && candidate.distance_km <= radius_km);
    ranked
}
