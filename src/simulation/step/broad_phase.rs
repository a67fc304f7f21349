use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::body::{Body, BodyId};
use crate::domain::settings::SolverSettings;
use crate::systems::arbiter::{Arbiter, ArbiterKey};

use super::WorldCore;

/// O(n^2) broad phase. Every unordered pair with at least one dynamic body
/// is collided; arbiters are created, updated, or dropped to match.
///
/// Returns the number of pairs tested.
pub(super) fn broad_phase(world: &mut WorldCore) -> u32 {
    let pairs = candidate_pairs(&world.bodies);
    let tested = pairs.len() as u32;

    #[cfg(feature = "parallel")]
    {
        // Narrow phase per pair is pure; merge serially in pair order so the
        // map ends up exactly as in the serial path.
        let bodies = &world.bodies;
        let fresh: Vec<Arbiter> = pairs.par_iter().map(|&key| Arbiter::new(key, bodies)).collect();
        for new_arb in fresh {
            merge(&mut world.arbiters, new_arb, &world.settings);
        }
    }

    #[cfg(not(feature = "parallel"))]
    {
        for key in pairs {
            let new_arb = Arbiter::new(key, &world.bodies);
            merge(&mut world.arbiters, new_arb, &world.settings);
        }
    }

    tested
}

/// All pairs `(i, j)` with `i < j`, skipping static-static pairs.
fn candidate_pairs(bodies: &[Body]) -> Vec<ArbiterKey> {
    let mut pairs = Vec::new();
    for (i, bi) in bodies.iter().enumerate() {
        for (j, bj) in bodies.iter().enumerate().skip(i + 1) {
            if bi.is_static() && bj.is_static() {
                continue;
            }
            pairs.push(ArbiterKey::new(BodyId(i as u32), BodyId(j as u32)));
        }
    }
    pairs
}

fn merge(arbiters: &mut BTreeMap<ArbiterKey, Arbiter>, new_arb: Arbiter, settings: &SolverSettings) {
    let key = new_arb.key();
    if new_arb.num_contacts() > 0 {
        match arbiters.entry(key) {
            Entry::Vacant(slot) => {
                log::debug!("arbiter created for {} / {}", key.body1(), key.body2());
                slot.insert(new_arb);
            }
            Entry::Occupied(mut slot) => {
                slot.get_mut().update(new_arb.contacts(), settings);
            }
        }
    } else if arbiters.remove(&key).is_some() {
        log::debug!("arbiter removed for {} / {}", key.body1(), key.body2());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vec2;

    #[test]
    fn candidate_pairs_skip_static_static() {
        let bodies = vec![
            Body::new_static(Vec2::new(1.0, 1.0)),
            Body::new_static(Vec2::new(1.0, 1.0)),
            Body::new(Vec2::new(1.0, 1.0), 1.0),
        ];
        let pairs = candidate_pairs(&bodies);
        assert_eq!(
            pairs,
            vec![
                ArbiterKey::new(BodyId(0), BodyId(2)),
                ArbiterKey::new(BodyId(1), BodyId(2)),
            ]
        );
    }
}
