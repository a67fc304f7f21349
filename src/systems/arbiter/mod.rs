//! Arbiter - persistent contact constraint for one pair of bodies
//!
//! An arbiter lives as long as its pair keeps overlapping. Each step the
//! broad phase hands it freshly collided contacts; contacts whose feature id
//! survived keep their accumulated impulses (warm starting), the rest start
//! from zero.

mod contact;
mod key;

pub use contact::{Contact, MAX_CONTACTS};
pub use key::ArbiterKey;

use crate::core::math::{cross, cross_sv, cross_vs, Vec2};
use crate::domain::body::{pair_mut, Body};
use crate::domain::settings::SolverSettings;
use crate::systems::collide::collide;

#[derive(Clone, Debug)]
pub struct Arbiter {
    key: ArbiterKey,
    contacts: [Contact; MAX_CONTACTS],
    num_contacts: usize,
    /// Combined friction of the pair
    pub friction: f32,
}

impl Arbiter {
    /// Collide the two bodies named by `key`. The result may hold zero contacts.
    pub fn new(key: ArbiterKey, bodies: &[Body]) -> Self {
        let body1 = &bodies[key.body1().index()];
        let body2 = &bodies[key.body2().index()];

        let mut contacts = [Contact::default(); MAX_CONTACTS];
        let num_contacts = collide(&mut contacts, body1, body2);

        Self {
            key,
            contacts,
            num_contacts,
            friction: (body1.friction * body2.friction).sqrt(),
        }
    }

    #[inline]
    pub fn key(&self) -> ArbiterKey {
        self.key
    }

    #[inline]
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts[..self.num_contacts]
    }

    #[inline]
    pub fn num_contacts(&self) -> usize {
        self.num_contacts
    }

    /// Replace the manifold with `new_contacts`, carrying accumulated
    /// impulses over for every feature id that was already present.
    pub fn update(&mut self, new_contacts: &[Contact], settings: &SolverSettings) {
        debug_assert!(new_contacts.len() <= MAX_CONTACTS);

        let mut merged = [Contact::default(); MAX_CONTACTS];
        for (slot, c_new) in merged.iter_mut().zip(new_contacts) {
            *slot = *c_new;
            let previous = self.contacts().iter().find(|c_old| c_old.feature == c_new.feature);
            match previous {
                Some(c_old) if settings.warm_starting => slot.inherit_impulses(c_old),
                _ => slot.reset_impulses(),
            }
        }

        self.contacts = merged;
        self.num_contacts = new_contacts.len();
    }

    /// Compute effective masses and bias velocities, then apply the carried
    /// impulses when warm starting.
    pub fn pre_step(&mut self, bodies: &mut [Body], inv_dt: f32, settings: &SolverSettings) {
        let (b1, b2) = pair_mut(bodies, self.key.body1(), self.key.body2());
        let bias_factor = settings.contact_bias_factor();
        let warm_start = settings.accumulate_impulses && settings.warm_starting;

        for c in self.contacts[..self.num_contacts].iter_mut() {
            let r1 = c.position - b1.position;
            let r2 = c.position - b2.position;
            c.r1 = r1;
            c.r2 = r2;

            // Precompute normal mass, tangent mass, and bias.
            let rn1 = r1.dot(c.normal);
            let rn2 = r2.dot(c.normal);
            let k_normal = b1.inv_mass
                + b2.inv_mass
                + b1.inv_i * (r1.dot(r1) - rn1 * rn1)
                + b2.inv_i * (r2.dot(r2) - rn2 * rn2);
            c.mass_normal = 1.0 / k_normal;

            let tangent = cross_vs(c.normal, 1.0);
            let rt1 = r1.dot(tangent);
            let rt2 = r2.dot(tangent);
            let k_tangent = b1.inv_mass
                + b2.inv_mass
                + b1.inv_i * (r1.dot(r1) - rt1 * rt1)
                + b2.inv_i * (r2.dot(r2) - rt2 * rt2);
            c.mass_tangent = 1.0 / k_tangent;

            c.bias = -bias_factor * inv_dt * (c.separation + settings.allowed_penetration).min(0.0);

            if warm_start {
                let p = c.normal_impulse * c.normal + c.tangent_impulse * tangent;
                apply(b1, b2, r1, r2, p);
            }
        }
    }

    /// One sequential impulse pass over the manifold.
    pub fn apply_impulse(&mut self, bodies: &mut [Body], settings: &SolverSettings) {
        let (b1, b2) = pair_mut(bodies, self.key.body1(), self.key.body2());
        let friction = self.friction;

        for c in self.contacts[..self.num_contacts].iter_mut() {
            // Normal impulse
            let dv = relative_velocity(b1, b2, c.r1, c.r2);
            let vn = dv.dot(c.normal);
            let mut dpn = c.mass_normal * (-vn + c.bias);

            if settings.accumulate_impulses {
                // Clamp the accumulated impulse: contacts push, never pull.
                let pn0 = c.normal_impulse;
                c.normal_impulse = (pn0 + dpn).max(0.0);
                dpn = c.normal_impulse - pn0;
            } else {
                dpn = dpn.max(0.0);
            }

            apply(b1, b2, c.r1, c.r2, dpn * c.normal);

            // Friction impulse, against the velocity after the normal impulse
            let dv = relative_velocity(b1, b2, c.r1, c.r2);
            let tangent = cross_vs(c.normal, 1.0);
            let vt = dv.dot(tangent);
            let mut dpt = c.mass_tangent * (-vt);

            if settings.accumulate_impulses {
                let max_pt = friction * c.normal_impulse;
                let old_tangent_impulse = c.tangent_impulse;
                c.tangent_impulse = (old_tangent_impulse + dpt).clamp(-max_pt, max_pt);
                dpt = c.tangent_impulse - old_tangent_impulse;
            } else {
                let max_pt = friction * dpn;
                dpt = dpt.clamp(-max_pt, max_pt);
            }

            apply(b1, b2, c.r1, c.r2, dpt * tangent);
        }
    }
}

/// Velocity of body 2 relative to body 1 at the contact point.
#[inline]
fn relative_velocity(b1: &Body, b2: &Body, r1: Vec2, r2: Vec2) -> Vec2 {
    b2.velocity + cross_sv(b2.angular_velocity, r2) - b1.velocity - cross_sv(b1.angular_velocity, r1)
}

/// Apply `p` to body 2 and `-p` to body 1 at their lever arms.
#[inline]
pub(crate) fn apply(b1: &mut Body, b2: &mut Body, r1: Vec2, r2: Vec2, p: Vec2) {
    b1.velocity -= b1.inv_mass * p;
    b1.angular_velocity -= b1.inv_i * cross(r1, p);

    b2.velocity += b2.inv_mass * p;
    b2.angular_velocity += b2.inv_i * cross(r2, p);
}
