//! Constraint systems: narrow phase, contact arbiters, and joints.

pub mod arbiter;
pub mod collide;
pub mod joint;
