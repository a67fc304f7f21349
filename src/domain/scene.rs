//! JSON scene description.
//!
//! ```json
//! {
//!   "gravity": { "x": 0.0, "y": -10.0 },
//!   "iterations": 10,
//!   "bodies": [
//!     { "width": { "x": 100.0, "y": 20.0 }, "position": { "x": 0.0, "y": -10.0 } },
//!     { "width": { "x": 1.0, "y": 1.0 }, "mass": 200.0, "position": { "x": 0.0, "y": 4.0 } }
//!   ],
//!   "joints": []
//! }
//! ```
//!
//! A body without `mass` is static. Joints name bodies by their index in
//! `bodies`.

use serde::{Deserialize, Serialize};

use crate::core::math::Vec2;
use crate::domain::body::Body;
use crate::domain::settings::SolverSettings;
use crate::error::{EngineError, EngineResult};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneDesc {
    #[serde(default = "default_gravity")]
    pub gravity: Vec2,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default)]
    pub settings: SolverSettings,
    #[serde(default)]
    pub bodies: Vec<BodyDesc>,
    #[serde(default)]
    pub joints: Vec<JointDesc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BodyDesc {
    /// Full box extents
    pub width: Vec2,
    /// Omitted for static bodies
    #[serde(default)]
    pub mass: Option<f32>,
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "default_friction")]
    pub friction: f32,
    #[serde(default)]
    pub velocity: Vec2,
    #[serde(default)]
    pub angular_velocity: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct JointDesc {
    pub body1: usize,
    pub body2: usize,
    /// World-space pivot
    pub anchor: Vec2,
    #[serde(default)]
    pub softness: Option<f32>,
    #[serde(default)]
    pub bias_factor: Option<f32>,
}

fn default_gravity() -> Vec2 {
    Vec2::new(0.0, -10.0)
}

fn default_iterations() -> u32 {
    10
}

fn default_friction() -> f32 {
    0.2
}

impl SceneDesc {
    /// Parse and validate a scene.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let scene: SceneDesc = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.iterations == 0 {
            return Err(EngineError::InvalidScene("iterations must be at least 1".into()));
        }

        for (idx, b) in self.bodies.iter().enumerate() {
            if !(b.width.x > 0.0 && b.width.y > 0.0) {
                return Err(EngineError::InvalidScene(format!(
                    "body {idx}: extents must be positive, got {:?}",
                    b.width
                )));
            }
            if let Some(mass) = b.mass {
                if !(mass > 0.0) {
                    return Err(EngineError::InvalidScene(format!(
                        "body {idx}: mass must be positive, got {mass}"
                    )));
                }
            }
        }

        for (idx, j) in self.joints.iter().enumerate() {
            let n = self.bodies.len();
            if j.body1 >= n || j.body2 >= n {
                return Err(EngineError::InvalidScene(format!(
                    "joint {idx}: body index out of range ({}, {}) with {n} bodies",
                    j.body1, j.body2
                )));
            }
            if j.body1 == j.body2 {
                return Err(EngineError::InvalidScene(format!(
                    "joint {idx}: both ends on body {}",
                    j.body1
                )));
            }
            if self.bodies[j.body1].mass.is_none() && self.bodies[j.body2].mass.is_none() {
                return Err(EngineError::InvalidScene(format!(
                    "joint {idx}: bodies {} and {} are both static",
                    j.body1, j.body2
                )));
            }
        }

        Ok(())
    }
}

impl BodyDesc {
    pub fn to_body(&self) -> Body {
        let mut body = Body::new(self.width, self.mass.unwrap_or(Body::STATIC_MASS))
            .with_position(self.position)
            .with_rotation(self.rotation)
            .with_friction(self.friction);
        if !body.is_static() {
            body.velocity = self.velocity;
            body.angular_velocity = self.angular_velocity;
        }
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_scene_uses_defaults() {
        let scene = SceneDesc::from_json(r#"{ "bodies": [ { "width": { "x": 1.0, "y": 2.0 } } ] }"#).unwrap();
        assert_eq!(scene.gravity, Vec2::new(0.0, -10.0));
        assert_eq!(scene.iterations, 10);
        assert!(scene.settings.warm_starting);
        let body = scene.bodies[0].to_body();
        assert!(body.is_static());
        assert_eq!(body.friction, 0.2);
    }

    #[test]
    fn dynamic_body_keeps_initial_velocity() {
        let scene = SceneDesc::from_json(
            r#"{ "bodies": [ { "width": { "x": 1.0, "y": 1.0 }, "mass": 2.0,
                 "velocity": { "x": 1.0, "y": 0.0 }, "angular_velocity": 0.5 } ] }"#,
        )
        .unwrap();
        let body = scene.bodies[0].to_body();
        assert_eq!(body.inv_mass, 0.5);
        assert_eq!(body.velocity, Vec2::new(1.0, 0.0));
        assert_eq!(body.angular_velocity, 0.5);
    }

    #[test]
    fn rejects_bad_joint_indices() {
        let err = SceneDesc::from_json(
            r#"{ "bodies": [ { "width": { "x": 1.0, "y": 1.0 } } ],
                 "joints": [ { "body1": 0, "body2": 3, "anchor": { "x": 0.0, "y": 0.0 } } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidScene(_)));
    }

    #[test]
    fn rejects_non_positive_extents_and_mass() {
        let zero_width = r#"{ "bodies": [ { "width": { "x": 0.0, "y": 1.0 } } ] }"#;
        assert!(matches!(SceneDesc::from_json(zero_width), Err(EngineError::InvalidScene(_))));

        let negative_mass = r#"{ "bodies": [ { "width": { "x": 1.0, "y": 1.0 }, "mass": -1.0 } ] }"#;
        assert!(matches!(SceneDesc::from_json(negative_mass), Err(EngineError::InvalidScene(_))));
    }

    #[test]
    fn rejects_joint_between_static_bodies() {
        let err = SceneDesc::from_json(
            r#"{ "bodies": [ { "width": { "x": 1.0, "y": 1.0 } },
                             { "width": { "x": 1.0, "y": 1.0 }, "position": { "x": 3.0, "y": 0.0 } } ],
                 "joints": [ { "body1": 0, "body2": 1, "anchor": { "x": 1.5, "y": 0.0 } } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidScene(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(SceneDesc::from_json("{ bodies: "), Err(EngineError::SceneParse(_))));
    }

    #[test]
    fn zero_iterations_is_rejected() {
        assert!(SceneDesc::from_json(r#"{ "iterations": 0 }"#).is_err());
    }
}
