use crate::domain::body::BodyId;
use crate::domain::scene::SceneDesc;
use crate::error::EngineResult;
use crate::systems::joint::Joint;

use super::WorldCore;

pub(super) fn load_scene_json(world: &mut WorldCore, json: &str) -> EngineResult<()> {
    let scene = SceneDesc::from_json(json)?;
    load_scene(world, &scene)
}

/// Clear the world and populate it from an already validated scene.
pub(super) fn load_scene(world: &mut WorldCore, scene: &SceneDesc) -> EngineResult<()> {
    scene.validate()?;
    world.clear();

    world.gravity = scene.gravity;
    world.iterations = scene.iterations;
    world.settings = scene.settings;

    for desc in &scene.bodies {
        world.add_body(desc.to_body());
    }

    for desc in &scene.joints {
        let id1 = BodyId(desc.body1 as u32);
        let id2 = BodyId(desc.body2 as u32);
        let mut joint = Joint::new(
            id1,
            &world.bodies[desc.body1],
            id2,
            &world.bodies[desc.body2],
            desc.anchor,
        );
        if let Some(softness) = desc.softness {
            joint.softness = softness;
        }
        if let Some(bias_factor) = desc.bias_factor {
            joint.bias_factor = bias_factor;
        }
        world.add_joint(joint)?;
    }

    if scene.bodies.iter().all(|b| b.mass.is_none()) && !scene.bodies.is_empty() {
        log::warn!("scene has only static bodies; nothing will move");
    }
    log::info!(
        "scene loaded: {} bodies, {} joints, {} iterations",
        world.bodies.len(),
        world.joints.len(),
        world.iterations
    );
    Ok(())
}
