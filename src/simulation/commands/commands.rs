use crate::core::math::Vec2;
use crate::domain::body::{Body, BodyId};
use crate::error::{EngineError, EngineResult};
use crate::systems::joint::{Joint, JointId};

use super::WorldCore;

pub(super) fn add_body(world: &mut WorldCore, body: Body) -> BodyId {
    let id = BodyId(world.bodies.len() as u32);
    world.bodies.push(body);
    id
}

pub(super) fn add_joint(world: &mut WorldCore, joint: Joint) -> EngineResult<JointId> {
    check_body(world, joint.body1)?;
    check_body(world, joint.body2)?;
    if joint.body1 == joint.body2 {
        return Err(EngineError::SelfJoint(joint.body1));
    }
    // Two static ends leave the joint mass matrix singular.
    if world.bodies[joint.body1.index()].is_static() && world.bodies[joint.body2.index()].is_static() {
        return Err(EngineError::StaticJoint(joint.body1, joint.body2));
    }

    let id = JointId(world.joints.len() as u32);
    world.joints.push(joint);
    Ok(id)
}

pub(super) fn attach_joint(world: &mut WorldCore, body1: BodyId, body2: BodyId, anchor: Vec2) -> EngineResult<JointId> {
    let b1 = world.bodies.get(body1.index()).ok_or(EngineError::UnknownBody(body1))?;
    let b2 = world.bodies.get(body2.index()).ok_or(EngineError::UnknownBody(body2))?;
    let joint = Joint::new(body1, b1, body2, b2, anchor);
    add_joint(world, joint)
}

/// Remove everything. Each body is reset before it is dropped.
pub(super) fn clear(world: &mut WorldCore) {
    for body in world.bodies.iter_mut() {
        body.clear();
    }
    log::info!(
        "clearing world: {} bodies, {} joints, {} arbiters",
        world.bodies.len(),
        world.joints.len(),
        world.arbiters.len()
    );
    world.bodies.clear();
    world.joints.clear();
    world.arbiters.clear();
}

pub(super) fn apply_force(world: &mut WorldCore, id: BodyId, force: Vec2) -> EngineResult<()> {
    let body = world.bodies.get_mut(id.index()).ok_or(EngineError::UnknownBody(id))?;
    body.add_force(force);
    Ok(())
}

pub(super) fn apply_torque(world: &mut WorldCore, id: BodyId, torque: f32) -> EngineResult<()> {
    let body = world.bodies.get_mut(id.index()).ok_or(EngineError::UnknownBody(id))?;
    body.add_torque(torque);
    Ok(())
}

fn check_body(world: &WorldCore, id: BodyId) -> EngineResult<()> {
    if id.index() < world.bodies.len() {
        Ok(())
    } else {
        Err(EngineError::UnknownBody(id))
    }
}
