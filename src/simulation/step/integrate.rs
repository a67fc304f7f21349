use super::WorldCore;

/// Gravity and applied loads into velocity. Static bodies are skipped.
pub(super) fn integrate_forces(world: &mut WorldCore, dt: f32) {
    let gravity = world.gravity;
    for b in world.bodies.iter_mut() {
        if b.is_static() {
            continue;
        }
        b.velocity += dt * (gravity + b.inv_mass * b.force);
        b.angular_velocity += dt * b.inv_i * b.torque;
    }
}

/// Velocity into position, then clear the loads applied for this step.
pub(super) fn integrate_velocities(world: &mut WorldCore, dt: f32) {
    for b in world.bodies.iter_mut() {
        if !b.is_static() {
            b.position += dt * b.velocity;
            b.rotation += dt * b.angular_velocity;
        }

        b.force.set(0.0, 0.0);
        b.torque = 0.0;
    }
}
