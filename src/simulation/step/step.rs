use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore, dt: f32) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let mut timer = perf_on.then(PerfTimer::start);

    if dt <= 0.0 {
        log::warn!("step called with non-positive dt {dt}; bodies will not move");
    }
    let inv_dt = if dt > 0.0 { 1.0 / dt } else { 0.0 };

    // === BROAD PHASE ===
    // Uses positions from the previous step.
    let tested = world.broad_phase();
    if let Some(t) = timer.as_mut() {
        world.perf_stats.broad_phase_ms = t.lap_ms();
        world.perf_stats.pairs_tested = tested;
    }

    // === INTEGRATE FORCES ===
    world.integrate_forces(dt);
    if let Some(t) = timer.as_mut() {
        world.perf_stats.integrate_ms = t.lap_ms();
    }

    // === PRE-STEP: solver coefficients + warm start ===
    world.pre_step(inv_dt);
    if let Some(t) = timer.as_mut() {
        world.perf_stats.pre_step_ms = t.lap_ms();
    }

    // === IMPULSE ITERATIONS ===
    for _ in 0..world.iterations {
        world.apply_impulses();
    }
    if let Some(t) = timer.as_mut() {
        world.perf_stats.solve_ms = t.lap_ms();
    }

    // === INTEGRATE VELOCITIES ===
    world.integrate_velocities(dt);

    if let Some(mut t) = timer {
        world.perf_stats.integrate_ms += t.lap_ms();
        world.perf_stats.step_ms = t.total_ms();
        world.perf_stats.body_count = world.bodies.len() as u32;
        world.perf_stats.joint_count = world.joints.len() as u32;
        world.perf_stats.arbiter_count = world.arbiters.len() as u32;
        world.perf_stats.contact_count = world.contact_count() as u32;
    }

    world.frame += 1;
}

pub(super) fn pre_step(world: &mut WorldCore, inv_dt: f32) {
    for arb in world.arbiters.values_mut() {
        arb.pre_step(&mut world.bodies, inv_dt, &world.settings);
    }
    for joint in world.joints.iter_mut() {
        joint.pre_step(&mut world.bodies, inv_dt, &world.settings);
    }
}

/// One pass: every arbiter, then every joint.
pub(super) fn apply_impulses(world: &mut WorldCore) {
    for arb in world.arbiters.values_mut() {
        arb.apply_impulse(&mut world.bodies, &world.settings);
    }
    for joint in world.joints.iter_mut() {
        joint.apply_impulse(&mut world.bodies);
    }
}
