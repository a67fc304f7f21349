use boxlite_engine::World;

const DT: f32 = 1.0 / 60.0;

#[test]
fn box_falls_onto_ground() {
    let mut world = World::new(0.0, -10.0, 10);
    world.add_static_box(100.0, 20.0, 0.0, -10.0, 0.0, 0.2);
    let id = world.add_box(1.0, 1.0, 200.0, 0.0, 4.0, 0.0, 0.2).unwrap();

    for _ in 0..240 {
        world.step(DT);
    }

    assert_eq!(world.frame(), 240);
    assert!((world.body_y(id) - 0.5).abs() < 0.05);
    assert_eq!(world.arbiter_count(), 1);
    assert_eq!(world.contact_count(), 2);
}

#[test]
fn body_transforms_are_packed_per_body() {
    let mut world = World::new(0.0, -10.0, 10);
    world.add_static_box(10.0, 2.0, 1.0, 2.0, 0.5, 0.2);
    world.add_box(1.0, 3.0, 1.0, -4.0, 5.0, 0.0, 0.2).unwrap();

    let t = world.body_transforms();
    assert_eq!(t, vec![1.0, 2.0, 0.5, 5.0, 1.0, -4.0, 5.0, 0.0, 0.5, 1.5]);
    assert_eq!(world.body_half_height(1), 1.5);
    assert_eq!(world.body_x(9), 0.0);
}

#[test]
fn set_body_transform_moves_known_bodies_only() {
    let mut world = World::new(0.0, 0.0, 10);
    let id = world.add_box(1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.2).unwrap();

    assert!(world.set_body_transform(id, 3.0, 4.0, 1.0));
    assert_eq!(world.body_x(id), 3.0);
    assert_eq!(world.body_y(id), 4.0);
    assert_eq!(world.body_rotation(id), 1.0);
    assert!(!world.set_body_transform(5, 0.0, 0.0, 0.0));
}

#[test]
fn joints_and_forces_through_the_facade() {
    let mut world = World::new(0.0, -10.0, 10);
    let ground = world.add_static_box(100.0, 20.0, 0.0, -10.0, 0.0, 0.2);
    let bob = world.add_box(1.0, 1.0, 100.0, 9.0, 11.0, 0.0, 0.2).unwrap();
    assert!(world.add_joint(ground, bob, 0.0, 11.0).is_ok());
    assert!(world.apply_force(bob, 10.0, 0.0).is_ok());
    assert!(world.apply_torque(bob, 1.0).is_ok());
    assert_eq!(world.joint_count(), 1);

    for _ in 0..60 {
        world.step(DT);
    }
    // Still hanging roughly 9 units from the pivot.
    let dx = world.body_x(bob);
    let dy = world.body_y(bob) - 11.0;
    assert!(((dx * dx + dy * dy).sqrt() - 9.0).abs() < 0.2);
}

#[test]
fn demos_load_by_index() {
    let mut world = World::new(0.0, -10.0, 10);
    assert_eq!(World::demo_count(), 9);
    for i in 0..World::demo_count() {
        assert!(world.load_demo(i));
        assert!(World::demo_name(i).is_some());
        world.step(DT);
    }
    assert!(!world.load_demo(World::demo_count()));
    assert_eq!(World::demo_name(99), None);
}

#[test]
fn solver_toggles_keep_simulation_stable() {
    let mut world = World::new(0.0, -10.0, 10);
    world.set_accumulate_impulses(false);
    world.set_warm_starting(false);
    world.set_position_correction(false);
    world.add_static_box(100.0, 20.0, 0.0, -10.0, 0.0, 0.2);
    let id = world.add_box(1.0, 1.0, 1.0, 0.0, 2.0, 0.0, 0.2).unwrap();

    for _ in 0..120 {
        world.step(DT);
    }
    assert!(world.body_y(id).is_finite());
    assert!(world.body_y(id) > 0.0);
}

#[test]
fn load_scene_replaces_contents() {
    let mut world = World::new(0.0, -10.0, 10);
    world.add_box(1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.2).unwrap();

    let json = r#"{ "bodies": [
        { "width": { "x": 100.0, "y": 20.0 }, "position": { "x": 0.0, "y": -10.0 } },
        { "width": { "x": 1.0, "y": 1.0 }, "mass": 1.0, "position": { "x": 0.0, "y": 3.0 } },
        { "width": { "x": 1.0, "y": 1.0 }, "mass": 1.0, "position": { "x": 2.0, "y": 3.0 } }
    ], "joints": [ { "body1": 1, "body2": 2, "anchor": { "x": 1.0, "y": 3.0 } } ] }"#;
    assert!(world.load_scene(json.to_string()).is_ok());
    assert_eq!(world.body_count(), 3);
    assert_eq!(world.joint_count(), 1);
}
