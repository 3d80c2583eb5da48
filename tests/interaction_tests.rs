use verlet_playground::*;

fn empty_world() -> VerletWorld {
    VerletWorld::new(Bounds::new(800.0, 600.0))
}

fn spawn_at(
    controller: &mut InteractionController,
    world: &mut VerletWorld,
    x: f32,
    y: f32,
) {
    controller.pointer_pressed(world, Vec2::new(x, y), PointerButton::Secondary);
}

fn visible_constraints(world: &VerletWorld) -> (usize, usize) {
    let mut visible = 0;
    let mut hidden = 0;
    for constraint in &world.constraints {
        let Constraint::Distance(c) = constraint;
        if c.visible {
            visible += 1;
        } else {
            hidden += 1;
        }
    }
    (visible, hidden)
}

#[test]
fn hover_on_an_empty_world_is_none() {
    let world = empty_world();
    let mut controller = InteractionController::new();

    controller.pointer_moved(&world, Vec2::new(100.0, 100.0));

    assert_eq!(controller.hovered(), None);
}

#[test]
fn first_particle_within_pick_radius_wins() {
    let mut world = empty_world();
    let near_first = world.add_particle(Particle::new(Vec2::new(102.0, 100.0)));
    let _near_second = world.add_particle(Particle::new(Vec2::new(99.0, 100.0)));

    let mut controller = InteractionController::new();
    controller.pointer_moved(&world, Vec2::new(100.0, 100.0));

    // Both are inside the radius; insertion order decides.
    assert_eq!(controller.hovered(), Some(near_first));
}

#[test]
fn hover_falls_back_to_the_globally_nearest_particle() {
    let mut world = empty_world();
    let _far = world.add_particle(Particle::new(Vec2::new(500.0, 500.0)));
    let nearer = world.add_particle(Particle::new(Vec2::new(200.0, 100.0)));

    let mut controller = InteractionController::new();
    controller.pointer_moved(&world, Vec2::new(100.0, 100.0));

    assert_eq!(controller.hovered(), Some(nearer));
}

#[test]
fn drag_pins_the_selection_and_zeroes_its_velocity() {
    let mut world = empty_world();
    let id = world.add_particle(Particle::with_velocity(
        Vec2::new(100.0, 100.0),
        Vec2::new(5.0, 5.0),
    ));

    let mut controller = InteractionController::new();
    controller.pointer_moved(&world, Vec2::new(100.0, 100.0));
    controller.pointer_pressed(&mut world, Vec2::new(100.0, 100.0), PointerButton::Primary);
    assert_eq!(controller.selected(), Some(id));
    assert_eq!(controller.hovered(), None);

    controller.pointer_dragged(&mut world, Vec2::new(30.0, 40.0), PointerButton::Primary);

    let particle = world.particle(id).unwrap();
    assert!(particle.pinned);
    assert_eq!(particle.position, Vec2::new(30.0, 40.0));
    assert_eq!(particle.velocity(), Vec2::ZERO);
}

#[test]
fn release_unpins_and_clears_the_selection() {
    let mut world = empty_world();
    let id = world.add_particle(Particle::new(Vec2::new(100.0, 100.0)));

    let mut controller = InteractionController::new();
    controller.pointer_moved(&world, Vec2::new(100.0, 100.0));
    controller.pointer_pressed(&mut world, Vec2::new(100.0, 100.0), PointerButton::Primary);
    controller.pointer_dragged(&mut world, Vec2::new(30.0, 40.0), PointerButton::Primary);
    controller.pointer_released(&mut world, PointerButton::Primary);

    assert_eq!(controller.selected(), None);
    assert!(!world.particle(id).unwrap().pinned);
}

#[test]
fn secondary_release_leaves_the_selection_alone() {
    let mut world = empty_world();
    let mut controller = InteractionController::new();
    spawn_at(&mut controller, &mut world, 100.0, 100.0);

    let selected = controller.selected();
    controller.pointer_released(&mut world, PointerButton::Secondary);

    assert_eq!(controller.selected(), selected);
}

#[test]
fn spawn_creates_a_pinned_visible_particle() {
    let mut world = empty_world();
    let mut controller = InteractionController::new();

    spawn_at(&mut controller, &mut world, 120.0, 80.0);

    assert_eq!(world.particle_count(), 1);
    let id = controller.selected().expect("spawn selects the particle");
    let particle = world.particle(id).unwrap();
    assert!(particle.pinned);
    assert!(particle.visible);
    assert_eq!(particle.position, Vec2::new(120.0, 80.0));
    assert_eq!(controller.hovered(), None);
    assert_eq!(controller.frozen_count(), 1);
}

#[test]
fn four_spawns_build_a_braced_quad() {
    let mut world = empty_world();
    let mut controller = InteractionController::new();

    spawn_at(&mut controller, &mut world, 100.0, 100.0);
    let first = controller.selected().unwrap();
    spawn_at(&mut controller, &mut world, 200.0, 100.0);
    spawn_at(&mut controller, &mut world, 200.0, 200.0);
    spawn_at(&mut controller, &mut world, 100.0, 200.0);

    assert_eq!(world.particle_count(), 4);
    // Ring of 4 plus two hidden diagonal braces.
    assert_eq!(world.constraint_count(), 6);
    let (visible, hidden) = visible_constraints(&world);
    assert_eq!(visible, 4);
    assert_eq!(hidden, 2);
    // Selection snaps back to the first corner once the quad closes.
    assert_eq!(controller.selected(), Some(first));
    assert_eq!(controller.pending_group().len(), 4);
}

#[test]
fn later_spawns_thread_onto_the_quad_corners_in_rotation() {
    let mut world = empty_world();
    let mut controller = InteractionController::new();

    spawn_at(&mut controller, &mut world, 100.0, 100.0);
    spawn_at(&mut controller, &mut world, 200.0, 100.0);
    spawn_at(&mut controller, &mut world, 200.0, 200.0);
    spawn_at(&mut controller, &mut world, 100.0, 200.0);
    let corners: Vec<ParticleId> = controller.pending_group().to_vec();

    spawn_at(&mut controller, &mut world, 300.0, 300.0);

    assert_eq!(world.particle_count(), 5);
    assert_eq!(world.constraint_count(), 7);
    assert_eq!(controller.pending_group(), corners.as_slice());
    // The corner cursor advanced past corner 0.
    assert_eq!(controller.selected(), Some(corners[1]));

    spawn_at(&mut controller, &mut world, 320.0, 320.0);
    assert_eq!(world.constraint_count(), 8);
    assert_eq!(controller.selected(), Some(corners[2]));

    // No extra ring-closing constraints are ever re-added.
    let (visible, hidden) = visible_constraints(&world);
    assert_eq!(hidden, 2);
    assert_eq!(visible, 6);
}

#[test]
fn pick_up_releases_frozen_spawns_and_resets_the_group() {
    let mut world = empty_world();
    let anchor = world.add_particle(Particle::new(Vec2::new(400.0, 400.0)));

    let mut controller = InteractionController::new();
    spawn_at(&mut controller, &mut world, 100.0, 100.0);
    spawn_at(&mut controller, &mut world, 200.0, 100.0);
    let spawned: Vec<ParticleId> = controller.pending_group().to_vec();
    assert_eq!(controller.frozen_count(), 2);

    controller.pointer_moved(&world, Vec2::new(400.0, 400.0));
    controller.pointer_pressed(&mut world, Vec2::new(400.0, 400.0), PointerButton::Primary);

    assert_eq!(controller.selected(), Some(anchor));
    assert_eq!(controller.frozen_count(), 0);
    assert!(controller.pending_group().is_empty());
    for id in spawned {
        assert!(
            !world.particle(id).unwrap().pinned,
            "frozen spawns are released on pick up"
        );
    }
}

#[test]
fn middle_button_picks_up_like_primary() {
    let mut world = empty_world();
    let id = world.add_particle(Particle::new(Vec2::new(100.0, 100.0)));

    let mut controller = InteractionController::new();
    controller.pointer_moved(&world, Vec2::new(100.0, 100.0));
    controller.pointer_pressed(&mut world, Vec2::new(100.0, 100.0), PointerButton::Middle);

    assert_eq!(controller.selected(), Some(id));
}

#[test]
fn sandbox_facade_routes_events_and_ticks() {
    let mut sandbox = Sandbox::new(800.0, 600.0);
    sandbox.pointer_pressed(Vec2::new(100.0, 100.0), PointerButton::Secondary);
    assert_eq!(sandbox.world().particle_count(), 1);

    let mut renderer = NoopRenderer::default();
    sandbox.tick(&mut renderer);

    sandbox.resized(400.0, 300.0);
    assert_eq!(sandbox.world().bounds, Bounds::new(400.0, 300.0));
}
