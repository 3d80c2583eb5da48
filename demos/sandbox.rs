//! Headless run of the classic sandbox scene: a kicked quad with hidden
//! cross-braces, a 25-link chain hanging off it, and a scripted pointer
//! session spawning a second quad at runtime.

use verlet_playground::*;

/// Counts draw calls and echoes overlay text to stdout.
#[derive(Default)]
struct StdoutRenderer {
    points: usize,
    lines: usize,
}

impl RenderBackend for StdoutRenderer {
    fn width(&self) -> f32 {
        1280.0
    }

    fn height(&self) -> f32 {
        720.0
    }

    fn begin_frame(&mut self) {
        self.points = 0;
        self.lines = 0;
    }

    fn draw_point(&mut self, _position: Vec2, _stroke: Stroke) {
        self.points += 1;
    }

    fn draw_line(&mut self, _a: Vec2, _b: Vec2, _stroke: Stroke) {
        self.lines += 1;
    }

    fn draw_text(&mut self, text: &str, _x: f32, _y: f32, _size: f32) {
        println!("{text}");
    }
}

fn build_scene(sandbox: &mut Sandbox) {
    let world = sandbox.world_mut();

    let kicks = [
        Vec2::new(12.0, -7.0),
        Vec2::new(-15.0, 4.0),
        Vec2::new(6.0, 18.0),
        Vec2::new(-9.0, -11.0),
    ];
    let corners = [
        Vec2::new(200.0, 200.0),
        Vec2::new(100.0, 200.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(200.0, 100.0),
    ];
    let quad: Vec<ParticleId> = corners
        .iter()
        .zip(kicks.iter())
        .map(|(&corner, &kick)| world.add_particle(Particle::with_velocity(corner, kick)))
        .collect();

    // Hidden diagonal braces first, then the visible ring.
    for (a, b) in [(quad[0], quad[2]), (quad[1], quad[3])] {
        let brace = DistanceConstraint::from_particles(a, b, &world.particles)
            .expect("quad corners are distinct")
            .hidden();
        world.add_constraint(Constraint::Distance(brace));
    }
    for (a, b) in [
        (quad[0], quad[1]),
        (quad[1], quad[2]),
        (quad[2], quad[3]),
        (quad[3], quad[0]),
    ] {
        world
            .add_distance_constraint(a, b)
            .expect("quad corners are distinct");
    }

    // A 25-link chain of visible particles, attached to the last corner.
    let mut previous = quad[3];
    for j in 0..25 {
        let mut link = Particle::new(Vec2::new(100.0 + (j + 1) as f32, 100.0));
        link.visible = true;
        let id = world.add_particle(link);

        let constraint =
            DistanceConstraint::new(id, previous, 10.0).expect("chain ids are distinct");
        world.add_constraint(Constraint::Distance(constraint));
        previous = id;
    }

    // Anchor the free end.
    if let Some(anchor) = world.particle_mut(previous) {
        anchor.pinned = true;
    }
}

fn main() {
    let mut sandbox = Sandbox::new(1280.0, 720.0);
    build_scene(&mut sandbox);

    let mut renderer = StdoutRenderer::default();
    renderer.draw_text("Verlet integration", 20.0, 30.0, 32.0);
    renderer.draw_text(
        "Point masses under gravity, relaxed by iterative distance constraints.",
        20.0,
        50.0,
        12.0,
    );

    // Let the scene settle for a second of frames.
    for _ in 0..60 {
        sandbox.tick(&mut renderer);
    }

    // Drag the quad's first corner across the canvas and let go.
    sandbox.pointer_moved(Vec2::new(200.0, 200.0));
    sandbox.pointer_pressed(Vec2::new(200.0, 200.0), PointerButton::Primary);
    for i in 0..30 {
        let pointer = Vec2::new(200.0 + i as f32 * 10.0, 200.0 + i as f32 * 5.0);
        sandbox.pointer_dragged(pointer, PointerButton::Primary);
        sandbox.tick(&mut renderer);
    }
    sandbox.pointer_released(PointerButton::Primary);

    // Spawn a fresh braced quad with four right clicks.
    for &(x, y) in &[(600.0, 300.0), (700.0, 300.0), (700.0, 400.0), (600.0, 400.0)] {
        sandbox.pointer_pressed(Vec2::new(x, y), PointerButton::Secondary);
        sandbox.tick(&mut renderer);
    }

    for _ in 0..120 {
        sandbox.tick(&mut renderer);
    }

    println!(
        "final frame: {} particles, {} constraints, {} points and {} lines drawn",
        sandbox.world().particle_count(),
        sandbox.world().constraint_count(),
        renderer.points,
        renderer.lines,
    );
}
