//! Steps a gallery of small worlds that each poke a different corner of
//! the kernel: settling onto a floor, tunneling through a thin one,
//! sliding along surfaces, diagonal gravity, and a scripted jump. Run
//! with `RUST_LOG=debug` to watch jump state transitions.

use glam::Vec2;
use tumble_physics::{
    Aabb, Body, BodyId, ButtonTracker, ControllerConfig, JumpController, Obstacle, World,
    WorldConfig,
};

const FRAMES: u32 = 40;

fn world(gravity: Vec2) -> World {
    World::new(WorldConfig {
        gravity,
        ..WorldConfig::default()
    })
}

/// A named world plus the single body we report on.
struct Scene {
    name: &'static str,
    world: World,
    body: BodyId,
}

impl Scene {
    fn new(name: &'static str, mut world: World, body: Body) -> Self {
        let body = world.spawn_body(body);
        Self { name, world, body }
    }
}

fn build_scenes() -> Vec<Scene> {
    let floor = Obstacle::new(Aabb::new(0.0, 30.0, 16.0, 3.0));
    let wall = Obstacle::new(Aabb::new(12.0, 12.0, 3.0, 20.0));

    // Drop onto a floor and settle.
    let mut normal = world(Vec2::new(0.0, 1.0));
    normal.spawn_obstacle(floor);

    // Fast fall at a thin floor — the sweep has to catch it.
    let mut tunnel = world(Vec2::new(0.0, 1.0));
    tunnel.spawn_obstacle(floor);

    // Slide horizontally onto the floor while falling.
    let mut hslide = world(Vec2::new(0.0, 1.0));
    hslide.spawn_obstacle(floor);

    // Slide into a vertical wall.
    let mut vslide = world(Vec2::new(0.0, 1.0));
    vslide.spawn_obstacle(wall);

    // Diagonal gravity pushing into the same wall.
    let mut vsxvel = world(Vec2::new(1.0, 1.0));
    vsxvel.spawn_obstacle(wall);

    // The big-and-fast variant of the tunnel scene.
    let mut tnlbig = world(Vec2::new(0.0, 1.0));
    tnlbig.spawn_obstacle(floor);

    vec![
        Scene::new("normal", normal, Body::new(Aabb::new(4.0, 10.0, 3.0, 3.0))),
        Scene::new(
            "tunnel",
            tunnel,
            Body::new(Aabb::new(4.0, 0.0, 3.0, 3.0)).with_velocity(Vec2::new(0.0, 2.0)),
        ),
        Scene::new(
            "hslide",
            hslide,
            Body::new(Aabb::new(-2.0, 20.0, 3.0, 3.0)).with_velocity(Vec2::new(2.0, 0.0)),
        ),
        Scene::new(
            "vslide",
            vslide,
            Body::new(Aabb::new(0.0, 0.0, 3.0, 3.0)).with_velocity(Vec2::new(2.0, 0.0)),
        ),
        Scene::new("vsxvel", vsxvel, Body::new(Aabb::new(0.0, 0.0, 3.0, 3.0))),
        Scene::new(
            "tnlbig",
            tnlbig,
            Body::new(Aabb::new(4.0, -4.0, 8.0, 8.0)).with_velocity(Vec2::new(0.0, 20.0)),
        ),
    ]
}

fn run_gallery() {
    let mut scenes = build_scenes();
    for _ in 0..FRAMES {
        for scene in scenes.iter_mut() {
            scene.world.advance();
        }
    }
    for scene in &scenes {
        let body = scene.world.body(scene.body).unwrap();
        log::info!(
            "{:>6}: pos=({:.2}, {:.2}) vel=({:.2}, {:.2}) collided={}",
            scene.name,
            body.pos().x,
            body.pos().y,
            body.velocity.x,
            body.velocity.y,
            body.collided
        );
    }
}

/// A scripted hop: stand, press jump for a few frames, release, land.
fn run_jumper() {
    let mut world = world(Vec2::new(0.0, 1.0));
    world.spawn_obstacle(Obstacle::new(Aabb::new(0.0, 30.0, 40.0, 3.0)));
    let id = world.spawn_body(Body::new(Aabb::new(4.0, 27.0, 3.0, 3.0)));

    let mut controller = JumpController::new(ControllerConfig::default());
    controller.set_transition_hook(|from, to| log::info!("jumper: {:?} -> {:?}", from, to));
    let mut tracker = ButtonTracker::new();

    for frame in 0..FRAMES {
        // Hold jump on frames 5..=9, walk right the whole time.
        let jump = (5..10).contains(&frame);
        let input = tracker.snapshot(false, true, jump);
        controller.apply(world.body_mut(id).unwrap(), &input);
        world.advance();

        let body = world.body(id).unwrap();
        log::debug!(
            "jumper f{:02}: pos=({:.2}, {:.2}) state={:?}",
            frame,
            body.pos().x,
            body.pos().y,
            controller.state()
        );
    }
}

fn main() {
    env_logger::init();
    run_gallery();
    run_jumper();
}
