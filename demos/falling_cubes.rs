//! Drops a few cubes onto a line of static obstacles and advances the world
//! at a fixed tick rate using a wall-clock accumulator.

use std::time::Instant;

use sandbox_phys::{PhysicsWorld, Vector3};

const TICK: f32 = 1.0 / 120.0;
const RUN_SECONDS: f32 = 3.0;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut world = PhysicsWorld::new();

    // A floor made of three obstacles
    for x in -1..=1 {
        world.add_static(Vector3::new(x as f32, 0.0, 0.0))?;
    }

    // Cubes at staggered heights with a small initial downward push
    for (i, &height) in [3.0f32, 4.5, 6.0].iter().enumerate() {
        world.add_dynamic(
            Vector3::new(i as f32 - 1.0, height, 0.0),
            Vector3::new(0.0, -0.5, 0.0),
            Vector3::zero(),
            1.0 + i as f32,
        )?;
    }

    let start = Instant::now();
    let mut previous = start;
    let mut accumulator = 0.0f32;
    let mut simulated = 0.0f32;

    while simulated < RUN_SECONDS {
        let now = Instant::now();
        accumulator += now.duration_since(previous).as_secs_f32();
        previous = now;

        // Drain wall-clock time in fixed-size increments
        while accumulator >= TICK {
            world.step(TICK)?;
            accumulator -= TICK;
            simulated += TICK;
        }
    }

    println!("simulated {simulated:.2}s in {:?}", start.elapsed());
    for (id, position, velocity) in world.debug_dump() {
        println!("body {}: position {position}, velocity {velocity} m/s", id.raw());
    }

    Ok(())
}
