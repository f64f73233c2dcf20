use rigid2d::common::{BodyConfig, ShapeConfig};
use rigid2d::*;
use std::env;
use std::process;

struct StdoutLogger;

impl log::Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            println!("[{:<5}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StdoutLogger = StdoutLogger;

fn main() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Info);
    }

    let args: Vec<String> = env::args().collect();
    let example = args.get(1).map(String::as_str).unwrap_or("head_on");

    let config = match example {
        "head_on" => Ok(SimulationConfig::default()),
        "ball_pit" => Ok(ball_pit_config()),
        "drop" => Ok(drop_config()),
        path if path.ends_with(".json") => SimulationConfig::from_path(path),
        _ => {
            eprintln!(
                "Unknown example: {}. Available examples: head_on, ball_pit, drop, or a path to a .json scene",
                example
            );
            process::exit(2);
        }
    };

    println!("Running example: {}", example);
    if let Err(e) = config.and_then(|config| run_scene(&config)) {
        eprintln!("Error running example: {}", e);
        process::exit(1);
    }
}

fn run_scene(config: &SimulationConfig) -> Result<(), PhysicsError> {
    let mut sim = Simulation::new(config)?;
    let summary = sim.run();

    println!(
        "Simulated {:.3}s in {} frames: {} collisions, {} wall bounces",
        summary.simulated_time, summary.frames, summary.collisions, summary.bounces
    );
    for (i, body) in sim.world.bodies.iter().enumerate() {
        println!(
            "Body {}: {:?} position ({:.2}, {:.2}) velocity ({:.2}, {:.2})",
            i,
            body.shape.kind(),
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y
        );
    }
    Ok(())
}

fn ball_pit_config() -> SimulationConfig {
    let mut bodies = Vec::new();

    // Static plank across the lower third of the window
    bodies.push(BodyConfig {
        shape: ShapeConfig::Rectangle {
            width: 600.0,
            height: 20.0,
        },
        mass: 0.0,
        position: Vec2::new(600.0, 600.0),
        ..BodyConfig::default()
    });

    // 20 balls with varying sizes and starting heights
    for i in 0..20 {
        let radius = 10.0 + (i % 4) as f64 * 5.0;
        bodies.push(BodyConfig {
            shape: ShapeConfig::Circle { radius },
            mass: radius / 10.0,
            position: Vec2::new(100.0 + i as f64 * 50.0, 50.0 + (i % 5) as f64 * 40.0),
            velocity: Vec2::new(if i % 2 == 0 { 60.0 } else { -60.0 }, 0.0),
            restitution: 0.9,
            ..BodyConfig::default()
        });
    }

    SimulationConfig {
        duration: 5.0,
        bodies,
        ..SimulationConfig::default()
    }
}

fn drop_config() -> SimulationConfig {
    SimulationConfig {
        duration: 6.0,
        bodies: vec![
            BodyConfig {
                position: Vec2::new(400.0, 100.0),
                ..BodyConfig::default()
            },
            BodyConfig {
                position: Vec2::new(800.0, 100.0),
                drag: Some(0.5),
                ..BodyConfig::default()
            },
        ],
        ..SimulationConfig::default()
    }
}
