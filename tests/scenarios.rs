use rigid2d::common::BodyConfig;
use rigid2d::world::boundary::DEFAULT_BOUNCE_DAMPING;
use rigid2d::{
    check_collision, resolve_collision, Boundary, PhysicsWorld, RigidBody, Shape, Simulation,
    SimulationConfig, Vec2, Wall,
};

const DT: f64 = 0.016;
const EPSILON: f64 = 1e-9;

fn head_on_world() -> PhysicsWorld {
    let mut world = PhysicsWorld::with_gravity(Vec2::ZERO);
    let shape = Shape::circle(30.0).unwrap();
    world.add_body(
        RigidBody::new(1.0, shape.clone())
            .unwrap()
            .with_position(Vec2::new(300.0, 100.0))
            .with_velocity(Vec2::new(100.0, 0.0)),
    );
    world.add_body(
        RigidBody::new(1.0, shape)
            .unwrap()
            .with_position(Vec2::new(900.0, 100.0))
            .with_velocity(Vec2::new(-100.0, 0.0)),
    );
    world
}

#[test]
fn head_on_circles_first_touch_after_gap_closes() {
    let mut world = head_on_world();

    let mut first_contact_step = None;
    for step in 1..=400 {
        world.step(DT);
        if !world.contacts.is_empty() {
            first_contact_step = Some(step);
            break;
        }
        assert_eq!(world.bodies[0].velocity, Vec2::new(100.0, 0.0));
        assert_eq!(world.bodies[1].velocity, Vec2::new(-100.0, 0.0));
    }

    // The 540px gap closes at 200px/s: 2.7s, first seen on step 169.
    let step = first_contact_step.expect("circles never touched");
    assert_eq!(step, 169);
    let time = step as f64 * DT;
    assert!(time >= 2.7 && time < 2.7 + DT);

    let manifold = world.contacts[0];
    assert_eq!((manifold.body_a_idx, manifold.body_b_idx), (0, 1));
    assert!((manifold.normal - Vec2::new(1.0, 0.0)).magnitude() < EPSILON);

    // e = min(0.8, 0.8): j = 1.8 * 200 / 2 = 180
    assert!((world.bodies[0].velocity - Vec2::new(-80.0, 0.0)).magnitude() < EPSILON);
    assert!((world.bodies[1].velocity - Vec2::new(80.0, 0.0)).magnitude() < EPSILON);

    // Moving apart from now on: no further contacts.
    for _ in 0..20 {
        world.step(DT);
        assert!(world.contacts.is_empty());
    }
}

#[test]
fn head_on_circles_elastic_swap_velocities() {
    let mut world = head_on_world();
    for body in world.bodies.iter_mut() {
        body.restitution = 1.0;
    }
    world.bodies[1].velocity = Vec2::new(-40.0, 0.0);

    while world.contacts.is_empty() {
        world.step(DT);
    }

    assert!((world.bodies[0].velocity.x - -40.0).abs() < EPSILON);
    assert!((world.bodies[1].velocity.x - 100.0).abs() < EPSILON);
}

#[test]
fn simulation_reports_head_on_collision() {
    let config = SimulationConfig {
        gravity: Vec2::ZERO,
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::new(&config).unwrap();

    let report = loop {
        let report = sim.update();
        if !report.contacts.is_empty() {
            break report;
        }
        assert!(report.frame < 400);
    };

    assert_eq!(report.frame, 169);
    assert_eq!(report.contacts, vec![(0, 1)]);
    assert!(sim.world.bodies[0].velocity.x < 0.0);
    assert!(sim.world.bodies[1].velocity.x > 0.0);

    let summary = sim.run();
    assert_eq!(summary.collisions, 1);
    assert!(summary.simulated_time > 10.0);
}

fn falling_ball_bounce(restitution: f64) {
    let mut world = PhysicsWorld::with_gravity(Vec2::new(0.0, 98.0));
    world.add_body(
        RigidBody::new(1.0, Shape::circle(30.0).unwrap())
            .unwrap()
            .with_position(Vec2::new(600.0, 0.0))
            .with_restitution(restitution),
    );
    let boundary = Boundary::new(1200.0, 800.0, DEFAULT_BOUNCE_DAMPING).unwrap();

    for _ in 0..1000 {
        world.step(DT);
        let before = world.bodies[0].velocity.y;
        let hits = boundary.contain(&mut world.bodies[0]);
        if hits.contains(&Wall::Bottom) {
            assert!(before > 0.0, "ball should be falling when it hits the floor");
            assert_eq!(world.bodies[0].position.y, 770.0);
            let after = world.bodies[0].velocity.y;
            assert!((after - -DEFAULT_BOUNCE_DAMPING * before).abs() < EPSILON);
            return;
        }
    }
    panic!("ball never reached the floor");
}

#[test]
fn falling_ball_rebounds_off_floor_with_boundary_damping() {
    falling_ball_bounce(0.8);
}

#[test]
fn floor_bounce_ignores_body_restitution() {
    falling_ball_bounce(0.1);
}

#[test]
fn primitive_pair_path_matches_world_step() {
    let config = SimulationConfig {
        gravity: Vec2::new(0.0, 98.0),
        bodies: vec![
            BodyConfig {
                position: Vec2::new(100.0, 100.0),
                velocity: Vec2::new(50.0, 0.0),
                ..BodyConfig::default()
            },
            BodyConfig {
                position: Vec2::new(150.0, 100.0),
                velocity: Vec2::new(-20.0, 5.0),
                restitution: 0.4,
                ..BodyConfig::default()
            },
            BodyConfig {
                shape: rigid2d::common::ShapeConfig::Rectangle {
                    width: 200.0,
                    height: 20.0,
                },
                mass: 0.0,
                position: Vec2::new(130.0, 135.0),
                ..BodyConfig::default()
            },
        ],
        ..SimulationConfig::default()
    };

    let mut stepped = config.build_world().unwrap();
    let mut manual = config.build_world().unwrap();

    for _ in 0..30 {
        stepped.step(DT);

        manual.integrate_bodies(DT);
        let n = manual.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if let Some(m) = check_collision(&manual.bodies[i], i, &manual.bodies[j], j) {
                    let (head, tail) = manual.bodies.split_at_mut(j);
                    resolve_collision(&mut head[i], &mut tail[0], &m);
                }
            }
        }

        assert_eq!(stepped.bodies, manual.bodies);
    }
}

#[test]
fn config_file_scene_runs() {
    let json = r#"{
        "duration": 1.0,
        "bodies": [
            {"shape": {"type": "circle", "radius": 8}, "mass": 2, "position": {"x": 600, "y": 700}},
            {"shape": {"type": "rectangle", "width": 150, "height": 2}, "mass": 0, "position": {"x": 600, "y": 720}}
        ]
    }"#;
    let config = SimulationConfig::from_json_str(json).unwrap();
    let mut sim = Simulation::new(&config).unwrap();
    let summary = sim.run();
    assert!(summary.collisions >= 1);
    // The plank never moves.
    assert_eq!(sim.world.bodies[1].position, Vec2::new(600.0, 720.0));
    // Ball centre stays above the plank's top edge.
    assert!(sim.world.bodies[0].position.y < 719.0);
}
