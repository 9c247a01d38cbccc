use clap::Parser;
use skydive_sim_core::{
    AnimationCue, JumperCommand, Posture, SimConfig, SkydiveSimulation, Vec3,
};

/// Skydive simulation demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "skydive-sim-demo")]
#[command(about = "Headless skydive simulation demo", long_about = None)]
struct Args {
    /// Jumper mass in kg
    #[arg(short, long, default_value_t = 80.0)]
    mass: f32,

    /// Freefall drag coefficient
    #[arg(long, default_value_t = 0.5)]
    drag_coefficient: f32,

    /// Freefall surface area in m²
    #[arg(long, default_value_t = 1.0)]
    surface_area: f32,

    /// Wind X component in m/s
    #[arg(long, default_value_t = 15.0)]
    wind_x: f32,

    /// Wind Z component in m/s
    #[arg(long, default_value_t = 10.0)]
    wind_z: f32,

    /// Aircraft speed in m/s
    #[arg(long, default_value_t = 150.0)]
    aircraft_speed: f32,

    /// Exit altitude in m
    #[arg(short, long, default_value_t = 3000.0)]
    exit_altitude: f32,

    /// Deployment altitude in m
    #[arg(short, long, default_value_t = 800.0)]
    deploy_altitude: f32,

    /// Altitude at which to flare in m
    #[arg(short, long, default_value_t = 40.0)]
    flare_altitude: f32,

    /// Freefall posture (belly, stand-up, head-down, tracking, sit-fly, backfly)
    #[arg(short, long, default_value = "head-down")]
    posture: String,

    /// Simulation timestep in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    timestep: f32,
}

fn parse_posture(name: &str) -> Posture {
    match name.to_lowercase().as_str() {
        "belly" | "belly-to-earth" => Posture::BellyToEarth,
        "stand-up" | "standup" => Posture::StandUp,
        "tracking" => Posture::Tracking,
        "sit-fly" | "sitfly" => Posture::SitFly,
        "backfly" => Posture::Backfly,
        _ => Posture::HeadDown,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    println!("=== Skydive Simulation Demo ===\n");

    let config = SimConfig {
        mass: args.mass,
        drag_coefficient: args.drag_coefficient,
        surface_area: args.surface_area,
        wind: Vec3::new(args.wind_x, 0.0, args.wind_z),
        aircraft_velocity: Vec3::new(args.aircraft_speed, 0.0, 0.0),
        aircraft_position: Vec3::new(-2400.0, args.exit_altitude, 0.0),
    };
    let mut sim = SkydiveSimulation::new(&config);
    println!(
        "Jumper: {:.0} kg, Cd {:.2}, area {:.2} m², wind ({:.0}, {:.0}) m/s",
        args.mass, args.drag_coefficient, args.surface_area, args.wind_x, args.wind_z
    );
    println!(
        "Exit at {:.0} m, deploy at {:.0} m, flare at {:.0} m\n",
        args.exit_altitude, args.deploy_altitude, args.flare_altitude
    );

    // A couple of seconds of level flight before the exit
    let mut ticks = (2.0 / args.timestep) as u64;
    for _ in 0..ticks {
        sim.update(args.timestep);
    }

    sim.submit(JumperCommand::Jump);
    sim.submit(JumperCommand::SetPosture(parse_posture(&args.posture)));

    let mut deployed = false;
    let mut flared = false;
    let mut next_report = 0.0;
    ticks = 0;

    loop {
        sim.update(args.timestep);
        ticks += 1;

        let jumper = sim.jumper();
        let altitude = jumper.position().y;

        if !deployed && altitude <= args.deploy_altitude {
            sim.submit(JumperCommand::DeployParachute);
            deployed = true;
        }
        if deployed && !flared && altitude <= args.flare_altitude {
            sim.submit(JumperCommand::Flare);
            flared = true;
        }

        if sim.simulation_time() >= next_report {
            let jumper = sim.jumper();
            println!(
                "t={:7.2}s  alt={:7.1} m  v=({:6.1}, {:6.1}, {:6.1}) m/s  heading={:6.1}°",
                sim.simulation_time(),
                jumper.position().y,
                jumper.velocity().x,
                jumper.velocity().y,
                jumper.velocity().z,
                jumper.heading_yaw().to_degrees(),
            );
            next_report += 5.0;
        }

        if let Some(cue) = sim.take_animation_cue() {
            match cue {
                AnimationCue::Death => println!("\n*** Hard landing at t={:.2}s ***", sim.simulation_time()),
                AnimationCue::Run => println!("\nTouchdown at t={:.2}s, running out", sim.simulation_time()),
                AnimationCue::Walk => println!("Slowing to a walk at t={:.2}s", sim.simulation_time()),
                AnimationCue::Wave => {
                    println!("At rest at t={:.2}s", sim.simulation_time());
                    break;
                }
            }
        }

        if sim.jumper().landed() && sim.jumper().velocity() == Vec3::zeros() {
            break;
        }

        if ticks > 100_000_000 {
            println!("Simulation did not terminate, aborting");
            break;
        }
    }

    let jumper = sim.jumper();
    println!(
        "\nFinal position: ({:.1}, {:.1}, {:.1}) after {:.1} s ({} ticks)",
        jumper.position().x,
        jumper.position().y,
        jumper.position().z,
        sim.simulation_time(),
        ticks
    );
}
