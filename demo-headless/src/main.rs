use clap::Parser;
use ignis_core::{
    assess, EnvironmentType, FireOrigin, Hazard, LayoutRegistry, Severity, SituationAnalysis,
    SpreadParameters, UrgencyLevel, Vec2,
};

/// Incident assessment demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "ignis-demo")]
#[command(about = "Fire incident spatial assessment demo", long_about = None)]
struct Args {
    /// Environment type (apartment, office, school, forest, warehouse)
    #[arg(short, long, default_value = "apartment")]
    environment: String,

    /// Fire origin area description (matched against room names)
    #[arg(short, long, default_value = "kitchen")]
    area: String,

    /// Floor number
    #[arg(short, long, default_value_t = 2)]
    floor: i32,

    /// Explicit fire origin x coordinate (overrides area matching)
    #[arg(long)]
    x: Option<f32>,

    /// Explicit fire origin y coordinate (overrides area matching)
    #[arg(long)]
    y: Option<f32>,

    /// Starting room id for evacuation paths
    #[arg(long)]
    start_room: Option<String>,

    /// Simulation seed
    #[arg(long, default_value_t = 42)]
    seed: u32,

    /// Simulation duration in seconds
    #[arg(short, long, default_value_t = 10.0)]
    duration: f32,

    /// Speed multiplier applied to each tick
    #[arg(long, default_value_t = 1.0)]
    speed: f32,

    /// Spread intensity multiplier
    #[arg(long, default_value_t = 1.0)]
    intensity: f32,

    /// Report interval in seconds
    #[arg(short, long, default_value_t = 1.0)]
    report_interval: f32,
}

fn parse_environment(value: &str) -> EnvironmentType {
    match value.to_lowercase().as_str() {
        "office" => EnvironmentType::Office,
        "school" => EnvironmentType::School,
        "forest" => EnvironmentType::Forest,
        "warehouse" => EnvironmentType::Warehouse,
        _ => EnvironmentType::Apartment,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let environment = parse_environment(&args.environment);

    let coordinates = match (args.x, args.y) {
        (Some(x), Some(y)) => Some(Vec2::new(x, y)),
        _ => None,
    };

    let analysis = SituationAnalysis {
        environment,
        environment_confidence: 85.0,
        fire_origin: FireOrigin {
            floor: args.floor,
            area: args.area.clone(),
            coordinates,
            confidence: 80.0,
        },
        landmarks: vec![],
        hazards: vec![Hazard {
            kind: "Active fire".to_string(),
            location: args.area.clone(),
            severity: Severity::High,
            confidence: 95.0,
        }],
        urgency: UrgencyLevel::High,
        inferred: true,
    };

    let registry = LayoutRegistry::builtin();
    let Some(layout) = registry.get(environment) else {
        eprintln!("no layout template for environment '{}'", args.environment);
        std::process::exit(1);
    };

    println!("=== Incident Assessment ===");
    println!("Layout: {} ({})", layout.name, environment.label());
    println!("Fire origin: floor {}, area '{}'", args.floor, args.area);

    let result = assess(layout, &analysis, args.start_room.as_deref());
    println!(
        "Fire point resolved to ({:.1}, {:.1})",
        result.fire_point.x, result.fire_point.y
    );

    println!("\n--- Risk zones ({}) ---", result.risk_zones.len());
    for zone in &result.risk_zones {
        println!(
            "  {:<24} {:<7} confidence {:>4.0}%",
            zone.id,
            zone.severity.label(),
            zone.confidence
        );
    }

    println!("\n--- Evacuation paths ({}) ---", result.safe_paths.len());
    for path in &result.safe_paths {
        println!("  [{}] {}", path.priority, path.description);
    }

    println!("\n--- Strike nodes ({}) ---", result.strike_nodes.len());
    for node in &result.strike_nodes {
        println!(
            "  [{:>2}] {:<24} at ({:.1}, {:.1})",
            node.priority, node.id, node.position.x, node.position.y
        );
    }

    println!("\n--- Uncertainty markers ---");
    if result.reasoning.uncertainty_markers.is_empty() {
        println!("  none");
    }
    for marker in &result.reasoning.uncertainty_markers {
        println!("  {}: {}", marker.field, marker.explanation);
    }

    println!("\n=== Fire Spread Simulation ===");
    let params = SpreadParameters::default()
        .with_seed(args.seed)
        .with_intensity(args.intensity);
    let mut session = result.start_spread_session(layout, params);

    let tick = 1.0 / 60.0;
    let mut next_report = args.report_interval;
    while session.elapsed() < args.duration {
        session.step(tick * args.speed);
        if session.elapsed() >= next_report {
            println!(
                "  t={:>5.1}s  particles={:>4}  frontier={:>3}",
                session.elapsed(),
                session.particles().len(),
                session.frontier().len()
            );
            next_report += args.report_interval;
        }
    }

    println!(
        "\nFinal state: {} particles, {} frontier points after {:.1}s",
        session.particles().len(),
        session.frontier().len(),
        session.elapsed()
    );
}
