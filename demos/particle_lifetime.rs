//! Prints the attribute values of a single particle over its lifetime.
//!
//! Run with `RUST_LOG=dynattr=trace` to see curve processing.

use dynattr::{
    Attribute, CurvedAttribute, DynamicAttribute, InterpolationType, OscillateAttribute,
    OscillationType, RandomAttribute, calculate,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(42);
    let mut rng = StdRng::seed_from_u64(seed);

    // Fade in quickly, fade out slowly
    let mut alpha = CurvedAttribute::with_interpolation(InterpolationType::Spline);
    alpha.add_control_point(0.0, 0.0);
    alpha.add_control_point(1.0, 0.0);
    alpha.add_control_point(0.15, 1.0);
    alpha.add_control_point(0.6, 0.8);

    let size: DynamicAttribute =
        CurvedAttribute::from_points(InterpolationType::Linear, [(0.0, 0.2), (1.0, 1.5)]).into();
    let speed: DynamicAttribute = RandomAttribute::new(2.0, 3.5).into();
    let shimmer: DynamicAttribute = OscillateAttribute::new(OscillationType::Sine)
        .with_frequency(3.0)
        .with_base(1.0)
        .with_amplitude(0.1)
        .into();
    let alpha: DynamicAttribute = alpha.into();
    let spin: Option<DynamicAttribute> = None;

    println!("seed {seed}");
    println!(
        "{:>6} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "age", "alpha", "size", "speed", "shimmer", "spin"
    );
    let steps = 20;
    for step in 0..=steps {
        let age = step as f64 / steps as f64;
        println!(
            "{:>6.2} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3}",
            age,
            alpha.value(age),
            size.value(age),
            speed.sample(age, &mut rng),
            shimmer.value(age),
            calculate(spin.as_ref(), age, 0.0),
        );
    }

    Ok(())
}
