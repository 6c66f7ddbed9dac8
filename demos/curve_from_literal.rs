//! Builds curves from compile-time control point literals and compares
//! linear and spline interpolation.

use dynattr::{Attribute, CurvedAttribute, InterpolationType, control_points};

fn main() {
    let points = control_points!("0 0, 0.25 1, 0.5 0.2, 1 0");
    let linear = CurvedAttribute::from_points(InterpolationType::Linear, points);
    let spline = CurvedAttribute::from_points(InterpolationType::Spline, points);

    println!("{:>6} {:>8} {:>8}", "x", "linear", "spline");
    for step in 0..=16 {
        let x = step as f64 / 16.0;
        println!("{:>6.3} {:>8.3} {:>8.3}", x, linear.value(x), spline.value(x));
    }
}
