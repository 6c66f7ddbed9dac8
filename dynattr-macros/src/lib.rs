use proc_macro::TokenStream;
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Creates an array of `ControlPoint`s at compile time from a string literal.
///
/// The string is parsed at compile time, the points are sorted by `x`
/// (stably, so duplicates keep their written order) and the macro expands to
/// an array literal. Malformed input is a compile error.
///
/// # Format
///
/// A comma-separated list of `x y` pairs, where both coordinates are finite
/// decimal numbers separated by whitespace. A trailing comma is allowed.
///
/// # Examples
///
/// ```ignore
/// use dynattr::{control_points, CurvedAttribute, InterpolationType};
///
/// // Fade in, hold, fade out
/// let points = control_points!("0 0, 0.1 1, 0.9 1, 1 0");
/// let alpha = CurvedAttribute::from_points(InterpolationType::Linear, points);
///
/// // Order in the literal does not matter
/// let same = control_points!("1 0, 0 0, 0.9 1, 0.1 1");
/// ```
#[proc_macro]
pub fn control_points(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let points_str = input.value();

    match parse_points(&points_str) {
        Ok(points) => {
            let points = points.iter().map(|(x, y)| {
                quote! { ::dynattr::ControlPoint::new(#x, #y) }
            });

            let expanded = quote! {
                [#(#points),*]
            };

            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid control points '{}': {}", points_str, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

fn parse_coordinate(s: &str) -> Result<f64, String> {
    let value = s
        .parse::<f64>()
        .map_err(|_| format!("invalid coordinate '{}'", s))?;
    if !value.is_finite() {
        return Err(format!("coordinate '{}' is not finite", s));
    }
    Ok(value)
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let mut parts = s.split_whitespace();
    let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
        return Err(format!("expected 'x y', found '{}'", s.trim()));
    };
    if let Some(extra) = parts.next() {
        return Err(format!("unexpected '{}' after point", extra));
    }

    Ok((parse_coordinate(x)?, parse_coordinate(y)?))
}

fn parse_points(s: &str) -> Result<Vec<(f64, f64)>, String> {
    let mut entries: Vec<&str> = s.split(',').collect();
    // Allow a single trailing comma
    if entries.len() > 1 && entries.last().is_some_and(|e| e.trim().is_empty()) {
        entries.pop();
    }

    if entries.iter().all(|e| e.trim().is_empty()) {
        return Err("no control points".to_string());
    }

    let mut points = entries
        .into_iter()
        .map(parse_point)
        .collect::<Result<Vec<_>, _>>()?;

    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    Ok(points)
}
