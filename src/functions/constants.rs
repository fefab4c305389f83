use std::f64::consts::{E, PI};

pub const PHI: f64 = 1.618_033_988_749_895;

/// Resolves a named constant. The name must already be lowercase.
pub fn lookup(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(PI),
        "e" => Some(E),
        "phi" => Some(PHI),
        _ => None,
    }
}
