use crate::functions::Registry;
use calcexpr_macros::builtin;

pub fn register(registry: &mut Registry) {
    registry.register(sqrt());
    registry.register(floor());
    registry.register(ceil());
    registry.register(abs());
    registry.register(log());
    registry.register(ln());
    registry.register(sin());
    registry.register(cos());
    registry.register(tan());
    registry.register(arcsin());
    registry.register(arccos());
    registry.register(arctan());
    registry.register(max());
    registry.register(min());
}

#[builtin]
fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[builtin]
fn floor(x: f64) -> f64 {
    x.floor()
}

#[builtin]
fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[builtin]
fn abs(x: f64) -> f64 {
    x.abs()
}

/// Logarithm of `x` in base `base`.
#[builtin]
fn log(x: f64, base: f64) -> f64 {
    x.ln() / base.ln()
}

#[builtin]
fn ln(x: f64) -> f64 {
    x.ln()
}

#[builtin]
fn sin(x: f64) -> f64 {
    x.sin()
}

#[builtin]
fn cos(x: f64) -> f64 {
    x.cos()
}

#[builtin]
fn tan(x: f64) -> f64 {
    x.tan()
}

#[builtin]
fn arcsin(x: f64) -> f64 {
    x.asin()
}

#[builtin]
fn arccos(x: f64) -> f64 {
    x.acos()
}

#[builtin]
fn arctan(x: f64) -> f64 {
    x.atan()
}

#[builtin]
fn max(a: f64, b: f64) -> f64 {
    a.max(b)
}

#[builtin]
fn min(a: f64, b: f64) -> f64 {
    a.min(b)
}
