//! Operator overloading on a 2-D vector

use menagerie_core::{MenagerieError, Narrator, Result};
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const DIMENSIONS: usize = 2;

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Component by position: 0 is x, 1 is y
    pub fn component(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(MenagerieError::IndexOutOfRange {
                index,
                len: Self::DIMENSIONS,
            }),
        }
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}

pub fn demo(out: &mut dyn Narrator) -> Result<()> {
    let v1 = Vector2::new(3.0, 4.0);
    let v2 = Vector2::new(1.0, 2.0);

    out.say(format!("v1 = {}", v1));
    out.say(format!("v2 = {}", v2));
    out.blank();
    out.say(format!("v1 + v2 = {}", v1 + v2));
    out.say(format!("v1 - v2 = {}", v1 - v2));
    out.say(format!("v1 * 2 = {}", v1 * 2.0));
    out.say(format!("v1 == v2 = {}", v1 == v2));
    out.say(format!("v1 == Vector(3, 4) = {}", v1 == Vector2::new(3.0, 4.0)));
    out.blank();
    out.say(format!("|v1| = {}", v1.magnitude()));
    out.say(format!("v1[0] = {}, v1[1] = {}", v1.component(0)?, v1.component(1)?));
    if let Err(e) = v1.component(2) {
        out.say(format!("v1[2] -> ✗ {}", e));
    }
    Ok(())
}
