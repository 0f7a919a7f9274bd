//! Adapter: square pegs made to look round so a round hole can accept them.

pub trait RoundShape {
    fn radius(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundHole {
    radius: f64,
}

impl RoundHole {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn fits(&self, peg: &impl RoundShape) -> bool {
        self.radius >= peg.radius()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundPeg {
    radius: f64,
}

impl RoundPeg {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl RoundShape for RoundPeg {
    fn radius(&self) -> f64 {
        self.radius
    }
}

/// Knows nothing about circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquarePeg {
    width: f64,
}

impl SquarePeg {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SquarePegAdapter<'a> {
    peg: &'a SquarePeg,
}

impl<'a> SquarePegAdapter<'a> {
    pub fn new(peg: &'a SquarePeg) -> Self {
        Self { peg }
    }
}

impl RoundShape for SquarePegAdapter<'_> {
    // Smallest circle that still encloses the square.
    fn radius(&self) -> f64 {
        self.peg.width() * std::f64::consts::SQRT_2 / 2.0
    }
}

pub fn demo() -> Vec<String> {
    let hole = RoundHole::new(5.0);
    let round = RoundPeg::new(5.0);
    let small = SquarePeg::new(5.0);
    let large = SquarePeg::new(10.0);

    vec![
        format!("round peg r=5 fits: {}", hole.fits(&round)),
        format!("square peg w=5 fits: {}", hole.fits(&SquarePegAdapter::new(&small))),
        format!("square peg w=10 fits: {}", hole.fits(&SquarePegAdapter::new(&large))),
    ]
}
