use crate::config::ProgressConfig;
use derive_more::{Display, From};

#[derive(Debug, Clone, Copy, PartialEq, Default, Display)]
#[display("({x}, {y})")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, From)]
#[display("{width}x{height}")]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn around(center: Point, radius: f64) -> Self {
        Self {
            left: center.x - radius,
            top: center.y - radius,
            right: center.x + radius,
            bottom: center.y + radius,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub center: Point,
    pub bounds: Bounds,
    pub radius: f64,
    pub stroke_width: f64,
}

impl Geometry {
    pub fn compute(size: Size, config: &ProgressConfig) -> Option<Self> {
        if size.is_empty() {
            return None;
        }
        // whole-pixel center, odd sizes round down
        let center = Point::new((size.width / 2) as f64, (size.height / 2) as f64);
        Some(Self {
            center,
            bounds: Bounds::around(center, config.circle_radius),
            radius: config.circle_radius,
            stroke_width: config.stroke_thickness,
        })
    }
}
