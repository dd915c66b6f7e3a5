//! Rendering through a single-method capability.

pub trait Drawable {
    fn draw(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Circle { radius }
    }
}

impl Drawable for Circle {
    fn draw(&self) -> String {
        format!("Circle with radius {}", self.radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Rectangle { width, height }
    }
}

impl Drawable for Rectangle {
    fn draw(&self) -> String {
        format!("Rectangle {}x{}", self.width, self.height)
    }
}

pub fn render(shape: &impl Drawable) -> String {
    format!("Drawing: {}", shape.draw())
}

pub fn render_all(shapes: &[Box<dyn Drawable>]) -> Vec<String> {
    shapes.iter().map(|shape| format!("Drawing: {}", shape.draw())).collect()
}
