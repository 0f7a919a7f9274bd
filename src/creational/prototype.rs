//! Prototype: copy shapes through a trait object without knowing their concrete type.

use std::any::Any;
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBase {
    pub x: i32,
    pub y: i32,
    pub color: String,
}

pub trait Shape: Debug {
    fn base(&self) -> &ShapeBase;
    fn base_mut(&mut self) -> &mut ShapeBase;
    fn clone_box(&self) -> Box<dyn Shape>;
    fn area(&self) -> f64;
    fn as_any(&self) -> &dyn Any;
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub base: ShapeBase,
    pub radius: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub base: ShapeBase,
    pub width: u32,
    pub height: u32,
}

impl Shape for Circle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn area(&self) -> f64 {
        std::f64::consts::PI * f64::from(self.radius).powi(2)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Shape for Rectangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn area(&self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Clone every shape "blindly": each one knows how to copy itself.
pub fn clone_all(shapes: &[Box<dyn Shape>]) -> Vec<Box<dyn Shape>> {
    shapes.iter().map(|shape| shape.clone_box()).collect()
}

pub fn demo() -> Vec<String> {
    let circle = Circle {
        base: ShapeBase { x: 10, y: 10, color: "red".into() },
        radius: 20,
    };
    let mut shapes: Vec<Box<dyn Shape>> = vec![Box::new(circle)];
    let another_circle = shapes[0].clone_box();
    shapes.push(another_circle);
    shapes.push(Box::new(Rectangle {
        base: ShapeBase { x: 0, y: 0, color: "blue".into() },
        width: 10,
        height: 20,
    }));

    let mut copies = clone_all(&shapes);
    copies[0].base_mut().color = "green".into();

    shapes
        .iter()
        .zip(&copies)
        .map(|(original, copy)| format!("{original:?} => {copy:?}"))
        .collect()
}
