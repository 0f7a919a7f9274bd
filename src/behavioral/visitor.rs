//! Visitor: export operations live in a visitor, not in the shape types.
//!
//! Adding a new export means writing a new [`Visitor`]. Adding a new shape
//! means touching every visitor, so the shape set is expected to stay small.

use itertools::Itertools;

pub trait Shape {
    fn id(&self) -> u32;
    fn move_by(&mut self, dx: f64, dy: f64);
    fn accept(&self, visitor: &mut dyn Visitor);
}

pub trait Visitor {
    fn visit_dot(&mut self, dot: &Dot);
    fn visit_circle(&mut self, circle: &Circle);
    fn visit_rectangle(&mut self, rectangle: &Rectangle);
    fn visit_compound_shape(&mut self, compound: &CompoundShape);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub struct CompoundShape {
    pub id: u32,
    pub children: Vec<Box<dyn Shape>>,
}

impl Shape for Dot {
    fn id(&self) -> u32 {
        self.id
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_dot(self);
    }
}

impl Shape for Circle {
    fn id(&self) -> u32 {
        self.id
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_circle(self);
    }
}

impl Shape for Rectangle {
    fn id(&self) -> u32 {
        self.id
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_rectangle(self);
    }
}

impl Shape for CompoundShape {
    fn id(&self) -> u32 {
        self.id
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        for child in &mut self.children {
            child.move_by(dx, dy);
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_compound_shape(self);
    }
}

/// Writes one XML element per shape.
#[derive(Debug, Default)]
pub struct XmlExportVisitor {
    elements: Vec<String>,
}

impl XmlExportVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> String {
        format!("<shapes>{}</shapes>", self.elements.concat())
    }
}

impl Visitor for XmlExportVisitor {
    fn visit_dot(&mut self, dot: &Dot) {
        self.elements.push(format!(
            r#"<dot id="{}" x="{}" y="{}"/>"#,
            dot.id, dot.x, dot.y
        ));
    }

    fn visit_circle(&mut self, circle: &Circle) {
        self.elements.push(format!(
            r#"<circle id="{}" x="{}" y="{}" radius="{}"/>"#,
            circle.id, circle.x, circle.y, circle.radius
        ));
    }

    fn visit_rectangle(&mut self, rectangle: &Rectangle) {
        self.elements.push(format!(
            r#"<rectangle id="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
            rectangle.id, rectangle.x, rectangle.y, rectangle.width, rectangle.height
        ));
    }

    fn visit_compound_shape(&mut self, compound: &CompoundShape) {
        let mut inner = XmlExportVisitor::new();
        for child in &compound.children {
            child.accept(&mut inner);
        }
        self.elements.push(format!(
            r#"<compound id="{}" children="{}">{}</compound>"#,
            compound.id,
            compound.children.iter().map(|c| c.id()).join(","),
            inner.elements.concat()
        ));
    }
}

pub struct Application {
    shapes: Vec<Box<dyn Shape>>,
}

impl Application {
    pub fn new(shapes: Vec<Box<dyn Shape>>) -> Self {
        Self { shapes }
    }

    pub fn export(&self) -> String {
        let mut visitor = XmlExportVisitor::new();
        for shape in &self.shapes {
            shape.accept(&mut visitor);
        }
        visitor.finish()
    }
}

fn sample_shapes() -> Vec<Box<dyn Shape>> {
    vec![
        Box::new(Circle { id: 1, x: 10.0, y: 10.0, radius: 5.0 }),
        Box::new(Dot { id: 2, x: 1.0, y: 2.0 }),
        Box::new(Rectangle { id: 3, x: 0.0, y: 0.0, width: 4.0, height: 2.0 }),
        Box::new(CompoundShape {
            id: 4,
            children: vec![
                Box::new(Dot { id: 5, x: 3.0, y: 3.0 }),
                Box::new(Circle { id: 6, x: 0.0, y: 0.0, radius: 1.5 }),
            ],
        }),
    ]
}

pub fn demo() -> Vec<String> {
    vec![Application::new(sample_shapes()).export()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_shape_dispatches_to_its_visit_method() {
        #[derive(Default)]
        struct Counter {
            dots: usize,
            circles: usize,
            rectangles: usize,
            compounds: usize,
        }

        impl Visitor for Counter {
            fn visit_dot(&mut self, _: &Dot) {
                self.dots += 1;
            }
            fn visit_circle(&mut self, _: &Circle) {
                self.circles += 1;
            }
            fn visit_rectangle(&mut self, _: &Rectangle) {
                self.rectangles += 1;
            }
            fn visit_compound_shape(&mut self, compound: &CompoundShape) {
                self.compounds += 1;
                for child in &compound.children {
                    child.accept(self);
                }
            }
        }

        let mut counter = Counter::default();
        for shape in sample_shapes() {
            shape.accept(&mut counter);
        }
        assert_eq!(
            (counter.dots, counter.circles, counter.rectangles, counter.compounds),
            (2, 2, 1, 1)
        );
    }

    #[test]
    fn test_xml_export() {
        let app = Application::new(vec![
            Box::new(Dot { id: 1, x: 1.0, y: 2.5 }),
            Box::new(Rectangle { id: 2, x: 0.0, y: 0.0, width: 3.0, height: 4.0 }),
        ]);
        assert_eq!(
            app.export(),
            r#"<shapes><dot id="1" x="1" y="2.5"/><rectangle id="2" x="0" y="0" width="3" height="4"/></shapes>"#
        );
    }

    #[test]
    fn test_compound_export_lists_children() {
        let xml = demo().remove(0);
        assert!(xml.contains(r#"<compound id="4" children="5,6"><dot id="5""#));
        assert!(xml.ends_with("</compound></shapes>"));
    }

    #[test]
    fn test_compound_move_moves_children() {
        let mut compound = CompoundShape {
            id: 1,
            children: vec![Box::new(Dot { id: 2, x: 0.0, y: 0.0 })],
        };
        compound.move_by(2.0, -1.0);
        let mut visitor = XmlExportVisitor::new();
        compound.accept(&mut visitor);
        assert!(visitor.finish().contains(r#"<dot id="2" x="2" y="-1"/>"#));
    }

    #[test]
    fn test_empty_application() {
        assert_eq!(Application::new(Vec::new()).export(), "<shapes></shapes>");
    }
}
