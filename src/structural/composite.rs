//! Composite: a group of graphics is itself a graphic.

pub type GraphicId = u32;

/// Axis-aligned bounds: (min x, min y, max x, max y).
pub type Bounds = (f64, f64, f64, f64);

pub trait Graphic {
    fn id(&self) -> GraphicId;
    fn move_by(&mut self, dx: f64, dy: f64);
    fn draw(&self) -> Vec<String>;
    fn bounds(&self) -> Option<Bounds>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub id: GraphicId,
    pub x: f64,
    pub y: f64,
}

impl Graphic for Dot {
    fn id(&self) -> GraphicId {
        self.id
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    fn draw(&self) -> Vec<String> {
        vec![format!("dot at ({}, {})", self.x, self.y)]
    }

    fn bounds(&self) -> Option<Bounds> {
        Some((self.x, self.y, self.x, self.y))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub id: GraphicId,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Graphic for Circle {
    fn id(&self) -> GraphicId {
        self.id
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    fn draw(&self) -> Vec<String> {
        vec![format!(
            "circle at ({}, {}) radius {}",
            self.x, self.y, self.radius
        )]
    }

    fn bounds(&self) -> Option<Bounds> {
        Some((
            self.x - self.radius,
            self.y - self.radius,
            self.x + self.radius,
            self.y + self.radius,
        ))
    }
}

#[derive(Default)]
pub struct CompoundGraphic {
    id: GraphicId,
    children: Vec<Box<dyn Graphic>>,
}

impl CompoundGraphic {
    pub fn new(id: GraphicId) -> Self {
        Self {
            id,
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, child: Box<dyn Graphic>) {
        self.children.push(child);
    }

    /// Detach a direct child by id.
    pub fn remove(&mut self, id: GraphicId) -> Option<Box<dyn Graphic>> {
        let index = self.children.iter().position(|child| child.id() == id)?;
        Some(self.children.remove(index))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Graphic for CompoundGraphic {
    fn id(&self) -> GraphicId {
        self.id
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        for child in &mut self.children {
            child.move_by(dx, dy);
        }
    }

    // Children first, then a dashed frame around all of them.
    fn draw(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.children.iter().flat_map(|c| c.draw()).collect();
        if let Some((x0, y0, x1, y1)) = self.bounds() {
            lines.push(format!("dashed frame ({x0}, {y0})-({x1}, {y1})"));
        }
        lines
    }

    fn bounds(&self) -> Option<Bounds> {
        self.children
            .iter()
            .filter_map(|child| child.bounds())
            .reduce(|(ax0, ay0, ax1, ay1), (bx0, by0, bx1, by1)| {
                (ax0.min(bx0), ay0.min(by0), ax1.max(bx1), ay1.max(by1))
            })
    }
}

pub struct ImageEditor {
    all: CompoundGraphic,
    next_id: GraphicId,
}

impl Default for ImageEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageEditor {
    pub fn new() -> Self {
        Self {
            all: CompoundGraphic::new(0),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> GraphicId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add_dot(&mut self, x: f64, y: f64) -> GraphicId {
        let id = self.allocate_id();
        self.all.add(Box::new(Dot { id, x, y }));
        id
    }

    pub fn add_circle(&mut self, x: f64, y: f64, radius: f64) -> GraphicId {
        let id = self.allocate_id();
        self.all.add(Box::new(Circle { id, x, y, radius }));
        id
    }

    pub fn load(&mut self) {
        self.add_dot(1.0, 2.0);
        self.add_circle(5.0, 3.0, 10.0);
    }

    /// Move the selected top-level graphics into a new group. Unknown ids are skipped.
    pub fn group_selected(&mut self, selection: &[GraphicId]) -> GraphicId {
        let id = self.allocate_id();
        let mut group = CompoundGraphic::new(id);
        for &selected in selection {
            if let Some(component) = self.all.remove(selected) {
                group.add(component);
            }
        }
        self.all.add(Box::new(group));
        id
    }

    pub fn move_graphic(&mut self, id: GraphicId, dx: f64, dy: f64) -> bool {
        match self.all.children.iter_mut().find(|child| child.id() == id) {
            Some(child) => {
                child.move_by(dx, dy);
                true
            }
            None => false,
        }
    }

    pub fn top_level_count(&self) -> usize {
        self.all.len()
    }

    pub fn draw(&self) -> Vec<String> {
        self.all.draw()
    }
}

pub fn demo() -> Vec<String> {
    let mut editor = ImageEditor::new();
    editor.load();
    let dot = editor.add_dot(5.0, 4.0);
    let circle = editor.add_circle(8.0, 9.0, 5.0);

    let group = editor.group_selected(&[dot, circle]);
    editor.move_graphic(group, 1.0, 1.0);
    editor.draw()
}
