//! Flyweight: thousands of trees share a handful of `TreeType`s.
//!
//! A tree stores only its coordinates and a pointer to the shared type; name,
//! color and texture live once per distinct combination inside the factory.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeType {
    pub name: String,
    pub color: String,
    pub texture: String,
}

impl TreeType {
    pub fn draw(&self, x: f64, y: f64) -> String {
        format!("{} tree ({}, {}) at ({x}, {y})", self.name, self.color, self.texture)
    }
}

/// Hands out one shared [`TreeType`] per (name, color, texture). Safe to share between threads.
#[derive(Debug, Default)]
pub struct TreeFactory {
    types: DashMap<(String, String, String), Arc<TreeType>>,
}

impl TreeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_tree_type(&self, name: &str, color: &str, texture: &str) -> Arc<TreeType> {
        let key = (name.to_string(), color.to_string(), texture.to_string());
        self.types
            .entry(key)
            .or_insert_with(|| {
                debug!(name, color, texture, "new tree type");
                Arc::new(TreeType {
                    name: name.to_string(),
                    color: color.to_string(),
                    texture: texture.to_string(),
                })
            })
            .clone()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}

#[derive(Debug, Clone)]
pub struct Tree {
    pub x: f64,
    pub y: f64,
    tree_type: Arc<TreeType>,
}

impl Tree {
    pub fn tree_type(&self) -> &Arc<TreeType> {
        &self.tree_type
    }

    pub fn draw(&self) -> String {
        self.tree_type.draw(self.x, self.y)
    }
}

#[derive(Debug, Default)]
pub struct Forest {
    factory: TreeFactory,
    trees: Vec<Tree>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plant_tree(&mut self, x: f64, y: f64, name: &str, color: &str, texture: &str) {
        let tree_type = self.factory.get_tree_type(name, color, texture);
        self.trees.push(Tree { x, y, tree_type });
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn distinct_types(&self) -> usize {
        self.factory.type_count()
    }

    pub fn draw(&self) -> Vec<String> {
        self.trees.iter().map(Tree::draw).collect()
    }
}

pub fn demo() -> Vec<String> {
    let mut forest = Forest::new();
    let kinds = [
        ("oak", "green", "rough"),
        ("birch", "white", "smooth"),
        ("pine", "dark green", "needles"),
    ];
    for i in 0..300u32 {
        let (name, color, texture) = kinds[(i % 3) as usize];
        forest.plant_tree(f64::from(i % 20), f64::from(i / 20), name, color, texture);
    }

    let mut lines: Vec<String> = forest.draw().into_iter().take(3).collect();
    lines.push(format!(
        "{} trees share {} tree types",
        forest.trees().len(),
        forest.distinct_types()
    ));
    lines
}
