//! The list of runnable demos and the dispatch from a name to its transcript.

use std::fmt;

use tracing::{debug, info};

use crate::behavioral::{
    chain_of_responsibility, command, interpreter, iterator, mediator, memento, observer, state,
    strategy, template_method, visitor,
};
use crate::config::CatalogConfig;
use crate::creational::{abstract_factory, builder, factory_method, prototype, singleton};
use crate::error::{find_similar, CatalogError};
use crate::structural::{adapter, bridge, composite, decorator, facade, flyweight, proxy};
use crate::traversal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Behavioral,
    Creational,
    Structural,
    Algorithms,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Behavioral,
        Category::Creational,
        Category::Structural,
        Category::Algorithms,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Behavioral => "Behavioral",
            Category::Creational => "Creational",
            Category::Structural => "Structural",
            Category::Algorithms => "Algorithms",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    ChainOfResponsibility,
    Command,
    Interpreter,
    Iterator,
    Mediator,
    Memento,
    Observer,
    State,
    Strategy,
    TemplateMethod,
    Visitor,
    AbstractFactory,
    Builder,
    FactoryMethod,
    Prototype,
    Singleton,
    Adapter,
    Bridge,
    Composite,
    Decorator,
    Facade,
    Flyweight,
    Proxy,
    Traversal,
}

impl Pattern {
    pub const ALL: [Pattern; 24] = [
        Pattern::ChainOfResponsibility,
        Pattern::Command,
        Pattern::Interpreter,
        Pattern::Iterator,
        Pattern::Mediator,
        Pattern::Memento,
        Pattern::Observer,
        Pattern::State,
        Pattern::Strategy,
        Pattern::TemplateMethod,
        Pattern::Visitor,
        Pattern::AbstractFactory,
        Pattern::Builder,
        Pattern::FactoryMethod,
        Pattern::Prototype,
        Pattern::Singleton,
        Pattern::Adapter,
        Pattern::Bridge,
        Pattern::Composite,
        Pattern::Decorator,
        Pattern::Facade,
        Pattern::Flyweight,
        Pattern::Proxy,
        Pattern::Traversal,
    ];

    /// Command-line name, e.g. `chain-of-responsibility`.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => "chain-of-responsibility",
            Pattern::Command => "command",
            Pattern::Interpreter => "interpreter",
            Pattern::Iterator => "iterator",
            Pattern::Mediator => "mediator",
            Pattern::Memento => "memento",
            Pattern::Observer => "observer",
            Pattern::State => "state",
            Pattern::Strategy => "strategy",
            Pattern::TemplateMethod => "template-method",
            Pattern::Visitor => "visitor",
            Pattern::AbstractFactory => "abstract-factory",
            Pattern::Builder => "builder",
            Pattern::FactoryMethod => "factory-method",
            Pattern::Prototype => "prototype",
            Pattern::Singleton => "singleton",
            Pattern::Adapter => "adapter",
            Pattern::Bridge => "bridge",
            Pattern::Composite => "composite",
            Pattern::Decorator => "decorator",
            Pattern::Facade => "facade",
            Pattern::Flyweight => "flyweight",
            Pattern::Proxy => "proxy",
            Pattern::Traversal => "traversal",
        }
    }

    pub fn category(self) -> Category {
        use Pattern::*;
        match self {
            ChainOfResponsibility | Command | Interpreter | Iterator | Mediator | Memento
            | Observer | State | Strategy | TemplateMethod | Visitor => Category::Behavioral,
            AbstractFactory | Builder | FactoryMethod | Prototype | Singleton => {
                Category::Creational
            }
            Adapter | Bridge | Composite | Decorator | Facade | Flyweight | Proxy => {
                Category::Structural
            }
            Traversal => Category::Algorithms,
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Pattern::ChainOfResponsibility => "help requests climb the widget tree until handled",
            Pattern::Command => "file moves as undoable command objects",
            Pattern::Interpreter => "Roman numerals evaluated from a symbol table",
            Pattern::Iterator => "walk a multiset without exposing its storage",
            Pattern::Mediator => "users talk through a chat room",
            Pattern::Memento => "editor snapshots restored by undo",
            Pattern::Observer => "listeners notified of open and save events",
            Pattern::State => "an audio player whose buttons depend on its state",
            Pattern::Strategy => "swap the arithmetic operation at runtime",
            Pattern::TemplateMethod => "game AI turns with race-specific steps",
            Pattern::Visitor => "export shapes to XML without touching them",
            Pattern::AbstractFactory => "families of GUI widgets per platform",
            Pattern::Builder => "cars and manuals from the same build steps",
            Pattern::FactoryMethod => "dialogs that create their own buttons",
            Pattern::Prototype => "clone shapes through a trait object",
            Pattern::Singleton => "one shared database connection",
            Pattern::Adapter => "square pegs in round holes",
            Pattern::Bridge => "remotes and devices evolve separately",
            Pattern::Composite => "groups of graphics behave like one graphic",
            Pattern::Decorator => "encryption and compression layered on storage",
            Pattern::Facade => "one call over a video conversion subsystem",
            Pattern::Flyweight => "trees share their intrinsic state",
            Pattern::Proxy => "a caching stand-in for a slow video service",
            Pattern::Traversal => "depth-first and breadth-first tree walks",
        }
    }

    /// Look up a pattern by name. Case, `_` and spaces are forgiven; a near
    /// miss comes back as a suggestion.
    pub fn find(name: &str) -> Result<Pattern, CatalogError> {
        let normalized = name.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.name() == normalized)
            .ok_or_else(|| CatalogError::UnknownPattern {
                name: name.to_string(),
                suggestion: find_similar(&normalized, Pattern::ALL.map(Pattern::name)),
            })
    }

    pub fn in_category(category: Category) -> impl Iterator<Item = Pattern> {
        Pattern::ALL
            .into_iter()
            .filter(move |pattern| pattern.category() == category)
    }

    /// Run the demo and return its transcript.
    pub fn run(self, config: &CatalogConfig) -> Result<Vec<String>, CatalogError> {
        info!(pattern = self.name(), "running demo");
        let lines = match self {
            Pattern::ChainOfResponsibility => chain_of_responsibility::demo()?,
            Pattern::Command => command::demo()?,
            Pattern::Interpreter => interpreter::demo(),
            Pattern::Iterator => iterator::demo(),
            Pattern::Mediator => mediator::demo(),
            Pattern::Memento => memento::demo(),
            Pattern::Observer => observer::demo()?,
            Pattern::State => state::demo(),
            Pattern::Strategy => strategy::demo(config.strategy)?,
            Pattern::TemplateMethod => template_method::demo(),
            Pattern::Visitor => visitor::demo(),
            Pattern::AbstractFactory => abstract_factory::demo(config.platform)?,
            Pattern::Builder => builder::demo(),
            Pattern::FactoryMethod => factory_method::demo(config.platform)?,
            Pattern::Prototype => prototype::demo(),
            Pattern::Singleton => singleton::demo(),
            Pattern::Adapter => adapter::demo(),
            Pattern::Bridge => bridge::demo(),
            Pattern::Composite => composite::demo(),
            Pattern::Decorator => {
                decorator::demo(config.encryption_key.as_deref(), config.compression)?
            }
            Pattern::Facade => facade::demo()?,
            Pattern::Flyweight => flyweight::demo(),
            Pattern::Proxy => proxy::demo(),
            Pattern::Traversal => traversal::demo(),
        };
        debug!(pattern = self.name(), lines = lines.len(), "demo finished");
        Ok(lines)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creational::Platform;

    #[test]
    fn test_names_round_trip() {
        for pattern in Pattern::ALL {
            assert_eq!(Pattern::find(pattern.name()).unwrap(), pattern);
            assert_eq!(pattern.to_string(), pattern.name());
        }
    }

    #[test]
    fn test_every_category_populated() {
        let total: usize = Category::ALL
            .iter()
            .map(|&category| Pattern::in_category(category).count())
            .sum();
        assert_eq!(total, Pattern::ALL.len());
        assert_eq!(Pattern::in_category(Category::Creational).count(), 5);
    }

    #[test]
    fn test_find_is_forgiving() {
        assert_eq!(Pattern::find("Template_Method").unwrap(), Pattern::TemplateMethod);
        assert_eq!(Pattern::find(" proxy ").unwrap(), Pattern::Proxy);
    }

    #[test]
    fn test_find_suggests_close_name() {
        match Pattern::find("decorater") {
            Err(CatalogError::UnknownPattern { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("decorator"));
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            Pattern::find("monad"),
            Err(CatalogError::UnknownPattern { suggestion: None, .. })
        ));
    }

    #[test]
    fn test_every_demo_runs_with_default_config() {
        let config = CatalogConfig::default();
        for pattern in Pattern::ALL {
            let lines = pattern.run(&config).unwrap();
            assert!(!lines.is_empty(), "{pattern} produced no output");
        }
    }

    #[test]
    fn test_interpreter_demo_via_catalog() {
        let lines = Pattern::Interpreter.run(&CatalogConfig::default()).unwrap();
        assert!(lines.contains(&"MCMXCIX -> 1999".to_string()));
    }

    #[test]
    fn test_platform_errors_surface() {
        let config = CatalogConfig {
            platform: Platform::Web,
            ..Default::default()
        };
        assert!(matches!(
            Pattern::AbstractFactory.run(&config),
            Err(CatalogError::Factory(_))
        ));
        assert!(Pattern::FactoryMethod.run(&config).is_ok());
    }
}
