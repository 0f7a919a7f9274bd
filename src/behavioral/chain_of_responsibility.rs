//! Chain of responsibility: a help request travels from a widget up through
//! its containers until one of them can answer it.

use thiserror::Error;
use tracing::debug;

pub type ComponentId = usize;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("no component with id {0}")]
    UnknownComponent(ComponentId),
    #[error("component {0} cannot hold children")]
    NotAContainer(ComponentId),
    #[error("component {0} already belongs to a container")]
    AlreadyAttached(ComponentId),
    #[error("attaching {child} to {container} would make a cycle")]
    Cycle {
        container: ComponentId,
        child: ComponentId,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ComponentKind {
    Button,
    Panel {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        modal_help_text: Option<String>,
    },
    Dialog {
        wiki_page_url: Option<String>,
    },
}

impl ComponentKind {
    fn is_container(&self) -> bool {
        matches!(self, ComponentKind::Panel { .. } | ComponentKind::Dialog { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpResponse {
    Tooltip(String),
    Modal(String),
    Wiki(String),
    Unhandled,
}

#[derive(Debug)]
struct Component {
    kind: ComponentKind,
    tooltip_text: Option<String>,
    container: Option<ComponentId>,
    children: Vec<ComponentId>,
}

/// Arena holding every widget; links between widgets are ids.
#[derive(Debug, Default)]
pub struct ComponentTree {
    components: Vec<Component>,
}

impl ComponentTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: ComponentKind, tooltip_text: Option<&str>) -> ComponentId {
        let id = self.components.len();
        self.components.push(Component {
            kind,
            tooltip_text: tooltip_text.filter(|t| !t.is_empty()).map(str::to_string),
            container: None,
            children: Vec::new(),
        });
        id
    }

    pub fn add_button(&mut self, tooltip_text: Option<&str>) -> ComponentId {
        self.push(ComponentKind::Button, tooltip_text)
    }

    pub fn add_panel(
        &mut self,
        (x, y): (i32, i32),
        (width, height): (u32, u32),
        modal_help_text: Option<&str>,
    ) -> ComponentId {
        let kind = ComponentKind::Panel {
            x,
            y,
            width,
            height,
            modal_help_text: modal_help_text.map(str::to_string),
        };
        self.push(kind, None)
    }

    pub fn add_dialog(&mut self, title: &str, wiki_page_url: Option<&str>) -> ComponentId {
        let kind = ComponentKind::Dialog {
            wiki_page_url: wiki_page_url.map(str::to_string),
        };
        self.push(kind, Some(title))
    }

    pub fn set_tooltip(&mut self, id: ComponentId, text: Option<&str>) -> Result<(), ChainError> {
        let component = self
            .components
            .get_mut(id)
            .ok_or(ChainError::UnknownComponent(id))?;
        component.tooltip_text = text.filter(|t| !t.is_empty()).map(str::to_string);
        Ok(())
    }

    /// Put `child` inside `container`, which becomes the next link of its chain.
    pub fn attach(&mut self, container: ComponentId, child: ComponentId) -> Result<(), ChainError> {
        let parent = self
            .components
            .get(container)
            .ok_or(ChainError::UnknownComponent(container))?;
        if !parent.kind.is_container() {
            return Err(ChainError::NotAContainer(container));
        }
        if self.ancestors(container).any(|ancestor| ancestor == child) {
            return Err(ChainError::Cycle { container, child });
        }
        let node = self
            .components
            .get_mut(child)
            .ok_or(ChainError::UnknownComponent(child))?;
        if node.container.is_some() {
            return Err(ChainError::AlreadyAttached(child));
        }
        node.container = Some(container);
        self.components[container].children.push(child);
        Ok(())
    }

    pub fn children(&self, id: ComponentId) -> &[ComponentId] {
        self.components
            .get(id)
            .map_or(&[][..], |component| component.children.as_slice())
    }

    /// `id` itself, then each enclosing container up to the root.
    fn ancestors(&self, id: ComponentId) -> impl Iterator<Item = ComponentId> + '_ {
        std::iter::successors(Some(id), |&current| {
            self.components.get(current).and_then(|c| c.container)
        })
    }

    pub fn show_help(&self, id: ComponentId) -> Result<HelpResponse, ChainError> {
        let mut current = Some(id);
        while let Some(cid) = current {
            let component = self
                .components
                .get(cid)
                .ok_or(ChainError::UnknownComponent(cid))?;

            let answer = match &component.kind {
                ComponentKind::Panel {
                    modal_help_text: Some(text),
                    ..
                } => Some(HelpResponse::Modal(text.clone())),
                ComponentKind::Dialog {
                    wiki_page_url: Some(url),
                } => Some(HelpResponse::Wiki(url.clone())),
                _ => component.tooltip_text.clone().map(HelpResponse::Tooltip),
            };

            if let Some(answer) = answer {
                debug!(requested = id, handled_by = cid, "help request handled");
                return Ok(answer);
            }
            current = component.container;
        }
        Ok(HelpResponse::Unhandled)
    }
}

pub fn demo() -> Result<Vec<String>, ChainError> {
    let mut tree = ComponentTree::new();
    let dialog = tree.add_dialog("Budget Reports", Some("https://wiki.example.com/budget"));
    let panel = tree.add_panel((0, 0), (400, 800), Some("This panel does..."));
    let ok = tree.add_button(Some("This is an OK button"));
    let cancel = tree.add_button(None);

    tree.attach(panel, ok)?;
    tree.attach(panel, cancel)?;
    tree.attach(dialog, panel)?;

    let mut lines = Vec::new();
    for (name, id) in [("ok", ok), ("cancel", cancel), ("panel", panel), ("dialog", dialog)] {
        lines.push(format!("{name}: {:?}", tree.show_help(id)?));
    }
    Ok(lines)
}
