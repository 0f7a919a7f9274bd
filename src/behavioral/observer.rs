//! Observer: listeners subscribe to editor events and get told when they happen.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Open,
    Save,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

pub trait EventListener {
    fn update(&mut self, file_name: &str);
}

type SharedListener = Rc<RefCell<dyn EventListener>>;

#[derive(Default)]
pub struct EventManager {
    listeners: HashMap<EventKind, Vec<(ListenerId, SharedListener)>>,
    next_id: u64,
}

impl EventManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: EventKind, listener: SharedListener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.entry(kind).or_default().push((id, listener));
        id
    }

    /// Returns `false` if `id` was not subscribed to `kind`.
    pub fn unsubscribe(&mut self, kind: EventKind, id: ListenerId) -> bool {
        let Some(list) = self.listeners.get_mut(&kind) else {
            return false;
        };
        let before = list.len();
        list.retain(|(existing, _)| *existing != id);
        before != list.len()
    }

    pub fn notify(&self, kind: EventKind, file_name: &str) -> usize {
        let Some(list) = self.listeners.get(&kind) else {
            return 0;
        };
        for (_, listener) in list {
            listener.borrow_mut().update(file_name);
        }
        debug!(?kind, file_name, listeners = list.len(), "notified");
        list.len()
    }

    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }
}

#[derive(Debug, Default)]
pub struct LoggingListener {
    log_file: String,
    message: String,
    lines: Vec<String>,
}

impl LoggingListener {
    pub fn new(log_file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            log_file: log_file.into(),
            message: message.into(),
            lines: Vec::new(),
        }
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl EventListener for LoggingListener {
    fn update(&mut self, file_name: &str) {
        self.lines.push(format!("{file_name} {}", self.message));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAlert {
    pub to: String,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct EmailAlertsListener {
    email: String,
    message: String,
    outbox: Vec<EmailAlert>,
}

impl EmailAlertsListener {
    pub fn new(email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            message: message.into(),
            outbox: Vec::new(),
        }
    }

    pub fn outbox(&self) -> &[EmailAlert] {
        &self.outbox
    }
}

impl EventListener for EmailAlertsListener {
    fn update(&mut self, file_name: &str) {
        self.outbox.push(EmailAlert {
            to: self.email.clone(),
            body: format!("{}: {file_name}", self.message),
        });
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("no file is open")]
    NoOpenFile,
}

#[derive(Default)]
pub struct Editor {
    pub events: EventManager,
    file: Option<String>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_file(&mut self, path: &str) {
        let name = format!("File path: {path}");
        self.events.notify(EventKind::Open, &name);
        self.file = Some(name);
    }

    pub fn save_file(&self) -> Result<(), EditorError> {
        let Some(name) = self.file.as_deref() else {
            warn!("save requested with no open file");
            return Err(EditorError::NoOpenFile);
        };
        self.events.notify(EventKind::Save, name);
        Ok(())
    }
}

pub fn demo() -> Result<Vec<String>, EditorError> {
    let mut editor = Editor::new();
    let logger = Rc::new(RefCell::new(LoggingListener::new(
        "/path/to/log.txt",
        "was opened",
    )));
    let alerts = Rc::new(RefCell::new(EmailAlertsListener::new(
        "admin@example.com",
        "Someone has changed the file",
    )));

    editor.events.subscribe(EventKind::Open, logger.clone());
    editor.events.subscribe(EventKind::Save, alerts.clone());

    editor.open_file("test.txt");
    editor.save_file()?;

    let mut lines: Vec<String> = logger
        .borrow()
        .lines()
        .iter()
        .map(|line| format!("log: {line}"))
        .collect();
    lines.extend(
        alerts
            .borrow()
            .outbox()
            .iter()
            .map(|alert| format!("mail to {}: {}", alert.to, alert.body)),
    );
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribers_only_get_their_event() {
        let mut editor = Editor::new();
        let opens = Rc::new(RefCell::new(LoggingListener::new("log", "opened")));
        let saves = Rc::new(RefCell::new(LoggingListener::new("log", "saved")));
        editor.events.subscribe(EventKind::Open, opens.clone());
        editor.events.subscribe(EventKind::Save, saves.clone());

        editor.open_file("a.txt");
        assert_eq!(opens.borrow().lines(), &["File path: a.txt opened"]);
        assert!(saves.borrow().lines().is_empty());

        editor.save_file().unwrap();
        assert_eq!(saves.borrow().lines().len(), 1);
        assert_eq!(opens.borrow().lines().len(), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let mut manager = EventManager::new();
        let listener = Rc::new(RefCell::new(LoggingListener::new("log", "x")));
        let id = manager.subscribe(EventKind::Open, listener.clone());
        assert_eq!(manager.listener_count(EventKind::Open), 1);

        assert!(!manager.unsubscribe(EventKind::Save, id));
        assert!(manager.unsubscribe(EventKind::Open, id));
        assert!(!manager.unsubscribe(EventKind::Open, id));
        assert_eq!(manager.notify(EventKind::Open, "f"), 0);
        assert!(listener.borrow().lines().is_empty());
    }

    #[test]
    fn test_same_listener_twice_gets_two_updates() {
        let mut manager = EventManager::new();
        let alerts = Rc::new(RefCell::new(EmailAlertsListener::new("a@b.c", "changed")));
        manager.subscribe(EventKind::Save, alerts.clone());
        manager.subscribe(EventKind::Save, alerts.clone());
        assert_eq!(manager.notify(EventKind::Save, "f"), 2);
        assert_eq!(alerts.borrow().outbox().len(), 2);
        assert_eq!(alerts.borrow().outbox()[0].body, "changed: f");
    }

    #[test]
    fn test_save_without_open_file() {
        let editor = Editor::new();
        assert_eq!(editor.save_file(), Err(EditorError::NoOpenFile));
    }

    #[test]
    fn test_demo() {
        let lines = demo().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("log: "));
        assert!(lines[1].contains("admin@example.com"));
    }
}
