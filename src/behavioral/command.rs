//! Command: a request wrapped in an object so it can be queued, logged and undone.

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileSystemError {
    #[error("no such file: {0}")]
    NotFound(String),
    #[error("destination already exists: {0}")]
    AlreadyExists(String),
}

/// Receiver for file commands. Tracks file names and a log of renames.
#[derive(Debug, Default)]
pub struct FileSystem {
    files: BTreeSet<String>,
    log: Vec<String>,
}

impl FileSystem {
    pub fn with_files<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: names.into_iter().map(Into::into).collect(),
            log: Vec::new(),
        }
    }

    pub fn exists(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    pub fn rename(&mut self, src: &str, dest: &str) -> Result<(), FileSystemError> {
        if !self.files.contains(src) {
            return Err(FileSystemError::NotFound(src.to_string()));
        }
        if self.files.contains(dest) {
            return Err(FileSystemError::AlreadyExists(dest.to_string()));
        }
        self.files.remove(src);
        self.files.insert(dest.to_string());
        self.log.push(format!("rename {src} to {dest}"));
        Ok(())
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }
}

pub trait Command {
    fn execute(&self, fs: &mut FileSystem) -> Result<(), FileSystemError>;
    fn undo(&self, fs: &mut FileSystem) -> Result<(), FileSystemError>;
    fn describe(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveFileCommand {
    src: String,
    dest: String,
}

impl MoveFileCommand {
    pub fn new(src: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            dest: dest.into(),
        }
    }
}

impl Command for MoveFileCommand {
    fn execute(&self, fs: &mut FileSystem) -> Result<(), FileSystemError> {
        fs.rename(&self.src, &self.dest)
    }

    fn undo(&self, fs: &mut FileSystem) -> Result<(), FileSystemError> {
        fs.rename(&self.dest, &self.src)
    }

    fn describe(&self) -> String {
        format!("move {} -> {}", self.src, self.dest)
    }
}

/// Executed commands, most recent last.
#[derive(Default)]
pub struct CommandHistory {
    done: Vec<Box<dyn Command>>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the command and records it only when it succeeded.
    pub fn execute(
        &mut self,
        command: Box<dyn Command>,
        fs: &mut FileSystem,
    ) -> Result<(), FileSystemError> {
        command.execute(fs)?;
        debug!(command = %command.describe(), "executed");
        self.done.push(command);
        Ok(())
    }

    /// Returns `Ok(false)` when there is nothing to undo.
    pub fn undo_last(&mut self, fs: &mut FileSystem) -> Result<bool, FileSystemError> {
        let Some(command) = self.done.pop() else {
            return Ok(false);
        };
        if let Err(err) = command.undo(fs) {
            self.done.push(command);
            return Err(err);
        }
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }
}

pub fn demo() -> Result<Vec<String>, FileSystemError> {
    let mut fs = FileSystem::with_files(["1"]);
    let mut history = CommandHistory::new();

    history.execute(Box::new(MoveFileCommand::new("1", "2")), &mut fs)?;
    history.execute(Box::new(MoveFileCommand::new("2", "3")), &mut fs)?;
    history.undo_last(&mut fs)?;
    history.undo_last(&mut fs)?;

    Ok(fs.log().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_then_undo_restores_name() {
        let mut fs = FileSystem::with_files(["a.txt"]);
        let cmd = MoveFileCommand::new("a.txt", "b.txt");

        cmd.execute(&mut fs).unwrap();
        assert!(fs.exists("b.txt"));
        assert!(!fs.exists("a.txt"));

        cmd.undo(&mut fs).unwrap();
        assert!(fs.exists("a.txt"));
        assert_eq!(fs.log(), &["rename a.txt to b.txt", "rename b.txt to a.txt"]);
    }

    #[test]
    fn test_failed_command_is_not_recorded() {
        let mut fs = FileSystem::with_files(["a"]);
        let mut history = CommandHistory::new();
        let result = history.execute(Box::new(MoveFileCommand::new("missing", "b")), &mut fs);
        assert_eq!(result, Err(FileSystemError::NotFound("missing".into())));
        assert!(history.is_empty());
    }

    #[test]
    fn test_rename_onto_existing_file_fails() {
        let mut fs = FileSystem::with_files(["a", "b"]);
        assert_eq!(fs.rename("a", "b"), Err(FileSystemError::AlreadyExists("b".into())));
    }

    #[test]
    fn test_undo_with_empty_history() {
        let mut fs = FileSystem::default();
        let mut history = CommandHistory::new();
        assert_eq!(history.undo_last(&mut fs), Ok(false));
    }

    #[test]
    fn test_undo_order_is_lifo() {
        let mut fs = FileSystem::with_files(["x"]);
        let mut history = CommandHistory::new();
        history.execute(Box::new(MoveFileCommand::new("x", "y")), &mut fs).unwrap();
        history.execute(Box::new(MoveFileCommand::new("y", "z")), &mut fs).unwrap();
        assert_eq!(history.len(), 2);

        assert_eq!(history.undo_last(&mut fs), Ok(true));
        assert!(fs.exists("y"));
        assert_eq!(history.undo_last(&mut fs), Ok(true));
        assert!(fs.exists("x"));
    }

    #[test]
    fn test_demo_log() {
        let log = demo().unwrap();
        assert_eq!(log.first().map(String::as_str), Some("rename 1 to 2"));
        assert_eq!(log.len(), 4);
    }
}
