//! Memento: capture an editor's state and put it back later without exposing its fields.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct EditorState {
    text: String,
    cursor_x: usize,
    cursor_y: usize,
    selection_width: usize,
}

/// Opaque saved state. Only an [`Editor`] can read it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    state: EditorState,
}

#[derive(Debug, Default)]
pub struct Editor {
    state: EditorState,
}

impl Editor {
    pub fn new(text: impl Into<String>, cursor: (usize, usize), selection_width: usize) -> Self {
        Self {
            state: EditorState {
                text: text.into(),
                cursor_x: cursor.0,
                cursor_y: cursor.1,
                selection_width,
            },
        }
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.state.cursor_x, self.state.cursor_y)
    }

    pub fn selection_width(&self) -> usize {
        self.state.selection_width
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.text = text.into();
    }

    pub fn set_cursor(&mut self, x: usize, y: usize) {
        self.state.cursor_x = x;
        self.state.cursor_y = y;
    }

    pub fn set_selection_width(&mut self, width: usize) {
        self.state.selection_width = width;
    }

    pub fn create_snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.state = snapshot.state.clone();
    }
}

/// An edit that remembers the editor state it replaced.
#[derive(Debug, Default)]
pub struct EditCommand {
    backup: Option<Snapshot>,
}

impl EditCommand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn make_backup(&mut self, editor: &Editor) {
        self.backup = Some(editor.create_snapshot());
    }

    pub fn replace_text(&mut self, editor: &mut Editor, text: &str) {
        self.make_backup(editor);
        editor.set_text(text);
        editor.set_cursor(text.len(), editor.cursor().1);
        editor.set_selection_width(0);
    }

    /// Returns `false` when there was no backup to restore.
    pub fn undo(&mut self, editor: &mut Editor) -> bool {
        match self.backup.take() {
            Some(snapshot) => {
                editor.restore(&snapshot);
                true
            }
            None => false,
        }
    }
}

pub fn demo() -> Vec<String> {
    let mut editor = Editor::new("draft", (5, 0), 2);
    let mut command = EditCommand::new();
    let mut lines = vec![format!("before: {:?} cursor={:?}", editor.text(), editor.cursor())];

    command.replace_text(&mut editor, "final version");
    lines.push(format!("edited: {:?} cursor={:?}", editor.text(), editor.cursor()));

    command.undo(&mut editor);
    lines.push(format!("undone: {:?} cursor={:?}", editor.text(), editor.cursor()));
    lines
}
