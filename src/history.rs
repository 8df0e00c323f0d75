//! Two-stack undo/redo history for user-executed commands.
//!
//! New commands land on the undo stack and wipe the redo stack; undoing moves
//! a command over to the redo stack and redoing moves it back.

/// A reversible user action
pub trait Command {
    /// Revert the effect of this command
    fn undo(&mut self);

    /// Re-apply the effect of this command after an undo
    fn redo(&mut self);
}

/// Ordered undo/redo history over a command type.
///
/// # Example
/// ```
/// use version_track::history::{Command, CommandHistory};
///
/// struct SetValue {
///     applied: bool,
/// }
///
/// impl Command for SetValue {
///     fn undo(&mut self) {
///         self.applied = false;
///     }
///     fn redo(&mut self) {
///         self.applied = true;
///     }
/// }
///
/// let mut history = CommandHistory::new();
/// history.push(SetValue { applied: true });
/// assert!(!history.undo_last().unwrap().applied);
/// assert!(history.redo_next().unwrap().applied);
/// ```
#[derive(Debug)]
pub struct CommandHistory<C: Command> {
    undo_stack: Vec<C>,
    redo_stack: Vec<C>,
}

impl<C: Command> Default for CommandHistory<C> {
    fn default() -> Self {
        CommandHistory::new()
    }
}

impl<C: Command> CommandHistory<C> {
    /// Create an empty history
    pub fn new() -> Self {
        CommandHistory {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Record a newly executed command.
    ///
    /// Clears the redo stack: once the user does something new, the undone
    /// commands can no longer be replayed.
    pub fn push(&mut self, command: C) {
        self.redo_stack.clear();
        self.undo_stack.push(command);
    }

    /// Undo the most recent command.
    ///
    /// Calls the command's [`Command::undo`], moves it to the redo stack and
    /// returns a reference to it. Returns `None` when there is nothing to
    /// undo.
    pub fn undo_last(&mut self) -> Option<&C> {
        let mut command = self.undo_stack.pop()?;
        command.undo();
        self.redo_stack.push(command);
        self.redo_stack.last()
    }

    /// Redo the most recently undone command.
    ///
    /// Calls the command's [`Command::redo`], moves it back to the undo stack
    /// and returns a reference to it. Returns `None` when there is nothing to
    /// redo.
    pub fn redo_next(&mut self) -> Option<&C> {
        let mut command = self.redo_stack.pop()?;
        command.redo();
        self.undo_stack.push(command);
        self.undo_stack.last()
    }

    /// Number of commands available to undo
    pub fn undoable_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of commands available to redo
    pub fn redoable_len(&self) -> usize {
        self.redo_stack.len()
    }
}
