use std::collections::VecDeque;

use log::{debug, warn};

use super::{Command, CommandResult, ExecutedCommand};
use crate::document::Document;

/// Number of entries each history stack keeps by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 45;

/// Linear undo/redo history.
///
/// The undo stack holds applied commands with their pre-images, the redo stack
/// holds bare commands that were reverted. A command lives on at most one of
/// the two. Both stacks are bounded and drop their oldest entry on overflow.
#[derive(Debug)]
pub struct CommandHistory {
    /// Stack of commands that can be undone, newest at the back
    undo_stack: VecDeque<ExecutedCommand>,
    /// Stack of commands that can be redone, newest at the back
    redo_stack: VecDeque<Command>,
    capacity: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

fn push_bounded<T>(stack: &mut VecDeque<T>, item: T, capacity: usize) {
    stack.push_back(item);
    while stack.len() > capacity {
        stack.pop_front();
    }
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Execute a command and add it to the history if successful
    pub fn execute(&mut self, command: Command, document: &mut Document) -> CommandResult {
        let executed = ExecutedCommand::execute(command, document)?;
        self.record(executed);
        Ok(())
    }

    /// Records a command that is already applied. Clears the redo stack.
    pub fn record(&mut self, executed: ExecutedCommand) {
        debug!("recording {}", executed.command().name());
        push_bounded(&mut self.undo_stack, executed, self.capacity);
        self.redo_stack.clear();
    }

    /// Undo the last executed command. Returns `false` if there was nothing
    /// to undo.
    pub fn undo(&mut self, document: &mut Document) -> bool {
        let Some(executed) = self.undo_stack.pop_back() else {
            return false;
        };
        let command = executed.revert(document);
        push_bounded(&mut self.redo_stack, command, self.capacity);
        true
    }

    /// Redo the last undone command. Returns `Ok(false)` if there was nothing
    /// to redo. A command that fails to re-execute is dropped.
    pub fn redo(&mut self, document: &mut Document) -> Result<bool, super::CommandError> {
        let Some(command) = self.redo_stack.pop_back() else {
            return Ok(false);
        };
        let name = command.name();
        match ExecutedCommand::execute(command, document) {
            Ok(executed) => {
                push_bounded(&mut self.undo_stack, executed, self.capacity);
                Ok(true)
            }
            Err(err) => {
                warn!("dropping {name} from history, redo failed: {err}");
                Err(err)
            }
        }
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// The commands that can be undone, oldest first.
    pub fn undo_commands(&self) -> impl Iterator<Item = &Command> {
        self.undo_stack.iter().map(ExecutedCommand::command)
    }

    /// The commands that can be redone, oldest first.
    pub fn redo_commands(&self) -> impl Iterator<Item = &Command> {
        self.redo_stack.iter()
    }

    /// Clear the command history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
