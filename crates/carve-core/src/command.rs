//! Command dispatch.
//!
//! Editor actions are an explicit enum mapped to session handlers, not
//! closures wired into a UI toolkit. The interactive surface (menus,
//! key bindings) constructs `Command` values and hands them to
//! [`dispatch`]; core logic never touches the surface.

use std::ops::Range;
use std::path::PathBuf;

use crate::session::Session;
use crate::SessionResult;

/// Editor actions the interactive surface can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NewFile,
    OpenFile { path: PathBuf },
    Save,
    SaveAs { path: PathBuf },
    Quit,

    Undo,
    Redo,
    Find { needle: String },
    Cut { range: Range<usize> },
}

impl Command {
    /// Returns the command's display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Command::NewFile => "New",
            Command::OpenFile { .. } => "Open",
            Command::Save => "Save",
            Command::SaveAs { .. } => "Save As",
            Command::Quit => "Exit",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Find { .. } => "Find",
            Command::Cut { .. } => "Cut",
        }
    }
}

/// Executes a command against a session.
///
/// Undo/redo on empty stacks and finds with no matches complete
/// successfully; only I/O and range failures surface as errors.
pub fn dispatch(session: &mut Session, command: Command) -> SessionResult<()> {
    tracing::debug!(command = command.display_name(), "dispatch");

    match command {
        Command::NewFile => session.new_document(),
        Command::OpenFile { path } => session.open(path),
        Command::Save => session.save(),
        Command::SaveAs { path } => session.save_as(path),
        Command::Quit => session.quit(),

        Command::Undo => {
            session.undo();
            Ok(())
        }
        Command::Redo => {
            session.redo();
            Ok(())
        }
        Command::Find { needle } => {
            session.find(&needle);
            Ok(())
        }
        Command::Cut { range } => session.cut(range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_display_names() {
        assert_eq!(Command::Save.display_name(), "Save");
        assert_eq!(Command::Quit.display_name(), "Exit");
        assert_eq!(
            Command::Find {
                needle: "x".to_string()
            }
            .display_name(),
            "Find"
        );
    }

    #[test]
    fn test_dispatch_edit_cycle() {
        let mut session = Session::new(Settings::default());
        session.insert(0, "hello").unwrap();

        dispatch(&mut session, Command::Undo).unwrap();
        assert!(session.document().text().is_empty());

        dispatch(&mut session, Command::Redo).unwrap();
        assert_eq!(session.document().text(), "hello");

        dispatch(
            &mut session,
            Command::Find {
                needle: "ell".to_string(),
            },
        )
        .unwrap();
        assert_eq!(session.match_spans().len(), 1);

        dispatch(&mut session, Command::Quit).unwrap();
        assert!(session.should_quit());
    }

    #[test]
    fn test_dispatch_undo_on_empty_stack_succeeds() {
        let mut session = Session::new(Settings::default());
        assert!(dispatch(&mut session, Command::Undo).is_ok());
        assert!(dispatch(&mut session, Command::Redo).is_ok());
    }
}
