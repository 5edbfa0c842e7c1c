//! Host integration hooks.
//!
//! The surrounding application (editor, file manager, workspace loader)
//! plugs in here. Every hook returns whether the host handled the request;
//! the interpreter falls back to simulated output when it did not.

/// Callbacks into the host application.
pub trait HostHooks {
    /// Run the project currently open in the editor.
    fn run_project(&mut self) -> bool {
        false
    }

    /// Persist a file created from the terminal.
    fn save_file(&mut self, _name: &str, _contents: &str) -> bool {
        false
    }

    /// Open the Sacred Platform workspace.
    fn open_workspace(&mut self) -> bool {
        false
    }

    /// Turn meditation mode on or off in the host UI.
    fn set_meditation(&mut self, _active: bool) -> bool {
        false
    }
}

/// Hooks for a terminal with no host attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl HostHooks for NoHooks {}
