//! Host hooks for the line-mode binary.

use soulphya_terminal::HostHooks;

/// Logs host requests. There is no project runner or workspace here, so
/// only meditation mode reports as handled.
#[derive(Debug, Default)]
pub struct ConsoleHooks {
    meditating: bool,
}

impl HostHooks for ConsoleHooks {
    fn save_file(&mut self, name: &str, contents: &str) -> bool {
        log::debug!("save_file {name} ({} bytes) ignored", contents.len());
        false
    }

    fn set_meditation(&mut self, active: bool) -> bool {
        if self.meditating != active {
            log::info!("Meditation mode {}", if active { "on" } else { "off" });
        }
        self.meditating = active;
        true
    }
}
