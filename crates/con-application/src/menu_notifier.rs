//! One-way menu command channel from the back end to any number of listeners.

use con_core::menu::MenuCommand;
use tokio::sync::broadcast;

const CHANNEL_CAPACITY: usize = 32;

/// Broadcasts menu commands. Sending with no listeners is not an error.
#[derive(Debug, Clone)]
pub struct MenuNotifier {
    sender: broadcast::Sender<MenuCommand>,
}

impl MenuNotifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Registers a listener that sees every command sent after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<MenuCommand> {
        self.sender.subscribe()
    }

    /// Delivers `command` to every current listener. Returns how many there were.
    pub fn notify(&self, command: MenuCommand) -> usize {
        match self.sender.send(command) {
            Ok(listeners) => {
                tracing::debug!(
                    "[Menu] {} delivered to {} listener(s)",
                    command.event_name(),
                    listeners
                );
                listeners
            }
            Err(_) => {
                tracing::debug!("[Menu] {} dropped, no listeners", command.event_name());
                0
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for MenuNotifier {
    fn default() -> Self {
        Self::new()
    }
}
