use crate::core::Result;
use crate::ui::{UiHandle, WidgetTreeReader};
use crate::wait::WaitCondition;

/// Holds while the active shell's title equals `text`.
#[derive(Debug, Clone)]
pub struct ShellWithTextIsActive {
    ui: UiHandle,
    text: String,
}

impl ShellWithTextIsActive {
    #[must_use]
    pub fn new(ui: UiHandle, text: impl Into<String>) -> Self { Self { ui, text: text.into() } }
}

impl WaitCondition for ShellWithTextIsActive {
    fn test(&self) -> Result<bool> {
        let text = self.text.clone();
        self.ui.sync_try(move |display| match display.active_shell() {
            Some(shell) => Ok(display.text(shell)? == text),
            None => Ok(false),
        })
    }

    fn description(&self) -> String { format!("shell with text '{}' is active", self.text) }
}
