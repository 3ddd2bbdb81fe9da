use crate::runner::{RunResult, ScriptRunner};
use crate::script::build_script;

/// A macOS banner notification. Empty fields are treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notification {
    pub title: String,
    pub subtitle: String,
    /// The notification message.
    pub informative_text: String,
    /// Not supported by `display notification`; only triggers a warning.
    pub content_image: String,
    /// Name of a system sound, e.g. `Glass`.
    pub sound_name: String,
}

impl Notification {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            informative_text: body.into(),
            ..Self::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn sound_name(mut self, sound_name: impl Into<String>) -> Self {
        self.sound_name = sound_name.into();
        self
    }

    pub fn content_image(mut self, content_image: impl Into<String>) -> Self {
        self.content_image = content_image.into();
        self
    }

    /// Displays the notification by handing the built script to `runner`.
    pub fn send_with(&self, runner: &impl ScriptRunner) -> RunResult<()> {
        if !self.content_image.is_empty() {
            tracing::warn!(
                content_image = %self.content_image,
                "content images are not supported with osascript notifications; ignoring"
            );
        }
        runner.run(&build_script(self))
    }
}
