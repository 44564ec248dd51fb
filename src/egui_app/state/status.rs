/// Tone of the footer status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Info,
    Error,
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLineState {
    /// Main status message text.
    pub text: String,
    /// Badge tone shown next to the status.
    pub tone: StatusTone,
}

impl Default for StatusLineState {
    fn default() -> Self {
        Self {
            text: "Enter a headline to get started".into(),
            tone: StatusTone::Idle,
        }
    }
}
