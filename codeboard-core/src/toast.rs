/// How long a toast stays visible.
pub const TOAST_DURATION_MS: u32 = 2000;

/// Transient notification overlay.
///
/// Each [`show`](Self::show) bumps the generation; a hide timer only takes
/// effect for the generation it was scheduled for, so a newer message is
/// never cut short by an older timer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    message: String,
    visible: bool,
    generation: u64,
}

impl ToastState {
    #[must_use]
    pub fn show(&self, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            visible: true,
            generation: self.generation.wrapping_add(1),
        }
    }

    /// Hide the toast if `generation` is still the one on screen.
    #[must_use]
    pub fn expire(&self, generation: u64) -> Option<Self> {
        (self.visible && generation == self.generation).then(|| Self {
            message: self.message.clone(),
            visible: false,
            generation: self.generation,
        })
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}
