use std::fmt;

/// Game category selectable from the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameType {
    Shining,
    #[default]
    Infinity,
    Deepspace,
}

impl GameType {
    /// Tab order as shown in the header.
    pub const ALL: [Self; 3] = [Self::Shining, Self::Infinity, Self::Deepspace];

    /// Path segment used by the code-listing endpoint.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Shining => "shining",
            Self::Infinity => "infinity",
            Self::Deepspace => "deepspace",
        }
    }

    /// Name of the backend table the listing is served from.
    #[must_use]
    pub const fn backend_name(self) -> &'static str {
        match self {
            Self::Shining => "ShiningNikki",
            Self::Infinity => "InfinityNikki",
            Self::Deepspace => "DeepSpace",
        }
    }

    /// Translation key for the tab label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Shining => "game.shining",
            Self::Infinity => "game.infinity",
            Self::Deepspace => "game.deepspace",
        }
    }

    /// DOM id of the tab control for this category.
    #[must_use]
    pub const fn tab_id(self) -> &'static str {
        match self {
            Self::Shining => "tab-shining",
            Self::Infinity => "tab-infinity",
            Self::Deepspace => "tab-deepspace",
        }
    }

    /// Endpoint path relative to the deployment base, without a leading slash.
    #[must_use]
    pub fn api_path(self) -> String {
        format!("api/codes/{}", self.slug())
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
