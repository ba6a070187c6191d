//! State machine behind the tabbed list view.
//!
//! Every fetch cycle is tagged with a [`LoadTicket`]. Selecting a new tab
//! issues a fresh ticket and puts the view back into loading; a resolved
//! fetch is applied only while its ticket is still the latest, so a slow
//! response for a tab the user already left can never overwrite the list.

use crate::game::GameType;
use crate::listing::Listing;
use crate::source::LoadError;

/// Generation tag of one fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    const FIRST: Self = Self(1);

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A fetch the view is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub game: GameType,
    pub ticket: LoadTicket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Ready(Listing),
    Failed,
}

#[derive(Debug)]
pub enum ViewAction {
    /// A tab was activated.
    Select(GameType),
    /// A fetch cycle finished.
    Resolved {
        ticket: LoadTicket,
        outcome: Result<Listing, LoadError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    game: GameType,
    ticket: LoadTicket,
    phase: ViewPhase,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(GameType::default())
    }
}

impl ViewState {
    /// Initial state: `game` selected and its first fetch pending.
    #[must_use]
    pub const fn new(game: GameType) -> Self {
        Self {
            game,
            ticket: LoadTicket::FIRST,
            phase: ViewPhase::Loading,
        }
    }

    #[must_use]
    pub const fn game(&self) -> GameType {
        self.game
    }

    #[must_use]
    pub const fn ticket(&self) -> LoadTicket {
        self.ticket
    }

    #[must_use]
    pub const fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, ViewPhase::Loading)
    }

    /// The fetch that should be in flight, if the view is loading.
    #[must_use]
    pub const fn pending_request(&self) -> Option<LoadRequest> {
        if self.is_loading() {
            Some(LoadRequest {
                game: self.game,
                ticket: self.ticket,
            })
        } else {
            None
        }
    }

    /// Apply an action. `None` means the action changes nothing: the tab
    /// was already active, or the resolved ticket is stale.
    #[must_use]
    pub fn reduce(&self, action: ViewAction) -> Option<Self> {
        match action {
            ViewAction::Select(game) if game == self.game => None,
            ViewAction::Select(game) => Some(Self {
                game,
                ticket: self.ticket.next(),
                phase: ViewPhase::Loading,
            }),
            ViewAction::Resolved { ticket, .. } if ticket != self.ticket => None,
            ViewAction::Resolved { ticket, outcome } => Some(Self {
                game: self.game,
                ticket,
                phase: match outcome {
                    Ok(listing) => ViewPhase::Ready(listing),
                    Err(_) => ViewPhase::Failed,
                },
            }),
        }
    }
}
