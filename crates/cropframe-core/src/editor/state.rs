use std::fmt;

use crate::error::LoadErrorKind;

/// Where the editor is in its load lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Empty,
    Loading,
    Loaded,
    Error(LoadErrorKind),
}

impl LoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}

impl fmt::Display for LoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Loading => write!(f, "Loading"),
            Self::Loaded => write!(f, "Loaded"),
            Self::Error(kind) => write!(f, "Error ({kind})"),
        }
    }
}

/// Handle for one load attempt. Only the most recently issued ticket can
/// complete a load; results carrying an older ticket are discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub(crate) generation: u64,
}

/// What happened to a completed load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The image was fitted and rendered.
    Loaded,
    /// A newer load (or a removal) superseded this one; nothing changed.
    Stale,
}
