use std::fmt;

/// Where the store is in its lifecycle.
///
/// ```text
/// Bootstrapping -> Connecting -> Synced
///                      \-> Offline (terminal for the session)
/// ```
///
/// `Offline` is entered when no backend is configured or when the
/// subscription fails; once offline, no further remote attempts are made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncPhase {
    /// Computing the initial snapshot from cache/defaults.
    Bootstrapping,
    /// Waiting for the first remote response.
    Connecting,
    /// Following the remote document.
    Synced,
    /// No remote backend for the rest of the session; writes are cache-only.
    Offline,
}

impl fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bootstrapping => write!(f, "bootstrapping"),
            Self::Connecting => write!(f, "connecting"),
            Self::Synced => write!(f, "synced"),
            Self::Offline => write!(f, "offline"),
        }
    }
}

/// Which side produced a document update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOrigin {
    /// A snapshot delivered by the remote subscription.
    Remote,
    /// An optimistic local edit.
    Local,
}

/// Events broadcast to store subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentEvent {
    /// The in-memory document changed; re-read via `content()`.
    Updated(UpdateOrigin),
    /// The sync phase changed.
    PhaseChanged(SyncPhase),
}

/// How far a section write propagated.
///
/// The in-memory document and the local cache always carry the edit by the
/// time the caller sees any of these; only the remote tier varies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The section reached the remote document.
    Synced,
    /// The session is offline; no remote write was attempted.
    CacheOnly,
    /// The remote write failed. The edit is preserved locally and should be
    /// surfaced to the editor as a non-blocking notice.
    RemoteFailed { reason: String },
}

impl WriteOutcome {
    /// Returns `true` if the edit reached the remote tier.
    pub fn reached_remote(&self) -> bool {
        matches!(self, Self::Synced)
    }
}
