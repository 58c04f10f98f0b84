/// Result of merging one turn's fields into the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The state was updated (or left untouched) and may be persisted.
    Continued,

    /// Integrity fell to zero or below. The merged state must be
    /// discarded and replaced with a fresh one; it is never persisted.
    Dissolved,
}
