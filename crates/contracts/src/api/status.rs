/// Lifecycle of a remote request as tracked by the product store.
///
/// Idle -> Loading on fetch start, then Loading -> Succeeded or
/// Failed. A resolved status never returns to Idle; a failed fetch is
/// re-issued only by an explicit user action (the retry button).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl RequestStatus {
    /// Whether a mount should kick off the initial fetch.
    pub fn needs_initial_fetch(&self) -> bool {
        matches!(self, RequestStatus::Idle)
    }
}
