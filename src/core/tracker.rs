/// Lifecycle of the lazily acquired hand tracker. Generic over the tracker
/// itself so the transitions run without a browser.
#[derive(Debug)]
pub enum TrackerStatus<T> {
    Off,
    Loading,
    /// Still loading, but gesture mode was left in the meantime. The tracker
    /// is shut down as soon as it arrives unless gesture mode comes back.
    Cancelled,
    Ready(T),
    Failed(String),
}

impl<T> Default for TrackerStatus<T> {
    fn default() -> Self {
        TrackerStatus::Off
    }
}

impl<T> TrackerStatus<T> {
    /// Gesture mode wants the tracker. Returns true when the caller has to
    /// start a new acquisition; at most one is ever in flight.
    pub fn request(&mut self) -> bool {
        match self {
            TrackerStatus::Loading | TrackerStatus::Ready(_) => false,
            TrackerStatus::Cancelled => {
                *self = TrackerStatus::Loading;
                false
            }
            TrackerStatus::Off | TrackerStatus::Failed(_) => {
                *self = TrackerStatus::Loading;
                true
            }
        }
    }

    /// Gesture mode was left. Hands back a ready tracker for the caller to
    /// shut down; an acquisition in flight is marked cancelled.
    pub fn release(&mut self) -> Option<T> {
        match std::mem::replace(self, TrackerStatus::Off) {
            TrackerStatus::Ready(t) => Some(t),
            TrackerStatus::Loading | TrackerStatus::Cancelled => {
                *self = TrackerStatus::Cancelled;
                None
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Record the outcome of an acquisition. Returns the tracker when nobody
    /// wants it any more, so the caller can shut it down.
    pub fn resolve(&mut self, result: Result<T, String>) -> Option<T> {
        let wanted = self.is_loading();
        match result {
            Ok(t) if wanted => {
                *self = TrackerStatus::Ready(t);
                None
            }
            Ok(t) => {
                *self = TrackerStatus::Off;
                Some(t)
            }
            Err(reason) => {
                *self = TrackerStatus::Failed(reason);
                None
            }
        }
    }

    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, TrackerStatus::Loading)
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            TrackerStatus::Ready(t) => Some(t),
            _ => None,
        }
    }
}
