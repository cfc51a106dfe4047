use std::borrow::Cow;

use indicatif::ProgressBar;

use plumb_core::Observer;

/// Ticks a progress bar once per solver event.
///
/// The observer is generic over event and action types: it looks at
/// nothing but the event count, so it works with any solver. The bar is
/// cleared when the observer is dropped.
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    /// Creates a labeled spinner for a run of unknown length.
    #[must_use]
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_message(label);
        Self { bar }
    }

    /// Creates a labeled bar for a run with a known iteration budget.
    #[must_use]
    pub fn with_length(label: impl Into<Cow<'static, str>>, len: u64) -> Self {
        let bar = ProgressBar::new(len);
        bar.set_message(label);
        Self { bar }
    }

    /// Returns the number of events observed so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl<E, A> Observer<E, A> for ProgressObserver {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.bar.inc(1);
        None
    }
}

impl Drop for ProgressObserver {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}
