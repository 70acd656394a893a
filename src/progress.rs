/// Where an operation currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationState {
    Pending,
    Running,
    Succeeded,
    Failed,
    Canceled,
}

/// Progress through a batch of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemsProgress {
    /// Items handled so far.
    pub current: u64,
    /// Items in total.
    pub total: u64,
}

impl ItemsProgress {
    /// The completed fraction, in the range `0.0..=1.0`.
    ///
    /// An empty batch counts as complete.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f64 / self.total as f64
        }
    }
}

/// Status snapshot that an operation reports to its observers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationProgress {
    pub progress: ItemsProgress,
    pub state: OperationState,
}

/// Callback through which operations push status updates.
pub type StatusUpdate<'a> = Box<dyn FnMut(&OperationProgress) + 'a>;

#[test]
fn empty_batch_counts_as_complete() {
    let progress = ItemsProgress {
        current: 0,
        total: 0,
    };

    assert_eq!(progress.fraction(), 1.0);
}
