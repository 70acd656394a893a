/// Specifies under which conditions a retry is attempted.
pub trait Condition<E> {
    fn should_retry(&mut self, error: &E) -> bool;
}

impl<E, F: FnMut(&E) -> bool> Condition<E> for F {
    fn should_retry(&mut self, error: &E) -> bool {
        self(error)
    }
}

/// Specifies whether iteration keeps going after a failed advancement.
///
/// Distinct from [`Condition`]: returning `true` here does not re-run
/// anything, it moves on to the next element of the source.
pub trait Continuation<E> {
    fn should_continue(&mut self, error: &E) -> bool;
}

impl<E, F: FnMut(&E) -> bool> Continuation<E> for F {
    fn should_continue(&mut self, error: &E) -> bool {
        self(error)
    }
}
