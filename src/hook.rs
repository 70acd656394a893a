use std::fmt;

/// Observer for errors that the retry and iteration utilities intercept.
///
/// The hook is consulted exactly once per intercepted error, synchronously,
/// before the caller-supplied decision function runs. It must not influence
/// control flow; it exists for logging and telemetry.
///
/// Any `FnMut(&E, Option<&str>)` closure is a hook, which makes it easy to
/// record intercepted errors in tests.
pub trait ErrorHook<E> {
    fn observe(&mut self, error: &E, context: Option<&str>);
}

impl<E, F: FnMut(&E, Option<&str>)> ErrorHook<E> for F {
    fn observe(&mut self, error: &E, context: Option<&str>) {
        self(error, context)
    }
}

/// The default hook: emits a `tracing` warning for every intercepted error.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceHook;

impl<E: fmt::Display> ErrorHook<E> for TraceHook {
    fn observe(&mut self, error: &E, context: Option<&str>) {
        match context {
            Some(context) => tracing::warn!(%error, context, "handled expected error"),
            None => tracing::warn!(%error, "handled expected error"),
        }
    }
}

/// A hook that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl<E> ErrorHook<E> for NoopHook {
    fn observe(&mut self, _error: &E, _context: Option<&str>) {}
}
