use std::fmt;
use std::iter::FusedIterator;

use super::condition::Continuation;
use super::hook::{ErrorHook, TraceHook};

const ADVANCE_CONTEXT: &str = "resume-on-err advancement";

/// Iterator adapter that yields the successful elements of a fallible
/// source, consulting a continuation handler on each failed advancement.
///
/// Created by [`ResultIteratorExt::resume_on_err`].
///
/// Each `Err` produced by the source is reported to the hook and then to the
/// handler. If the handler returns `true`, the failed step is skipped and
/// the source is advanced again; if it returns `false`, the adapter
/// terminates and drops the source immediately. The failed element is never
/// yielded and no error reaches the consumer.
///
/// The source is dropped exactly once: either eagerly on termination, or
/// together with the adapter if the consumer walks away early.
pub struct ResumeOnErr<I, C, H> {
    source: Option<I>,
    handler: C,
    hook: H,
}

impl<I, T, E, C, H> Iterator for ResumeOnErr<I, C, H>
where
    I: Iterator<Item = Result<T, E>>,
    C: Continuation<E>,
    H: ErrorHook<E>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let source = self.source.as_mut()?;
            match source.next() {
                Some(Ok(item)) => return Some(item),
                Some(Err(error)) => {
                    self.hook.observe(&error, Some(ADVANCE_CONTEXT));
                    if !self.handler.should_continue(&error) {
                        self.source = None;
                        return None;
                    }
                }
                None => {
                    self.source = None;
                    return None;
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every remaining step may fail, so only the upper bound carries over.
        match &self.source {
            Some(source) => (0, source.size_hint().1),
            None => (0, Some(0)),
        }
    }
}

impl<I, T, E, C, H> FusedIterator for ResumeOnErr<I, C, H>
where
    I: Iterator<Item = Result<T, E>>,
    C: Continuation<E>,
    H: ErrorHook<E>,
{
}

/// Extends iterators over `Result` with failure-skipping consumption.
pub trait ResultIteratorExt<T, E>: Iterator<Item = Result<T, E>> + Sized {
    /// Yields the `Ok` elements of this iterator, letting the handler decide
    /// after each `Err` whether to keep going.
    ///
    /// Intercepted errors are reported to the default [`TraceHook`].
    ///
    /// ```rust
    /// use steadfast::ResultIteratorExt;
    ///
    /// let source = vec![Ok(1), Err("glitch"), Ok(3)];
    /// let items: Vec<i32> = source.into_iter().resume_on_err(|_: &&str| true).collect();
    /// assert_eq!(items, vec![1, 3]);
    /// ```
    fn resume_on_err<C>(self, handler: C) -> ResumeOnErr<Self, C, TraceHook>
    where
        C: Continuation<E>,
        E: fmt::Display,
    {
        self.resume_on_err_with_hook(handler, TraceHook)
    }

    /// Like [`resume_on_err`](Self::resume_on_err), with an explicit hook.
    fn resume_on_err_with_hook<C, H>(self, handler: C, hook: H) -> ResumeOnErr<Self, C, H>
    where
        C: Continuation<E>,
        H: ErrorHook<E>,
    {
        ResumeOnErr {
            source: Some(self),
            handler,
            hook,
        }
    }
}

impl<T, E, I: Iterator<Item = Result<T, E>>> ResultIteratorExt<T, E> for I {}
