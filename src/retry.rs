use std::fmt;

use super::action::Action;
use super::condition::Condition;
use super::hook::{ErrorHook, TraceHook};

/// Runs an action, retrying as long as the condition allows it.
///
/// The action runs once; if it fails, the error is reported to the default
/// [`TraceHook`] and then handed to the condition. A `true` verdict runs the
/// action again, a `false` verdict stops. The loop is unbounded: the
/// condition alone is responsible for eventually declining, for instance by
/// counting attempts with [`LimitAttempts`](crate::policy::LimitAttempts).
///
/// The last error is observed only by the hook and the condition; it is
/// never returned to the caller.
///
/// ```rust
/// use steadfast::{retry_if, policy::LimitAttempts};
///
/// let mut attempts = 0;
/// retry_if(
///     || {
///         attempts += 1;
///         if attempts < 3 { Err("flaky") } else { Ok(()) }
///     },
///     LimitAttempts::new(5),
/// );
/// assert_eq!(attempts, 3);
/// ```
pub fn retry_if<A, C>(action: A, condition: C)
where
    A: Action,
    A::Error: fmt::Display,
    C: Condition<A::Error>,
{
    retry_if_with_hook(action, condition, TraceHook)
}

/// Like [`retry_if`], with an explicit hook instead of the default one.
pub fn retry_if_with_hook<A, C, H>(mut action: A, mut condition: C, mut hook: H)
where
    A: Action,
    C: Condition<A::Error>,
    H: ErrorHook<A::Error>,
{
    loop {
        match action.run() {
            Ok(()) => return,
            Err(error) => {
                hook.observe(&error, None);
                if !condition.should_retry(&error) {
                    return;
                }
            }
        }
    }
}

/// Runs an action once, routing a failure to the default hook and
/// swallowing it.
pub fn ignore_err<A>(action: A)
where
    A: Action,
    A::Error: fmt::Display,
{
    ignore_err_with_hook(action, TraceHook)
}

/// Like [`ignore_err`], with an explicit hook instead of the default one.
pub fn ignore_err_with_hook<A, H>(mut action: A, mut hook: H)
where
    A: Action,
    H: ErrorHook<A::Error>,
{
    if let Err(error) = action.run() {
        hook.observe(&error, None);
    }
}
