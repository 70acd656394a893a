//! This library provides extensible synchronous retry behaviours and
//! failure-skipping iteration for fallible sources.
//!
//! Both utilities intercept errors, report them to an expected-error hook
//! (structured logging via [`tracing`] by default), and then let a
//! caller-supplied decision function drive the control flow. The utilities
//! never re-raise an intercepted error themselves.
//!
//! # Installation
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! steadfast = "*"
//! ```
//!
//! # Examples
//!
//! Retrying an action while the condition allows it:
//!
//! ```rust
//! use steadfast::{retry_if, policy::LimitAttempts};
//!
//! let mut attempts = 0;
//! retry_if(
//!     || {
//!         attempts += 1;
//!         if attempts < 3 { Err("not yet") } else { Ok(()) }
//!     },
//!     LimitAttempts::new(5),
//! );
//!
//! assert_eq!(attempts, 3);
//! ```
//!
//! Walking a fallible source, skipping the steps that fail:
//!
//! ```rust
//! use steadfast::ResultIteratorExt;
//!
//! let source = vec![Ok(1), Err("transient"), Ok(3)];
//! let items: Vec<i32> = source.into_iter().resume_on_err(|_: &&str| true).collect();
//!
//! assert_eq!(items, vec![1, 3]);
//! ```

mod action;
mod condition;
mod hook;
mod iter;
mod progress;
mod retry;
/// Ready-made retry conditions such as attempt limits.
pub mod policy;

pub use action::Action;
pub use condition::{Condition, Continuation};
pub use hook::{ErrorHook, NoopHook, TraceHook};
pub use iter::{ResultIteratorExt, ResumeOnErr};
pub use progress::{ItemsProgress, OperationProgress, OperationState, StatusUpdate};
pub use retry::{ignore_err, ignore_err_with_hook, retry_if, retry_if_with_hook};
