mod limit_attempts;
mod no_retry;

pub use self::limit_attempts::LimitAttempts;
pub use self::no_retry::NoRetry;
