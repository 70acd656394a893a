use super::super::condition::Condition;

/// A condition that declines every retry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRetry;

impl<E> Condition<E> for NoRetry {
    fn should_retry(&mut self, _error: &E) -> bool {
        false
    }
}

#[test]
fn declines_every_retry() {
    let mut c = NoRetry;

    assert!(!Condition::<()>::should_retry(&mut c, &()));
    assert!(!Condition::<()>::should_retry(&mut c, &()));
}
