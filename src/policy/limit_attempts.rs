use super::super::condition::Condition;

/// A condition allowing a fixed number of retries.
///
/// The count lives inside the condition, so a fresh value is needed for
/// every retry loop.
#[derive(Debug, Clone)]
pub struct LimitAttempts {
    current: usize,
    maximum: usize,
}

impl LimitAttempts {
    /// Constructs a condition that allows `maximum` retries after the
    /// initial attempt.
    pub fn new(maximum: usize) -> LimitAttempts {
        LimitAttempts {
            current: 0,
            maximum,
        }
    }
}

impl<E> Condition<E> for LimitAttempts {
    fn should_retry(&mut self, _error: &E) -> bool {
        self.current += 1;
        self.current <= self.maximum
    }
}

#[test]
fn limits_number_of_retries() {
    let mut c = LimitAttempts::new(2);

    assert!(Condition::<()>::should_retry(&mut c, &()));
    assert!(Condition::<()>::should_retry(&mut c, &()));
    assert!(!Condition::<()>::should_retry(&mut c, &()));
}
