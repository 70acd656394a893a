use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use steadfast::{NoopHook, ResultIteratorExt};

/// Source that counts how many times its iteration state is dropped.
struct TrackedSource {
    items: std::vec::IntoIter<Result<u32, &'static str>>,
    drops: Arc<AtomicUsize>,
}

impl TrackedSource {
    fn new(items: Vec<Result<u32, &'static str>>, drops: &Arc<AtomicUsize>) -> TrackedSource {
        TrackedSource {
            items: items.into_iter(),
            drops: drops.clone(),
        }
    }
}

impl Iterator for TrackedSource {
    type Item = Result<u32, &'static str>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }
}

impl Drop for TrackedSource {
    fn drop(&mut self) {
        self.drops.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn clean_source_yields_every_element_in_order() {
    let observed = Arc::new(AtomicUsize::new(0));
    let cloned_observed = observed.clone();

    let items: Vec<u32> = vec![Ok(1), Ok(2), Ok(3)]
        .into_iter()
        .resume_on_err_with_hook(
            |_: &&str| true,
            move |_: &&str, _: Option<&str>| {
                cloned_observed.fetch_add(1, Ordering::SeqCst);
            },
        )
        .collect();

    assert_eq!(items, vec![1, 2, 3]);
    assert_eq!(observed.load(Ordering::SeqCst), 0);
}

#[test]
fn failed_step_is_skipped_when_the_handler_continues() {
    let observed = Arc::new(AtomicUsize::new(0));
    let cloned_observed = observed.clone();

    let items: Vec<u32> = vec![Ok(1), Err("glitch"), Ok(3)]
        .into_iter()
        .resume_on_err_with_hook(
            |_: &&str| true,
            move |error: &&str, context: Option<&str>| {
                cloned_observed.fetch_add(1, Ordering::SeqCst);
                assert_eq!(*error, "glitch");
                assert!(context.is_some());
            },
        )
        .collect();

    assert_eq!(items, vec![1, 3]);
    assert_eq!(observed.load(Ordering::SeqCst), 1);
}

#[test]
fn consecutive_failures_each_consult_the_handler() {
    let verdicts = Arc::new(AtomicUsize::new(0));
    let cloned_verdicts = verdicts.clone();

    let items: Vec<u32> = vec![Err("a"), Err("b"), Ok(3)]
        .into_iter()
        .resume_on_err_with_hook(
            move |_: &&str| {
                cloned_verdicts.fetch_add(1, Ordering::SeqCst);
                true
            },
            NoopHook,
        )
        .collect();

    assert_eq!(items, vec![3]);
    assert_eq!(verdicts.load(Ordering::SeqCst), 2);
}

#[test]
fn handler_decline_terminates_and_releases_the_source_once() {
    let drops = Arc::new(AtomicUsize::new(0));
    let source = TrackedSource::new(vec![Ok(1), Err("fatal"), Ok(3)], &drops);

    let mut iter = source.resume_on_err_with_hook(|_: &&str| false, NoopHook);

    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), None);
    assert_eq!(drops.load(Ordering::SeqCst), 1);

    // Fused: the terminated adapter stays terminated.
    assert_eq!(iter.next(), None);
    assert_eq!(iter.size_hint(), (0, Some(0)));

    drop(iter);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn exhaustion_releases_the_source_once() {
    let drops = Arc::new(AtomicUsize::new(0));
    let source = TrackedSource::new(vec![Ok(1), Ok(2)], &drops);

    let mut iter = source.resume_on_err_with_hook(|_: &&str| true, NoopHook);

    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(drops.load(Ordering::SeqCst), 1);

    drop(iter);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn abandoning_the_adapter_releases_the_source_once() {
    let drops = Arc::new(AtomicUsize::new(0));
    let source = TrackedSource::new(vec![Ok(1), Ok(2), Ok(3)], &drops);

    let mut iter = source.resume_on_err_with_hook(|_: &&str| true, NoopHook);

    assert_eq!(iter.next(), Some(1));
    assert_eq!(drops.load(Ordering::SeqCst), 0);

    drop(iter);
    assert_eq!(drops.load(Ordering::SeqCst), 1);
}

#[test]
fn works_with_the_default_hook() {
    let items: Vec<u32> = vec![Ok(1), Err("transient"), Ok(3)]
        .into_iter()
        .resume_on_err(|_: &&str| true)
        .collect();

    assert_eq!(items, vec![1, 3]);
}
