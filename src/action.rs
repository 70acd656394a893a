/// A unit of work that can be run multiple times.
///
/// The work either completes or fails with an error value; it produces no
/// other output. Any `FnMut() -> Result<(), E>` closure is an action.
pub trait Action {
    /// The error that a failed run reports.
    type Error;

    fn run(&mut self) -> Result<(), Self::Error>;
}

impl<E, F: FnMut() -> Result<(), E>> Action for F {
    type Error = E;

    fn run(&mut self) -> Result<(), Self::Error> {
        self()
    }
}
