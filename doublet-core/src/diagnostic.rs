/// The lifecycle trait for scalar diagnostics.
///
/// A `Diagnostic` owns a small amount of state (a latch, a running sum, a
/// window observation) and is driven once per simulation step by an external
/// time-stepping driver, always in the same order:
///
/// 1. [`initialize()`](Diagnostic::initialize) resets any per-step transient
///    state.
/// 2. [`execute()`](Diagnostic::execute) performs the update from the step's
///    upstream readings.
/// 3. [`value()`](Diagnostic::value) is queried later by the driver or a
///    reporting subsystem; it must not mutate the diagnostic.
///
/// Updates are infallible: every failure mode in this library is a
/// configuration error caught when the diagnostic is constructed, so there
/// is no recoverable-error path once stepping begins.
///
/// The `Input` type names the upstream values the diagnostic was wired to at
/// construction; the external wiring step is responsible for filling it each
/// step. The `Value` type is the diagnostic's read-only output, such as
/// `Option<Time>` for a latch that may not have fired yet.
pub trait Diagnostic {
    /// Per-step upstream readings consumed by this diagnostic.
    type Input;

    /// The read-only value this diagnostic exposes.
    type Value;

    /// Resets per-step transient state.
    ///
    /// The default implementation does nothing, which suits diagnostics
    /// whose state is purely cumulative.
    fn initialize(&mut self) {}

    /// Performs the once-per-step update.
    fn execute(&mut self, input: Self::Input);

    /// Returns the current value of the diagnostic.
    fn value(&self) -> Self::Value;
}
