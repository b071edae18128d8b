/// ProgressReporter port for reporting progress during discovery
///
/// This is the logging surface of the application: informational lines,
/// per-bundle progress, and non-fatal warnings all go through it.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through the bundle list
    ///
    /// # Arguments
    /// * `current` - Bundles processed so far
    /// * `total` - Total bundles
    /// * `message` - Optional detail (e.g. the bundle being decoded)
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a non-fatal condition (missing directory, failed decode, ...)
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
