/// ProgressReporter port for user-facing status messages
///
/// This port abstracts where progress, warnings and completion notices go
/// (e.g. stderr) so that stdout stays reserved for rendered output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a non-fatal warning, such as a dropped cyclic edge
    fn report_warning(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
