/// Logging port. The business crate never talks to a logging backend directly.
///
/// Messages are plain text; adapters decide on targets and structured fields.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
