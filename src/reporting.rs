use tracing::info;

/// Marks one scenario step in the log stream. The API client methods and the
/// assertions call this so a failed test reads as a sequence of named steps.
pub fn step(name: impl AsRef<str>) {
    info!(target: "step", "{}", name.as_ref());
}
