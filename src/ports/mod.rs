/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the use cases themselves are the
/// inbound surface used by the CLI.
pub mod outbound;
