/// Ports module defining interfaces for hexagonal architecture
///
/// The comparison core is driven directly by the CLI, so only outbound
/// (driven) ports are declared.
pub mod outbound;
