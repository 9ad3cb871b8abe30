/// The runtime value representation.
///
/// Defines the `Value` enum produced by evaluation together with its
/// truthiness rules, zero values and display form.
pub mod core;
