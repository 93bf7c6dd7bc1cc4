/// Type tag values.
///
/// Defines `TypeTag`, the value that names a category of data (`@Type:String`,
/// `@Type:Number` and so on) rather than holding data of that category.
pub mod type_tag;

/// The core runtime value.
///
/// Defines the `Value` enum shared by every evaluator, its canonical display
/// form, number construction and truthiness.
pub mod core;
