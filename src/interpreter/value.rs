/// Functions, classes, instances and bound methods.
///
/// Defines the heap objects behind the callable and object-oriented value
/// variants, together with attribute lookup on instances.
pub mod object;

pub mod core;
