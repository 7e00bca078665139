//! examples of usage of RustedEnvSci
/// argsort, argmax/argmin and safe division examples
pub mod array_examples;
/// ascii and HDF reader examples
pub mod io_examples;
/// fit, cost and test function examples
pub mod function_examples;
