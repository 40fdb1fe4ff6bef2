//! Game implementations used to exercise the engine.

pub mod isolation;
