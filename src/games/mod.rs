//! Game implementations.

pub mod squares;
