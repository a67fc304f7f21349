//! Core numeric building blocks shared by every other module.

pub mod math;
