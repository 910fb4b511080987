// Output generation module

pub mod dot;

pub use dot::*;
