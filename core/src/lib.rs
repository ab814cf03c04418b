// Slide Editor - Core Library

pub mod controller;
pub mod controls;
pub mod dirty;
pub mod error;
pub mod interfaces;
pub mod messages;
pub mod models;
pub mod refresh;
pub mod validation;

pub use controller::*;
pub use controls::*;
pub use dirty::*;
pub use error::*;
pub use interfaces::*;
pub use models::*;
pub use refresh::*;
pub use validation::*;
