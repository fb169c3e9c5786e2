pub mod controller;
pub mod picture;
pub mod validation;
