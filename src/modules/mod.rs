pub mod classes;
pub mod sessions;
