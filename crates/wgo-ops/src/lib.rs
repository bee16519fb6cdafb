pub mod loader;
pub mod ops_why;
