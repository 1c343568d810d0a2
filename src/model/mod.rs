pub mod node;
pub mod palette;
pub mod sloka;
