pub mod decompose;
pub mod steps;
pub mod teach;
