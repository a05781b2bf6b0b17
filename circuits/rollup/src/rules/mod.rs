pub mod file;
pub mod mining;
pub mod transfer;
