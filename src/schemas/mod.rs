// Data written into IDE configuration files.
pub mod interpreter;
