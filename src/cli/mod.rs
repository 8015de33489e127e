// Command-line surface of `jetsetter`.
pub mod cmd_enums;
