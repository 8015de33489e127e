// Declares the helper submodules under `libs::utilities`.

// Tilde expansion and `$USER_HOME$` substitution.
pub mod path_helpers;
pub mod platform;
