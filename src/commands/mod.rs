// Register application subcommands.
// Each module corresponds to one `jetsetter` command-line action.

// Registering interpreters with an IDE (`interpreter add` / `add interpreter`).
pub mod interpreter;
