// Shared interpreter constants.
pub const DEFAULT_COLOR: &str = "O";
pub const PROMPT: &str = "> ";
