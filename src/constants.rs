// src/constants.rs

/// Environment variable naming a theme file, used when `--theme` is absent.
pub const THEME_ENV_VAR: &str = "CONSOLA_THEME";

/// Global option that turns ANSI rendering off.
pub const NO_STYLE_OPTION: &str = "no-style";

/// Global option naming a theme file.
pub const THEME_OPTION: &str = "theme";

/// Short and long spellings of the help option.
pub const HELP_OPTIONS: [&str; 2] = ["h", "help"];

/// Command run when none is given.
pub const DEFAULT_COMMAND: &str = "help";

/// Exit code for runtime failures.
pub const EXIT_FAILURE: i32 = 1;

/// Exit code for a malformed command line.
pub const EXIT_USAGE: i32 = 2;
