use std::convert::Into;
use std::path::PathBuf;

use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

/// The default driver command, that is, we assume the experiment driver
/// is in $PATH.
pub const DRIVER_DEFAULT: fn() -> String = || "Launch_Experiments.py".to_string();

/// The default folder under which result folders are derived.
pub const RESULTS_FOLDER_DEFAULT: fn() -> PathBuf = || "results".into();

/// The default folder under which log files are derived.
pub const LOGS_FOLDER_DEFAULT: fn() -> PathBuf = || "logs".into();

/// The default GPU label embedded in log file names.
pub const GPU_DEFAULT: fn() -> String = || "0".to_string();

/// The default arguments for the driver.
pub const EMPTY_ARGS: fn() -> Vec<String> = Vec::new;

/// The default dataset list.
pub const EMPTY_DATASETS: fn() -> Vec<String> = Vec::new;

/// Whether `--debug` is passed to the driver by default.
pub const DEBUG_DEFAULT: fn() -> bool = || true;

/// The strftime format of the date tag when none is configured.
pub const DATE_TAG_FORMAT: &str = "%m%d";

/// The prefix of every derived result folder name.
pub const RESULT_FOLDER_PREFIX: &str = "result_";

/// The suffix of every derived log file name.
pub const LOG_FILE_SUFFIX: &str = "_nohup.log";

/// Create a style with a defined foreground color.
pub const fn style_from_fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// The styling for the program name.
pub const PRIMARY_STYLE: Style = style_from_fg(AnsiColor::Green).bold();

/// The styling for the secondary text.
pub const SECONDARY_STYLE: Style = style_from_fg(AnsiColor::BrightGreen);

/// The styling for commands the user may want to run next.
pub const CMD_STYLE: Style = Style::new().bold();

/// The styling for error messages.
pub const ERROR_STYLE: Style = style_from_fg(AnsiColor::Red).bold().blink();

/// The styling for help messages.
pub const HELP_STYLE: Style = style_from_fg(AnsiColor::Green).bold().underline();
