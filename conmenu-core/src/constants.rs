/// Width every field is centred into when nothing else is configured
pub const DEFAULT_MAX_FIELD_WIDTH: usize = 32;

pub const DEFAULT_HEADING: &str = "MENU";

pub const DEFAULT_UP_KEY: char = 'w';
pub const DEFAULT_DOWN_KEY: char = 's';
pub const DEFAULT_SELECT_KEY: char = 'q';

/// Default head colour code (red)
pub const DEFAULT_HEAD_CODE: &str = "31";

/// Resets any styling applied by the head or body colour
pub const NEUTRAL: &str = "\x1b[0m";

/// Label of the entry appended for the duration of a run
pub const EXIT_LABEL: &str = "Exit";

pub const BORDER_CHAR: char = '=';

/// Exact length of an ANSI colour code accepted by the widget
pub const COLOR_CODE_LEN: usize = 2;
