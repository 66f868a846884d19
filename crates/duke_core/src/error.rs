use std::fmt;

/// Domain errors surfaced to the user as reply text.
///
/// Every variant carries (or renders to) the exact message the session
/// prints; the dispatcher never lets one escape as a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DukeError {
    UnknownCommand,
    MissingDetails(String),
    BadIndexFormat(String),
    BadIndexRange,
    InvalidDateTime,
    CorruptSave,
    Io(String),
}

const UNKNOWN_COMMAND_MESSAGE: &str = "OoPs! I don't know what that means :P";
const BAD_INDEX_RANGE_MESSAGE: &str = "Please specify a valid item number";
const INVALID_DATETIME_MESSAGE: &str =
    "Invalid date/time format! Expected date and/or time in the following formats: \n\
yyyy-mm-dd | Example: 2022-06-26\n\
yyyy-mm-dd HHmm | Example: 2022-06-26 2359";
const CORRUPT_SAVE_MESSAGE: &str =
    "File is corrupted and Duke is unable to restore data from previous sessions.\n\
Resetting contents of save-file.";

impl DukeError {
    pub fn missing_details<M: Into<String>>(message: M) -> Self {
        Self::MissingDetails(message.into())
    }

    pub fn bad_index_format(raw: &str) -> Self {
        Self::BadIndexFormat(format!(
            "Please specify a numerical value for the item number instead of \"{raw}\"!"
        ))
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownCommand => "unknown_command",
            Self::MissingDetails(_) => "missing_details",
            Self::BadIndexFormat(_) => "bad_index_format",
            Self::BadIndexRange => "bad_index_range",
            Self::InvalidDateTime => "invalid_datetime",
            Self::CorruptSave => "corrupt_save",
            Self::Io(_) => "io_failure",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::UnknownCommand => UNKNOWN_COMMAND_MESSAGE,
            Self::MissingDetails(message) => message,
            Self::BadIndexFormat(message) => message,
            Self::BadIndexRange => BAD_INDEX_RANGE_MESSAGE,
            Self::InvalidDateTime => INVALID_DATETIME_MESSAGE,
            Self::CorruptSave => CORRUPT_SAVE_MESSAGE,
            Self::Io(message) => message,
        }
    }
}

impl fmt::Display for DukeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for DukeError {}
