use crate::model::When;

/// A user-recorded item of work: a plain to-do, a deadline bound to a
/// date/time, or an event occurring on a date/time.
///
/// All variants share a verbatim description and a done flag; tasks start
/// not done unless restored from the save-file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    ToDo {
        description: String,
        done: bool,
    },
    Deadline {
        description: String,
        done: bool,
        when: When,
    },
    Event {
        description: String,
        done: bool,
        when: When,
    },
}

impl Task {
    pub fn todo<D: Into<String>>(description: D) -> Self {
        Self::ToDo {
            description: description.into(),
            done: false,
        }
    }

    pub fn deadline<D: Into<String>>(description: D, when: When) -> Self {
        Self::Deadline {
            description: description.into(),
            done: false,
            when,
        }
    }

    pub fn event<D: Into<String>>(description: D, when: When) -> Self {
        Self::Event {
            description: description.into(),
            done: false,
            when,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::ToDo { description, .. }
            | Self::Deadline { description, .. }
            | Self::Event { description, .. } => description,
        }
    }

    pub fn is_done(&self) -> bool {
        match self {
            Self::ToDo { done, .. } | Self::Deadline { done, .. } | Self::Event { done, .. } => {
                *done
            }
        }
    }

    pub fn set_done(&mut self, value: bool) {
        match self {
            Self::ToDo { done, .. } | Self::Deadline { done, .. } | Self::Event { done, .. } => {
                *done = value;
            }
        }
    }

    /// Case-sensitive substring test against the description.
    pub fn matches(&self, needle: &str) -> bool {
        self.description().contains(needle)
    }

    fn status_tag(&self) -> char {
        if self.is_done() {
            'X'
        } else {
            ' '
        }
    }

    /// User-facing form, e.g. `[D][ ] return book (by: Jun 26 2022 18:00)`.
    pub fn display_line(&self) -> String {
        match self {
            Self::ToDo { description, .. } => {
                format!("[T][{}] {}", self.status_tag(), description)
            }
            Self::Deadline {
                description, when, ..
            } => format!(
                "[D][{}] {} (by: {})",
                self.status_tag(),
                description,
                when.display()
            ),
            Self::Event {
                description, when, ..
            } => format!(
                "[E][{}] {} (at: {})",
                self.status_tag(),
                description,
                when.display()
            ),
        }
    }

    /// One `\n`-terminated save-file line, e.g. `D | 0 | return book | 2022-06-26 1800`.
    pub fn storage_line(&self) -> String {
        let done_flag = if self.is_done() { 1 } else { 0 };
        match self {
            Self::ToDo { description, .. } => format!("T | {done_flag} | {description}\n"),
            Self::Deadline {
                description, when, ..
            } => format!("D | {done_flag} | {description} | {}\n", when.storage()),
            Self::Event {
                description, when, ..
            } => format!("E | {done_flag} | {description} | {}\n", when.storage()),
        }
    }
}
