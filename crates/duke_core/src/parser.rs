use crate::error::DukeError;
use crate::model::{Task, When};
use crate::storage::save_file;
use crate::tasklist::TaskList;
use std::path::PathBuf;

const FAREWELL_MESSAGE: &str = "Bye. Hope to see you again soon!";
const HARD_DISK_MESSAGE: &str = "Something went wrong with the hard disk!";

/// The dispatcher's return value: reply text plus a session-continue flag.
///
/// Only `bye` clears the flag; the signal travels as data, never as an
/// error escape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub proceed: bool,
}

impl Reply {
    fn text<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            proceed: true,
        }
    }

    fn farewell() -> Self {
        Self {
            text: FAREWELL_MESSAGE.to_string(),
            proceed: false,
        }
    }
}

/// Interprets one-line commands and applies them to the task list.
///
/// Every mutating command re-serializes the whole list to the save-file, so
/// the file on disk always equals the current list after a mutation.
pub struct Parser {
    tasks: TaskList,
    save_path: PathBuf,
}

impl Parser {
    /// Restores the task list from the save-file.
    ///
    /// A missing file starts the session empty. A corrupt file also starts
    /// empty and yields the reset notice as the second tuple element; the
    /// corrupt bytes stay on disk until the next mutation rewrites them.
    /// Other read failures are fatal to startup.
    pub fn open(save_path: PathBuf) -> Result<(Self, Option<String>), DukeError> {
        match save_file::load_tasks(&save_path) {
            Ok(tasks) => Ok((Self { tasks, save_path }, None)),
            Err(DukeError::CorruptSave) => Ok((
                Self {
                    tasks: TaskList::new(),
                    save_path,
                },
                Some(DukeError::CorruptSave.message().to_string()),
            )),
            Err(err) => Err(err),
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Splits the line on the first space into verb and argument tail, then
    /// dispatches. Domain errors become reply text; the session continues.
    pub fn handle_input(&mut self, input: &str) -> Reply {
        let (command, details) = match input.split_once(' ') {
            Some((command, details)) => (command, Some(details)),
            None => (input, None),
        };

        if command == "bye" {
            return Reply::farewell();
        }

        match self.dispatch(command, details) {
            Ok(text) => Reply::text(text),
            Err(DukeError::Io(description)) => {
                Reply::text(format!("{description}\n\n{HARD_DISK_MESSAGE}"))
            }
            Err(err) => Reply::text(err.message()),
        }
    }

    fn dispatch(&mut self, command: &str, details: Option<&str>) -> Result<String, DukeError> {
        match command {
            "list" => Ok(self.tasks.list()),
            "mark" => {
                let number = self.parse_item_number(details)?;
                let reply = self.tasks.mark(number);
                self.persist()?;
                Ok(reply)
            }
            "unmark" => {
                let number = self.parse_item_number(details)?;
                let reply = self.tasks.unmark(number);
                self.persist()?;
                Ok(reply)
            }
            "delete" => {
                let number = self.parse_item_number(details)?;
                let reply = self.tasks.delete(number);
                self.persist()?;
                Ok(reply)
            }
            "todo" | "deadline" | "event" => {
                let details = non_empty_details(details)?;
                let task = build_task(command, details)?;
                let reply = self.tasks.add(task);
                self.persist()?;
                Ok(reply)
            }
            "find" => {
                let needle = non_empty_details(details)?;
                Ok(self.tasks.find(needle))
            }
            _ => Err(DukeError::UnknownCommand),
        }
    }

    /// Validates the index argument before any mutation happens.
    fn parse_item_number(&self, details: Option<&str>) -> Result<usize, DukeError> {
        let raw = details.ok_or_else(|| DukeError::missing_details("Missing item number!"))?;
        let number: i64 = raw
            .parse()
            .map_err(|_| DukeError::bad_index_format(raw))?;
        if !self.tasks.is_valid_item_number(number) {
            return Err(DukeError::BadIndexRange);
        }
        Ok(number as usize)
    }

    fn persist(&self) -> Result<(), DukeError> {
        save_file::save_tasks(&self.save_path, &self.tasks)
    }
}

fn non_empty_details(details: Option<&str>) -> Result<&str, DukeError> {
    details
        .filter(|details| !details.is_empty())
        .ok_or_else(|| DukeError::missing_details("Missing details!"))
}

fn build_task(command: &str, details: &str) -> Result<Task, DukeError> {
    if command == "todo" {
        return Ok(Task::todo(details));
    }

    let separator = if command == "deadline" { " /by " } else { " /at " };
    let (description, stamp) = details
        .split_once(separator)
        .filter(|(description, stamp)| !description.is_empty() && !stamp.is_empty())
        .ok_or_else(|| DukeError::missing_details(format!("Missing details for {command}!")))?;
    let when = When::parse(stamp)?;

    Ok(if command == "deadline" {
        Task::deadline(description, when)
    } else {
        Task::event(description, when)
    })
}

#[cfg(test)]
mod tests {
    use super::Parser;
    use crate::storage::save_file;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(file_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("duke-{nanos}-{file_name}"))
    }

    fn open_empty(file_name: &str) -> (Parser, PathBuf) {
        let path = temp_path(file_name);
        let (parser, notice) = Parser::open(path.clone()).unwrap();
        assert!(notice.is_none());
        (parser, path)
    }

    fn assert_file_matches_list(parser: &Parser, path: &PathBuf) {
        let on_disk = fs::read_to_string(path).unwrap();
        assert_eq!(on_disk, save_file::serialize(parser.tasks()));
    }

    #[test]
    fn todo_adds_and_persists() {
        let (mut parser, path) = open_empty("todo.txt");

        let reply = parser.handle_input("todo read book");
        assert!(reply.proceed);
        assert_eq!(
            reply.text,
            "Got it. I've added this task:\n  [T][ ] read book\nNow you have 1 tasks in the list."
        );
        assert_file_matches_list(&parser, &path);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn deadline_parses_date_and_time() {
        let (mut parser, path) = open_empty("deadline.txt");
        parser.handle_input("todo read book");

        let reply = parser.handle_input("deadline return book /by 2022-06-26 1800");
        assert_eq!(
            reply.text,
            "Got it. I've added this task:\n  [D][ ] return book (by: Jun 26 2022 18:00)\n\
Now you have 2 tasks in the list."
        );
        assert_file_matches_list(&parser, &path);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn mark_then_list_shows_done_status() {
        let (mut parser, path) = open_empty("mark-list.txt");
        parser.handle_input("todo read book");
        parser.handle_input("deadline return book /by 2022-06-26 1800");

        let marked = parser.handle_input("mark 1");
        assert_eq!(
            marked.text,
            "Nice! I've marked this task as done:\n  [T][X] read book"
        );

        let listed = parser.handle_input("list");
        assert_eq!(
            listed.text,
            "Here are the tasks in your list:\n1. [T][X] read book\n\
2. [D][ ] return book (by: Jun 26 2022 18:00)"
        );
        assert_file_matches_list(&parser, &path);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn non_numeric_index_is_rejected_verbatim() {
        let (mut parser, path) = open_empty("bad-index.txt");
        let reply = parser.handle_input("mark abc");
        assert_eq!(
            reply.text,
            "Please specify a numerical value for the item number instead of \"abc\"!"
        );
        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_separator_names_the_verb() {
        let (mut parser, path) = open_empty("missing-sep.txt");
        assert_eq!(
            parser.handle_input("deadline submit report").text,
            "Missing details for deadline!"
        );
        assert_eq!(
            parser.handle_input("event standup").text,
            "Missing details for event!"
        );
        assert_eq!(
            parser.handle_input("event standup /at ").text,
            "Missing details for event!"
        );
        assert!(parser.tasks().is_empty());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn bye_clears_the_proceed_flag() {
        let (mut parser, path) = open_empty("bye.txt");
        let reply = parser.handle_input("bye");
        assert_eq!(reply.text, "Bye. Hope to see you again soon!");
        assert!(!reply.proceed);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn unknown_command_is_reported() {
        let (mut parser, path) = open_empty("unknown.txt");
        assert_eq!(
            parser.handle_input("blah").text,
            "OoPs! I don't know what that means :P"
        );
        assert_eq!(
            parser.handle_input("").text,
            "OoPs! I don't know what that means :P"
        );
        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_details_messages_differ_by_command() {
        let (mut parser, path) = open_empty("missing-details.txt");
        assert_eq!(parser.handle_input("todo").text, "Missing details!");
        assert_eq!(parser.handle_input("todo ").text, "Missing details!");
        assert_eq!(parser.handle_input("find").text, "Missing details!");
        assert_eq!(parser.handle_input("mark").text, "Missing item number!");
        assert_eq!(parser.handle_input("delete").text, "Missing item number!");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn invalid_index_leaves_list_and_file_unchanged() {
        let (mut parser, path) = open_empty("no-mutation.txt");
        parser.handle_input("todo read book");
        let before = fs::read_to_string(&path).unwrap();

        parser.handle_input("delete 2");
        parser.handle_input("delete 0");
        parser.handle_input("mark -1");
        parser.handle_input("unmark abc");

        assert_eq!(parser.tasks().len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let (mut parser, path) = open_empty("range.txt");
        parser.handle_input("todo read book");
        assert_eq!(
            parser.handle_input("mark 2").text,
            "Please specify a valid item number"
        );
        fs::remove_file(&path).ok();
    }

    #[test]
    fn invalid_datetime_is_reported() {
        let (mut parser, path) = open_empty("bad-when.txt");
        let reply = parser.handle_input("deadline return book /by 26-06-2022");
        assert!(reply.text.starts_with("Invalid date/time format!"));
        assert!(parser.tasks().is_empty());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn every_mutation_rewrites_the_file() {
        let (mut parser, path) = open_empty("mutations.txt");

        for input in [
            "todo read book",
            "event project meeting /at 2022-08-01",
            "mark 1",
            "unmark 1",
            "delete 2",
        ] {
            parser.handle_input(input);
            assert_file_matches_list(&parser, &path);
        }
        fs::remove_file(&path).ok();
    }

    #[test]
    fn persist_failure_reports_hard_disk_reply_and_continues() {
        // A save path nested under a regular file makes create_dir_all fail.
        let blocker = temp_path("blocker");
        fs::write(&blocker, "").unwrap();
        let save_path = blocker.join("duke.txt");

        let (mut parser, notice) = Parser::open(save_path).unwrap();
        assert!(notice.is_none());

        let reply = parser.handle_input("todo read book");
        fs::remove_file(&blocker).ok();

        assert!(reply.proceed);
        assert!(
            reply
                .text
                .ends_with("\n\nSomething went wrong with the hard disk!"),
            "unexpected reply: {:?}",
            reply.text
        );
        assert_eq!(parser.tasks().len(), 1);
    }

    #[test]
    fn find_only_searches_descriptions() {
        let (mut parser, path) = open_empty("find.txt");
        parser.handle_input("todo read book");
        parser.handle_input("todo water plants");

        assert_eq!(
            parser.handle_input("find book").text,
            "Here are the matching tasks in your list:\n1. [T][ ] read book"
        );
        assert_eq!(
            parser.handle_input("find laundry").text,
            "No matching tasks found."
        );
        fs::remove_file(&path).ok();
    }

    #[test]
    fn session_restores_from_save_file() {
        let path = temp_path("restore.txt");
        {
            let (mut parser, notice) = Parser::open(path.clone()).unwrap();
            assert!(notice.is_none());
            parser.handle_input("todo read book");
            parser.handle_input("mark 1");
        }

        let (mut restored, notice) = Parser::open(path.clone()).unwrap();
        assert!(notice.is_none());
        assert_eq!(
            restored.handle_input("list").text,
            "Here are the tasks in your list:\n1. [T][X] read book"
        );
        fs::remove_file(&path).ok();
    }

    #[test]
    fn corrupt_save_reports_once_and_leaves_bytes_until_next_mutation() {
        let path = temp_path("corrupt.txt");
        fs::write(&path, "not a task line\n").unwrap();

        let (mut parser, notice) = Parser::open(path.clone()).unwrap();
        assert_eq!(
            notice.as_deref(),
            Some(
                "File is corrupted and Duke is unable to restore data from previous sessions.\n\
Resetting contents of save-file."
            )
        );
        assert!(parser.tasks().is_empty());

        // Lazy overwrite: the corrupt bytes survive until a mutation.
        assert_eq!(fs::read_to_string(&path).unwrap(), "not a task line\n");

        parser.handle_input("todo fresh start");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "T | 0 | fresh start\n"
        );
        fs::remove_file(&path).ok();
    }

    #[test]
    fn description_is_stored_verbatim() {
        let (mut parser, path) = open_empty("verbatim.txt");
        parser.handle_input("todo  spaced  out ");
        assert_eq!(
            parser.handle_input("list").text,
            "Here are the tasks in your list:\n1. [T][ ]  spaced  out "
        );
        fs::remove_file(&path).ok();
    }
}
