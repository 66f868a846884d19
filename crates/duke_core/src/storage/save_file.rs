use crate::error::DukeError;
use crate::model::{Task, When};
use crate::tasklist::TaskList;
use std::path::Path;

/// Reads the save-file back into a task list.
///
/// A missing file is not an error; the list starts empty. Any line that
/// fails the grammar makes the whole file `corrupt_save`. Read failures
/// other than a missing file surface as `io_failure`.
pub fn load_tasks(path: &Path) -> Result<TaskList, DukeError> {
    if !path.exists() {
        return Ok(TaskList::new());
    }

    let content = std::fs::read_to_string(path).map_err(|err| DukeError::io(err.to_string()))?;
    let mut tasks = TaskList::new();
    for line in content.lines() {
        tasks.push(parse_line(line)?);
    }
    Ok(tasks)
}

/// Rewrites the whole save-file so its bytes equal the list's serialization.
pub fn save_tasks(path: &Path, tasks: &TaskList) -> Result<(), DukeError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| DukeError::io(err.to_string()))?;
    }

    std::fs::write(path, serialize(tasks)).map_err(|err| DukeError::io(err.to_string()))
}

pub fn serialize(tasks: &TaskList) -> String {
    tasks.iter().map(Task::storage_line).collect()
}

/// Parses one `T | <done> | <desc>` / `D | ... | <when>` / `E | ... | <when>`
/// line. The when field of `D`/`E` lines is recovered with a right-split so
/// descriptions containing ` | ` still round-trip.
fn parse_line(line: &str) -> Result<Task, DukeError> {
    let (kind, rest) = line.split_once(" | ").ok_or(DukeError::CorruptSave)?;
    let (done_flag, rest) = rest.split_once(" | ").ok_or(DukeError::CorruptSave)?;
    let done = match done_flag {
        "1" => true,
        "0" => false,
        _ => return Err(DukeError::CorruptSave),
    };

    match kind {
        "T" => {
            if rest.is_empty() {
                return Err(DukeError::CorruptSave);
            }
            Ok(Task::ToDo {
                description: rest.to_string(),
                done,
            })
        }
        "D" | "E" => {
            let (description, stamp) = rest.rsplit_once(" | ").ok_or(DukeError::CorruptSave)?;
            if description.is_empty() {
                return Err(DukeError::CorruptSave);
            }
            let when = When::parse(stamp).map_err(|_| DukeError::CorruptSave)?;
            if kind == "D" {
                Ok(Task::Deadline {
                    description: description.to_string(),
                    done,
                    when,
                })
            } else {
                Ok(Task::Event {
                    description: description.to_string(),
                    done,
                    when,
                })
            }
        }
        _ => Err(DukeError::CorruptSave),
    }
}
