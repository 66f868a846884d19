use crate::model::Task;

/// Ordered task collection with 1-based addressing.
///
/// Insertion preserves arrival order, deletion closes the gap, duplicates
/// are allowed. Index-taking operations presuppose `is_valid_item_number`;
/// the dispatcher validates before calling them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Appends without producing a reply; used when restoring the save-file.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn is_valid_item_number(&self, number: i64) -> bool {
        number >= 1 && number as usize <= self.tasks.len()
    }

    pub fn add(&mut self, task: Task) -> String {
        let display = task.display_line();
        self.tasks.push(task);
        format!(
            "Got it. I've added this task:\n  {}\nNow you have {} tasks in the list.",
            display,
            self.tasks.len()
        )
    }

    pub fn delete(&mut self, number: usize) -> String {
        let removed = self.tasks.remove(number - 1);
        format!(
            "Noted. I've removed this task:\n  {}\nNow you have {} tasks in the list.",
            removed.display_line(),
            self.tasks.len()
        )
    }

    pub fn mark(&mut self, number: usize) -> String {
        let task = &mut self.tasks[number - 1];
        task.set_done(true);
        format!(
            "Nice! I've marked this task as done:\n  {}",
            task.display_line()
        )
    }

    pub fn unmark(&mut self, number: usize) -> String {
        let task = &mut self.tasks[number - 1];
        task.set_done(false);
        format!(
            "OK, I've marked this task as not done yet:\n  {}",
            task.display_line()
        )
    }

    pub fn list(&self) -> String {
        if self.tasks.is_empty() {
            return "You have no tasks in your list.".to_string();
        }

        let mut reply = String::from("Here are the tasks in your list:");
        for (index, task) in self.tasks.iter().enumerate() {
            reply.push_str(&format!("\n{}. {}", index + 1, task.display_line()));
        }
        reply
    }

    /// Case-sensitive substring search over descriptions, in list order.
    pub fn find(&self, needle: &str) -> String {
        let matches: Vec<&Task> = self.tasks.iter().filter(|task| task.matches(needle)).collect();
        if matches.is_empty() {
            return "No matching tasks found.".to_string();
        }

        let mut reply = String::from("Here are the matching tasks in your list:");
        for (index, task) in matches.iter().enumerate() {
            reply.push_str(&format!("\n{}. {}", index + 1, task.display_line()));
        }
        reply
    }
}
