use crate::model::Task;
use crate::store::DONE_STATUS;

/// Render the numbered task list shown at the top of each menu iteration.
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks available.\n".to_string();
    }
    let mut out = String::new();
    for (i, task) in tasks.iter().enumerate() {
        out.push_str(&format!(
            "{}. [{}] {}: {}\n",
            i + 1,
            task.glyph(),
            task.name,
            task.description
        ));
    }
    out
}

/// Render tasks in the same block layout the file uses, one blank line
/// between blocks. Used by the "See All Tasks" view.
pub fn format_task_blocks(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        let status = if task.done { DONE_STATUS } else { "" };
        out.push_str(&format!(
            "Name: {}\nDescription: {}\nStatus: {}\n\n",
            task.name, task.description, status
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(name: &str, desc: &str, done: bool) -> Task {
        let mut task = Task::new(name, desc);
        task.done = done;
        task
    }

    #[test]
    fn empty_list_message() {
        assert_eq!(format_task_list(&[]), "No tasks available.\n");
    }

    #[test]
    fn numbered_list_with_glyphs() {
        let tasks = vec![
            make_task("a", "desc A", true),
            make_task("b", "desc B", false),
        ];
        let out = format_task_list(&tasks);
        assert_eq!(out, "1. [✓] a: desc A\n2. [ ] b: desc B\n");
    }

    #[test]
    fn blocks_match_file_layout() {
        let tasks = vec![make_task("a", "desc", true)];
        assert_eq!(
            format_task_blocks(&tasks),
            "Name: a\nDescription: desc\nStatus: task is done ✓\n\n"
        );
    }

    #[test]
    fn blocks_empty_input() {
        assert_eq!(format_task_blocks(&[]), "");
    }
}
