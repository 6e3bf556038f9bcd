//! The interactive menu loop for the task store.
//!
//! A single state ("awaiting menu choice") with five transitions. Every
//! handler returns to the same state except Exit. The loop is generic over
//! its reader and writer so tests can script a whole session.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::output;
use crate::store::TaskStore;

const OPTIONS: &str = "\nOptions:\n\
    1. Add Task\n\
    2. Mark Task as Done\n\
    3. Remove Task\n\
    4. See All Tasks\n\
    5. Exit";

pub fn run(store: &mut TaskStore, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    loop {
        writeln!(out, "\nTo-Do List:")?;
        write!(out, "{}", output::format_task_list(store.tasks()))?;
        writeln!(out, "{OPTIONS}")?;
        write!(out, "Choose an option: ")?;
        out.flush()?;

        // End of input behaves like Exit.
        let choice = read_line(input)?.unwrap_or_else(|| "5".to_string());

        match choice.trim() {
            "1" => add_task(store, input, out)?,
            "2" => mark_task_done(store, input, out)?,
            "3" => remove_task(store, input, out)?,
            "4" => see_all_tasks(store, input, out)?,
            "5" => {
                if let Err(e) = store.save() {
                    writeln!(out, "Error saving tasks: {e:#}")?;
                }
                writeln!(out, "Exiting...")?;
                break;
            }
            _ => writeln!(out, "Invalid option. Please try again.")?,
        }
    }
    Ok(())
}

fn add_task(store: &mut TaskStore, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let Some(name) = prompt(input, out, "Enter task name: ")? else {
        return Ok(());
    };
    let Some(description) = prompt(input, out, "Enter task description: ")? else {
        return Ok(());
    };
    match store.add(name, description) {
        Ok(()) => writeln!(out, "Task added.")?,
        Err(e) => writeln!(out, "Error saving tasks: {e:#}")?,
    }
    Ok(())
}

fn mark_task_done(
    store: &mut TaskStore,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let Some(name) = prompt(input, out, "Enter task name to mark as done: ")? else {
        return Ok(());
    };
    match store.mark_done(&name) {
        Ok(true) => writeln!(out, "Task marked as done.")?,
        Ok(false) => writeln!(out, "Task not found.")?,
        Err(e) => writeln!(out, "Error saving tasks: {e:#}")?,
    }
    Ok(())
}

fn remove_task(
    store: &mut TaskStore,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let Some(name) = prompt(input, out, "Enter task name to remove: ")? else {
        return Ok(());
    };
    match store.remove(&name) {
        Ok(true) => writeln!(out, "Task removed.")?,
        Ok(false) => writeln!(out, "Task not found.")?,
        Err(e) => writeln!(out, "Error saving tasks: {e:#}")?,
    }
    Ok(())
}

/// The one read path that goes straight to disk instead of memory. If the
/// file was edited externally since the last mutation, this view and the
/// in-memory list will disagree.
fn see_all_tasks(
    store: &TaskStore,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    match store.read_raw() {
        Ok(Some(tasks)) if !tasks.is_empty() => {
            writeln!(out, "\nAll Tasks:")?;
            write!(out, "{}", output::format_task_blocks(&tasks))?;
        }
        Ok(_) => writeln!(out, "No tasks available.")?,
        Err(e) => writeln!(out, "Error loading tasks: {e:#}")?,
    }
    writeln!(out, "Press Enter to return to the main menu...")?;
    read_line(input)?;
    Ok(())
}

fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    message: &str,
) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;
    read_line(input)
}

/// Read one line, `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(store: &mut TaskStore, script: &str) -> String {
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        run(store, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn temp_store() -> (tempfile::TempDir, TaskStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::load(dir.path().join("tasks.txt")).unwrap();
        (dir, store)
    }

    #[test]
    fn add_mark_remove_session() {
        let (_dir, mut store) = temp_store();
        let out = run_session(
            &mut store,
            "1\nMilk\nBuy two liters\n1\nBread\nRye\n2\nmilk\n3\nBREAD\n5\n",
        );
        assert!(out.contains("Task added."));
        assert!(out.contains("Task marked as done."));
        assert!(out.contains("Task removed."));
        assert!(out.contains("Exiting..."));

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].name, "Milk");
        assert!(store.tasks()[0].done);
    }

    #[test]
    fn list_rendered_each_iteration() {
        let (_dir, mut store) = temp_store();
        store.add("A", "desc").unwrap();
        let out = run_session(&mut store, "5\n");
        assert!(out.contains("To-Do List:"));
        assert!(out.contains("1. [ ] A: desc"));
        assert!(out.contains("Choose an option: "));
    }

    #[test]
    fn empty_list_message_shown() {
        let (_dir, mut store) = temp_store();
        let out = run_session(&mut store, "5\n");
        assert!(out.contains("No tasks available."));
    }

    #[test]
    fn mark_done_miss_reports_not_found() {
        let (_dir, mut store) = temp_store();
        let out = run_session(&mut store, "2\nnope\n5\n");
        assert!(out.contains("Task not found."));
    }

    #[test]
    fn remove_miss_reports_not_found() {
        let (_dir, mut store) = temp_store();
        store.add("A", "").unwrap();
        let out = run_session(&mut store, "3\nA\n3\nA\n5\n");
        assert!(out.contains("Task removed."));
        assert!(out.contains("Task not found."));
    }

    #[test]
    fn invalid_option_keeps_looping() {
        let (_dir, mut store) = temp_store();
        let out = run_session(&mut store, "9\nhello\n5\n");
        assert_eq!(
            out.matches("Invalid option. Please try again.").count(),
            2
        );
        assert!(out.contains("Exiting..."));
    }

    #[test]
    fn see_all_reads_from_disk() {
        let (_dir, mut store) = temp_store();
        store.add("Milk", "Buy two liters").unwrap();
        let out = run_session(&mut store, "4\n\n5\n");
        assert!(out.contains("All Tasks:"));
        assert!(out.contains("Name: Milk"));
        assert!(out.contains("Description: Buy two liters"));
        assert!(out.contains("Press Enter to return to the main menu..."));
    }

    #[test]
    fn see_all_on_missing_file() {
        let (_dir, mut store) = temp_store();
        let out = run_session(&mut store, "4\n\n5\n");
        assert!(out.contains("No tasks available."));
    }

    #[test]
    fn end_of_input_behaves_like_exit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.txt");
        let mut store = TaskStore::load(&path).unwrap();

        let out = run_session(&mut store, "");
        assert!(out.contains("Choose an option: "));
        assert!(out.contains("Exiting..."));
        // The exit path saves, so the file exists even with no mutations.
        assert!(path.exists());
    }

    #[test]
    fn end_of_input_mid_prompt_returns_to_loop_and_exits() {
        let (_dir, mut store) = temp_store();
        // "1" then EOF before the name prompt is answered.
        let out = run_session(&mut store, "1\n");
        assert!(out.contains("Enter task name: "));
        assert!(out.contains("Exiting..."));
        assert!(store.tasks().is_empty());
    }
}
