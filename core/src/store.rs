use chrono::NaiveDate;

use crate::model::task::{Priority, Task};

/// Owns the task collection and the id counter. The presentation layer and
/// the sweep hold no copies of their own, only transient read views.
///
/// Single-threaded by design; no locking.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends a new pending task and returns its freshly assigned id.
    /// Ids are strictly increasing and never reused, even after deletion.
    pub fn add(
        &mut self,
        title: String,
        description: String,
        due: Option<NaiveDate>,
        priority: Priority,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::new(id, title, description, due, priority));
        id
    }

    /// Marks the task completed. Returns false if the id is unknown.
    /// Idempotent: completing an already-completed task returns true.
    pub fn complete(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = true;
                true
            }
            None => false,
        }
    }

    /// Removes the task permanently. Returns false if the id is unknown.
    /// The id counter is not decremented.
    pub fn delete(&mut self, id: u64) -> bool {
        match self.tasks.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All pending tasks, ordered by (priority rank, id). This is the order
    /// the sweep consumes tasks in.
    pub fn incomplete_sorted(&self) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| !t.completed)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| (t.priority.rank(), t.id));
        tasks
    }

    /// Every task, pending before completed, then by (priority rank, id).
    pub fn all_sorted_for_display(&self) -> Vec<Task> {
        let mut tasks = self.tasks.clone();
        tasks.sort_by_key(|t| (t.completed, t.priority.rank(), t.id));
        tasks
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
