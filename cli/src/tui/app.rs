use std::time::{Duration, Instant};

use ratatui::widgets::TableState;
use tasksweep_core::{StartOutcome, Sweep, Task, TaskDraft, TaskStore, TickOutcome};

pub enum InputMode {
    Normal,
    Adding,
    ConfirmDelete(u64),
}

pub struct App {
    pub store: TaskStore,
    pub sweep: Sweep,
    pub interval: Duration,
    next_tick_at: Option<Instant>,

    // Transient display cache, rebuilt after every mutation.
    pub rows: Vec<Task>,
    pub state: TableState,

    pub input: String,
    pub cursor_position: usize,
    pub input_mode: InputMode,

    pub status: Option<String>,
    /// Last task the sweep completed, highlighted in the table.
    pub highlight: Option<u64>,
}

impl App {
    pub fn new(store: TaskStore, interval: Duration) -> App {
        let rows = store.all_sorted_for_display();
        let mut state = TableState::default();
        if !rows.is_empty() {
            state.select(Some(0));
        }
        App {
            store,
            sweep: Sweep::new(),
            interval,
            next_tick_at: None,
            rows,
            state,
            input: String::new(),
            cursor_position: 0,
            input_mode: InputMode::Normal,
            status: None,
            highlight: None,
        }
    }

    pub fn refresh(&mut self) {
        self.rows = self.store.all_sorted_for_display();
        match self.state.selected() {
            Some(_) if self.rows.is_empty() => self.state.select(None),
            Some(i) if i >= self.rows.len() => self.state.select(Some(self.rows.len() - 1)),
            None if !self.rows.is_empty() => self.state.select(Some(0)),
            _ => {}
        }
    }

    pub fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.rows.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.rows.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn selected_id(&self) -> Option<u64> {
        self.state
            .selected()
            .and_then(|i| self.rows.get(i))
            .map(|t| t.id)
    }

    fn select_row(&mut self, id: u64) {
        if let Some(i) = self.rows.iter().position(|t| t.id == id) {
            self.state.select(Some(i));
        }
    }

    // --- Manual task actions ---

    pub fn complete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.complete(id);
            self.status = None;
            self.refresh();
        }
    }

    pub fn request_delete(&mut self) {
        if let Some(id) = self.selected_id() {
            self.input_mode = InputMode::ConfirmDelete(id);
            self.status = Some(format!("Delete task {}? (y/n)", id));
        } else {
            self.status = Some("Please select a task to delete!".to_string());
        }
    }

    pub fn confirm_delete(&mut self, id: u64) {
        self.store.delete(id);
        self.input_mode = InputMode::Normal;
        self.status = None;
        self.refresh();
    }

    pub fn cancel_delete(&mut self) {
        self.input_mode = InputMode::Normal;
        self.status = None;
    }

    // --- Sequential sweep ---

    pub fn start_sweep(&mut self) {
        match self.sweep.start(&self.store) {
            StartOutcome::Started => {
                self.status = None;
                // First completion fires without delay.
                self.next_tick_at = Some(Instant::now());
            }
            StartOutcome::NothingToDo => {
                self.status = Some("No incomplete tasks remaining!".to_string());
            }
            StartOutcome::AlreadyRunning => {}
        }
    }

    /// How long the event loop may wait for input before the next tick.
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.next_tick_at.map(|at| at.saturating_duration_since(now))
    }

    pub fn tick_due(&self, now: Instant) -> bool {
        matches!(self.next_tick_at, Some(at) if at <= now)
    }

    pub fn sweep_tick(&mut self) {
        match self.sweep.tick(&mut self.store) {
            TickOutcome::Completed(id) => {
                self.highlight = Some(id);
                self.refresh();
                self.select_row(id);
                self.next_tick_at = Some(Instant::now() + self.interval);
            }
            TickOutcome::AllComplete => {
                self.highlight = None;
                self.next_tick_at = None;
                self.status = Some("All tasks completed!".to_string());
            }
            TickOutcome::Idle => {
                self.next_tick_at = None;
            }
        }
    }

    // --- Quick-add input line ---

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
        self.status = None;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self
            .input
            .chars()
            .take(self.cursor_position)
            .map(|c| c.len_utf8())
            .sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self
                .input
                .chars()
                .take(self.cursor_position - 1)
                .map(|c| c.len_utf8())
                .sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_add(&mut self) {
        match TaskDraft::parse(&self.input) {
            Ok(draft) => {
                let id = self
                    .store
                    .add(draft.title, draft.description, draft.due, draft.priority);
                self.input.clear();
                self.cursor_position = 0;
                self.status = None;
                self.exit_input_mode();
                self.refresh();
                self.select_row(id);
            }
            Err(e) => {
                // Stay in add mode so the line can be corrected.
                self.status = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tasksweep_core::Priority;

    fn app_with_tasks() -> App {
        let mut store = TaskStore::new();
        store.add("low".to_string(), String::new(), None, Priority::Low);
        store.add("high".to_string(), String::new(), None, Priority::High);
        App::new(store, Duration::from_millis(10))
    }

    #[test]
    fn test_start_sweep_schedules_immediate_first_tick() {
        let mut app = app_with_tasks();
        app.start_sweep();
        assert!(app.sweep.is_running());
        assert!(app.tick_due(Instant::now()));
    }

    #[test]
    fn test_sweep_ticks_highlight_and_finish() {
        let mut app = app_with_tasks();
        app.start_sweep();

        app.sweep_tick();
        assert_eq!(app.highlight, Some(2));
        app.sweep_tick();
        assert_eq!(app.highlight, Some(1));
        app.sweep_tick();
        assert_eq!(app.status.as_deref(), Some("All tasks completed!"));
        assert!(!app.sweep.is_running());
        assert!(app.until_next_tick(Instant::now()).is_none());
    }

    #[test]
    fn test_completed_tick_schedules_next_tick_one_interval_out() {
        let mut store = TaskStore::new();
        store.add("only".to_string(), String::new(), None, Priority::Medium);
        // Wide interval so elapsed test time cannot make the tick due.
        let interval = Duration::from_secs(60);
        let mut app = App::new(store, interval);

        app.start_sweep();
        app.sweep_tick();

        let now = Instant::now();
        assert!(!app.tick_due(now));
        let wait = app.until_next_tick(now).expect("next tick scheduled");
        assert!(wait <= interval);
        assert!(wait > interval - Duration::from_secs(1));
    }

    #[test]
    fn test_manual_complete_clears_stale_status() {
        let mut app = app_with_tasks();
        app.start_sweep();
        app.sweep_tick();
        app.sweep_tick();
        app.sweep_tick();
        assert_eq!(app.status.as_deref(), Some("All tasks completed!"));

        app.complete_selected();
        assert_eq!(app.status, None);
    }

    #[test]
    fn test_start_sweep_on_empty_store_sets_rejection_message() {
        let mut app = App::new(TaskStore::new(), Duration::from_millis(10));
        app.start_sweep();
        assert!(!app.sweep.is_running());
        assert_eq!(app.status.as_deref(), Some("No incomplete tasks remaining!"));
    }

    #[test]
    fn test_submit_add_rejects_empty_title_and_stays_in_add_mode() {
        let mut app = App::new(TaskStore::new(), Duration::from_millis(10));
        app.enter_add_mode();
        app.submit_add();
        assert!(matches!(app.input_mode, InputMode::Adding));
        assert_eq!(app.status.as_deref(), Some("Title is required!"));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_delete_flow_asks_for_confirmation() {
        let mut app = app_with_tasks();
        app.request_delete();
        let id = match app.input_mode {
            InputMode::ConfirmDelete(id) => id,
            _ => panic!("expected confirm mode"),
        };
        app.confirm_delete(id);
        assert_eq!(app.store.len(), 1);
        assert!(matches!(app.input_mode, InputMode::Normal));
    }
}
