pub mod input;
pub mod model;
pub mod store;
pub mod sweep;

pub use input::{expand_key, parse_priority, parse_quick_add, ParsedInput, TaskDraft};
pub use model::task::{Priority, Task};
pub use store::TaskStore;
pub use sweep::{StartOutcome, Sweep, TickOutcome};
