mod task;
mod when;

pub use task::Task;
pub use when::When;
