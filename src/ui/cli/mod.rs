pub mod drivers;
pub mod task_file;
pub mod wizard;
