mod completions;
mod convert;
mod man;

pub use completions::run_completions;
pub use convert::run_convert;
pub use man::run_man;
