pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::AppPaths;
pub use paths::{format_path_with_tilde, validate_workspace_name};
pub use terminal::sanitize_label;
