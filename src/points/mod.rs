pub mod errors;
pub mod report;
pub mod pairs;
pub mod file;
pub use file::{load_points, load_points_from_path, save_points, save_points_to_path};
pub use pairs::add_pairs;
