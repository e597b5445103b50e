pub mod views;

pub use views::{PageView, Response, View};
