pub mod wiki_views;

pub use wiki_views::{ViewResult, WikiViews};
