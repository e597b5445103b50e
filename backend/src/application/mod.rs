pub mod dto;
pub mod forms;
pub mod repositories;
pub mod routes;
pub mod use_cases;

// Re-export key types to avoid naming conflicts
pub use dto::{PageView, Response, View};
pub use forms::{Form, Schema, Validation, ValidationFailure, WidgetResources};
pub use repositories::PageRepository;
pub use routes::RouteUrls;
pub use use_cases::{ViewResult, WikiViews};
