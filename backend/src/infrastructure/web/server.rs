/// HTTP boundary: routes requests to the page controller and renders its results
use super::templates::TemplateRenderer;
use crate::application::dto::Response;
use crate::application::forms::{Form, WidgetResources};
use crate::application::repositories::PageRepository;
use crate::application::routes::RouteUrls;
use crate::application::use_cases::{ViewResult, WikiViews};
use crate::domain::base::DomainError;
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response as HttpResponse};
use axum::routing::get;
use axum::{Form as FormData, Router};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Error, Debug)]
pub enum WebError {
    #[error("Repository error: {0}")]
    Domain(#[from] DomainError),

    #[error("Unreadable form submission: {0}")]
    Form(#[from] FormRejection),
}

pub type WebResult<T> = Result<T, WebError>;

impl IntoResponse for WebError {
    fn into_response(self) -> HttpResponse {
        match self {
            WebError::Domain(ref err) if err.is_not_found() => {
                tracing::warn!("{}", err);
                (StatusCode::NOT_FOUND, "Not Found").into_response()
            }
            WebError::Domain(err) => {
                tracing::error!("Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            WebError::Form(rejection) => {
                tracing::warn!("{}", rejection);
                rejection.into_response()
            }
        }
    }
}

/// Submitted form controls, in request order
type Controls = Vec<(String, String)>;

/// A POST without a form content type (e.g. no body at all) carries no controls
fn submitted_controls(form: Result<FormData<Controls>, FormRejection>) -> WebResult<Controls> {
    match form {
        Ok(FormData(controls)) => Ok(controls),
        Err(FormRejection::InvalidFormContentType(_)) => Ok(Vec::new()),
        Err(rejection) => Err(rejection.into()),
    }
}

/// Shared per-process state handed to every handler
pub struct AppState<R: PageRepository> {
    repository: Arc<Mutex<R>>,
    form: Arc<Form>,
    resources: Arc<WidgetResources>,
    routes: Arc<RouteUrls>,
    templates: Arc<dyn TemplateRenderer>,
}

impl<R: PageRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        AppState {
            repository: Arc::clone(&self.repository),
            form: Arc::clone(&self.form),
            resources: Arc::clone(&self.resources),
            routes: Arc::clone(&self.routes),
            templates: Arc::clone(&self.templates),
        }
    }
}

impl<R: PageRepository + Send + 'static> AppState<R> {
    pub fn new(
        repository: R,
        form: Form,
        routes: RouteUrls,
        templates: impl TemplateRenderer + 'static,
    ) -> Self {
        let resources = form.widget_resources();
        AppState {
            repository: Arc::new(Mutex::new(repository)),
            form: Arc::new(form),
            resources: Arc::new(resources),
            routes: Arc::new(routes),
            templates: Arc::new(templates),
        }
    }

    /// Handle to the store, shared with the running router
    pub fn repository(&self) -> Arc<Mutex<R>> {
        Arc::clone(&self.repository)
    }

    /// Run one controller operation with the store locked for its whole duration
    async fn handle<F>(&self, operation: F) -> WebResult<HttpResponse>
    where
        F: FnOnce(&mut WikiViews<'_, R>) -> ViewResult,
    {
        let mut repository = self.repository.lock().await;
        let mut views = WikiViews::new(&mut *repository, &self.form, &self.routes);
        let response = operation(&mut views)?;
        Ok(self.respond(response))
    }

    fn respond(&self, response: Response) -> HttpResponse {
        match response {
            Response::Render(view) => {
                tracing::debug!("Rendering {}", view.template_name());
                let body = self.templates.render(&view, &self.resources);
                ([(header::CONTENT_TYPE, self.templates.content_type())], body).into_response()
            }
            Response::Redirect(location) => {
                (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
            }
        }
    }
}

/// Build the wiki router.
///
/// Routes:
/// - GET /                     -> list
/// - GET|POST /add             -> add form / add submission
/// - GET /{id}                 -> show
/// - GET|POST /{id}/edit       -> edit form / edit submission
/// - GET|POST /{id}/delete     -> delete
pub fn build_router<R: PageRepository + Send + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/", get(list::<R>))
        .route("/add", get(show_add_form::<R>).post(submit_add::<R>))
        .route("/{id}", get(show::<R>))
        .route("/{id}/edit", get(show_edit_form::<R>).post(submit_edit::<R>))
        .route("/{id}/delete", get(delete::<R>).post(delete::<R>))
        .with_state(state)
}

/// Serve the router until `shutdown` resolves
pub async fn serve<R, S>(listener: TcpListener, state: AppState<R>, shutdown: S) -> std::io::Result<()>
where
    R: PageRepository + Send + 'static,
    S: std::future::Future<Output = ()> + Send + 'static,
{
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

#[tracing::instrument(skip(state))]
async fn list<R: PageRepository + Send + 'static>(
    State(state): State<AppState<R>>,
) -> WebResult<HttpResponse> {
    state.handle(|views| views.list()).await
}

#[tracing::instrument(skip(state))]
async fn show_add_form<R: PageRepository + Send + 'static>(
    State(state): State<AppState<R>>,
) -> WebResult<HttpResponse> {
    state.handle(|views| views.show_add_form()).await
}

#[tracing::instrument(skip(state, form))]
async fn submit_add<R: PageRepository + Send + 'static>(
    State(state): State<AppState<R>>,
    form: Result<FormData<Controls>, FormRejection>,
) -> WebResult<HttpResponse> {
    let controls = submitted_controls(form)?;
    state.handle(|views| views.add(&controls)).await
}

#[tracing::instrument(skip(state))]
async fn show<R: PageRepository + Send + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> WebResult<HttpResponse> {
    state.handle(|views| views.show(&id)).await
}

#[tracing::instrument(skip(state))]
async fn show_edit_form<R: PageRepository + Send + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> WebResult<HttpResponse> {
    state.handle(|views| views.show_edit_form(&id)).await
}

#[tracing::instrument(skip(state, form))]
async fn submit_edit<R: PageRepository + Send + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    form: Result<FormData<Controls>, FormRejection>,
) -> WebResult<HttpResponse> {
    let controls = submitted_controls(form)?;
    state.handle(|views| views.edit(&id, &controls)).await
}

#[tracing::instrument(skip(state))]
async fn delete<R: PageRepository + Send + 'static>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> WebResult<HttpResponse> {
    state.handle(|views| views.delete(&id)).await
}
