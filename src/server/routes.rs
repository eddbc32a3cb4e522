//! Request handlers.
//!
//! Each page request builds a fresh [`PageState`] from the loaded list, then
//! replays the request as page events before rendering:
//!
//! - the request path → [`Event::Navigate`]
//! - `q=<text>` → [`Event::QueryChanged`]
//! - `modal=open` → [`Event::ShowModal`]
//!
//! Nothing survives between requests.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
};
use serde::Deserialize;

use super::{error::AppError, state::AppContext};
use crate::app::{execute_actions, handle_event, Event, PageState, Route};
use crate::ui::render;

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub q: Option<String>,
    pub modal: Option<String>,
}

impl PageParams {
    /// Page events implied by the route and parameters, in replay order.
    #[must_use]
    pub fn events(&self, route: Route) -> Vec<Event> {
        let mut events = Vec::with_capacity(3);
        events.push(Event::Navigate(route));
        if let Some(query) = &self.q {
            events.push(Event::QueryChanged(query.clone()));
        }
        if self.modal.as_deref() == Some("open") {
            events.push(Event::ShowModal);
        }
        events
    }
}

/// Serves both page routes; the path decides the theme.
pub async fn page_handler(
    State(ctx): State<Arc<AppContext>>,
    uri: Uri,
    Query(params): Query<PageParams>,
) -> Result<Html<String>, AppError> {
    let route = Route::from_path(uri.path()).ok_or(AppError::NotFound)?;
    render_route(&ctx, route, &params).await
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}

#[tracing::instrument(skip(ctx, params), fields(query_len = params.q.as_ref().map_or(0, String::len)))]
async fn render_route(
    ctx: &AppContext,
    route: Route,
    params: &PageParams,
) -> Result<Html<String>, AppError> {
    let countries = ctx.source.fetch().await?;
    tracing::debug!(count = countries.len(), "countries loaded");

    let mut state = PageState::new(countries, Route::Home);
    for event in params.events(route) {
        let (_changed, actions) = handle_event(&mut state, &event);
        execute_actions(&actions);
    }

    Ok(Html(render(&state, &ctx.themes)))
}
