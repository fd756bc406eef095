//! Axum route handlers for the browser page.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::warn;

use crate::analysis::session::run_analysis;
use crate::models::form::FormInput;
use crate::state::AppState;
use crate::ui::page::{render_page, PageView};

/// GET /
///
/// Renders the form with the session's last inputs and latest result.
pub async fn handle_page(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock();
    Html(render_page(&PageView {
        form: &session.form,
        result: session.last_result.as_ref(),
        in_flight: session.in_flight,
        alert: None,
    }))
}

/// POST /
///
/// Runs an analysis from the submitted form. Success redirects to `GET /` so a
/// browser reload does not resubmit. Failures re-render the page with the
/// submitted values and an alert; the previous result stays visible.
pub async fn handle_submit(
    State(state): State<AppState>,
    Form(input): Form<FormInput>,
) -> Response {
    let submitted = input.clone();

    match run_analysis(&state.session, state.analyzer.as_ref(), input).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => {
            warn!("Form submission rejected: {err}");
            let alert = err.user_message();
            let session = state.session.lock();
            let page = render_page(&PageView {
                form: &submitted,
                result: session.last_result.as_ref(),
                in_flight: session.in_flight,
                alert: Some(&alert),
            });
            (err.status(), Html(page)).into_response()
        }
    }
}
