//! Weekly planning workflow: pick pantry ingredients, search recipes for
//! them, review the suggestions, assign recipes to weekdays and save.
//!
//! Progress lives in the [`crate::session::WorkflowStore`] under the
//! session cookie. A step reached without the state it needs sends the
//! browser back to the step that produces it.

pub mod assign;
pub mod save;
pub mod search;
pub mod select;
pub mod suggestions;

use axum_extra::extract::CookieJar;

use crate::{routes::AppState, session::WorkflowState};

/// Workflow state of the requesting browser, empty when unknown or expired.
pub(crate) async fn load_state(app: &AppState, jar: &CookieJar) -> WorkflowState {
    let Some(id) = crate::session::session_id(jar) else {
        return WorkflowState::default();
    };

    app.sessions.get(&id).await.unwrap_or_default()
}
