use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "search-recipes.html")]
pub struct SearchTemplate {
    pub current_path: String,
    pub selected_count: usize,
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let Some(session_id) = crate::session::session_id(&jar) else {
        return Redirect::to("/select-ingredients").into_response();
    };

    let state = app.sessions.get(&session_id).await.unwrap_or_default();
    if state.selected_ids.is_empty() {
        return Redirect::to("/select-ingredients").into_response();
    }

    let names = crate::try_page_response!(
        app.pantry_query.find_names(&state.selected_ids),
        template
    );

    if names.is_empty() {
        return template
            .render(SearchTemplate {
                current_path: "plan".to_owned(),
                selected_count: state.selected_ids.len(),
            })
            .into_response();
    }

    let results = app.search.search(&names).await;
    tracing::info!(
        ingredients = names.len(),
        results = results.len(),
        "recipes searched"
    );

    app.sessions.store_results(&session_id, results).await;

    Redirect::to("/recipe-suggestions").into_response()
}
