use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::{CookieJar, Form};
use serde::Deserialize;
use weekmenu_pantry::IngredientRow;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "select-ingredients.html")]
pub struct SelectTemplate {
    pub current_path: String,
    pub ingredients: Vec<IngredientRow>,
    pub selected_ids: Vec<String>,
    pub empty_selection: bool,
}

impl SelectTemplate {
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.iter().any(|selected| selected == id)
    }
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let ingredients = crate::try_page_response!(app.pantry_query.all(), template);
    let state = super::load_state(&app, &jar).await;

    template
        .render(SelectTemplate {
            current_path: "plan".to_owned(),
            ingredients,
            selected_ids: state.selected_ids,
            empty_selection: false,
        })
        .into_response()
}

#[derive(Deserialize, Default)]
pub struct SelectForm {
    #[serde(default)]
    pub ingredients: Vec<String>,
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SelectForm>,
) -> impl IntoResponse {
    let selected: Vec<String> = form
        .ingredients
        .into_iter()
        .map(|id| id.trim().to_owned())
        .filter(|id| !id.is_empty())
        .collect();

    if selected.is_empty() {
        let ingredients = crate::try_page_response!(app.pantry_query.all(), template);

        return template
            .render(SelectTemplate {
                current_path: "plan".to_owned(),
                ingredients,
                selected_ids: vec![],
                empty_selection: true,
            })
            .into_response();
    }

    let (jar, session_id) = crate::session::ensure_session(jar);
    app.sessions.select(&session_id, selected).await;

    (jar, Redirect::to("/search-recipes")).into_response()
}
