use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use time::Duration;
use weekmenu_recipe::RecipeDescriptor;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

pub struct AssignDay {
    pub weekday: u8,
    pub label: String,
    pub date: String,
}

#[derive(askama::Template)]
#[template(path = "assign-recipes.html")]
pub struct AssignTemplate {
    pub current_path: String,
    pub monday: String,
    pub days: Vec<AssignDay>,
    pub recipes: Vec<RecipeDescriptor>,
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
) -> impl IntoResponse {
    let state = super::load_state(&app, &jar).await;
    let monday = weekmenu_shared::current_week_start();

    let days = (0..weekmenu_mealplan::DAYS_IN_WEEK)
        .map(|weekday| AssignDay {
            weekday,
            label: template.t(crate::template::weekday_key(weekday)),
            date: weekmenu_shared::format_date(monday + Duration::days(weekday.into())),
        })
        .collect();

    let recipes = state
        .results
        .iter()
        .filter_map(RecipeDescriptor::from_value)
        .collect();

    template.render(AssignTemplate {
        current_path: "plan".to_owned(),
        monday: weekmenu_shared::format_date(monday),
        days,
        recipes,
    })
}
