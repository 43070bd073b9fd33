use axum::{extract::State, response::IntoResponse};
use weekmenu_mealplan::WeekSlot;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub current_path: String,
    pub ingredient_count: usize,
    pub unpurchased_count: usize,
    pub today: Option<WeekSlot>,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let ingredients = crate::try_page_response!(app.pantry_query.all(), template);
    let shopping = crate::try_page_response!(app.shopping_query.list(), template);

    let today = time::OffsetDateTime::now_utc().date();
    let week = crate::try_page_response!(app.mealplan_query.week(today), template);
    let weekday = today.weekday().number_days_from_monday();
    let today = week.into_iter().find(|slot| slot.weekday == weekday);

    template
        .render(IndexTemplate {
            current_path: "index".to_owned(),
            ingredient_count: ingredients.len(),
            unpurchased_count: shopping.unpurchased.len(),
            today,
        })
        .into_response()
}
