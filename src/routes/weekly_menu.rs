use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use time::{Date, Duration};
use weekmenu_mealplan::WeekSlot;

use crate::{
    routes::AppState,
    template::{Template, filters, weekday_key},
};

#[derive(Deserialize, Default)]
pub struct WeekQuery {
    pub week: Option<String>,
}

pub struct DayView {
    pub label: String,
    pub slot: WeekSlot,
}

#[derive(askama::Template)]
#[template(path = "weekly-menu.html")]
pub struct WeeklyMenuTemplate {
    pub current_path: String,
    pub week_of: String,
    pub previous_week: Option<String>,
    pub next_week: Option<String>,
    pub days: Vec<DayView>,
}

/// `start` when its whole week fits in the supported date range.
fn full_week(start: Date) -> Option<Date> {
    start.checked_add(Duration::days(6)).map(|_| start)
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> impl IntoResponse {
    let week = query
        .week
        .as_deref()
        .and_then(|week| weekmenu_shared::parse_date(week).ok())
        .map(weekmenu_shared::week_start)
        .and_then(full_week)
        .unwrap_or_else(weekmenu_shared::current_week_start);

    let slots = crate::try_page_response!(app.mealplan_query.week(week), template);

    let days = slots
        .into_iter()
        .map(|slot| DayView {
            label: template.t(weekday_key(slot.weekday)),
            slot,
        })
        .collect();

    template
        .render(WeeklyMenuTemplate {
            current_path: "weekly-menu".to_owned(),
            week_of: weekmenu_shared::format_date(week),
            previous_week: week
                .checked_sub(Duration::weeks(1))
                .map(weekmenu_shared::format_date),
            next_week: week
                .checked_add(Duration::weeks(1))
                .and_then(full_week)
                .map(weekmenu_shared::format_date),
            days,
        })
        .into_response()
}
