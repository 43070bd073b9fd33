use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::Form;
use serde::Deserialize;
use strum::VariantArray;
use time::Duration;
use weekmenu_pantry::{AddInput, IngredientRow, StorageMethod};
use weekmenu_shared::FieldErrors;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

#[derive(askama::Template)]
#[template(path = "ingredients.html")]
pub struct IngredientsTemplate {
    pub current_path: String,
    pub ingredients: Vec<IngredientRow>,
    pub today: i64,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let ingredients = crate::try_page_response!(app.pantry_query.all(), template);
    let today = weekmenu_shared::to_timestamp(time::OffsetDateTime::now_utc().date());

    template
        .render(IngredientsTemplate {
            current_path: "ingredients".to_owned(),
            ingredients,
            today,
        })
        .into_response()
}

#[derive(Deserialize, Default, Clone)]
pub struct AddForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub expiration_date: String,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub storage_method: String,
}

impl From<AddForm> for AddInput {
    fn from(form: AddForm) -> Self {
        AddInput {
            name: form.name,
            quantity: form.quantity,
            purchase_date: form.purchase_date,
            expiration_date: form.expiration_date,
            memo: Some(form.memo),
            storage_method: form.storage_method,
        }
    }
}

#[derive(askama::Template)]
#[template(path = "ingredients-add.html")]
pub struct AddTemplate {
    pub current_path: String,
    pub form: AddForm,
    pub errors: FieldErrors,
    pub error_message: Option<String>,
    pub storage_methods: &'static [StorageMethod],
}

impl Default for AddTemplate {
    fn default() -> Self {
        Self {
            current_path: "ingredients".to_owned(),
            form: AddForm::default(),
            errors: FieldErrors::default(),
            error_message: None,
            storage_methods: StorageMethod::VARIANTS,
        }
    }
}

pub async fn add_page(template: Template) -> impl IntoResponse {
    let today = time::OffsetDateTime::now_utc().date();

    template.render(AddTemplate {
        form: AddForm {
            purchase_date: weekmenu_shared::format_date(today),
            expiration_date: weekmenu_shared::format_date(today + Duration::days(7)),
            storage_method: StorageMethod::default().to_string(),
            ..Default::default()
        },
        ..Default::default()
    })
}

pub async fn add_action(
    template: Template,
    State(app): State<AppState>,
    Form(form): Form<AddForm>,
) -> impl IntoResponse {
    match app.pantry_command.add(form.clone().into()).await {
        Ok(id) => {
            tracing::info!(ingredient = id, "ingredient added");

            Redirect::to("/ingredients").into_response()
        }
        Err(weekmenu_shared::Error::Validate(errors)) => template
            .render(AddTemplate {
                form,
                errors: FieldErrors::from(&errors),
                ..Default::default()
            })
            .into_response(),
        Err(weekmenu_shared::Error::User(message)) => template
            .render(AddTemplate {
                form,
                error_message: Some(message),
                ..Default::default()
            })
            .into_response(),
        Err(err) => {
            tracing::error!(err = %err, "failed to add ingredient");

            template.server_error()
        }
    }
}
