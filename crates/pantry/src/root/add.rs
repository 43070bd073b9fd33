use std::str::FromStr;

use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use ulid::Ulid;
use validator::{Validate, ValidationError};
use weekmenu_db::table::Ingredient;

use crate::StorageMethod;

#[derive(Validate, Debug, Default, Clone)]
pub struct AddInput {
    #[validate(length(min = 1, max = 100, message = "required, at most 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "required, at most 50 characters"))]
    pub quantity: String,
    #[validate(custom(function = "validate_date"))]
    pub purchase_date: String,
    #[validate(custom(function = "validate_date"))]
    pub expiration_date: String,
    pub memo: Option<String>,
    #[validate(custom(function = "validate_storage_method"))]
    pub storage_method: String,
}

impl AddInput {
    fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            quantity: self.quantity.trim().to_owned(),
            purchase_date: self.purchase_date.trim().to_owned(),
            expiration_date: self.expiration_date.trim().to_owned(),
            memo: self
                .memo
                .map(|m| m.trim().to_owned())
                .filter(|m| !m.is_empty()),
            storage_method: self.storage_method.trim().to_owned(),
        }
    }
}

fn validate_date(value: &str) -> Result<(), ValidationError> {
    weekmenu_shared::parse_date(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("date").with_message("expected YYYY-MM-DD".into()))
}

fn validate_storage_method(value: &str) -> Result<(), ValidationError> {
    StorageMethod::from_str(value).map(|_| ()).map_err(|_| {
        ValidationError::new("storage_method").with_message("unknown storage method".into())
    })
}

impl super::Command {
    pub async fn add(&self, input: AddInput) -> weekmenu_shared::Result<String> {
        let input = input.normalized();
        input.validate()?;

        let (Ok(storage_method), Ok(purchase_date), Ok(expiration_date)) = (
            StorageMethod::from_str(&input.storage_method),
            weekmenu_shared::parse_date(&input.purchase_date),
            weekmenu_shared::parse_date(&input.expiration_date),
        ) else {
            weekmenu_shared::bail!("validated ingredient input failed to parse");
        };

        let id = Ulid::new().to_string();

        let statement = Query::insert()
            .into_table(Ingredient::Table)
            .columns([
                Ingredient::Id,
                Ingredient::Name,
                Ingredient::Quantity,
                Ingredient::PurchaseDate,
                Ingredient::ExpirationDate,
                Ingredient::Memo,
                Ingredient::StorageMethod,
                Ingredient::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                input.name.into(),
                input.quantity.into(),
                weekmenu_shared::to_timestamp(purchase_date).into(),
                weekmenu_shared::to_timestamp(expiration_date).into(),
                input.memo.into(),
                storage_method.to_string().into(),
                weekmenu_shared::now().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(id)
    }
}
