use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Ingredient {
    Table,
    Id,
    Name,
    Quantity,
    PurchaseDate,
    ExpirationDate,
    Memo,
    StorageMethod,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    RecipeId,
    Title,
    ImageUrl,
    RecipeUrl,
    Ingredients,
    Description,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum WeeklyMenu {
    Table,
    Id,
    WeekOf,
    Weekday,
    RecipeId,
    Memo,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum ShoppingItem {
    Table,
    Id,
    Name,
    Quantity,
    IsPurchased,
    RecipeId,
    AddedAt,
}
