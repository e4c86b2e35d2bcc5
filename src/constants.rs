//! Column names and fixed values for the Open Food Facts snack extract

pub const DEFAULT_INPUT_PATH: &str = "cleaned_interm_food_facts.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "./dist/cleaned_interm_food_facts.csv";

pub const GROUP_COLUMN: &str = "pnns_groups_1";
pub const TARGET_GROUPS: [&str; 2] = ["Sugary snacks", "Salty snacks"];

pub const PLACEHOLDER: &str = "No Data";

pub const NUMERIC_COLUMNS: [&str; 9] = [
    "energy-kcal_100g",
    "proteins_100g",
    "carbohydrates_100g",
    "sugars_100g",
    "fat_100g",
    "saturated-fat_100g",
    "fiber_100g",
    "sodium_100g",
    "additives_n",
];

pub const CATEGORICAL_COLUMNS: [&str; 11] = [
    "product_name",
    "brands",
    "main_category_en",
    "pnns_groups_1",
    "pnns_groups_2",
    "nutriscore_grade",
    "nova_group",
    "ingredients_text",
    "allergens",
    "serving_size",
    "image_url",
];

// Tokens read as missing, same set pandas.read_csv uses by default
pub const NA_TOKENS: [&str; 19] = [
    "",
    "#N/A",
    "#N/A N/A",
    "#NA",
    "-1.#IND",
    "-1.#QNAN",
    "-NaN",
    "-nan",
    "1.#IND",
    "1.#QNAN",
    "<NA>",
    "N/A",
    "NA",
    "NULL",
    "NaN",
    "None",
    "n/a",
    "nan",
    "null",
];

pub fn is_na_token(field: &str) -> bool {
    NA_TOKENS.contains(&field)
}

/// All kept columns, categorical first then numeric
pub fn kept_columns() -> Vec<&'static str> {
    CATEGORICAL_COLUMNS
        .iter()
        .chain(NUMERIC_COLUMNS.iter())
        .copied()
        .collect()
}
