mod slot_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealplanner",
    "m0_1",
    vec_box![],
    vec_box![slot_create_table::Operation]
);
