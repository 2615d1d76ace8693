/// Whether a SQLite error is a unique-constraint violation on the code column.
///
/// SQLite does not expose constraint names, so the offending column is read
/// from the error message (`UNIQUE constraint failed: urls.short_code`).
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains("urls.short_code")
}
