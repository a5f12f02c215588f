use crate::schema::TableSchema;

/// Generate CREATE TABLE SQL for a table schema
pub fn generate_create_table(schema: &TableSchema) -> String {
    let mut sql = format!("CREATE TABLE IF NOT EXISTS {} (\n", schema.name);
    let mut columns = vec!["    id INTEGER PRIMARY KEY AUTOINCREMENT".to_string()];

    for col in schema.columns {
        columns.push(format!("    {} {}", col.name, col.col_type.sql_type()));
    }

    sql.push_str(&columns.join(",\n"));
    sql.push_str("\n)");

    sql
}

/// Generate the INSERT statement for every data column of a table
pub fn generate_insert(schema: &TableSchema) -> String {
    let columns = schema.column_names();
    let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        schema.name,
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Generate a SELECT of the surrogate key plus all data columns, in insertion order
pub fn generate_select_all(schema: &TableSchema) -> String {
    format!(
        "SELECT id, {} FROM {} ORDER BY id",
        schema.column_names().join(", "),
        schema.name
    )
}
