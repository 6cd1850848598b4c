//! SQL insert statements for the `templates` table

use crate::template::Template;

const COLUMNS: &str = "template_id, name, category, subcategory, description,
  code, preview_html, preview_css, thumbnail,
  required_plugins, difficulty, performance_score,
  mobile_optimized, example_prompts, keywords";

/// Quote a string as a SQL literal, doubling embedded single quotes
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn quote_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(quote(&serde_json::to_string(value)?))
}

/// One `INSERT` statement for a template
pub fn insert_statement(template: &Template) -> Result<String, serde_json::Error> {
    let values = [
        quote(&template.id.to_string()),
        quote(&template.name),
        quote(template.category.label()),
        quote(&template.subcategory),
        quote(&template.description),
        quote(&template.code),
        quote(&template.preview.html),
        quote(&template.preview.css),
        quote(&template.preview.thumbnail),
        quote_json(&template.required_plugins)?,
        quote(&template.difficulty.to_string()),
        template.performance_score.to_string(),
        template.mobile_optimized.to_string(),
        quote_json(&template.example_prompts)?,
        quote_json(&template.keywords)?,
    ];

    Ok(format!(
        "INSERT INTO templates (\n  {}\n) VALUES (\n  {}\n);",
        COLUMNS,
        values.join(",\n  ")
    ))
}

/// Every insert, separated by a blank line
pub fn render_sql(templates: &[&Template]) -> Result<String, serde_json::Error> {
    let statements = templates
        .iter()
        .map(|t| insert_statement(t))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(statements.join("\n\n"))
}
