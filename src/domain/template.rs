//! Template for new log documents

use crate::error::{Result, RlogError};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Built-in daily template; renders to "# Research Log - Tuesday, 05 March 2024\n\n"
const DAILY_TEMPLATE: &str = "# Research Log - {DAY_DATE}\n\n";

/// Template for log document generation
#[derive(Debug)]
pub struct Template {
    content: String,
}

impl Template {
    /// The built-in daily template
    pub fn builtin() -> Self {
        Template {
            content: DAILY_TEMPLATE.to_string(),
        }
    }

    /// Create template from a custom template file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RlogError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Template { content })
    }

    /// Render template with date variable substitution.
    /// Unknown placeholders are left unchanged.
    pub fn render(&self, date: NaiveDate) -> String {
        let mut result = self.content.clone();

        // {DAY_DATE} -> "Tuesday, 05 March 2024"
        result = result.replace("{DAY_DATE}", &date.format("%A, %d %B %Y").to_string());

        // {DATE} -> "05 March 2024"
        result = result.replace("{DATE}", &date.format("%d %B %Y").to_string());

        // {DAY_NAME} -> "Tuesday"
        result = result.replace("{DAY_NAME}", &date.format("%A").to_string());

        // {MONTH} -> "March"
        result = result.replace("{MONTH}", &date.format("%B").to_string());

        // {YEAR} -> "2024"
        result = result.replace("{YEAR}", &date.format("%Y").to_string());

        result
    }
}

/// Load the daily template from a custom location under the store root,
/// falling back to the built-in.
pub fn load_template(root: &Path) -> Result<Template> {
    let custom_path = root.join("templates").join("daily.txt");

    if custom_path.exists() {
        Template::from_file(&custom_path)
    } else {
        Ok(Template::builtin())
    }
}
