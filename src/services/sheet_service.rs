use serde::Deserialize;
use serde_json::Value;
use std::env;
use tracing::{info, warn};

const DEFAULT_SPREADSHEET_ID: &str = "1IUWy4R2qBPpFASfc8qubjFZAQ-SmtIPQkX4PZU4eYNI";
const SHEET_RANGE: &str = "Sheet1!A:C";
// Data rows start on sheet row 2, below the header.
const BASE_ROW: i64 = 2;
const ATTENDED_MARK: &str = "出席";

pub struct SheetConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub spreadsheet_id: String,
}

impl SheetConfig {
    pub fn from_env() -> Self {
        SheetConfig {
            api_url: env::var("SHEETS_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            api_key: env::var("SHEETS_API_KEY").ok(),
            spreadsheet_id: env::var("SHEETS_SPREADSHEET_ID")
                .unwrap_or_else(|_| DEFAULT_SPREADSHEET_ID.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ValuesResponse {
    values: Option<Vec<Vec<Value>>>,
}

/// Write the attendance marker into the sheet row matching (name,
/// generation). Best effort: every failure mode collapses to a log line
/// and `false`, and nothing is retried.
pub async fn sync_attendance_to_sheet(
    config: &SheetConfig,
    name: &str,
    generation: i64,
) -> bool {
    let Some(values) = fetch_sheet_values(config).await else {
        return false;
    };

    let Some(index) = find_row_in_values(&values, name, generation) else {
        warn!("member not found in sheet: {} ({}期)", name, generation);
        return false;
    };

    let row = index as i64 + BASE_ROW;
    let range = format!("'Sheet1'!C{}", row);
    let ok = update_sheet_cell(config, &range, ATTENDED_MARK).await;
    if ok {
        info!(
            "marked attendance for {} ({}期) at sheet row {}",
            name, generation, row
        );
    }
    ok
}

/// Sheet row (1-based, header included) for a member, for lookup-only
/// callers. Same scan as the sync, no write.
pub async fn find_member_row(
    config: &SheetConfig,
    name: &str,
    generation: i64,
) -> Option<i64> {
    let values = fetch_sheet_values(config).await?;
    find_row_in_values(&values, name, generation).map(|index| index as i64 + BASE_ROW)
}

// The whole name/generation block, re-fetched on every call. The sheet is
// tens of rows, not thousands.
async fn fetch_sheet_values(config: &SheetConfig) -> Option<Vec<Vec<Value>>> {
    let url = format!(
        "{}/data_api/v1/spreadsheets/{}/values/{}",
        config.api_url.trim_end_matches('/'),
        config.spreadsheet_id,
        SHEET_RANGE
    );

    let client = reqwest::Client::new();
    let mut req = client.get(&url);
    if let Some(key) = &config.api_key {
        req = req.bearer_auth(key);
    }

    let resp = match req.send().await {
        Ok(r) => r,
        Err(e) => {
            warn!("sheet fetch unreachable: {}", e);
            return None;
        }
    };

    if !resp.status().is_success() {
        warn!("sheet fetch non-OK: {}", resp.status());
        return None;
    }

    match resp.json::<ValuesResponse>().await {
        Ok(body) => Some(body.values.unwrap_or_default()),
        Err(e) => {
            warn!("sheet fetch JSON parse failed: {}", e);
            None
        }
    }
}

async fn update_sheet_cell(config: &SheetConfig, range: &str, value: &str) -> bool {
    let url = format!(
        "{}/data_api/v1/spreadsheets/{}/values/{}",
        config.api_url.trim_end_matches('/'),
        config.spreadsheet_id,
        range
    );

    let client = reqwest::Client::new();
    let mut req = client
        .put(&url)
        .json(&serde_json::json!({ "values": [[value]] }));
    if let Some(key) = &config.api_key {
        req = req.bearer_auth(key);
    }

    match req.send().await {
        Ok(resp) if resp.status().is_success() => true,
        Ok(resp) => {
            warn!("sheet cell update non-OK: {}", resp.status());
            false
        }
        Err(e) => {
            warn!("sheet cell update failed: {}", e);
            false
        }
    }
}

fn find_row_in_values(values: &[Vec<Value>], name: &str, generation: i64) -> Option<usize> {
    let wanted = name.trim();
    values.iter().position(|row| {
        let row_name = row.first().map(cell_text).unwrap_or_default();
        let row_generation = row.get(1).map(cell_text).unwrap_or_default();
        row_name.trim() == wanted && parse_generation(&row_generation) == generation
    })
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// Generation cells are hand-entered and show up as "27", 27 or "27期";
// take the leading digits, like the sheet's own formulas do.
fn parse_generation(cell: &str) -> i64 {
    let digits: String = cell
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_generation_accepts_plain_and_suffixed_numbers() {
        assert_eq!(parse_generation("27"), 27);
        assert_eq!(parse_generation(" 27 "), 27);
        assert_eq!(parse_generation("27期"), 27);
        assert_eq!(parse_generation(""), 0);
        assert_eq!(parse_generation("期27"), 0);
    }

    #[test]
    fn find_row_matches_trimmed_name_and_generation() {
        let values = vec![
            vec![json!("荘茗"), json!("27"), json!("")],
            vec![json!(" 吉積夏帆 "), json!(27), json!("")],
        ];

        assert_eq!(find_row_in_values(&values, "荘茗", 27), Some(0));
        assert_eq!(find_row_in_values(&values, "吉積夏帆", 27), Some(1));
        assert_eq!(find_row_in_values(&values, "荘茗", 28), None);
        assert_eq!(find_row_in_values(&values, "存在しない人", 27), None);
    }

    #[test]
    fn find_row_skips_short_rows() {
        let values = vec![vec![json!("荘茗")], vec![json!("荘茗"), json!("27")]];
        assert_eq!(find_row_in_values(&values, "荘茗", 27), Some(1));
    }
}
