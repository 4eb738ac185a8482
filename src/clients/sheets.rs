//! Google Sheets collaborator: reads the results range, writes the names range.

use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{RosterSink, RosterSource};
use crate::errors::{AppError, AppResult};

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Body of a `values.get` response; rows may be ragged or missing entirely.
#[derive(Debug, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Option<Vec<Vec<Value>>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRangeBody<'a> {
    range: &'a str,
    major_dimension: &'a str,
    values: Vec<[&'a str; 1]>,
}

pub struct SheetsClient {
    http: Client,
    access_token: String,
    sheet_id: String,
    read_range: String,
    write_range: String,
}

impl SheetsClient {
    pub fn new(
        http: Client,
        access_token: String,
        sheet_id: &str,
        read_range: &str,
        write_range: &str,
    ) -> Self {
        Self {
            http,
            access_token,
            sheet_id: sheet_id.to_string(),
            read_range: read_range.to_string(),
            write_range: write_range.to_string(),
        }
    }

    fn values_url(&self, op: &str, range: &str) -> AppResult<Url> {
        let mut url = Url::parse(SHEETS_API).map_err(|e| AppError::sheets(op, e))?;
        url.path_segments_mut()
            .map_err(|_| AppError::sheets(op, "API url cannot be a base"))?
            .extend([self.sheet_id.as_str(), "values", range]);
        Ok(url)
    }
}

/// Turn a non-2xx response into an error carrying the body.
fn ensure_success(op: &str, resp: Response) -> AppResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    Err(AppError::sheets(op, format!("{status}: {body}")))
}

/// Cells arrive as formatted strings; anything else keeps its JSON text.
pub fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        other => other.to_string(),
    }
}

/// Stringify every cell. A range with no rows at all is a fault.
pub fn rows_from_value_range(range: ValueRange) -> AppResult<Vec<Vec<String>>> {
    let values = range.values.unwrap_or_default();
    if values.is_empty() {
        return Err(AppError::sheets("sheets.read_roster", "no data in sheet"));
    }

    Ok(values
        .iter()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect())
}

impl RosterSource for SheetsClient {
    fn read_rows(&self) -> AppResult<Vec<Vec<String>>> {
        const OP: &str = "sheets.read_roster";
        let url = self.values_url(OP, &self.read_range)?;
        let resp = self.http.get(url).bearer_auth(&self.access_token).send()?;
        let body: ValueRange = ensure_success(OP, resp)?.json()?;

        rows_from_value_range(body)
    }
}

impl RosterSink for SheetsClient {
    fn write_names(&self, names: &[String]) -> AppResult<()> {
        const OP: &str = "sheets.write_names";
        let mut url = self.values_url(OP, &self.write_range)?;
        url.query_pairs_mut().append_pair("valueInputOption", "RAW");

        let body = ValueRangeBody {
            range: &self.write_range,
            major_dimension: "ROWS",
            values: names.iter().map(|n| [n.as_str()]).collect(),
        };
        let resp = self
            .http
            .put(url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()?;
        ensure_success(OP, resp)?;
        Ok(())
    }
}
