//! HTML pages for the browser-facing lookup.
//!
//! Templates are compiled into the binary and loaded once at startup. The
//! result page is driven by a small view model built from the enriched
//! document, so templates never have to probe optional upstream keys.
use crate::errors::AppError;
use crate::models::{PlayerQuery, DEFAULT_REGION};
use serde::Serialize;
use serde_json::{Map, Value};
use tera::{Context, Tera};

const BASE_TEMPLATE: &str = include_str!("../templates/base.html");
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const RESULT_TEMPLATE: &str = include_str!("../templates/result.html");

/// Client-side script served at `/static/js/script.js`.
pub const SCRIPT_JS: &str = include_str!("../static/js/script.js");

/// Regions offered by the lookup form.
pub const REGIONS: [&str; 9] = [
    DEFAULT_REGION, "BR", "SG", "ID", "TH", "VN", "ME", "US", "EU",
];

/// Sub-records shown first on the result page, with their headings.
const KNOWN_SECTIONS: [(&str, &str); 7] = [
    ("basicInfo", "Player"),
    ("captainBasicInfo", "Guild Leader"),
    ("clanBasicInfo", "Guild"),
    ("profileInfo", "Profile"),
    ("petInfo", "Pet"),
    ("socialInfo", "Social"),
    ("creditScoreInfo", "Credit Score"),
];

/// Labels for fields whose key does not read well on its own.
const FIELD_LABELS: [(&str, &str); 12] = [
    ("accountId", "Account ID"),
    ("nickname", "Nickname"),
    ("exp", "Experience"),
    ("liked", "Likes"),
    ("rank", "BR Rank"),
    ("rankingPoints", "BR Points"),
    ("csRank", "CS Rank"),
    ("csRankingPoints", "CS Points"),
    ("createAt_formatted", "Account Created"),
    ("lastLoginAt_formatted", "Last Login"),
    ("days_played", "Days Played"),
    ("badgeCnt", "Badges"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub rows: Vec<Row>,
}

/// Compiled page templates.
#[derive(Clone)]
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self, AppError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE_TEMPLATE),
            ("index.html", INDEX_TEMPLATE),
            ("result.html", RESULT_TEMPLATE),
        ])?;
        Ok(Self { tera })
    }

    /// Renders the lookup form, optionally with an error banner.
    pub fn render_index(&self, error: Option<&str>) -> Result<String, AppError> {
        let mut context = Context::new();
        context.insert("error", &error);
        context.insert("regions", &REGIONS);
        Ok(self.tera.render("index.html", &context)?)
    }

    /// Renders the result page for an enriched document.
    pub fn render_result(&self, data: &Value, query: &PlayerQuery) -> Result<String, AppError> {
        let raw_json = serde_json::to_string_pretty(data)
            .map_err(|e| AppError::InternalError(format!("Failed to serialize document: {}", e)))?;

        let title = nickname(data).unwrap_or_else(|| query.uid.clone());

        let mut context = Context::new();
        context.insert("title", &title);
        context.insert("uid", &query.uid);
        context.insert("region", &query.region);
        context.insert("sections", &build_sections(data));
        context.insert("raw_json", &raw_json);
        Ok(self.tera.render("result.html", &context)?)
    }
}

fn nickname(data: &Value) -> Option<String> {
    data.get("basicInfo")
        .and_then(|b| b.get("nickname"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Turns every object-valued top-level key into a section of scalar rows.
///
/// Known sub-records come first in a fixed order, the rest follow in
/// document order.
pub fn build_sections(data: &Value) -> Vec<Section> {
    let Some(root) = data.as_object() else {
        return Vec::new();
    };

    let mut sections: Vec<Section> = KNOWN_SECTIONS
        .iter()
        .filter_map(|(key, title)| {
            root.get(*key)
                .and_then(Value::as_object)
                .map(|record| section(title.to_string(), record))
        })
        .collect();

    sections.extend(
        root.iter()
            .filter(|(key, _)| {
                !KNOWN_SECTIONS
                    .iter()
                    .any(|(known, _)| *known == key.as_str())
            })
            .filter_map(|(key, value)| {
                value
                    .as_object()
                    .map(|record| section(humanize(key), record))
            }),
    );

    sections.retain(|s| !s.rows.is_empty());
    sections
}

fn section(title: String, record: &Map<String, Value>) -> Section {
    let rows = record
        .iter()
        .filter_map(|(key, value)| {
            scalar_text(value).map(|value| Row {
                label: field_label(key),
                value,
            })
        })
        .collect();
    Section { title, rows }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "Yes" } else { "No" }.to_string()),
        _ => None,
    }
}

fn field_label(key: &str) -> String {
    FIELD_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| humanize(key))
}

/// `lastLoginAt` -> `Last Login At`, `days_played` -> `Days Played`.
pub fn humanize(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in key.chars() {
        if c == '_' || c == '-' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
