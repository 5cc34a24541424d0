use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::application::Application;

/// Raw filter inputs as typed into the applications page.
///
/// Every field is free text; anything that does not parse is treated as if the
/// field were empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterForm {
    pub date_start: String,
    pub date_end: String,
    pub min_score: String,
    pub max_score: String,
    pub limit: String,
}

impl Default for FilterForm {
    fn default() -> Self {
        Self {
            date_start: String::new(),
            date_end: String::new(),
            min_score: "0".to_string(),
            max_score: "100".to_string(),
            limit: String::new(),
        }
    }
}

impl FilterForm {
    /// A form with every field empty, as left by "Reset Filters"
    pub fn cleared() -> Self {
        Self {
            min_score: String::new(),
            max_score: String::new(),
            ..Self::default()
        }
    }

    pub fn parse(&self) -> ApplicationFilter {
        ApplicationFilter {
            date_start: parse_date(&self.date_start),
            date_end: parse_date(&self.date_end),
            min_score: parse_score(&self.min_score),
            max_score: parse_score(&self.max_score),
            limit: parse_limit(&self.limit),
        }
    }
}

/// Typed filter; `None` leaves that dimension unfiltered
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ApplicationFilter {
    /// First application date to keep (inclusive)
    pub date_start: Option<NaiveDate>,
    /// Last application date to keep (inclusive, whole day)
    pub date_end: Option<NaiveDate>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    /// Maximum number of results, always positive
    pub limit: Option<usize>,
}

impl ApplicationFilter {
    pub fn matches(&self, application: &Application) -> bool {
        let date = application.application_date.date_naive();
        let score = application.resume_score;

        self.date_start.is_none_or(|start| date >= start)
            && self.date_end.is_none_or(|end| date <= end)
            && self.min_score.is_none_or(|min| score >= min)
            && self.max_score.is_none_or(|max| score <= max)
    }
}

/// Applies the filter, keeping the original order, then truncates to the limit.
pub fn filter_applications<'a>(
    applications: &'a [Application],
    filter: &ApplicationFilter,
) -> Vec<&'a Application> {
    let matching = applications.iter().filter(|application| filter.matches(application));
    match filter.limit {
        Some(limit) => matching.take(limit).collect(),
        None => matching.collect(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn parse_score(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|score| score.is_finite())
}

fn parse_limit(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|limit| *limit > 0)
}
