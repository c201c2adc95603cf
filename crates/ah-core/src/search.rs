//! # Resource Search
//!
//! Filtering, rating aggregation, and ordering for the browse listing.
//! Pure functions over already-loaded collections; `PersistentStore` feeds
//! them fresh data on every call.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Resource, Review};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Most recently created first
    #[default]
    Newest,
    /// Highest average rating first
    Rating,
    /// Most downloaded first
    Downloads,
}

impl FromStr for SortBy {
    type Err = Infallible;

    /// Unrecognised modes fall back to `Newest`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "rating" => SortBy::Rating,
            "downloads" => SortBy::Downloads,
            _ => SortBy::Newest,
        })
    }
}

/// Browse criteria. `None` and empty strings do not filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchCriteria {
    /// Case-insensitive substring of title, description, any tag, course code or subject
    pub keyword: Option<String>,
    pub department: Option<String>,
    pub course_code: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sort_by: SortBy,
}

impl SearchCriteria {
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn course_code(mut self, course_code: impl Into<String>) -> Self {
        self.course_code = Some(course_code.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

/// A resource annotated with its review aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSummary {
    #[serde(flatten)]
    pub resource: Resource,
    /// Mean rating, 0 when unreviewed
    pub avg_rating: f64,
    pub review_count: usize,
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}

fn matches_keyword(resource: &Resource, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);
    contains(&resource.title)
        || contains(&resource.description)
        || resource.tags.iter().any(|tag| contains(tag))
        || contains(&resource.course_code)
        || contains(&resource.subject)
}

fn matches(resource: &Resource, criteria: &SearchCriteria, needle: Option<&str>) -> bool {
    needle.map_or(true, |kw| matches_keyword(resource, kw))
        && active(&criteria.department).map_or(true, |d| resource.department == d)
        && active(&criteria.course_code).map_or(true, |c| resource.course_code == c)
        && active(&criteria.kind).map_or(true, |k| resource.kind == k)
}

/// Filters, annotates and orders `resources`. Equal sort keys keep their
/// storage order.
pub fn search(resources: Vec<Resource>, reviews: &[Review], criteria: &SearchCriteria) -> Vec<ResourceSummary> {
    let needle = active(&criteria.keyword).map(str::to_lowercase);

    let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();
    for review in reviews {
        let entry = totals.entry(review.resource_id.as_str()).or_default();
        entry.0 += review.rating;
        entry.1 += 1;
    }

    let mut hits: Vec<ResourceSummary> = resources
        .into_iter()
        .filter(|r| matches(r, criteria, needle.as_deref()))
        .map(|resource| {
            let (sum, count) = totals.get(resource.id.as_str()).copied().unwrap_or_default();
            let avg_rating = if count == 0 { 0.0 } else { sum / count as f64 };
            ResourceSummary { resource, avg_rating, review_count: count }
        })
        .collect();

    // `sort_by` is stable.
    match criteria.sort_by {
        SortBy::Rating => hits.sort_by(|a, b| b.avg_rating.partial_cmp(&a.avg_rating).unwrap_or(Ordering::Equal)),
        SortBy::Downloads => hits.sort_by(|a, b| b.resource.downloads.cmp(&a.resource.downloads)),
        SortBy::Newest => hits.sort_by(|a, b| b.resource.created_at.cmp(&a.resource.created_at)),
    }
    hits
}
