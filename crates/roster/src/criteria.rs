//! Request parameters for the candidate listing: filter criteria, sort
//! selection and the page request, plus their validation.

use serde::Serialize;
use serde_json::Number;

use roster_seeker::{Dir, OrderBy, Query, Window};

use crate::error::{FieldIssue, ValidationError};
use crate::model::fields;

pub const DEFAULT_SORT_BY: &str = "last_activity";
pub const DEFAULT_SORT_ORDER: &str = "desc";
pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 5;
pub const MAX_PER_PAGE: u64 = 50;

/// Filter predicates for one request, exactly as received.
///
/// Empty strings and empty lists are kept so they can be echoed back, but
/// they have no filtering effect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Criteria {
    /// Case-insensitive substring over name, position and company.
    pub search: Option<String>,
    pub application_type: Option<Vec<String>>,
    pub source: Option<Vec<String>>,
    /// Exact match.
    pub job_id: Option<String>,
}

impl Criteria {
    pub fn active_search(&self) -> Option<&str> {
        self.search.as_deref().filter(|term| !term.is_empty())
    }

    pub fn active_application_types(&self) -> Option<&[String]> {
        self.application_type.as_deref().filter(|set| !set.is_empty())
    }

    pub fn active_sources(&self) -> Option<&[String]> {
        self.source.as_deref().filter(|set| !set.is_empty())
    }

    pub fn active_job_id(&self) -> Option<&str> {
        self.job_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Returns `true` if no predicate would remove a record.
    pub fn is_unrestricted(&self) -> bool {
        self.active_search().is_none()
            && self.active_application_types().is_none()
            && self.active_sources().is_none()
            && self.active_job_id().is_none()
    }

    /// Translates the active predicates into a seeker query.
    ///
    /// Search becomes the OR group; the other predicates are AND clauses.
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if let Some(term) = self.active_search() {
            query = query
                .or_icontains(fields::NAME, term)
                .or_icontains(fields::POSITION, term)
                .or_icontains(fields::COMPANY, term);
        }
        if let Some(types) = self.active_application_types() {
            query = query.and_in(fields::APPLICATION_TYPE, types.iter().cloned());
        }
        if let Some(sources) = self.active_sources() {
            query = query.and_in(fields::SOURCE, sources.iter().cloned());
        }
        if let Some(job_id) = self.active_job_id() {
            query = query.and_eq(fields::JOB_ID, job_id);
        }
        query
    }
}

/// A recognized sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Raw string comparison of `last_activity`.
    LastActivity,
    /// Case-insensitive comparison of `name`.
    Name,
}

impl SortKey {
    /// Parses a `sort_by` value. Anything unrecognized yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "last_activity" => Some(SortKey::LastActivity),
            "name" => Some(SortKey::Name),
            _ => None,
        }
    }

    pub fn order_by(self, dir: Dir) -> OrderBy {
        match self {
            SortKey::LastActivity => OrderBy::new(fields::LAST_ACTIVITY, dir),
            SortKey::Name => OrderBy::new(fields::NAME, dir).case_folded(),
        }
    }
}

/// The sort selection, kept verbatim for echoing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub sort_by: String,
    pub sort_order: String,
}

impl Default for SortSpec {
    fn default() -> Self {
        SortSpec {
            sort_by: DEFAULT_SORT_BY.to_string(),
            sort_order: DEFAULT_SORT_ORDER.to_string(),
        }
    }
}

impl SortSpec {
    pub fn new(sort_by: impl Into<String>, sort_order: impl Into<String>) -> Self {
        SortSpec {
            sort_by: sort_by.into(),
            sort_order: sort_order.into(),
        }
    }

    pub fn key(&self) -> Option<SortKey> {
        SortKey::parse(&self.sort_by)
    }

    /// Only the literal `"desc"` sorts descending.
    pub fn dir(&self) -> Dir {
        if self.sort_order == "desc" {
            Dir::Desc
        } else {
            Dir::Asc
        }
    }

    /// The ordering to apply, or `None` when `sort_by` is unrecognized and
    /// records keep their filtered order.
    pub fn order_by(&self) -> Option<OrderBy> {
        self.key().map(|key| key.order_by(self.dir()))
    }
}

/// A validated page request: `page >= 1`, `1 <= per_page <= 50`.
///
/// `page` has no upper bound. Values too large for `u64` keep their exact
/// digits for the response and select an empty window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: Number,
    per_page: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: Number::from(DEFAULT_PAGE),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, per_page: i64) -> Result<Self, ValidationError> {
        Self::validate(Some(Integer::from(page)), Some(Integer::from(per_page)), Vec::new())
    }

    /// Parses raw `page` and `per_page` values. Absent values take the
    /// defaults.
    pub fn parse(page: Option<&str>, per_page: Option<&str>) -> Result<Self, ValidationError> {
        let mut issues = Vec::new();
        let page = parse_int("page", page, DEFAULT_PAGE, &mut issues);
        let per_page = parse_int("per_page", per_page, DEFAULT_PER_PAGE, &mut issues);
        Self::validate(page, per_page, issues)
    }

    fn validate(
        page: Option<Integer>,
        per_page: Option<Integer>,
        mut issues: Vec<FieldIssue>,
    ) -> Result<Self, ValidationError> {
        let page = page.and_then(|page| check_page(page, &mut issues));
        let per_page = per_page.and_then(|per_page| check_per_page(per_page, &mut issues));
        match (page, per_page) {
            (Some(page), Some(per_page)) if issues.is_empty() => {
                Ok(PageRequest { page, per_page })
            }
            _ => Err(ValidationError { issues }),
        }
    }

    /// The page number as a `u64`, saturating for larger requests.
    pub fn page(&self) -> u64 {
        self.page.as_u64().unwrap_or(u64::MAX)
    }

    /// The page number exactly as requested.
    pub fn page_number(&self) -> &Number {
        &self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// The `[start, start + per_page)` window for this page.
    pub fn window(&self) -> Window {
        let start = (self.page() - 1).saturating_mul(self.per_page);
        Window::new(
            usize::try_from(start).unwrap_or(usize::MAX),
            Some(usize::try_from(self.per_page).unwrap_or(usize::MAX)),
        )
    }
}

/// A base-10 integer of any magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Integer {
    negative: bool,
    /// No leading zeros; zero is `"0"`.
    digits: String,
}

impl Integer {
    /// Accepts an optional sign followed by ASCII digits, ignoring
    /// surrounding whitespace.
    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let (negative, digits) = match raw.as_bytes().first() {
            Some(b'-') => (true, &raw[1..]),
            Some(b'+') => (false, &raw[1..]),
            _ => (false, raw),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits = match digits.trim_start_matches('0') {
            "" => "0",
            rest => rest,
        };
        Some(Integer {
            negative: negative && digits != "0",
            digits: digits.to_string(),
        })
    }

    fn is_positive(&self) -> bool {
        !self.negative && self.digits != "0"
    }

    /// The magnitude of a non-negative value, saturating at `u64::MAX`.
    fn saturating_u64(&self) -> u64 {
        if self.negative {
            return 0;
        }
        self.digits.parse().unwrap_or(u64::MAX)
    }

    fn to_number(&self) -> Option<Number> {
        if self.negative {
            return None;
        }
        self.digits.parse().ok()
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Integer {
            negative: value < 0,
            digits: value.unsigned_abs().to_string(),
        }
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Integer {
            negative: false,
            digits: value.to_string(),
        }
    }
}

fn check_page(page: Integer, issues: &mut Vec<FieldIssue>) -> Option<Number> {
    if !page.is_positive() {
        issues.push(FieldIssue::new(
            "page",
            "greater_than_equal",
            "Input should be greater than or equal to 1",
        ));
        return None;
    }
    page.to_number()
}

fn check_per_page(per_page: Integer, issues: &mut Vec<FieldIssue>) -> Option<u64> {
    if !per_page.is_positive() {
        issues.push(FieldIssue::new(
            "per_page",
            "greater_than_equal",
            "Input should be greater than or equal to 1",
        ));
        return None;
    }
    let value = per_page.saturating_u64();
    if value > MAX_PER_PAGE {
        issues.push(FieldIssue::new(
            "per_page",
            "less_than_equal",
            format!("Input should be less than or equal to {MAX_PER_PAGE}"),
        ));
        return None;
    }
    Some(value)
}

fn parse_int(
    param: &'static str,
    raw: Option<&str>,
    default: u64,
    issues: &mut Vec<FieldIssue>,
) -> Option<Integer> {
    let Some(raw) = raw else {
        return Some(Integer::from(default));
    };
    let parsed = Integer::parse(raw);
    if parsed.is_none() {
        issues.push(FieldIssue::new(
            param,
            "int_parsing",
            "Input should be a valid integer, unable to parse string as an integer",
        ));
    }
    parsed
}

/// Everything `/api/candidates` accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub criteria: Criteria,
    pub sort: SortSpec,
    pub page: PageRequest,
}

impl ListParams {
    /// Builds parameters from decoded query-string pairs.
    ///
    /// `application_type` and `source` may repeat and accumulate. For scalar
    /// parameters the last occurrence wins. Unknown keys are ignored. Every
    /// malformed or out-of-range number is reported, not just the first.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut criteria = Criteria::default();
        let mut sort = SortSpec::default();
        let mut page_raw: Option<String> = None;
        let mut per_page_raw: Option<String> = None;

        for (key, value) in pairs {
            match key.as_ref() {
                "search" => criteria.search = Some(value.into()),
                "application_type" => criteria
                    .application_type
                    .get_or_insert_with(Vec::new)
                    .push(value.into()),
                "source" => criteria
                    .source
                    .get_or_insert_with(Vec::new)
                    .push(value.into()),
                "job_id" => criteria.job_id = Some(value.into()),
                "sort_by" => sort.sort_by = value.into(),
                "sort_order" => sort.sort_order = value.into(),
                "page" => page_raw = Some(value.into()),
                "per_page" => per_page_raw = Some(value.into()),
                _ => {}
            }
        }

        let page = PageRequest::parse(page_raw.as_deref(), per_page_raw.as_deref())?;
        Ok(ListParams {
            criteria,
            sort,
            page,
        })
    }
}
