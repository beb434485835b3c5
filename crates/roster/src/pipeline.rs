//! The per-request query pipeline: filter → sort → paginate → assemble.
//!
//! Every stage takes its input by value or shared reference and returns a new
//! sequence. Records are borrowed from the loaded set and never mutated.

use roster_seeker::{sort_stable, Seekable};

use crate::criteria::{Criteria, ListParams, PageRequest, SortSpec};
use crate::model::Candidate;
use crate::response::{assemble, ListResponse};

/// Keeps the records that satisfy every active predicate, in input order.
pub fn filter<'a>(records: &'a [Candidate], criteria: &Criteria) -> Vec<&'a Candidate> {
    if criteria.is_unrestricted() {
        return records.iter().collect();
    }
    criteria.to_query().select(records, Candidate::accessor)
}

/// Stable-sorts by the selected key. Unrecognized keys leave the order as is.
pub fn sort<'a>(mut records: Vec<&'a Candidate>, spec: &SortSpec) -> Vec<&'a Candidate> {
    if let Some(order) = spec.order_by() {
        sort_stable(&mut records, &[order], &Candidate::accessor);
    }
    records
}

/// One page of results plus the counts needed to describe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of records before slicing.
    pub total: usize,
    pub total_pages: u64,
}

/// Slices out the requested page.
///
/// Pages past the end are not an error: they come back empty, with the true
/// totals.
pub fn paginate<T>(records: Vec<T>, request: &PageRequest) -> Page<T> {
    let total = records.len();
    let total_pages = total_pages(total, request.per_page());
    let items = request.window().apply(records);
    Page {
        items,
        total,
        total_pages,
    }
}

/// `max(ceil(total / per_page), 1)`.
pub fn total_pages(total: usize, per_page: u64) -> u64 {
    let total = total as u64;
    total.div_ceil(per_page.max(1)).max(1)
}

/// Runs the whole pipeline over an already loaded record set.
pub fn run<'a>(records: &'a [Candidate], params: &'a ListParams) -> ListResponse<'a> {
    let matched = filter(records, &params.criteria);
    let ordered = sort(matched, &params.sort);
    let page = paginate(ordered, &params.page);
    tracing::debug!(
        loaded = records.len(),
        total = page.total,
        returned = page.items.len(),
        page = params.page.page(),
        "candidate pipeline finished"
    );
    assemble(page, params)
}
