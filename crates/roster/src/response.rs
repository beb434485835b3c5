//! Response shapes for every endpoint.

use serde::Serialize;
use serde_json::Number;

use crate::criteria::{Criteria, ListParams};
use crate::model::Candidate;
use crate::pipeline::Page;

/// Body of `GET /api/candidates`.
#[derive(Debug, Serialize)]
pub struct ListResponse<'a> {
    pub meta: ListMeta<'a>,
    pub data: Vec<&'a Candidate>,
}

/// Pagination metadata plus the request echoed back.
#[derive(Debug, Serialize)]
pub struct ListMeta<'a> {
    /// The requested page, echoed exactly.
    pub page: &'a Number,
    pub per_page: u64,
    pub total: usize,
    pub total_pages: u64,
    pub sort_by: &'a str,
    pub sort_order: &'a str,
    /// Filter criteria as received; absent values serialize as `null`.
    pub filters: &'a Criteria,
}

/// Packages a page and the request that produced it.
pub fn assemble<'a>(page: Page<&'a Candidate>, params: &'a ListParams) -> ListResponse<'a> {
    ListResponse {
        meta: ListMeta {
            page: params.page.page_number(),
            per_page: params.page.per_page(),
            total: page.total,
            total_pages: page.total_pages,
            sort_by: &params.sort.sort_by,
            sort_order: &params.sort.sort_order,
            filters: &params.criteria,
        },
        data: page.items,
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub docs: &'static str,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        ServiceInfo {
            message: "Candidate Management API",
            docs: "/docs",
        }
    }
}

/// Body of `GET /api/sources`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourcesResponse {
    pub sources: Vec<String>,
}

/// Body of `GET /api/application_type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationTypesResponse {
    pub application_type: Vec<String>,
}
