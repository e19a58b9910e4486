//! Store trait definitions for data access abstraction.
//!
//! All store operations are async. The consent store is a plain
//! point-lookup/save/delete/page contract; the log store is
//! append-only by construction (no update, delete, or read
//! operations exist on it).

use uuid::Uuid;

use crate::error::{ConsentError, ConsentResult};
use crate::models::consent::Consent;
use crate::models::consent_log::ConsentLog;

/// Sort order for paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// `"asc"` (any case) sorts ascending; every other value falls
    /// back to descending.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("asc") {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}

/// Parameters for one page of a sorted listing.
#[derive(Debug, Clone)]
pub struct PageRequest {
    /// Zero-based.
    pub page_number: u32,
    pub page_size: u32,
    pub sort_field: String,
    pub direction: SortDirection,
}

impl PageRequest {
    pub fn new(
        page_number: u32,
        page_size: u32,
        sort_field: impl Into<String>,
        direction: SortDirection,
    ) -> ConsentResult<Self> {
        if page_size == 0 {
            return Err(ConsentError::InvalidArgument {
                reason: "page size must be greater than zero".into(),
            });
        }
        Ok(Self {
            page_number,
            page_size,
            sort_field: sort_field.into(),
            direction,
        })
    }

    /// First page of `page_size` items, newest first.
    pub fn first(page_size: u32) -> ConsentResult<Self> {
        Self::new(0, page_size, "created_at", SortDirection::Descending)
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page_number) * u64::from(self.page_size)
    }
}

/// One page of results plus pagination metadata.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// The requested zero-based page number.
    pub page_number: u32,
    /// Number of items actually returned on this page.
    pub page_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Assemble a page from independently fetched content and count.
    ///
    /// `requested_size` is the caller's page size (not the returned
    /// item count) and is what `total_pages` is computed against.
    pub fn assemble(items: Vec<T>, page_number: u32, requested_size: u32, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(u64::from(requested_size));
        Self {
            page_size: items.len() as u32,
            items,
            page_number,
            total_elements,
            total_pages,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

/// Persistence contract for consent entities.
pub trait ConsentRepository: Send + Sync {
    fn find_by_id(&self, id: Uuid) -> impl Future<Output = ConsentResult<Option<Consent>>> + Send;
    fn exists_by_id(&self, id: Uuid) -> impl Future<Output = ConsentResult<bool>> + Send;
    /// Insert or overwrite; returns the persisted entity.
    fn save(&self, consent: Consent) -> impl Future<Output = ConsentResult<Consent>> + Send;
    fn delete(&self, consent: &Consent) -> impl Future<Output = ConsentResult<()>> + Send;
    fn find_page(
        &self,
        request: &PageRequest,
    ) -> impl Future<Output = ConsentResult<Vec<Consent>>> + Send;
    fn count(&self) -> impl Future<Output = ConsentResult<u64>> + Send;
}

/// Persistence contract for audit log entries. Append-only.
pub trait ConsentLogRepository: Send + Sync {
    fn save(&self, entry: ConsentLog) -> impl Future<Output = ConsentResult<ConsentLog>> + Send;
}
