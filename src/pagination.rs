//! Page requests and materialized result pages.
//!
//! [`PagedList::build`] turns any [`PageSource`] into a single page plus the
//! metadata clients need to navigate the rest of the result set. Filtering and
//! ordering belong to the source; the builder only counts and slices.

use serde::{Deserialize, Serialize};

use crate::domain::Entity;
use crate::repository::errors::RepositoryResult;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Largest page size a caller can obtain; bigger requests are truncated.
pub const MAX_PAGE_SIZE: usize = 50;

/// Which slice of a result set to return.
///
/// Construction never fails: the page number is raised to 1 and the page size
/// is clamped into `1..=MAX_PAGE_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_number: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Builds a request from optional query parameters, applying defaults.
    pub fn from_parts(page_number: Option<usize>, page_size: Option<usize>) -> Self {
        Self::new(
            page_number.unwrap_or(1),
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }

    pub const fn page_number(&self) -> usize {
        self.page_number
    }

    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of records preceding the requested page.
    pub const fn offset(&self) -> usize {
        (self.page_number - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Ordering applied to the creation timestamp of listed entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    /// Newest first.
    #[default]
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

/// A filterable collection that can be counted and sliced.
///
/// Implementations apply the optional predicate identically in both calls so
/// that the count describes the same set the page is cut from.
pub trait PageSource {
    type Item;
    /// Predicate understood by this source.
    type Predicate: ?Sized;

    fn count(&mut self, filter: Option<&Self::Predicate>) -> RepositoryResult<usize>;

    fn fetch(
        &mut self,
        filter: Option<&Self::Predicate>,
        offset: usize,
        limit: usize,
    ) -> RepositoryResult<Vec<Self::Item>>;
}

/// In-memory [`PageSource`] over borrowed records.
pub struct SliceSource<'a, T> {
    items: Vec<&'a T>,
}

impl<'a, T> SliceSource<'a, T> {
    /// Serves the records in slice order.
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items: items.iter().collect(),
        }
    }
}

impl<'a, T: Entity> SliceSource<'a, T> {
    /// Serves the records ordered by creation time; ties keep slice order.
    pub fn ordered(items: &'a [T], direction: SortDirection) -> Self {
        let mut items: Vec<&'a T> = items.iter().collect();
        match direction {
            SortDirection::Ascending => items.sort_by_key(|item| item.created_at()),
            SortDirection::Descending => {
                items.sort_by_key(|item| std::cmp::Reverse(item.created_at()))
            }
        }
        Self { items }
    }
}

impl<'a, T: Clone> PageSource for SliceSource<'a, T> {
    type Item = T;
    type Predicate = dyn Fn(&T) -> bool + 'a;

    fn count(&mut self, filter: Option<&Self::Predicate>) -> RepositoryResult<usize> {
        Ok(match filter {
            Some(keep) => self.items.iter().copied().filter(|item| keep(*item)).count(),
            None => self.items.len(),
        })
    }

    fn fetch(
        &mut self,
        filter: Option<&Self::Predicate>,
        offset: usize,
        limit: usize,
    ) -> RepositoryResult<Vec<Self::Item>> {
        Ok(self
            .items
            .iter()
            .copied()
            .filter(|item| filter.is_none_or(|keep| keep(*item)))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

/// One materialized page of results together with navigation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedList<T> {
    items: Vec<T>,
    total_count: usize,
    total_pages: usize,
    current_page: usize,
    page_size: usize,
    has_previous: bool,
    has_next: bool,
}

impl<T> PagedList<T> {
    /// Counts the filtered source, then fetches the requested slice of it.
    ///
    /// Issues exactly one count and one fetch. A page past the end yields no
    /// items rather than an error.
    pub fn build<S>(
        source: &mut S,
        filter: Option<&S::Predicate>,
        request: PageRequest,
    ) -> RepositoryResult<Self>
    where
        S: PageSource<Item = T> + ?Sized,
    {
        let total_count = source.count(filter)?;
        let items = source.fetch(filter, request.offset(), request.page_size())?;
        Ok(Self::new(items, total_count, request))
    }

    /// Wraps an already sliced page.
    pub fn new(items: Vec<T>, total_count: usize, request: PageRequest) -> Self {
        let current_page = request.page_number();
        let total_pages = total_count.div_ceil(request.page_size());

        Self {
            items,
            total_count,
            total_pages,
            current_page,
            page_size: request.page_size(),
            has_previous: current_page > 1 && total_pages > 0,
            has_next: current_page < total_pages,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_previous(&self) -> bool {
        self.has_previous
    }

    pub fn has_next(&self) -> bool {
        self.has_next
    }
}
