//! Generic, per-entity paginated reads over Diesel tables.
//!
//! [`TableEntity`] binds a domain aggregate to its table; the
//! [`table_entity!`] macro generates that binding for a table whose rows carry
//! `id` and `created_at` columns. [`DatabaseRepository`] then offers the same
//! filtered, ordered, paginated listing for every bound entity.

use std::marker::PhantomData;

use diesel::sqlite::SqliteConnection;

use crate::db::{DbPool, get_connection};
use crate::domain::Entity;
use crate::pagination::{PageRequest, PageSource, PagedList, SortDirection};
use crate::repository::errors::RepositoryResult;

/// Wraps a search term in `%` wildcards, escaping `\`, `%` and `_` so the term
/// matches literally. Pair with `.escape('\\')`.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Caller-composed restriction applied to a boxed query.
pub trait QueryFilter<Q> {
    fn apply(&self, query: Q) -> Q;
}

/// Domain entity stored in a single Diesel table.
pub trait TableEntity: Entity + Sized {
    /// Boxed select over the entity's table.
    type Query;
    /// Filter accepted by listings of this entity.
    type Filter: QueryFilter<Self::Query>;

    /// Query selecting every row of the table.
    fn query() -> Self::Query;

    /// Orders by creation time, then by id in the same direction.
    fn order_by_created(query: Self::Query, direction: SortDirection) -> Self::Query;

    fn count(query: Self::Query, conn: &mut SqliteConnection) -> RepositoryResult<usize>;

    fn load(
        query: Self::Query,
        offset: i64,
        limit: i64,
        conn: &mut SqliteConnection,
    ) -> RepositoryResult<Vec<Self>>;
}

/// Binds a domain entity to its Diesel table and row model.
///
/// The row model must be `Queryable` over the full column list and convert
/// into the entity through `TryFrom`.
#[macro_export]
macro_rules! table_entity {
    ($entity:ty, $row:ty, $table:ident, $filter:ty) => {
        impl $crate::repository::table::TableEntity for $entity {
            type Query = $crate::schema::$table::BoxedQuery<'static, diesel::sqlite::Sqlite>;
            type Filter = $filter;

            fn query() -> Self::Query {
                use diesel::prelude::*;

                $crate::schema::$table::table.into_boxed::<diesel::sqlite::Sqlite>()
            }

            fn order_by_created(
                query: Self::Query,
                direction: $crate::pagination::SortDirection,
            ) -> Self::Query {
                use $crate::schema::$table::{created_at, id};
                use diesel::prelude::*;

                match direction {
                    $crate::pagination::SortDirection::Ascending => {
                        query.order((created_at.asc(), id.asc()))
                    }
                    $crate::pagination::SortDirection::Descending => {
                        query.order((created_at.desc(), id.desc()))
                    }
                }
            }

            fn count(
                query: Self::Query,
                conn: &mut diesel::sqlite::SqliteConnection,
            ) -> $crate::repository::errors::RepositoryResult<usize> {
                use diesel::prelude::*;

                let total: i64 = query.count().get_result(conn)?;
                Ok(usize::try_from(total).unwrap_or_default())
            }

            fn load(
                query: Self::Query,
                offset: i64,
                limit: i64,
                conn: &mut diesel::sqlite::SqliteConnection,
            ) -> $crate::repository::errors::RepositoryResult<Vec<Self>> {
                use diesel::prelude::*;

                query
                    .offset(offset)
                    .limit(limit)
                    .load::<$row>(conn)?
                    .into_iter()
                    .map(|row| Self::try_from(row).map_err(Into::into))
                    .collect()
            }
        }
    };
}

/// [`PageSource`] backed by a query factory over one table.
///
/// The factory is invoked once for the count and once for the fetch; ordering
/// is only attached to the fetch.
pub struct TableSource<'c, E, Q> {
    conn: &'c mut SqliteConnection,
    query: Q,
    direction: SortDirection,
    _entity: PhantomData<fn() -> E>,
}

impl<'c, E, Q> TableSource<'c, E, Q>
where
    E: TableEntity,
    Q: Fn() -> E::Query,
{
    pub fn new(conn: &'c mut SqliteConnection, query: Q, direction: SortDirection) -> Self {
        Self {
            conn,
            query,
            direction,
            _entity: PhantomData,
        }
    }

    fn filtered(&self, filter: Option<&E::Filter>) -> E::Query {
        let query = (self.query)();
        match filter {
            Some(filter) => filter.apply(query),
            None => query,
        }
    }
}

impl<E, Q> PageSource for TableSource<'_, E, Q>
where
    E: TableEntity,
    Q: Fn() -> E::Query,
{
    type Item = E;
    type Predicate = E::Filter;

    fn count(&mut self, filter: Option<&Self::Predicate>) -> RepositoryResult<usize> {
        let query = self.filtered(filter);
        E::count(query, self.conn)
    }

    fn fetch(
        &mut self,
        filter: Option<&Self::Predicate>,
        offset: usize,
        limit: usize,
    ) -> RepositoryResult<Vec<E>> {
        let query = E::order_by_created(self.filtered(filter), self.direction);
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        E::load(query, offset, limit, self.conn)
    }
}

/// Read-only paginated access to one entity type.
///
/// Holds nothing but the pool it reads from; every call checks out its own
/// connection and returns plain values.
pub struct DatabaseRepository<'a, E> {
    pool: &'a DbPool,
    _entity: PhantomData<fn() -> E>,
}

impl<'a, E: TableEntity> DatabaseRepository<'a, E> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// Lists the whole table, newest first unless `sort` says otherwise.
    pub fn get_all_paginated(
        &self,
        request: PageRequest,
        sort: Option<SortDirection>,
        filter: Option<&E::Filter>,
    ) -> RepositoryResult<PagedList<E>> {
        self.get_paginated_from(E::query, request, sort, filter)
    }

    /// Same as [`Self::get_all_paginated`] but starting from a caller-built
    /// query, e.g. one restricted through a sub-select on another table.
    pub fn get_paginated_from<Q>(
        &self,
        query: Q,
        request: PageRequest,
        sort: Option<SortDirection>,
        filter: Option<&E::Filter>,
    ) -> RepositoryResult<PagedList<E>>
    where
        Q: Fn() -> E::Query,
    {
        let mut conn = get_connection(self.pool)?;
        let direction = sort.unwrap_or_default();
        let mut source = TableSource::<E, Q>::new(&mut conn, query, direction);
        let page = PagedList::build(&mut source, filter, request)?;

        log::debug!(
            "Loaded page {} of {} ({} rows total)",
            page.current_page(),
            page.total_pages(),
            page.total_count()
        );

        Ok(page)
    }
}
