//! List query composition: filter → sort → page.
//!
//! Filtering supports exactly four clauses combined with AND. There is no
//! general expression language.

use core::cmp::Ordering;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult};

use crate::product::Product;

/// One conjunctive filter clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterClause {
    /// Case-sensitive substring match on the name.
    NameContains(String),
    PriceAtLeast(Decimal),
    PriceAtMost(Decimal),
    InStock(bool),
}

impl FilterClause {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            FilterClause::NameContains(needle) => product.name.contains(needle.as_str()),
            FilterClause::PriceAtLeast(min) => product.price >= *min,
            FilterClause::PriceAtMost(max) => product.price <= *max,
            FilterClause::InStock(flag) => product.in_stock == *flag,
        }
    }
}

/// Conjunction of filter clauses. No clauses matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    clauses: Vec<FilterClause>,
}

impl ProductFilter {
    /// Filter that matches every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from the optional list parameters.
    ///
    /// An empty name is treated as absent. Negative price bounds are rejected.
    pub fn new(
        name: Option<String>,
        price_min: Option<Decimal>,
        price_max: Option<Decimal>,
        in_stock: Option<bool>,
    ) -> DomainResult<Self> {
        let mut clauses = Vec::new();

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            clauses.push(FilterClause::NameContains(name));
        }
        if let Some(min) = price_min {
            if min < Decimal::ZERO {
                return Err(DomainError::validation("priceMin must not be negative"));
            }
            clauses.push(FilterClause::PriceAtLeast(min));
        }
        if let Some(max) = price_max {
            if max < Decimal::ZERO {
                return Err(DomainError::validation("priceMax must not be negative"));
            }
            clauses.push(FilterClause::PriceAtMost(max));
        }
        if let Some(flag) = in_stock {
            clauses.push(FilterClause::InStock(flag));
        }

        Ok(Self { clauses })
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.clauses.iter().all(|c| c.matches(product))
    }
}

/// Sortable product fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Name,
    Price,
    InStock,
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            "instock" | "in_stock" => Ok(SortField::InStock),
            _ => Err(DomainError::validation(format!(
                "sort field must be one of: name, price, inStock (got {s})"
            ))),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(DomainError::validation(format!(
                "sort direction must be asc or desc (got {s})"
            ))),
        }
    }
}

/// Total order over products. Ties (and the unsorted case) fall back to
/// ascending id regardless of direction.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SortOrder {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn by(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let primary = match self.field {
            None => Ordering::Equal,
            Some(SortField::Name) => a.name.cmp(&b.name),
            Some(SortField::Price) => a.price.cmp(&b.price),
            Some(SortField::InStock) => a.in_stock.cmp(&b.in_stock),
        };
        let primary = match self.direction {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

/// Offset/limit window over the sorted sequence. `limit: None` is unbounded.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    pub offset: usize,
    pub limit: Option<usize>,
}

impl Pagination {
    pub fn new(offset: usize, limit: Option<usize>) -> DomainResult<Self> {
        if limit == Some(0) {
            return Err(DomainError::validation("pageSize must be positive"));
        }
        Ok(Self { offset, limit })
    }

    /// Every record, no window.
    pub fn all() -> Self {
        Self::default()
    }

    /// Slice a sorted sequence. A window past the end yields an empty vector.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        let limit = self.limit.unwrap_or(usize::MAX);
        items.into_iter().skip(self.offset).take(limit).collect()
    }
}

/// Page-size policy applied to caller-supplied page parameters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: usize,
    pub max_size: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: 50,
            max_size: 1000,
        }
    }
}

impl PageLimits {
    /// Turn a zero-based page index and optional page size into a window.
    ///
    /// Missing size uses the default; oversized requests are clamped to the maximum.
    pub fn resolve(&self, page: Option<usize>, size: Option<usize>) -> DomainResult<Pagination> {
        let size = match size {
            Some(0) => return Err(DomainError::validation("pageSize must be positive")),
            Some(n) => n.min(self.max_size),
            None => self.default_size,
        };
        let offset = page.unwrap_or(0).saturating_mul(size);
        Pagination::new(offset, Some(size))
    }
}

/// Everything a list call needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub filter: ProductFilter,
    pub sort: SortOrder,
    pub page: Pagination,
}

impl ProductQuery {
    /// Apply filter, then sort, then pagination.
    pub fn apply<I>(&self, records: I) -> Vec<Product>
    where
        I: IntoIterator<Item = Product>,
    {
        let matched: Vec<Product> = records
            .into_iter()
            .filter(|p| self.filter.matches(p))
            .collect();
        self.sort_and_page(matched)
    }

    /// Order already-filtered records and cut the requested window.
    pub fn sort_and_page(&self, mut matched: Vec<Product>) -> Vec<Product> {
        matched.sort_by(|a, b| self.sort.compare(a, b));
        self.page.slice(matched)
    }
}
