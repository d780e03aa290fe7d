use std::str::FromStr;

use crate::error::ValidationError;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 20;

/// Largest value the database driver binds for LIMIT and OFFSET.
pub const MAX_BOUND: u64 = i64::MAX as u64;

#[derive(
    Debug,
    Default,
    PartialEq,
    Eq,
    Clone,
    Copy,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    /// Anything other than a recognised order falls back to newest first.
    pub fn from_param(param: Option<&str>) -> Self {
        param
            .and_then(|param| SortOrder::from_str(param).ok())
            .unwrap_or_default()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
    pub sort: SortOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort: SortOrder::default(),
        }
    }
}

impl PageRequest {
    pub fn new(
        page: Option<u64>,
        limit: Option<u64>,
        sort: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let page = page.unwrap_or(DEFAULT_PAGE);
        if page == 0 {
            return Err(ValidationError::NotPositive("page"));
        }

        // no page size cap beyond what the driver can bind
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 {
            return Err(ValidationError::NotPositive("limit"));
        }
        if limit > MAX_BOUND {
            return Err(ValidationError::TooLarge("limit"));
        }

        let offset = (page - 1).checked_mul(limit);
        if page > MAX_BOUND || !offset.is_some_and(|offset| offset <= MAX_BOUND)
        {
            return Err(ValidationError::TooLarge("page"));
        }

        Ok(Self {
            page,
            limit,
            sort: SortOrder::from_param(sort),
        })
    }

    /// Never exceeds `MAX_BOUND`; `new` rejects anything larger.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    pub fn total_pages(&self, total_count: u64) -> u64 {
        total_count.div_ceil(self.limit)
    }
}
