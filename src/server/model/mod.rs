use serde::{Deserialize, Serialize};

pub(crate) mod cart;
pub(crate) mod config;
pub(crate) mod filter;
pub(crate) mod menu_item;
pub(crate) mod order;
pub(crate) mod restaurant;

/// Monetary amounts are kept in cents.
pub(crate) type Cents = u64;

const DEFAULT_PAGE_SIZE: u8 = 20;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CommonRequestParams {
    pub page: Option<u8>,
    pub page_size: Option<u8>,
}

impl CommonRequestParams {
    /// Slice out the requested page, pages start at 0.
    pub fn paginate<T>(&self, items: Vec<T>) -> Vec<T> {
        let page = self.page.unwrap_or(0) as usize;
        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1) as usize;
        items
            .into_iter()
            .skip(page * page_size)
            .take(page_size)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum NoticeVariant {
    Default,
    Destructive,
}

/// User facing notification attached to mutating responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn info(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }
}

/// Render cents as `$12.34`.
pub(crate) fn format_price(cents: Cents) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
