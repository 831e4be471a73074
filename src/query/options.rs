use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Ordering key of a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    /// Display title
    Title,
    /// Record identifier
    Id,
    /// Last update. Records carry no timestamp, so this orders by identifier.
    Updated,
}

impl OrderBy {
    /// Lenient parse of an ordering key.
    ///
    /// An empty key means "no ordering". Unknown keys fall back to identifier
    /// ordering instead of failing.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "" => None,
            "title" => Some(Self::Title),
            "id" => Some(Self::Id),
            "updated" => Some(Self::Updated),
            other => {
                tracing::debug!(key = other, "unrecognized ordering key, ordering by id");
                Some(Self::Id)
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Id => "id",
            Self::Updated => "updated",
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options of a list query.
///
/// Missing `limit`/`offset` are filled in by the store (`StoreConfig::default_limit`
/// and 0). Negative values coming from JSON are clamped to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryOptions {
    #[serde(
        deserialize_with = "clamped_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub limit: Option<usize>,
    #[serde(
        deserialize_with = "clamped_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub offset: Option<usize>,
    #[serde(
        deserialize_with = "lenient_order_by",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_by: Option<OrderBy>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from possibly negative inputs, clamping them to 0.
    pub fn from_signed(limit: Option<i64>, offset: Option<i64>, order_by: Option<&str>) -> Self {
        Self {
            limit: limit.map(clamp),
            offset: offset.map(clamp),
            order_by: order_by.and_then(OrderBy::from_key),
        }
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    /// Set ordering from a raw key, see [`OrderBy::from_key`].
    pub fn order_by_key(mut self, key: &str) -> Self {
        self.order_by = OrderBy::from_key(key);
        self
    }

    /// Effective `(limit, offset)` pair.
    pub fn window(&self, default_limit: usize) -> (usize, usize) {
        (self.limit.unwrap_or(default_limit), self.offset.unwrap_or(0))
    }
}

fn clamp(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

fn clamped_count<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.map(clamp))
}

fn lenient_order_by<'de, D>(deserializer: D) -> Result<Option<OrderBy>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .as_deref()
        .and_then(OrderBy::from_key))
}
