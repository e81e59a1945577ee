//! Raw list-query parameters shared by every list handler.

use portal_core::listing::{ListQuery, QueryRejection, ResourcePolicy};
use serde::Deserialize;

/// The three JSON-encoded list parameters (`?range=&sort=&filter=`),
/// taken as opaque strings and resolved against a resource policy.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub range: Option<String>,
    pub sort: Option<String>,
    pub filter: Option<String>,
}

impl ListParams {
    /// Resolve into a normalized [`ListQuery`] for `policy`.
    pub fn resolve(&self, policy: &ResourcePolicy) -> Result<ListQuery, QueryRejection> {
        ListQuery::resolve(
            policy,
            self.range.as_deref(),
            self.sort.as_deref(),
            self.filter.as_deref(),
        )
    }
}
