//! OData v4 query construction: the [`ODataQuery`] builder and its URL
//! serialization.
//!
//! The builder only carries values; unset fields are omitted from the query
//! string entirely. Filter expressions are passed through verbatim; the
//! library performs no escaping or validation of `$filter` text.

use url::Url;

/// Server-side page size ceiling. `$top` values above this are clamped
/// before being sent.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Builder for the standard OData query parameters accepted by every
/// collection endpoint.
///
/// ```
/// use wfrmls::ODataQuery;
///
/// let query = ODataQuery::default()
///     .with_top(25)
///     .with_filter("StandardStatus eq 'Active'")
///     .with_select_fields(&["ListingKey", "ListPrice"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ODataQuery {
    /// Maximum number of results (`$top`). Clamped to [`MAX_PAGE_SIZE`].
    pub top: Option<u32>,
    /// Number of results to skip (`$skip`).
    pub skip: Option<u64>,
    /// Raw OData filter expression (`$filter`), sent verbatim.
    pub filter: Option<String>,
    /// Fields to return (`$select`), comma-joined in order.
    pub select: Vec<String>,
    /// Sort expression (`$orderby`), e.g. `ListPrice desc`.
    pub orderby: Option<String>,
    /// Navigation properties to inline (`$expand`), comma-joined in order.
    pub expand: Vec<String>,
    /// Whether to include `@odata.count` in the response (`$count`).
    pub count: Option<bool>,
}

impl ODataQuery {
    /// Sets the maximum number of results per request.
    pub fn with_top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    /// Sets the number of results to skip.
    pub fn with_skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Sets the raw `$filter` expression, replacing any existing one.
    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = Some(filter.to_string());
        self
    }

    /// Prepends `clause` to the filter, combining with an existing
    /// expression as `<clause> and (<existing>)`.
    ///
    /// Convenience methods on the resource clients use this to attach their
    /// fixed clause while letting caller-supplied filters pass through.
    pub fn and_filter(mut self, clause: &str) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => format!("{} and ({})", clause, existing),
            None => clause.to_string(),
        });
        self
    }

    /// Adds a single field to `$select`.
    pub fn with_select(mut self, field: &str) -> Self {
        self.select.push(field.to_string());
        self
    }

    /// Adds several fields to `$select`, preserving order.
    pub fn with_select_fields(mut self, fields: &[&str]) -> Self {
        self.select.extend(fields.iter().map(|f| f.to_string()));
        self
    }

    /// Sets the `$orderby` expression.
    pub fn with_orderby(mut self, orderby: &str) -> Self {
        self.orderby = Some(orderby.to_string());
        self
    }

    /// Adds a single navigation property to `$expand`.
    pub fn with_expand(mut self, property: &str) -> Self {
        self.expand.push(property.to_string());
        self
    }

    /// Adds several navigation properties to `$expand`, preserving order.
    pub fn with_expand_properties(mut self, properties: &[&str]) -> Self {
        self.expand
            .extend(properties.iter().map(|p| p.to_string()));
        self
    }

    /// Requests (or suppresses) the `@odata.count` annotation.
    pub fn with_count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    /// Appends the set parameters to the given URL, returning the modified
    /// URL. Unset parameters are omitted rather than sent empty.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(top) = self.top {
            url.query_pairs_mut()
                .append_pair("$top", &top.min(MAX_PAGE_SIZE).to_string());
        }
        if let Some(skip) = self.skip {
            url.query_pairs_mut()
                .append_pair("$skip", &skip.to_string());
        }
        if let Some(filter) = &self.filter {
            url.query_pairs_mut().append_pair("$filter", filter);
        }
        if !self.select.is_empty() {
            url.query_pairs_mut()
                .append_pair("$select", &self.select.join(","));
        }
        if let Some(orderby) = &self.orderby {
            url.query_pairs_mut().append_pair("$orderby", orderby);
        }
        if !self.expand.is_empty() {
            url.query_pairs_mut()
                .append_pair("$expand", &self.expand.join(","));
        }
        if let Some(count) = self.count {
            url.query_pairs_mut()
                .append_pair("$count", if count { "true" } else { "false" });
        }
        url
    }

    /// True when no parameter is set, in which case no query string is sent.
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
            && self.skip.is_none()
            && self.filter.is_none()
            && self.select.is_empty()
            && self.orderby.is_none()
            && self.expand.is_empty()
            && self.count.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> Url {
        Url::parse("https://example.com/reso/odata/Property").unwrap()
    }

    #[test]
    fn default_query_adds_nothing() {
        let url = ODataQuery::default().add_to_url(&base_url());
        assert_eq!(url.query(), None);
        assert!(ODataQuery::default().is_empty());
    }

    #[test]
    fn unset_parameters_are_omitted() {
        let url = ODataQuery::default().with_top(10).add_to_url(&base_url());
        let query = url.query().unwrap();
        assert!(query.contains("%24top=10"));
        assert!(!query.contains("skip"));
        assert!(!query.contains("filter"));
        assert!(!query.contains("select"));
        assert!(!query.contains("orderby"));
        assert!(!query.contains("expand"));
        assert!(!query.contains("count"));
    }

    #[test]
    fn top_is_clamped_to_page_size_ceiling() {
        let url = ODataQuery::default().with_top(5000).add_to_url(&base_url());
        assert!(url.query().unwrap().contains("%24top=200"));

        let url = ODataQuery::default().with_top(200).add_to_url(&base_url());
        assert!(url.query().unwrap().contains("%24top=200"));

        let url = ODataQuery::default().with_top(199).add_to_url(&base_url());
        assert!(url.query().unwrap().contains("%24top=199"));
    }

    #[test]
    fn select_fields_join_with_commas_in_order() {
        let url = ODataQuery::default()
            .with_select_fields(&["ListingKey", "ListPrice", "City"])
            .add_to_url(&base_url());
        assert!(url
            .query()
            .unwrap()
            .contains("%24select=ListingKey%2CListPrice%2CCity"));
    }

    #[test]
    fn single_and_multi_select_accumulate() {
        let url = ODataQuery::default()
            .with_select("ListingKey")
            .with_select_fields(&["City", "ListPrice"])
            .add_to_url(&base_url());
        assert!(url
            .query()
            .unwrap()
            .contains("%24select=ListingKey%2CCity%2CListPrice"));
    }

    #[test]
    fn expand_properties_join_with_commas() {
        let url = ODataQuery::default()
            .with_expand("Media")
            .with_expand_properties(&["OpenHouse"])
            .add_to_url(&base_url());
        assert!(url.query().unwrap().contains("%24expand=Media%2COpenHouse"));
    }

    #[test]
    fn count_serializes_as_literal_booleans() {
        let url = ODataQuery::default().with_count(true).add_to_url(&base_url());
        assert!(url.query().unwrap().contains("%24count=true"));

        let url = ODataQuery::default()
            .with_count(false)
            .add_to_url(&base_url());
        assert!(url.query().unwrap().contains("%24count=false"));
    }

    #[test]
    fn filter_passes_through_verbatim() {
        let url = ODataQuery::default()
            .with_filter("ListPrice ge 300000 and City eq 'Provo'")
            .add_to_url(&base_url());
        let decoded: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            decoded,
            vec![(
                "$filter".to_string(),
                "ListPrice ge 300000 and City eq 'Provo'".to_string()
            )]
        );
    }

    #[test]
    fn and_filter_without_existing_filter_uses_clause_alone() {
        let query = ODataQuery::default().and_filter("StandardStatus eq 'Active'");
        assert_eq!(query.filter.as_deref(), Some("StandardStatus eq 'Active'"));
    }

    #[test]
    fn and_filter_combines_with_existing_filter() {
        let query = ODataQuery::default()
            .with_filter("ListPrice ge 300000")
            .and_filter("StandardStatus eq 'Active'");
        assert_eq!(
            query.filter.as_deref(),
            Some("StandardStatus eq 'Active' and (ListPrice ge 300000)")
        );
    }

    #[test]
    fn all_parameters_serialize_together() {
        let url = ODataQuery::default()
            .with_top(50)
            .with_skip(100)
            .with_filter("City eq 'Ogden'")
            .with_select_fields(&["ListingKey"])
            .with_orderby("ListPrice desc")
            .with_expand("Media")
            .with_count(true)
            .add_to_url(&base_url());
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "$top", "$skip", "$filter", "$select", "$orderby", "$expand", "$count"
            ]
        );
    }
}
