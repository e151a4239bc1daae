//! PostgREST query builder

use folio_core::prelude::*;
use url::Url;

/// A read-only table query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    filters: Vec<(String, String)>,
    order: Option<(String, bool)>,
    single: bool,
}

impl Query {
    /// `select *` from `table`
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            filters: Vec::new(),
            order: None,
            single: false,
        }
    }

    /// Keep rows where `column = value`
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    pub fn order(mut self, column: impl Into<String>, ascending: bool) -> Self {
        self.order = Some((column.into(), ascending));
        self
    }

    /// Expect exactly one row back as a JSON object
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn is_single(&self) -> bool {
        self.single
    }

    /// Human-readable filter description used in errors and logs
    pub fn describe_filters(&self) -> String {
        self.filters
            .iter()
            .map(|(column, value)| format!("{column}={value}"))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Build `{base}/rest/v1/{table}?select=*&col=eq.value&order=col.asc`
    pub fn to_url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::config(format!("store URL cannot be a base: {base}")))?
            .pop_if_empty()
            .extend(["rest", "v1", self.table.as_str()]);

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            for (column, value) in &self.filters {
                pairs.append_pair(column, &format!("eq.{value}"));
            }
            if let Some((column, ascending)) = &self.order {
                let direction = if *ascending { "asc" } else { "desc" };
                pairs.append_pair("order", &format!("{column}.{direction}"));
            }
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://abc.supabase.co").unwrap()
    }

    #[test]
    fn test_plain_select() {
        let url = Query::from("projects").to_url(&base()).unwrap();
        assert_eq!(url.as_str(), "https://abc.supabase.co/rest/v1/projects?select=*");
    }

    #[test]
    fn test_filter_and_order() {
        let url = Query::from("nav_elements")
            .eq("scope", "header")
            .order("order", true)
            .to_url(&base())
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://abc.supabase.co/rest/v1/nav_elements?select=*&scope=eq.header&order=order.asc"
        );
    }

    #[test]
    fn test_filter_values_are_encoded() {
        let url = Query::from("pages")
            .eq("slug", "about me&more")
            .to_url(&base())
            .unwrap();
        assert!(url.as_str().contains("slug=eq.about+me%26more"));
    }

    #[test]
    fn test_base_with_trailing_path() {
        let base = Url::parse("http://localhost:54321/").unwrap();
        let url = Query::from("skills").to_url(&base).unwrap();
        assert_eq!(url.path(), "/rest/v1/skills");
    }

    #[test]
    fn test_describe_filters() {
        let query = Query::from("pages").eq("slug", "home").single();
        assert_eq!(query.describe_filters(), "slug=home");
        assert!(query.is_single());
    }
}
