//! Expense endpoints of the Spendtrack API.
//!
//! Listing is paged in the server's Spring style: zero-based `page`, fixed
//! `size`, `sort=field,direction`, optional `name`/`categoryId`/`period`
//! filters. The response carries the records plus a `last` flag.

use super::{check, decode, ApiClient, ApiError};
use crate::list::aggregator::ExpenseSource;
use crate::list::SearchCriteria;
use crate::models::{CreateExpenseRequest, Expense, ExpensePage, UpdateExpenseRequest};

/// Query string for a paged expense search
fn page_query(criteria: &SearchCriteria) -> String {
    let mut query = format!(
        "page={}&size={}&sort={}",
        criteria.page,
        criteria.size,
        criteria.sort.as_query()
    );

    if let Some(ref name) = criteria.name {
        query.push_str(&format!("&name={}", urlencoding::encode(name)));
    }
    if let Some(ref category_id) = criteria.category_id {
        query.push_str(&format!("&categoryId={}", urlencoding::encode(category_id)));
    }
    if let Some(period) = criteria.period {
        query.push_str(&format!("&period={}", period.as_str()));
    }

    query
}

/// Fetch one page of expenses matching the criteria
pub async fn fetch_page(
    client: &ApiClient,
    criteria: &SearchCriteria,
) -> Result<ExpensePage, ApiError> {
    let url = client.url(&format!("/expenses?{}", page_query(criteria)));
    client.get_json(&url).await
}

/// Fetch a single expense by id
pub async fn fetch(client: &ApiClient, id: &str) -> Result<Expense, ApiError> {
    let url = client.url(&format!("/expenses/{}", urlencoding::encode(id)));
    client.get_json(&url).await
}

/// Create a new expense
pub async fn create(
    client: &ApiClient,
    request: &CreateExpenseRequest,
) -> Result<Expense, ApiError> {
    let url = client.url("/expenses");
    log::debug!("POST {}", url);
    let response = client.http.post(&url).json(request).send().await?;
    decode(response).await
}

/// Update an existing expense
pub async fn update(
    client: &ApiClient,
    id: &str,
    request: &UpdateExpenseRequest,
) -> Result<Expense, ApiError> {
    let url = client.url(&format!("/expenses/{}", urlencoding::encode(id)));
    log::debug!("PUT {}", url);
    let response = client.http.put(&url).json(request).send().await?;
    decode(response).await
}

/// Delete an expense
pub async fn delete(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let url = client.url(&format!("/expenses/{}", urlencoding::encode(id)));
    log::debug!("DELETE {}", url);
    let response = client.http.delete(&url).send().await?;
    check(response).await
}

impl ExpenseSource for ApiClient {
    async fn fetch_page(&self, criteria: &SearchCriteria) -> Result<ExpensePage, ApiError> {
        fetch_page(self, criteria).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{PeriodFilter, SortDirection, SortField, SortSpec};

    #[test]
    fn test_page_query_minimal() {
        let criteria = SearchCriteria::new().with_size(20);
        assert_eq!(page_query(&criteria), "page=0&size=20&sort=date,desc");
    }

    #[test]
    fn test_page_query_with_filters() {
        let mut criteria = SearchCriteria::new().with_size(20);
        criteria.set_sort(SortSpec::new(SortField::Name, SortDirection::Asc));
        criteria.set_name(Some("café latte".to_string()));
        criteria.set_category(Some("c1".to_string()));
        criteria.set_period(Some(PeriodFilter::CurrentMonth));

        let query = page_query(&criteria);
        assert!(query.starts_with("page=0&size=20&sort=name,asc"));
        assert!(query.contains("&name=caf%C3%A9%20latte"));
        assert!(query.contains("&categoryId=c1"));
        assert!(query.contains("&period=CURRENT_MONTH"));
    }

    #[test]
    fn test_page_query_carries_cursor() {
        let mut criteria = SearchCriteria::new().with_size(10);
        criteria.next_page();
        criteria.next_page();
        assert!(page_query(&criteria).starts_with("page=2&size=10"));
    }
}
