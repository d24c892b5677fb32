use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category: Option<Category>,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(name: String, amount: f64, date: NaiveDate, category: Option<Category>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            amount,
            date,
            category,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
        }
    }
}

/// One page of a paged expense query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpensePage {
    pub content: Vec<Expense>,
    /// True when this is the final page of the result set
    pub last: bool,
}

/// Input data for creating a new expense
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub category_id: Option<String>,
}

/// Input data for updating an expense
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpenseRequest {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub category_id: Option<String>,
}

/// Input data for creating a new category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Input data for updating a category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_new_assigns_id_and_timestamp() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let expense = Expense::new("Milk".to_string(), 2.49, date, None);

        assert!(!expense.id.is_empty());
        assert_eq!(expense.name, "Milk");
        assert_eq!(expense.date, date);
        assert!(expense.category.is_none());
    }

    #[test]
    fn test_expense_page_deserializes_camel_case() {
        let json = r#"{
            "content": [
                {
                    "id": "e1",
                    "name": "Milk",
                    "amount": 2.49,
                    "date": "2024-01-05",
                    "category": { "id": "c1", "name": "Groceries" },
                    "createdAt": "2024-01-05T08:30:00Z"
                }
            ],
            "last": true
        }"#;

        let page: ExpensePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.content.len(), 1);
        assert!(page.last);

        let expense = &page.content[0];
        assert_eq!(expense.name, "Milk");
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(expense.category.as_ref().unwrap().name, "Groceries");
    }

    #[test]
    fn test_create_request_serializes_camel_case() {
        let request = CreateExpenseRequest {
            name: "Milk".to_string(),
            amount: 2.49,
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            category_id: Some("c1".to_string()),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["categoryId"], "c1");
        assert_eq!(json["date"], "2024-01-05");
    }
}
