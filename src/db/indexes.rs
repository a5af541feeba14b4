//! 컬렉션 인덱스 생성
//!
//! 이미 같은 정의의 인덱스가 있으면 MongoDB가 그대로 둡니다.

use mongodb::{bson::{doc, Document}, options::IndexOptions, IndexModel};
use crate::domain::entities::{Book, Customer, Order, Record, Role, User};
use crate::errors::AppResult;
use super::Database;

fn ascending_keys(field: &str) -> Document {
    let mut keys = Document::new();
    keys.insert(field, 1);
    keys
}

fn unique_index(field: &str) -> IndexModel {
    IndexModel::builder()
        .keys(ascending_keys(field))
        .options(IndexOptions::builder()
            .unique(true)
            .name(format!("{}_unique", field))
            .build())
        .build()
}

fn created_at_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "created_at": -1 })
        .options(IndexOptions::builder()
            .name("created_at_desc".to_string())
            .build())
        .build()
}

fn ascending_index(field: &str) -> IndexModel {
    IndexModel::builder()
        .keys(ascending_keys(field))
        .options(IndexOptions::builder()
            .name(format!("{}_asc", field))
            .build())
        .build()
}

/// 컬렉션별 인덱스 정의
fn index_plan() -> Vec<(&'static str, Vec<IndexModel>)> {
    vec![
        (User::COLLECTION, vec![unique_index("email"), created_at_index()]),
        (Customer::COLLECTION, vec![unique_index("email"), created_at_index()]),
        (Role::COLLECTION, vec![unique_index("name"), created_at_index()]),
        (Book::COLLECTION, vec![created_at_index()]),
        (Order::COLLECTION, vec![ascending_index("customer_id"), created_at_index()]),
    ]
}

pub async fn ensure_indexes(database: &Database) -> AppResult<()> {
    let db = database.get_database();

    for (collection, indexes) in index_plan() {
        db.collection::<Document>(collection)
            .create_indexes(indexes)
            .await?;
        log::debug!("인덱스 확인: {}", collection);
    }

    log::info!("📇 인덱스 생성 완료");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_plan_covers_unique_fields() {
        let plan = index_plan();

        let unique_names = |collection: &str| -> Vec<String> {
            plan.iter()
                .filter(|(name, _)| *name == collection)
                .flat_map(|(_, indexes)| indexes.iter())
                .filter(|index| index.options.as_ref().and_then(|o| o.unique) == Some(true))
                .filter_map(|index| index.options.as_ref().and_then(|o| o.name.clone()))
                .collect()
        };

        assert_eq!(unique_names(User::COLLECTION), vec!["email_unique"]);
        assert_eq!(unique_names(Customer::COLLECTION), vec!["email_unique"]);
        assert_eq!(unique_names(Role::COLLECTION), vec!["name_unique"]);
        assert!(unique_names(Order::COLLECTION).is_empty());
    }
}
