//! 도서 요청/응답 DTO

use chrono::Utc;
use mongodb::bson::{DateTime, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::dto::common::{parse_date, to_utc};
use crate::domain::entities::{Book, Record};
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::validate_required_string;

/// 도서 등록 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(range(min = 1, message = "pages must be positive"))]
    pub pages: i32,
    #[validate(length(min = 1, message = "isbn is required"))]
    pub isbn: String,
    #[validate(length(min = 1, message = "language is required"))]
    pub language: String,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: i64,
    /// `YYYY-MM-DD` 또는 RFC 3339
    pub published_at: String,
}

impl CreateBookRequest {
    pub fn into_entity(self) -> AppResult<Book> {
        let published_at = parse_date(&self.published_at, "published_at")?;
        let now = DateTime::now();

        Ok(Book {
            id: None,
            title: validate_required_string(&self.title, "title")?,
            author: validate_required_string(&self.author, "author")?,
            price: self.price,
            description: self.description,
            pages: self.pages,
            isbn: validate_required_string(&self.isbn, "isbn")?,
            language: self.language,
            stock: self.stock,
            published_at,
            created_at: now,
            updated_at: now,
        })
    }
}

/// 도서 수정 요청 (지정한 필드만 변경)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: Option<i64>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "pages must be positive"))]
    pub pages: Option<i32>,
    pub isbn: Option<String>,
    pub language: Option<String>,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: Option<i64>,
    pub published_at: Option<String>,
}

impl UpdateBookRequest {
    /// `$set`에 사용할 변경 문서를 만듭니다.
    pub fn into_changes(self) -> AppResult<Document> {
        let mut changes = Document::new();

        if let Some(title) = self.title {
            changes.insert("title", validate_required_string(&title, "title")?);
        }
        if let Some(author) = self.author {
            changes.insert("author", validate_required_string(&author, "author")?);
        }
        if let Some(price) = self.price {
            changes.insert("price", price);
        }
        if let Some(description) = self.description {
            changes.insert("description", description);
        }
        if let Some(pages) = self.pages {
            changes.insert("pages", pages);
        }
        if let Some(isbn) = self.isbn {
            changes.insert("isbn", validate_required_string(&isbn, "isbn")?);
        }
        if let Some(language) = self.language {
            changes.insert("language", language);
        }
        if let Some(stock) = self.stock {
            changes.insert("stock", stock);
        }
        if let Some(published_at) = self.published_at {
            changes.insert("published_at", parse_date(&published_at, "published_at")?);
        }

        if changes.is_empty() {
            return Err(AppError::ValidationError("no fields to update".to_string()));
        }
        Ok(changes)
    }
}

/// 도서 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub price: i64,
    pub description: String,
    pub pages: i32,
    pub isbn: String,
    pub language: String,
    pub stock: i64,
    pub published_at: chrono::DateTime<Utc>,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id_string(),
            title: book.title,
            author: book.author,
            price: book.price,
            description: book.description,
            pages: book.pages,
            isbn: book.isbn,
            language: book.language,
            stock: book.stock,
            published_at: to_utc(book.published_at),
            created_at: to_utc(book.created_at),
            updated_at: to_utc(book.updated_at),
        }
    }
}
