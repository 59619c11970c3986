//! Codelist Common Library
//!
//! コードリストの分割・分類ロジック（フロントエンド非依存）

pub mod types;
pub mod error;
pub mod tokenizer;
pub mod validator;
pub mod comparator;
pub mod stock;
pub mod identifier;
pub mod bucket;
pub mod session;
pub mod debounce;

pub use types::{CodeValue, ValidationResult, ComparisonResult, StockResult, IdentificationResult};
pub use error::{Error, Result};
pub use tokenizer::tokenize;
pub use validator::validate;
pub use comparator::compare;
pub use stock::match_stock;
pub use identifier::{identify, Brand};
pub use bucket::{Bucket, BucketItems};
pub use session::{Mode, Session, ActiveMode};
pub use debounce::{Debouncer, Timer, CancelHandle, ManualTimer};
