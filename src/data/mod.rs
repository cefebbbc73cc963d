//! Data module - source loading, cleaning and validation

mod error;
mod loader;
mod processor;
mod record;
pub mod schema;

pub use error::ExtractError;
pub use loader::{DataLoader, SourceFormat};
pub use processor::{
    extract_transform, extract_transform_with_report, parse_decimal, parse_room_count,
    DataProcessor, DropReason, ExtractReport,
};
pub use record::{Dataset, RentRecord};
pub use schema::ColumnMapping;
