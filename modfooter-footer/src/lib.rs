//! Footer summary for reviewed content items.
//!
//! Combines the author, the creation time and the related entity of a
//! [`ContentItem`](modfooter_model::ContentItem) into a [`FooterView`]
//! that a presentation layer can render without further decisions.
//!
//! Formatting is pure and never fails: missing data degrades to empty
//! strings, `None`, or `"Invalid date"`. Errors only exist when loading
//! configuration or parsing item JSON.

mod config;
pub mod datetime;
mod error;
mod formatter;
mod view;

pub use config::FooterConfig;
pub use error::{FooterError, FooterResult};
pub use formatter::{format_footer, FooterFormatter};
pub use view::{FooterView, RelationDisplay};
