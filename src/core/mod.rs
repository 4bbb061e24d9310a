pub mod document;
pub mod etl;
pub mod extract;
pub mod pipeline;
pub mod render;
pub mod skeleton;
pub mod slug;
pub mod template;

pub use crate::domain::model::{ClientRecord, Record, RenderedReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
