pub mod document;

pub use document::{Block, Document};
