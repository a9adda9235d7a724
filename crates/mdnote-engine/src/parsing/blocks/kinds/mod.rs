pub mod block_quote;
pub mod bullet_list;
pub mod code_indent;
pub mod heading;
pub mod ordered_list;

pub use block_quote::BlockQuote;
pub use bullet_list::BulletList;
pub use code_indent::CodeIndent;
pub use heading::Heading;
pub use ordered_list::OrderedList;
