pub mod reader;
pub mod recreator;
pub mod writer;

pub use reader::read_document;
pub use recreator::{Phrase, PhraseBook, TreeRecreator};
pub use writer::write_document;
