//! Parsing functionality for source files
//!
//! [`ast_parser`] turns JavaScript/TypeScript source into a small syntax tree
//! of import declarations; [`import_extractor`] picks out the imports of one
//! library from that tree.

pub mod ast_parser;
pub mod import_extractor;

pub use ast_parser::{ASTParser, SyntaxParser};
pub use import_extractor::{matches_library, FileExtraction, ImportExtractor};
