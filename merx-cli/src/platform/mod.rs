pub mod cli;

pub use cli::{print_themes, print_tokens, render_document, render_line};
