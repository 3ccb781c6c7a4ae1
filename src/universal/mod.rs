//! Frontmatter format shared by Claude sources and Droid outputs
//!
//! Both sides store metadata as YAML frontmatter (between `---` delimiters)
//! followed by a markdown body. Reading tolerates files without a block;
//! writing preserves key insertion order.

mod frontmatter;

pub use frontmatter::{
    Frontmatter, format_frontmatter, get_bool, get_str, get_str_list, parse_frontmatter,
};
