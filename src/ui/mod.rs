pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{dim, error, header, hidden_marker, info, keyword, not_found, success};
pub use table::{hits_table, keyword_list};
pub use theme::{theme, Theme};
