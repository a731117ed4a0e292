use crate::snippet::SearchHit;
use tabled::{settings::Style, Table};

/// Render search hits as a keyword/message table
pub fn hits_table(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return String::new();
    }

    Table::new(hits).with(Style::rounded()).to_string()
}

/// One keyword per line, as printed by `catalog`
pub fn keyword_list(keywords: &[String]) -> String {
    keywords.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hits_table_has_headers_and_rows() {
        let table = hits_table(&[SearchHit::new("foo", "contains bar text")]);
        assert!(table.contains("Keyword"));
        assert!(table.contains("Message"));
        assert!(table.contains("foo"));
        assert!(table.contains("contains bar text"));
    }

    #[test]
    fn test_empty_hits_render_nothing() {
        assert!(hits_table(&[]).is_empty());
    }

    #[test]
    fn test_keyword_list() {
        let keywords = vec!["a".to_string(), "b".to_string()];
        assert_eq!(keyword_list(&keywords), "a\nb");
        assert_eq!(keyword_list(&[]), "");
    }
}
