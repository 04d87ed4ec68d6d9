//! Count labels for table lists and result toolbars

/// Row count label for the table list: `"1250 rows"`
pub fn format_row_count(count: u64) -> String {
    format!("{} rows", count)
}

/// Size label of a result set: `"5 results"`
pub fn format_result_count(count: usize) -> String {
    format!("{} results", count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_row_count_is_the_raw_number() {
        assert_eq!(format_row_count(0), "0 rows");
        assert_eq!(format_row_count(48), "48 rows");
        assert_eq!(format_row_count(18734), "18734 rows");
    }

    #[test]
    fn test_format_result_count() {
        assert_eq!(format_result_count(0), "0 results");
        assert_eq!(format_result_count(2), "2 results");
    }
}
