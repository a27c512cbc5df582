/// One `SUFFIX:COUNT` line of a range response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub suffix: String,
    pub count: u64,
}

/// Parses a range response body into candidate records, in encounter order.
///
/// Lines that do not split into exactly two `:`-delimited fields, or whose
/// count is not a non-negative base-10 integer, are skipped. An empty result
/// is left for the caller to reject.
pub fn parse_range_body(body: &str) -> Vec<CandidateRecord> {
    body.lines().filter_map(parse_line).collect()
}

#[inline]
fn parse_line(line: &str) -> Option<CandidateRecord> {
    let mut fields = line.split(':');
    let suffix = fields.next()?;
    let count = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    let count = count.parse::<u64>().ok()?;

    Some(CandidateRecord { suffix: suffix.to_owned(), count })
}

/// Returns the count of the first record whose suffix equals `suffix`, or 0.
///
/// Comparison is exact and case-sensitive.
pub fn find_count(records: &[CandidateRecord], suffix: &str) -> u64 {
    records
        .iter()
        .find(|record| record.suffix == suffix)
        .map_or(0, |record| record.count)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_BODY: &str = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:3303003\n\
                               4D0591EEAAC5A33064731DBD53F6A819DCE:0\n\
                               6101ED511A094D1E4E515BBF8D32B266090:42\n";

    fn record(suffix: &str, count: u64) -> CandidateRecord {
        CandidateRecord { suffix: suffix.to_owned(), count }
    }

    #[test]
    fn test_parse_sample_body() {
        let records = parse_range_body(SAMPLE_BODY);

        assert_eq!(
            records,
            vec![
                record("1E4C9B93F3F0682250B6CF8331B7EE68FD8", 3303003),
                record("4D0591EEAAC5A33064731DBD53F6A819DCE", 0),
                record("6101ED511A094D1E4E515BBF8D32B266090", 42),
            ]
        );
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let body = "\n\
                    no-colon-here\n\
                    AAAA:1:2\n\
                    BBBB:notanumber\n\
                    CCCC:-5\n\
                    DDDD:\n\
                    EEEE: 7\n\
                    1E4C9B93F3F0682250B6CF8331B7EE68FD8:3303003\n\
                    FFFF:12";

        assert_eq!(
            parse_range_body(body),
            vec![record("1E4C9B93F3F0682250B6CF8331B7EE68FD8", 3303003), record("FFFF", 12)]
        );
    }

    #[test]
    fn test_parse_crlf() {
        let body = "1E4C9B93F3F0682250B6CF8331B7EE68FD8:3303003\r\n\
                    4D0591EEAAC5A33064731DBD53F6A819DCE:0\r\n";

        let records = parse_range_body(body);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1], record("4D0591EEAAC5A33064731DBD53F6A819DCE", 0));
    }

    #[test]
    fn test_parse_empty_and_garbage() {
        assert!(parse_range_body("").is_empty());
        assert!(parse_range_body("<html>Service Unavailable</html>\n").is_empty());
    }

    #[test]
    fn test_find_count() {
        let records = parse_range_body(SAMPLE_BODY);

        assert_eq!(find_count(&records, "1E4C9B93F3F0682250B6CF8331B7EE68FD8"), 3303003);
        assert_eq!(find_count(&records, "6101ED511A094D1E4E515BBF8D32B266090"), 42);
        assert_eq!(find_count(&records, "3EE5E6B4B0D3255BFEF95601890AFD80709"), 0);
    }

    #[test]
    fn test_find_count_is_case_sensitive() {
        let records = parse_range_body(SAMPLE_BODY);
        assert_eq!(find_count(&records, "1e4c9b93f3f0682250b6cf8331b7ee68fd8"), 0);
    }

    #[test]
    fn test_find_count_first_match_wins() {
        let records = vec![record("AAAA", 7), record("AAAA", 9)];
        assert_eq!(find_count(&records, "AAAA"), 7);
    }

    #[test]
    fn test_find_count_empty() {
        assert_eq!(find_count(&[], "AAAA"), 0);
    }
}
