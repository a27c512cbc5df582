/// Formats `n` with a comma between each group of three digits (`3,303,003`).
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// The text printed once a check has completed.
pub fn report(count: u64) -> String {
    if count == 0 {
        return "no compromises detected\n".to_string();
    }

    format!(
        "\t!!!!!!!!!!!!!!!\n\
         \t!! ATTENTION !!\n\
         \t!!!!!!!!!!!!!!!\n\n\
         your password has been compromised at least {} times\n",
        group_thousands(count)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(42_000), "42,000");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(3_303_003), "3,303,003");
        assert_eq!(group_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn test_report_clean() {
        assert_eq!(report(0), "no compromises detected\n");
    }

    #[test]
    fn test_report_compromised() {
        let text = report(3_303_003);
        assert!(text.starts_with("\t!!!!!!!!!!!!!!!\n\t!! ATTENTION !!\n"));
        assert!(text.ends_with("your password has been compromised at least 3,303,003 times\n"));
    }
}
