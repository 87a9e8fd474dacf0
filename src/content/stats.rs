#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: u32,
}

static STATS: &[Stat] = &[
    Stat {
        label: "2-week AI apps",
        value: 2,
    },
    Stat {
        label: "300-member platform",
        value: 300,
    },
    Stat {
        label: "2.5k accounts tracked",
        value: 2500,
    },
];

pub fn stats() -> &'static [Stat] {
    STATS
}

/// Compact display: thousands become `x.yk`.
pub fn format_stat(value: u32) -> String {
    if value >= 1000 {
        format!("{:.1}k", value as f64 / 1000.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(0), "0");
        assert_eq!(format_stat(300), "300");
        assert_eq!(format_stat(999), "999");
        assert_eq!(format_stat(1000), "1.0k");
        assert_eq!(format_stat(2500), "2.5k");
    }
}
