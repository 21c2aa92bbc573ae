/// Metric series served by the aggregated-data backend. Payments come in two
/// channels whose amounts are additive components of the total paid.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::EnumString,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
pub enum Metric {
    #[strum(serialize = "CREDITE_BUGETARE_DEFINITIVE")]
    Budget,
    #[strum(serialize = "CREDITE_ANGAJAMENT")]
    Committed,
    #[strum(serialize = "PLATI_TREZOR")]
    PaidTreasury,
    #[strum(serialize = "PLATI_NON_TREZOR")]
    PaidNonTreasury,
}

impl Metric {
    /// Name of the JSON lines file holding this metric in a data directory.
    pub fn filename(self) -> &'static str {
        match self {
            Metric::Budget => "budget.jsonl",
            Metric::Committed => "committed.jsonl",
            Metric::PaidTreasury => "paid-treasury.jsonl",
            Metric::PaidNonTreasury => "paid-non-treasury.jsonl",
        }
    }

    /// Whether a level can be shown before this metric resolves.
    pub const fn is_optional(self) -> bool {
        matches!(self, Metric::PaidNonTreasury)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Metric::Budget, "CREDITE_BUGETARE_DEFINITIVE")]
    #[case(Metric::Committed, "CREDITE_ANGAJAMENT")]
    #[case(Metric::PaidTreasury, "PLATI_TREZOR")]
    #[case(Metric::PaidNonTreasury, "PLATI_NON_TREZOR")]
    fn test_display(#[case] metric: Metric, #[case] want: &str) {
        assert_eq!(metric.to_string(), want);
        assert_eq!(want.parse::<Metric>().unwrap(), metric);
    }

    #[test]
    fn test_filenames_distinct() {
        let mut names = <Metric as strum::IntoEnumIterator>::iter()
            .map(Metric::filename)
            .collect::<Vec<_>>();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
