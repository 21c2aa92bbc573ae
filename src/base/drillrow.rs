use crate::base;

/// One merged row of a drill level. `unpaid` and the execution percentage are
/// always derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillRow {
    pub id: String,
    pub name: String,
    pub budget: base::Amount,
    pub committed: base::Amount,
    pub paid: base::Amount,
}

impl DrillRow {
    /// Commitments not yet paid. Negative when payments exceed commitments.
    pub fn unpaid(&self) -> base::Amount {
        self.committed - self.paid
    }

    /// Whether the row carries the outstanding-commitments alert.
    pub fn has_unpaid_alert(&self) -> bool {
        self.unpaid().is_positive()
    }

    /// `paid / budget` as a rounded percentage, 0 when there is no budget.
    pub fn execution_percent(&self) -> i64 {
        if !self.budget.is_positive() {
            return 0;
        }
        // Halves round up, matching the dashboard's display.
        (self.paid.ratio(self.budget) * 100.0 + 0.5).floor() as i64
    }

    /// Joins three bucket sets keyed by the same code space into rows, sorted
    /// by budget descending. Ties keep first-seen order.
    pub fn build(
        budget: &base::Buckets,
        committed: &base::Buckets,
        paid: &base::Buckets,
    ) -> Vec<Self> {
        let mut codes = base::Aggregate::<&str, ()>::default();
        for code in budget.keys().chain(committed.keys()).chain(paid.keys()) {
            codes.entry_or_insert_with(code.as_str(), || ());
        }

        let amount = |buckets: &base::Buckets, code: &str| {
            buckets.get(code).map(|b| b.amount).unwrap_or_default()
        };
        let name = |buckets: &base::Buckets, code: &str| {
            buckets.get(code).and_then(|b| b.name.clone())
        };

        let mut rows = codes
            .keys()
            .map(|&code| Self {
                id: code.to_string(),
                name: name(budget, code)
                    .or_else(|| name(committed, code))
                    .or_else(|| name(paid, code))
                    .unwrap_or_else(|| code.to_string()),
                budget: amount(budget, code),
                committed: amount(committed, code),
                paid: amount(paid, code),
            })
            .collect::<Vec<_>>();
        rows.sort_by(|a, b| b.budget.cmp(&a.budget));
        rows
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn buckets(entries: &[(&str, Option<&str>, i64)]) -> base::Buckets {
        let mut b = base::Buckets::default();
        for &(code, name, amount) in entries {
            b.entry_or_insert_with(code.to_string(), || base::Bucket {
                name: name.map(str::to_string),
                amount: base::Amount::ZERO,
            })
            .amount += base::Amount(amount);
        }
        b
    }

    fn row(id: &str, budget: i64, committed: i64, paid: i64) -> DrillRow {
        DrillRow {
            id: id.to_string(),
            name: id.to_string(),
            budget: base::Amount(budget),
            committed: base::Amount(committed),
            paid: base::Amount(paid),
        }
    }

    #[test]
    fn test_build_merges_and_sorts() {
        let b = buckets(&[("a", None, 10), ("b", None, 30), ("c", None, 10)]);
        let c = buckets(&[("d", Some("Dee"), 5), ("a", Some("Ay"), 7)]);
        let p = buckets(&[("e", Some("Ee"), 1), ("d", Some("Other"), 2)]);
        let got = DrillRow::build(&b, &c, &p);
        let got = got
            .iter()
            .map(|r| (r.id.as_str(), r.name.as_str(), r.budget.0, r.committed.0, r.paid.0))
            .collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![
                ("b", "b", 30, 0, 0),
                ("a", "Ay", 10, 7, 0),
                ("c", "c", 10, 0, 0),
                ("d", "Dee", 0, 5, 2),
                ("e", "Ee", 0, 0, 1),
            ]
        );
    }

    #[test]
    fn test_build_empty() {
        let empty = base::Buckets::default();
        assert!(DrillRow::build(&empty, &empty, &empty).is_empty());
    }

    #[rstest]
    #[case(row("x", 0, 0, 0), 0)]
    #[case(row("x", 0, 10, 999), 0)]
    #[case(row("x", -100, 10, 50), 0)]
    #[case(row("x", 100, 80, 50), 50)]
    #[case(row("x", 200, 0, 1), 1)]
    #[case(row("x", 300, 0, 1), 0)]
    #[case(row("x", 300, 0, 200), 67)]
    #[case(row("x", 100, 0, 250), 250)]
    fn test_execution_percent(#[case] row: DrillRow, #[case] want: i64) {
        assert_eq!(row.execution_percent(), want);
    }

    #[rstest]
    #[case(row("x", 0, 80, 50), 30, true)]
    #[case(row("x", 0, 50, 50), 0, false)]
    #[case(row("x", 0, 50, 80), -30, false)]
    fn test_unpaid(#[case] row: DrillRow, #[case] want: i64, #[case] alert: bool) {
        assert_eq!(row.unpaid(), base::Amount(want));
        assert_eq!(row.has_unpaid_alert(), alert);
    }
}
