use proptest::prelude::*;

use violations_gate::violations::ViolationsContainer;
use violations_gate::{evaluate, Penalty, PlainPathRenderer};

fn container_from(records: &[(u64, u64)]) -> ViolationsContainer {
    let mut container = ViolationsContainer::new();
    for (i, (errors, warnings)) in records.iter().enumerate() {
        container
            .maybe_create(&format!("tool{i}"))
            .accumulate(*errors, *warnings, format!("reports/tool{i}.xml"));
    }
    container
}

fn records() -> impl Strategy<Value = Vec<(u64, u64)>> {
    prop::collection::vec((0u64..50, 0u64..50), 0..6)
}

proptest! {
    #[test]
    fn totals_within_maxima_pass(records in records(), slack_e in 0i64..20, slack_w in 0i64..20) {
        let total_e: u64 = records.iter().map(|r| r.0).sum();
        let total_w: u64 = records.iter().map(|r| r.1).sum();
        let penalty = Penalty::new(total_e as i64 + slack_e, total_w as i64 + slack_w);

        let evaluation = evaluate(&container_from(&records), &penalty, &PlainPathRenderer);
        prop_assert!(evaluation.passed());
    }

    #[test]
    fn totals_over_maxima_fail_with_overage(
        records in records(),
        max_e in 0i64..100,
        max_w in 0i64..100,
    ) {
        let total_e: u64 = records.iter().map(|r| r.0).sum();
        let total_w: u64 = records.iter().map(|r| r.1).sum();
        let over_e = total_e.saturating_sub(max_e as u64);
        let over_w = total_w.saturating_sub(max_w as u64);

        let penalty = Penalty::new(max_e, max_w);
        let evaluation = evaluate(&container_from(&records), &penalty, &PlainPathRenderer);

        if over_e > 0 || over_w > 0 {
            prop_assert!(!evaluation.passed());
            let expected =
                format!("Violations limit exceeded by {over_e} errors, {over_w} warnings.");
            prop_assert!(evaluation.message().starts_with(&expected));
        } else {
            prop_assert!(evaluation.passed());
        }
    }

    #[test]
    fn negative_maxima_match_zero(
        records in records(),
        neg_e in -1000i64..0,
        neg_w in -1000i64..0,
    ) {
        let container = container_from(&records);
        let negative = evaluate(&container, &Penalty::new(neg_e, neg_w), &PlainPathRenderer);
        let zero = evaluate(&container, &Penalty::new(0, 0), &PlainPathRenderer);
        prop_assert_eq!(negative, zero);
    }

    #[test]
    fn clean_tools_never_appear(records in records()) {
        let container = container_from(&records);
        let unlimited = Penalty::new(i64::MAX, i64::MAX);
        let evaluation = evaluate(&container, &unlimited, &PlainPathRenderer);

        for (i, (errors, warnings)) in records.iter().enumerate() {
            let line = format!("> tool{i} rule violations");
            prop_assert_eq!(evaluation.message().contains(&line), *errors > 0 || *warnings > 0);
        }
    }

    #[test]
    fn accumulate_is_additive(
        e1 in 0u64..1000,
        w1 in 0u64..1000,
        e2 in 0u64..1000,
        w2 in 0u64..1000,
    ) {
        let mut container = ViolationsContainer::new();
        let record = container.maybe_create("checkstyle");
        record.accumulate(e1, w1, "first.xml");
        record.accumulate(e2, w2, "second.xml");

        prop_assert_eq!(record.errors, e1 + e2);
        prop_assert_eq!(record.warnings, w1 + w2);
        prop_assert_eq!(record.reports.len(), 2);
        prop_assert!(record.reports[0].ends_with("first.xml"));
    }

    #[test]
    fn evaluation_is_idempotent(records in records(), max_e in -5i64..50, max_w in -5i64..50) {
        let container = container_from(&records);
        let penalty = Penalty::new(max_e, max_w);
        let first = evaluate(&container, &penalty, &PlainPathRenderer);
        let second = evaluate(&container, &penalty, &PlainPathRenderer);
        prop_assert_eq!(first, second);
    }
}
