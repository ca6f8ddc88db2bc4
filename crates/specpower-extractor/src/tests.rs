//! End-to-end extraction tests over fixture reports

#[cfg(test)]
mod tests {
    use crate::{standard_schema, FieldRule, FieldSpec, RecordBuilder, Schema};
    use specpower_domain::field::{FORM_FACTOR, MAX_POWER, SERVER_NAME};
    use specpower_domain::{
        ExtractedValue, FieldKind, FieldValue, LoadPoint, MissingReason, RawReport,
    };

    const REPORT_2008: &str = include_str!("../fixtures/power_ssj2008-20080612-00063.txt");
    const REPORT_2009: &str = include_str!("../fixtures/power_ssj2008-20090811-00180.txt");
    const REPORT_2007: &str = include_str!("../fixtures/power_ssj2007-20071211-00012.txt");

    fn build(source: &str, text: &str) -> specpower_domain::Record {
        RecordBuilder::new(standard_schema()).build(&RawReport::new(source, text))
    }

    #[test]
    fn test_full_extraction_2008_report() {
        let record = build("power_ssj2008-20080612-00063.txt", REPORT_2008);

        assert_eq!(
            record.server_name(),
            Some("Hewlett-Packard Company ProLiant DL120 G5 (2.83 GHz, Intel Xeon processor X3360)")
        );
        assert_eq!(record.publication_year(), Some(2008));
        assert_eq!(record.max_power_w(), Some(136.0));
        assert_eq!(record.idle_power_w(), Some(69.5));
        assert_eq!(record.cpu_frequency_mhz(), Some(2833));
        assert_eq!(record.cores_enabled(), Some(4));
        // This revision has no form factor line
        assert_eq!(record.get(FORM_FACTOR), Some(&ExtractedValue::not_found()));
    }

    #[test]
    fn test_full_extraction_2009_report() {
        let record = build("power_ssj2008-20090811-00180.txt", REPORT_2009);

        assert_eq!(
            record.server_name(),
            Some("Example Systems Inc. PowerServer 1100 (AMD Opteron 2419 EE)")
        );
        assert_eq!(record.publication_year(), Some(2009));
        assert_eq!(record.form_factor(), Some(1));
        assert_eq!(record.max_power_w(), Some(178.0));
        assert_eq!(record.idle_power_w(), Some(74.6));
        assert_eq!(record.cpu_frequency_mhz(), Some(1800));
        assert_eq!(record.cores_enabled(), Some(12));
        assert!(record.is_complete());
    }

    #[test]
    fn test_load_points_2008_report() {
        let record = build("a.txt", REPORT_2008);
        let expected = [76.2, 83.1, 90.7, 98.0, 105.2, 111.9, 118.4, 124.5, 130.1];

        for (point, watts) in LoadPoint::all().zip(expected) {
            assert_eq!(record.load_point_power_w(point), Some(watts), "load point {}", point);
        }
    }

    #[test]
    fn test_early_layout_report() {
        let record = build("power_ssj2007-20071211-00012.txt", REPORT_2007);

        assert_eq!(
            record.server_name(),
            Some("Example Systems Inc. TowerServer 300 (Intel Xeon 5160)")
        );
        assert_eq!(record.publication_year(), Some(2007));
        assert_eq!(record.max_power_w(), Some(1312.0));
        assert_eq!(record.idle_power_w(), Some(1034.2));
        assert_eq!(record.cpu_frequency_mhz(), Some(3000));
        assert_eq!(record.cores_enabled(), Some(2));
        assert_eq!(
            record.get(FORM_FACTOR).and_then(|v| v.missing_reason()),
            Some(&MissingReason::Malformed("RACK".to_string()))
        );
    }

    #[test]
    fn test_unreadable_load_point_is_isolated() {
        let record = build("a.txt", REPORT_2007);
        let fifty = LoadPoint::new(50).unwrap();

        assert_eq!(
            record.get(fifty.field_name()),
            Some(&ExtractedValue::malformed("n/a"))
        );
        assert_eq!(record.load_point_power_w(LoadPoint::new(40).unwrap()), Some(1101.5));
        assert_eq!(record.load_point_power_w(LoadPoint::new(60).unwrap()), Some(1163.9));
    }

    #[test]
    fn test_form_factor_scenarios() {
        assert_eq!(build("a", "Form Factor: 1U\n").form_factor(), Some(1));
        let rack = build("b", "Form Factor: RACK\n");
        assert_eq!(rack.form_factor(), None);
        assert!(rack.get(FORM_FACTOR).unwrap().is_missing());
    }

    #[test]
    fn test_max_power_row_scenario() {
        let record = build("a", "|   100%   |   99.9%   |   100,200 | 136.0 |\n");
        assert_eq!(record.max_power_w(), Some(136.0));
    }

    #[test]
    fn test_prose_mention_does_not_hide_table_row() {
        let text = format!("Idle and 10% | see below |\n{}", REPORT_2008);
        let record = build("a", &text);
        assert_eq!(record.load_point_power_w(LoadPoint::new(10).unwrap()), Some(76.2));
    }

    #[test]
    fn test_overwide_power_cell_is_malformed() {
        let record = build("a", "| 100% | 99.9% | 100,200 |  12,345,678.9 |\n");
        assert_eq!(record.max_power_w(), None);
        assert_eq!(
            record.get(MAX_POWER),
            Some(&ExtractedValue::malformed("12,345,678.9"))
        );
    }

    #[test]
    fn test_cores_scenario() {
        let record = build("a", "CPU(s) Enabled: 4 cores, 1 chip, 4 cores/chip\n");
        assert_eq!(record.cores_enabled(), Some(4));
    }

    #[test]
    fn test_garbage_report_yields_all_missing() {
        let record = build("junk.bin", "\u{0}\u{1} not a report at all");
        assert_eq!(record.len(), standard_schema().len());
        assert_eq!(record.missing_fields().count(), record.len());
    }

    #[test]
    fn test_name_markers_both_present_prefers_headline() {
        let text = format!("Set Description: Old Label\n{}", REPORT_2009);
        let record = build("a", &text);
        assert_eq!(
            record.get(SERVER_NAME),
            Some(&ExtractedValue::Present(FieldValue::Text(
                "Example Systems Inc. PowerServer 1100 (AMD Opteron 2419 EE)".into()
            )))
        );
    }

    #[test]
    fn test_custom_schema_with_enumerated_field() {
        let provisioning = FieldSpec::new(
            "power_provisioning",
            FieldKind::Enumerated,
            vec![FieldRule::enumerated(
                r"Power Provisioning:[ \t]*(?P<value>[^\n|]*)",
                ["Line-powered", "Battery-powered"],
            )
            .unwrap()],
        )
        .unwrap();
        let schema = Schema::new(vec![provisioning]).unwrap();

        let record = RecordBuilder::new(&schema).build(&RawReport::new("a", REPORT_2008));
        assert_eq!(record.len(), 1);
        assert_eq!(record.text("power_provisioning"), Some("Line-powered"));
    }

    #[test]
    fn test_builder_emits_logs_without_subscriber_panics() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
        let record = build("a", "Form Factor: RACK\n");
        assert!(record.form_factor().is_none());
    }
}

#[cfg(test)]
mod proptests {
    use crate::RecordBuilder;
    use proptest::prelude::*;
    use specpower_domain::RawReport;

    fn with_thousands(int_part: u32) -> String {
        let digits = int_part.to_string();
        let mut out = String::new();
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    proptest! {
        /// Property: thousands separators never change the parsed power value
        #[test]
        fn test_thousands_separators_ignored(int_part in 0u32..100_000, frac in 0u32..10) {
            let cell = format!("{}.{}", with_thousands(int_part), frac);
            let text = format!("|   100%   |   99.9%   |   100,200 | {} |\n", cell);
            let record = RecordBuilder::default().build(&RawReport::new("p", text));

            let expected: f64 = format!("{}.{}", int_part, frac).parse().unwrap();
            prop_assert_eq!(record.max_power_w(), Some(expected));
        }

        /// Property: building twice from the same content gives the same record
        #[test]
        fn test_extraction_is_idempotent(noise in "[ -~\n]{0,200}", cores in 1u32..256) {
            let text = format!("{}\nCPU(s) Enabled: {} cores, 1 chip\n{}", noise, cores, noise);
            let report = RawReport::new("p", text);
            let builder = RecordBuilder::default();
            prop_assert_eq!(builder.build(&report), builder.build(&report));
        }
    }
}
