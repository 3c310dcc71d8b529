use crate::Result;
use crate::metrics3::{MetricRecord, ValueEntry};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use ohno::IntoAppError;
use std::io::Write;

/// Column names of the CSV header, in output order.
pub const COLUMNS: [&str; 18] = [
    "scope",
    "metric_id",
    "metric_code",
    "metric_desc",
    "metric_max",
    "metric_min",
    "metric_hint",
    "values_per",
    "values_avg",
    "values_stddev",
    "values_max",
    "values_total",
    "values_max_in_range",
    "value_name",
    "value_source",
    "value_package",
    "value",
    "value_in_range",
];

fn row<'a>(record: &'a MetricRecord, value: &'a ValueEntry) -> [&'a str; COLUMNS.len()] {
    let stats = &record.stats;

    [
        record.scope.as_str(),
        record.id.as_str(),
        record.code.as_str(),
        record.description.as_str(),
        record.max.as_str(),
        record.min.as_str(),
        record.hint.as_str(),
        stats.per.as_str(),
        stats.avg.as_str(),
        stats.stddev.as_str(),
        stats.max.as_str(),
        stats.total.as_str(),
        stats.max_in_range.as_str(),
        value.name.as_str(),
        value.source.as_str(),
        value.package.as_str(),
        value.value.as_str(),
        value.in_range.as_str(),
    ]
}

/// Writes the header followed by one row per (record, value) pair.
///
/// Fields are written verbatim: no quoting, no escaping. Records reach this point with every `;`
/// already stripped, so the delimiter cannot appear inside a field.
pub fn generate<W: Write>(records: &[MetricRecord], writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(COLUMNS).into_app_err("writing CSV header")?;

    for record in records {
        for value in &record.values {
            csv_writer.write_record(row(record, value)).into_app_err("writing CSV row")?;
        }
    }

    csv_writer.flush().into_app_err("flushing CSV output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics3::{MetricInfo, StatsBlock};

    fn value(name: &str) -> ValueEntry {
        ValueEntry {
            name: name.to_owned(),
            source: format!("{name}.java"),
            package: "p".to_owned(),
            value: "1".to_owned(),
            in_range: "true".to_owned(),
        }
    }

    fn record(id: &str, values: Vec<ValueEntry>) -> MetricRecord {
        let info = MetricInfo {
            id: id.to_owned(),
            description: format!("{id} description"),
            ..MetricInfo::default()
        };
        let stats = StatsBlock {
            per: "class".to_owned(),
            avg: "2.5".to_owned(),
            ..StatsBlock::default()
        };
        MetricRecord::new("pkg", info, "class", stats, values)
    }

    fn render(records: &[MetricRecord]) -> String {
        let mut output = Vec::new();
        generate(records, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_header_snapshot() {
        insta::assert_snapshot!(
            COLUMNS.join(";"),
            @"scope;metric_id;metric_code;metric_desc;metric_max;metric_min;metric_hint;values_per;values_avg;values_stddev;values_max;values_total;values_max_in_range;value_name;value_source;value_package;value;value_in_range"
        );
    }

    #[test]
    fn test_generate_empty_records() {
        let output = render(&[]);
        assert_eq!(output, format!("{}\n", COLUMNS.join(";")));
    }

    #[test]
    fn test_generate_one_row_per_value() {
        let output = render(&[record("WMC", vec![value("Foo"), value("Bar")])]);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "pkg;WMC;WMC_class;WMC description;;;;class;2.5;;;;;Foo;Foo.java;p;1;true");
        assert_eq!(lines[2], "pkg;WMC;WMC_class;WMC description;;;;class;2.5;;;;;Bar;Bar.java;p;1;true");
    }

    #[test]
    fn test_record_without_values_emits_no_rows() {
        let output = render(&[record("EMPTY", Vec::new()), record("ONE", vec![value("A")])]);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("pkg;ONE;"));
    }

    #[test]
    fn test_every_row_has_header_width() {
        let output = render(&[record("A", vec![value("x"), value("y")]), record("B", vec![value("z")])]);

        for line in output.lines() {
            assert_eq!(line.split(';').count(), COLUMNS.len(), "bad row: {line}");
        }
    }

    #[test]
    fn test_fields_are_not_quoted() {
        let mut entry = value("has \"quotes\", commas");
        entry.source = "line\rbreak".to_owned();
        let output = render(&[record("Q", vec![entry])]);

        assert!(output.contains(";has \"quotes\", commas;line\rbreak;"));
    }

    #[test]
    fn test_lines_end_with_newline_only() {
        let output = render(&[record("A", vec![value("x")])]);
        assert!(output.ends_with("true\n"));
        assert!(!output.contains("\r\n"));
    }
}
