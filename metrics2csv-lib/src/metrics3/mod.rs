//! Reading Metrics3 XML reports
//!
//! A Metrics3 report is an XML document whose root carries a `scope` attribute and
//! holds `<Metric>` elements. Each metric owns one or more value groups, and each
//! group holds `<Value>` elements describing one measurement per entity.
//!
//! # Implementation Model
//!
//! Reading a report is a straight pipeline over fully buffered text:
//!
//! 1. **Sanitize**: strip default namespace declarations, every `;`, and a couple
//!    of known-malformed entity fragments ([`sanitize`])
//! 2. **Parse**: build a read-only tree with `roxmltree`
//! 3. **Flatten**: walk the tree into [`MetricRecord`]s, one per (metric, value group)
//!    pair ([`flatten`])
//!
//! Two value-group shapes are recognized. A `<Values>` element is an aggregate group:
//! it carries summary statistics and owns every `<Value>` below it. Any other element
//! with direct `<Value>` children is a bare group with no statistics.
//!
//! Missing attributes read as empty strings throughout. Malformed XML is an error;
//! there is no recovery.

mod parser;
mod record;
mod sanitize;
mod walker;

pub use parser::parse_file;
pub use record::{Attributes, MetricInfo, MetricRecord, StatsBlock, ValueEntry};
pub use sanitize::sanitize;
pub use walker::flatten;
