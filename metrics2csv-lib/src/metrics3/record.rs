use roxmltree::Node;

/// Attribute access for a single element, where an absent attribute reads as an empty string.
#[derive(Debug, Clone, Copy)]
pub struct Attributes<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> Attributes<'a, 'input> {
    #[must_use]
    pub const fn of(node: Node<'a, 'input>) -> Self {
        Self { node }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> String {
        self.node.attribute(name).unwrap_or_default().to_owned()
    }
}

/// Aggregate statistics carried by a `<Values>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsBlock {
    pub per: String,
    pub avg: String,
    pub stddev: String,
    pub max: String,
    pub total: String,
    pub max_in_range: String,
}

impl StatsBlock {
    #[must_use]
    pub fn from_attributes(attrs: &Attributes<'_, '_>) -> Self {
        Self {
            per: attrs.get("per"),
            avg: attrs.get("avg"),
            stddev: attrs.get("stddev"),
            max: attrs.get("max"),
            total: attrs.get("total"),
            max_in_range: attrs.get("maxinrange"),
        }
    }
}

/// One measurement of a metric for a single entity, read from a `<Value>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueEntry {
    pub name: String,
    pub source: String,
    pub package: String,
    pub value: String,
    pub in_range: String,
}

impl ValueEntry {
    #[must_use]
    pub fn from_attributes(attrs: &Attributes<'_, '_>) -> Self {
        Self {
            name: attrs.get("name"),
            source: attrs.get("source"),
            package: attrs.get("package"),
            value: attrs.get("value"),
            in_range: attrs.get("inrange"),
        }
    }
}

/// The descriptive attributes of a `<Metric>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricInfo {
    pub id: String,
    pub description: String,
    pub max: String,
    pub min: String,
    pub hint: String,
}

impl MetricInfo {
    #[must_use]
    pub fn from_attributes(attrs: &Attributes<'_, '_>) -> Self {
        Self {
            id: attrs.get("id"),
            description: attrs.get("description"),
            max: attrs.get("max"),
            min: attrs.get("min"),
            hint: attrs.get("hint"),
        }
    }
}

/// A metric paired with one of its value groups, ready to be rendered as rows.
///
/// Each record renders as one row per entry in `values`, so a record without
/// values contributes nothing to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricRecord {
    pub scope: String,
    pub id: String,
    pub code: String,
    pub description: String,
    pub max: String,
    pub min: String,
    pub hint: String,
    pub stats: StatsBlock,
    pub values: Vec<ValueEntry>,
}

impl MetricRecord {
    /// Builds a record, deriving `code` as `<id>_<per>` from the group's `per` attribute.
    #[must_use]
    pub fn new(scope: &str, info: MetricInfo, per: &str, stats: StatsBlock, values: Vec<ValueEntry>) -> Self {
        let code = format!("{}_{per}", info.id);

        Self {
            scope: scope.to_owned(),
            id: info.id,
            code,
            description: info.description,
            max: info.max,
            min: info.min,
            hint: info.hint,
            stats,
            values,
        }
    }

    /// Number of rows this record renders to.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.values.len()
    }
}
