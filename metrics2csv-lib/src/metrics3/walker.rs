use super::record::{Attributes, MetricInfo, MetricRecord, StatsBlock, ValueEntry};
use roxmltree::{Document, Node};

const METRIC_TAG: &str = "Metric";
const VALUES_TAG: &str = "Values";
const VALUE_TAG: &str = "Value";

/// A container of `<Value>` elements belonging to one metric.
#[derive(Debug, Clone, Copy)]
enum ValueGroup<'a, 'input> {
    /// A `<Values>` element. Carries aggregate statistics and owns every `<Value>` below it.
    Aggregate(Node<'a, 'input>),

    /// Any other element with `<Value>` children. Carries no statistics and owns only its direct `<Value>` children.
    Bare(Node<'a, 'input>),
}

impl ValueGroup<'_, '_> {
    fn per(&self) -> String {
        match self {
            Self::Aggregate(node) | Self::Bare(node) => Attributes::of(*node).get("per"),
        }
    }

    fn stats(&self) -> StatsBlock {
        match self {
            Self::Aggregate(node) => StatsBlock::from_attributes(&Attributes::of(*node)),
            Self::Bare(_) => StatsBlock::default(),
        }
    }

    fn values(&self) -> Vec<ValueEntry> {
        let entry = |node: Node<'_, '_>| ValueEntry::from_attributes(&Attributes::of(node));

        match self {
            Self::Aggregate(node) => node.descendants().filter(is_value).map(entry).collect(),
            Self::Bare(node) => node.children().filter(is_value).map(entry).collect(),
        }
    }
}

fn is_value(node: &Node<'_, '_>) -> bool {
    node.is_element() && node.has_tag_name(VALUE_TAG)
}

/// Collects the value groups at or below `node`, in document order.
fn collect_groups<'a, 'input>(node: Node<'a, 'input>, groups: &mut Vec<ValueGroup<'a, 'input>>) {
    if node.has_tag_name(VALUES_TAG) {
        groups.push(ValueGroup::Aggregate(node));
        return;
    }

    if node.children().any(|child| is_value(&child)) {
        groups.push(ValueGroup::Bare(node));
    }

    for child in node.children().filter(|child| child.is_element() && !is_value(child)) {
        collect_groups(child, groups);
    }
}

fn records_for_metric(scope: &str, metric: Node<'_, '_>) -> Vec<MetricRecord> {
    let info = MetricInfo::from_attributes(&Attributes::of(metric));

    let mut groups = Vec::new();
    collect_groups(metric, &mut groups);

    if groups.is_empty() {
        log::debug!("Metric '{}' has no values", info.id);
    }

    groups
        .iter()
        .map(|group| MetricRecord::new(scope, info.clone(), &group.per(), group.stats(), group.values()))
        .collect()
}

/// Flattens a parsed Metrics3 document into one record per (metric, value group) pair.
///
/// Only `<Metric>` elements that are direct children of the root are considered. Records come
/// out in document order, and the root's `scope` attribute is stamped on every one of them.
#[must_use]
pub fn flatten(doc: &Document<'_>) -> Vec<MetricRecord> {
    let root = doc.root_element();
    let scope = Attributes::of(root).get("scope");

    root.children()
        .filter(|node| node.is_element() && node.has_tag_name(METRIC_TAG))
        .flat_map(|metric| records_for_metric(&scope, metric))
        .collect()
}
