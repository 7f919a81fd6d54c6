use serde_json::Value;

use crate::api::GraphConfig;

/// Kind discriminator carried in a node's `data.type`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NodeKind {
	/// A dataset entity (table-like collection of rows).
	Entity,
	/// An id-type shared between entity columns.
	IdType,
	/// An uploaded dataset.
	Upload,
	/// Anything without a recognized discriminator.
	#[default]
	Other,
}

impl NodeKind {
	fn parse(data: &Value) -> Self {
		match data.get("type").and_then(Value::as_str) {
			Some("entity") => Self::Entity,
			Some("idtype") => Self::IdType,
			Some("upload") => Self::Upload,
			_ => Self::Other,
		}
	}
}

/// Relation kind carried in a link's `data.type`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LinkKind {
	/// Entity column to its id-type.
	IdtypeMapping,
	/// 1-1 relation between entities.
	OneToOne,
	/// 1-n relation between entities.
	OneToN,
	/// Reverse direction of a bidirectional 1-n relation.
	NToOne,
	/// Drill-down relation between entities.
	Drilldown,
	/// One hop of a multi-step drill-down mapping.
	DrilldownFragment,
	/// Anything without a recognized discriminator.
	#[default]
	Other,
}

impl LinkKind {
	fn parse(data: &Value) -> Self {
		match data.get("type").and_then(Value::as_str) {
			Some("idtype-mapping") => Self::IdtypeMapping,
			Some("1-1") => Self::OneToOne,
			Some("1-n") => Self::OneToN,
			Some("n-1") => Self::NToOne,
			Some("ordino-drilldown") => Self::Drilldown,
			Some("ordino-drilldown-fragment") => Self::DrilldownFragment,
			_ => Self::Other,
		}
	}

	/// The wire discriminator, used when disambiguating parallel links.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::IdtypeMapping => "idtype-mapping",
			Self::OneToOne => "1-1",
			Self::OneToN => "1-n",
			Self::NToOne => "n-1",
			Self::Drilldown => "ordino-drilldown",
			Self::DrilldownFragment => "ordino-drilldown-fragment",
			Self::Other => "",
		}
	}
}

/// Link metadata relevant for rendering and disambiguation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkMeta {
	/// Relation kind.
	pub kind: LinkKind,
	/// A 1-1 relation resolved through an id-type rather than directly.
	pub via_idtype: bool,
	/// Derived links are drawn dashed.
	pub is_derived: bool,
	/// Workbench view names attached to drill-down links.
	pub views: Vec<String>,
}

impl LinkMeta {
	fn parse(data: &Value) -> Self {
		let views = data
			.pointer("/workbench/views")
			.and_then(Value::as_array)
			.map(|views| {
				views
					.iter()
					.filter_map(|view| view.get("name").and_then(Value::as_str))
					.map(str::to_owned)
					.collect()
			})
			.unwrap_or_default();

		Self {
			kind: LinkKind::parse(data),
			via_idtype: truthy(data.get("via_idtype")),
			is_derived: truthy(data.get("is_derived")),
			views,
		}
	}
}

// The backend sets these fields to strings, booleans or leaves them out
// entirely depending on the relation kind.
fn truthy(value: Option<&Value>) -> bool {
	match value {
		None | Some(Value::Null) => false,
		Some(Value::Bool(b)) => *b,
		Some(Value::String(s)) => !s.is_empty(),
		Some(_) => true,
	}
}

/// A render-model node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
	pub id: String,
	pub kind: NodeKind,
}

/// A directed render-model link between two node ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
	pub meta: LinkMeta,
}

/// Graph data consumed by the canvas component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Convert a backend snapshot into the render model, preserving the
	/// payload's node and link order. Total: malformed payloads degrade to
	/// catch-all kinds and empty metadata.
	pub fn from_config(config: &GraphConfig) -> Self {
		let nodes = config
			.nodes
			.iter()
			.map(|node| GraphNode {
				id: node.id.clone(),
				kind: NodeKind::parse(&node.data),
			})
			.collect();
		let links = config
			.links
			.iter()
			.map(|link| GraphLink {
				source: link.source.clone(),
				target: link.target.clone(),
				meta: LinkMeta::parse(&link.data),
			})
			.collect();

		Self { nodes, links }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn config(json: &str) -> GraphConfig {
		serde_json::from_str(json).unwrap()
	}

	#[test]
	fn parses_node_and_link_kinds() {
		let data = GraphData::from_config(&config(
			r#"{
				"nodes": [
					{"id": "cellline", "data": {"type": "entity"}},
					{"id": "Cellline", "data": {"type": "idtype"}},
					{"id": "upload_1", "data": {"type": "upload"}},
					{"id": "mystery", "data": {"type": "workbench"}}
				],
				"links": [
					{"source": "cellline", "target": "Cellline", "data": {"type": "idtype-mapping"}},
					{"source": "cellline", "target": "tissue", "data": {"type": "1-n"}},
					{"source": "tissue", "target": "cellline", "data": {"type": "n-1"}}
				]
			}"#,
		));

		let kinds: Vec<NodeKind> = data.nodes.iter().map(|n| n.kind).collect();
		assert_eq!(
			kinds,
			vec![
				NodeKind::Entity,
				NodeKind::IdType,
				NodeKind::Upload,
				NodeKind::Other
			]
		);
		assert_eq!(data.links[0].meta.kind, LinkKind::IdtypeMapping);
		assert_eq!(data.links[1].meta.kind, LinkKind::OneToN);
		assert_eq!(data.links[2].meta.kind, LinkKind::NToOne);
	}

	#[test]
	fn extracts_drilldown_views_and_flags() {
		let data = GraphData::from_config(&config(
			r#"{
				"nodes": [],
				"links": [{
					"source": "a",
					"target": "b",
					"data": {
						"type": "ordino-drilldown",
						"via_idtype": "Cellline",
						"is_derived": true,
						"workbench": {"views": [{"name": "celllines"}, {"name": "tissues"}]}
					}
				}]
			}"#,
		));

		let meta = &data.links[0].meta;
		assert_eq!(meta.kind, LinkKind::Drilldown);
		assert!(meta.via_idtype);
		assert!(meta.is_derived);
		assert_eq!(meta.views, vec!["celllines", "tissues"]);
	}

	#[test]
	fn malformed_payloads_degrade_to_defaults() {
		let data = GraphData::from_config(&config(
			r#"{
				"nodes": [{"id": "bare"}],
				"links": [{"source": "bare", "target": "bare"}, {}]
			}"#,
		));

		assert_eq!(data.nodes[0].kind, NodeKind::Other);
		assert_eq!(data.links[0].meta, LinkMeta::default());
		assert_eq!(data.links[1].source, "");
		assert_eq!(data.links[1].target, "");
	}

	#[test]
	fn link_order_is_preserved() {
		let json = r#"{
			"nodes": [],
			"links": [
				{"source": "a", "target": "b", "data": {"type": "1-1"}},
				{"source": "a", "target": "b", "data": {"type": "1-n"}},
				{"source": "b", "target": "a", "data": {"type": "n-1"}}
			]
		}"#;
		let data = GraphData::from_config(&config(json));
		let kinds: Vec<LinkKind> = data.links.iter().map(|l| l.meta.kind).collect();
		assert_eq!(
			kinds,
			vec![LinkKind::OneToOne, LinkKind::OneToN, LinkKind::NToOne]
		);
	}
}
