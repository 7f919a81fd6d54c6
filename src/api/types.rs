use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Node-link graph snapshot as serialized by the backend.
///
/// Node and link payloads stay opaque JSON here; the render layer extracts
/// what it understands and ignores the rest. All fields tolerate absence so
/// a partial payload degrades instead of failing to decode.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphConfig {
	#[serde(default)]
	pub directed: bool,
	#[serde(default)]
	pub multigraph: bool,
	/// Graph-level attributes, unused by the client.
	#[serde(default)]
	pub graph: Value,
	#[serde(default)]
	pub nodes: Vec<ConfigNode>,
	#[serde(default)]
	pub links: Vec<ConfigLink>,
}

/// One graph node: a stable id plus its opaque payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConfigNode {
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub data: Value,
}

/// One directed link between node ids.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConfigLink {
	#[serde(default)]
	pub source: String,
	#[serde(default)]
	pub target: String,
	#[serde(default)]
	pub data: Value,
}

/// A landscape currently merged into the backend graph.
#[derive(Clone, Debug, Deserialize)]
pub struct LoadedLandscape {
	pub name: String,
	/// Where the landscape came from, `"file"` or `"db"`.
	pub source: String,
}

/// Response of the uploaded-dataset endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadedDataset {
	/// Backend-assigned dataset identifier.
	#[serde(rename = "datasetId")]
	pub dataset_id: String,
	/// Snapshot including the new dataset's nodes and links.
	#[serde(default)]
	pub graph: GraphConfig,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn decodes_a_node_link_snapshot() {
		let config: GraphConfig = serde_json::from_str(
			r#"{
				"directed": true,
				"multigraph": true,
				"graph": {},
				"nodes": [
					{"id": "cellline", "data": {"type": "entity"}},
					{"id": "Cellline", "data": {"type": "idtype"}}
				],
				"links": [
					{"source": "cellline", "target": "Cellline", "data": {"type": "idtype-mapping"}}
				]
			}"#,
		)
		.unwrap();

		assert!(config.directed);
		assert_eq!(config.nodes.len(), 2);
		assert_eq!(config.links.len(), 1);
		assert_eq!(config.links[0].source, "cellline");
		assert_eq!(config.links[0].data["type"], "idtype-mapping");
	}

	#[test]
	fn missing_fields_fall_back_to_defaults() {
		let config: GraphConfig = serde_json::from_str(r#"{"nodes": [{"id": "a"}]}"#).unwrap();
		assert!(!config.directed);
		assert!(config.links.is_empty());
		assert!(config.nodes[0].data.is_null());

		let link: ConfigLink = serde_json::from_str("{}").unwrap();
		assert_eq!(link.source, "");
		assert_eq!(link.target, "");
	}

	#[test]
	fn decodes_an_uploaded_dataset_response() {
		let uploaded: UploadedDataset = serde_json::from_str(
			r#"{"datasetId": "upload_1", "graph": {"nodes": [], "links": []}}"#,
		)
		.unwrap();
		assert_eq!(uploaded.dataset_id, "upload_1");
		assert!(uploaded.graph.nodes.is_empty());
	}
}
