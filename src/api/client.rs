use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::Result;
use super::types::{GraphConfig, LoadedLandscape, UploadedDataset};

/// Backend root used when nothing else is configured (the dev server).
const DEFAULT_BASE: &str = "http://localhost:8000/api/graph";

/// Thin async client over the graph backend.
///
/// Every method is a single request/response round trip with no retry or
/// backoff; callers log failures and keep the previous graph on screen.
#[derive(Clone, Debug)]
pub struct ApiClient {
	http: reqwest::Client,
	base: String,
}

impl Default for ApiClient {
	fn default() -> Self {
		Self::with_base(DEFAULT_BASE)
	}
}

impl ApiClient {
	/// Client rooted at a custom backend URL.
	pub fn with_base(base: impl Into<String>) -> Self {
		Self {
			http: reqwest::Client::new(),
			base: base.into(),
		}
	}

	fn url(&self, path: &str) -> String {
		format!("{}/{}", self.base, path)
	}

	async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		let value = self
			.http
			.get(self.url(path))
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(value)
	}

	async fn post_graph(&self, path: &str) -> Result<GraphConfig> {
		let config = self
			.http
			.post(self.url(path))
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(config)
	}

	/// Load the base knowledge-base landscape's nodes.
	pub async fn populate_graph(&self) -> Result<GraphConfig> {
		self.post_graph("populate_graph").await
	}

	/// Overlay entity-to-idtype mapping edges.
	pub async fn populate_idtype_relations(&self) -> Result<GraphConfig> {
		self.post_graph("populate_idtype_relations").await
	}

	/// Overlay 1-n relation edges.
	pub async fn populate_one_to_n_relations(&self) -> Result<GraphConfig> {
		self.post_graph("populate_one_to_n_relations").await
	}

	/// Overlay drill-down relation edges.
	pub async fn populate_drilldown_relations(&self) -> Result<GraphConfig> {
		self.post_graph("populate_ordino_drilldown_relations").await
	}

	/// Drop all loaded landscapes and return the empty graph.
	pub async fn reset_graph(&self) -> Result<GraphConfig> {
		self.post_graph("reset_graph").await
	}

	/// Re-fetch the current graph with the view filters applied.
	pub async fn get_graph(
		&self,
		with_idtype_nodes: bool,
		remove_isolated_nodes: bool,
	) -> Result<GraphConfig> {
		let config = self
			.http
			.get(self.url("get_graph"))
			.query(&[
				("with_idtype_nodes", with_idtype_nodes),
				("remove_isolated_nodes", remove_isolated_nodes),
			])
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(config)
	}

	/// All relations the backend knows for one node.
	pub async fn get_relations(&self, node: &str) -> Result<Vec<Value>> {
		self.get_json(&format!("get_relations/{node}")).await
	}

	/// Landscape files available for loading.
	pub async fn available_landscapes(&self) -> Result<Vec<String>> {
		self.get_json("get_available_landscapes").await
	}

	/// Landscapes currently merged into the graph.
	pub async fn loaded_landscapes(&self) -> Result<Vec<LoadedLandscape>> {
		self.get_json("get_loaded_landscapes").await
	}

	/// Merge the named landscape files into the graph.
	pub async fn add_landscapes(&self, names: &[String]) -> Result<GraphConfig> {
		let config = self
			.http
			.post(self.url("add_landscapes"))
			.json(&names)
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(config)
	}

	/// Remove one landscape and everything only it contributed.
	pub async fn remove_landscape(&self, name: &str) -> Result<GraphConfig> {
		let config = self
			.http
			.delete(self.url("remove_landscape"))
			.query(&[("landscape_name", name)])
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(config)
	}

	/// Merge a user-provided landscape. `data` must be a JSON document; it
	/// is validated client-side before anything goes over the wire.
	pub async fn add_custom_landscape(&self, name: &str, data: &str) -> Result<GraphConfig> {
		let data: Value = serde_json::from_str(data)?;
		let config = self
			.http
			.post(self.url("add_custom_landscape"))
			.json(&serde_json::json!({ "name": name, "data": data }))
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(config)
	}

	/// Ids of the uploaded datasets currently in the graph.
	pub async fn uploaded_datasets(&self) -> Result<Vec<String>> {
		self.get_json("get_uploaded_datasets").await
	}

	/// Generate and merge a random uploaded dataset.
	pub async fn add_random_uploaded_dataset(&self) -> Result<UploadedDataset> {
		let uploaded = self
			.http
			.post(self.url("add_random_uploaded_dataset"))
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(uploaded)
	}

	/// Merge the bundled real-world uploaded dataset.
	pub async fn add_real_uploaded_dataset(&self) -> Result<UploadedDataset> {
		let uploaded = self
			.http
			.post(self.url("add_real_uploaded_dataset"))
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(uploaded)
	}

	/// Remove one uploaded dataset from the graph.
	pub async fn remove_uploaded_dataset(&self, dataset_id: &str) -> Result<GraphConfig> {
		let config = self
			.http
			.delete(self.url("remove_uploaded_dataset"))
			.query(&[("dataset_id", dataset_id)])
			.send()
			.await?
			.error_for_status()?
			.json()
			.await?;
		Ok(config)
	}

	/// The merged landscape document currently backing the graph.
	pub async fn flattened_landscape(&self) -> Result<Value> {
		self.get_json("get_flattened_landscape/").await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn joins_endpoint_paths_onto_the_base() {
		let api = ApiClient::with_base("http://backend:9000/api/graph");
		assert_eq!(
			api.url("populate_graph"),
			"http://backend:9000/api/graph/populate_graph"
		);
	}

	#[test]
	fn rejects_a_custom_landscape_that_is_not_json() {
		let payload = "{not json";
		assert!(serde_json::from_str::<Value>(payload).is_err());
	}
}
