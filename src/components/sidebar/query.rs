use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;
use serde_json::Value;

use crate::api::{ApiClient, GraphConfig};

/// Read-only query panels: relations for one entity node and the flattened
/// landscape document behind the current graph.
#[component]
pub fn Query(graph: ReadSignal<Option<GraphConfig>>) -> impl IntoView {
	let api = expect_context::<ApiClient>();

	let selected_node = RwSignal::new(String::new());
	let relations = RwSignal::new(None::<String>);
	let landscape = RwSignal::new(None::<String>);

	let entity_ids = Signal::derive(move || {
		graph.with(|g| {
			g.as_ref()
				.map(|g| {
					g.nodes
						.iter()
						.filter(|n| n.data.get("type").and_then(Value::as_str) == Some("entity"))
						.map(|n| n.id.clone())
						.collect::<Vec<_>>()
				})
				.unwrap_or_default()
		})
	});

	let api_relations = api.clone();
	let fetch_relations = move |_| {
		let node = selected_node.get_untracked();
		if node.is_empty() {
			return;
		}
		let api = api_relations.clone();
		spawn_local(async move {
			match api.get_relations(&node).await {
				Ok(list) => relations.set(Some(
					serde_json::to_string_pretty(&list).unwrap_or_default(),
				)),
				Err(err) => error!("fetching relations failed: {err}"),
			}
		});
	};

	let api_landscape = api.clone();
	let fetch_landscape = move |_| {
		let api = api_landscape.clone();
		spawn_local(async move {
			match api.flattened_landscape().await {
				Ok(doc) => landscape.set(Some(
					serde_json::to_string_pretty(&doc).unwrap_or_default(),
				)),
				Err(err) => error!("fetching flattened landscape failed: {err}"),
			}
		});
	};

	view! {
		<details open class="panel">
			<summary>"Query relations"</summary>
			<div class="panel-body">
				<select
					prop:value=move || selected_node.get()
					on:change=move |ev| selected_node.set(event_target_value(&ev))
				>
					<option value="">"Select node"</option>
					{move || {
						entity_ids
							.get()
							.into_iter()
							.map(|id| view! { <option value=id.clone()>{id.clone()}</option> })
							.collect_view()
					}}
				</select>
				<button
					on:click=fetch_relations
					prop:disabled=move || selected_node.with(String::is_empty)
				>
					"Fetch relations"
				</button>
				<Show when=move || relations.with(Option::is_some)>
					<button
						class="danger"
						on:click=move |_| {
							relations.set(None);
							selected_node.set(String::new());
						}
					>
						"Clear"
					</button>
					<pre class="json-view">{move || relations.get().unwrap_or_default()}</pre>
				</Show>
			</div>
		</details>
		<details open class="panel">
			<summary>"Flattened landscape"</summary>
			<div class="panel-body">
				<button on:click=fetch_landscape>"Fetch landscape"</button>
				<Show when=move || landscape.with(Option::is_some)>
					<button class="danger" on:click=move |_| landscape.set(None)>
						"Clear"
					</button>
					<pre class="json-view">{move || landscape.get().unwrap_or_default()}</pre>
				</Show>
			</div>
		</details>
	}
}
