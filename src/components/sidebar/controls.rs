use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::error;

use crate::api::{ApiClient, GraphConfig, LoadedLandscape, Result};

/// Runs one backend call and replaces the displayed graph with its
/// response. On failure the previous graph stays on screen; nothing is
/// retried.
fn apply_graph_response(
	set_graph: WriteSignal<Option<GraphConfig>>,
	action: &'static str,
	request: impl Future<Output = Result<GraphConfig>> + 'static,
) {
	spawn_local(async move {
		match request.await {
			Ok(config) => set_graph.set(Some(config)),
			Err(err) => error!("{action} failed: {err}"),
		}
	});
}

/// Landscape and graph-view controls.
#[component]
pub fn Controls(
	graph: ReadSignal<Option<GraphConfig>>,
	set_graph: WriteSignal<Option<GraphConfig>>,
) -> impl IntoView {
	let api = expect_context::<ApiClient>();

	let with_idtype_nodes = RwSignal::new(true);
	let remove_isolated = RwSignal::new(false);
	let available = RwSignal::new(Vec::<String>::new());
	let selected = RwSignal::new(Vec::<String>::new());
	let search = RwSignal::new(String::new());
	let loaded = RwSignal::new(Vec::<LoadedLandscape>::new());
	let uploaded = RwSignal::new(Vec::<String>::new());
	let custom_name = RwSignal::new(String::new());
	let custom_data = RwSignal::new(String::new());

	let no_graph = move || graph.with(Option::is_none);

	// The available-landscape list is static on the backend; fetch once.
	let api_available = api.clone();
	Effect::new(move |_| {
		let api = api_available.clone();
		spawn_local(async move {
			match api.available_landscapes().await {
				Ok(list) => available.set(list),
				Err(err) => error!("fetching available landscapes failed: {err}"),
			}
		});
	});

	// Loaded landscapes and uploaded datasets change whenever the graph
	// does; re-fetch both when the node count moves.
	let api_lists = api.clone();
	Effect::new(move |_| {
		let _ = graph.with(|g| g.as_ref().map(|g| g.nodes.len()));
		let api = api_lists.clone();
		spawn_local(async move {
			match api.loaded_landscapes().await {
				Ok(list) => loaded.set(list),
				Err(err) => error!("fetching loaded landscapes failed: {err}"),
			}
			match api.uploaded_datasets().await {
				Ok(list) => uploaded.set(list),
				Err(err) => error!("fetching uploaded datasets failed: {err}"),
			}
		});
	});

	let api_nodes = api.clone();
	let load_nodes = move |_| {
		let api = api_nodes.clone();
		apply_graph_response(set_graph, "loading the base landscape", async move {
			api.populate_graph().await
		});
	};

	let api_idtype_rel = api.clone();
	let load_idtype_relations = move |_| {
		let api = api_idtype_rel.clone();
		apply_graph_response(set_graph, "loading idtype relations", async move {
			api.populate_idtype_relations().await
		});
	};

	let api_one_to_n = api.clone();
	let load_one_to_n_relations = move |_| {
		let api = api_one_to_n.clone();
		apply_graph_response(set_graph, "loading 1-n relations", async move {
			api.populate_one_to_n_relations().await
		});
	};

	let api_drilldown = api.clone();
	let load_drilldown_relations = move |_| {
		let api = api_drilldown.clone();
		apply_graph_response(set_graph, "loading drill-down relations", async move {
			api.populate_drilldown_relations().await
		});
	};

	let api_full = api.clone();
	let load_full_graph = move |_| {
		let api = api_full.clone();
		apply_graph_response(set_graph, "loading the full graph", async move {
			api.add_landscapes(&["visyn_kb".to_string()]).await
		});
	};

	let api_add_selected = api.clone();
	let add_selected_landscapes = move |_| {
		let names = selected.get_untracked();
		if names.is_empty() {
			return;
		}
		let api = api_add_selected.clone();
		apply_graph_response(set_graph, "adding landscapes", async move {
			api.add_landscapes(&names).await
		});
	};

	let api_custom = api.clone();
	let add_custom_landscape = move |_| {
		let name = custom_name.get_untracked();
		let data = custom_data.get_untracked();
		if name.is_empty() {
			return;
		}
		let api = api_custom.clone();
		spawn_local(async move {
			match api.add_custom_landscape(&name, &data).await {
				Ok(config) => {
					set_graph.set(Some(config));
					custom_name.set(String::new());
					custom_data.set(String::new());
				}
				Err(err) => error!("adding custom landscape failed: {err}"),
			}
		});
	};

	let api_random = api.clone();
	let add_random_dataset = move |_| {
		let api = api_random.clone();
		spawn_local(async move {
			match api.add_random_uploaded_dataset().await {
				Ok(upload) => {
					set_graph.set(Some(upload.graph));
					uploaded.update(|list| {
						if !list.contains(&upload.dataset_id) {
							list.push(upload.dataset_id);
						}
					});
				}
				Err(err) => error!("adding random uploaded dataset failed: {err}"),
			}
		});
	};

	let api_real = api.clone();
	let add_real_dataset = move |_| {
		let api = api_real.clone();
		spawn_local(async move {
			match api.add_real_uploaded_dataset().await {
				Ok(upload) => {
					set_graph.set(Some(upload.graph));
					uploaded.update(|list| {
						if !list.contains(&upload.dataset_id) {
							list.push(upload.dataset_id);
						}
					});
				}
				Err(err) => error!("adding real uploaded dataset failed: {err}"),
			}
		});
	};

	let api_toggle_idtype = api.clone();
	let toggle_idtype_nodes = move |_| {
		let next = !with_idtype_nodes.get_untracked();
		with_idtype_nodes.set(next);
		let isolated = remove_isolated.get_untracked();
		let api = api_toggle_idtype.clone();
		apply_graph_response(set_graph, "toggling idtype nodes", async move {
			api.get_graph(next, isolated).await
		});
	};

	let api_toggle_isolated = api.clone();
	let toggle_remove_isolated = move |_| {
		let next = !remove_isolated.get_untracked();
		remove_isolated.set(next);
		let idtype = with_idtype_nodes.get_untracked();
		let api = api_toggle_isolated.clone();
		apply_graph_response(set_graph, "toggling isolated nodes", async move {
			api.get_graph(idtype, next).await
		});
	};

	let api_reset = api.clone();
	let reset_graph = move |_| {
		selected.set(Vec::new());
		with_idtype_nodes.set(true);
		remove_isolated.set(false);
		let api = api_reset.clone();
		apply_graph_response(set_graph, "resetting the graph", async move {
			api.reset_graph().await
		});
	};

	let api_refresh = api.clone();
	let refresh_graph = move |_| {
		let idtype = with_idtype_nodes.get_untracked();
		let isolated = remove_isolated.get_untracked();
		let api = api_refresh.clone();
		apply_graph_response(set_graph, "refreshing the graph", async move {
			api.get_graph(idtype, isolated).await
		});
	};

	let api_items = api.clone();
	view! {
		<div class="controls">
			<details open class="panel">
				<summary>
					"Landscape controls "
					<span class="badge">{move || loaded.with(Vec::len)}</span>
				</summary>
				<div class="panel-body">
					<div class="divider">"visyn_kb landscape"</div>
					<button on:click=load_nodes>"Load nodes"</button>
					<button on:click=load_idtype_relations prop:disabled=no_graph>
						"Load idtype relations"
					</button>
					<button on:click=load_one_to_n_relations prop:disabled=no_graph>
						"Load 1-n relations"
					</button>
					<button on:click=load_drilldown_relations prop:disabled=no_graph>
						"Load drilldown relations"
					</button>
					<button on:click=load_full_graph>"Load full graph"</button>

					<div class="divider">"Other landscapes"</div>
					<input
						type="text"
						placeholder="Search landscapes"
						prop:value=move || search.get()
						on:input=move |ev| search.set(event_target_value(&ev))
					/>
					<div class="landscape-list">
						{move || {
							let query = search.get().to_lowercase();
							available
								.get()
								.into_iter()
								.filter(|name| name.to_lowercase().contains(&query))
								.map(|name| {
									let toggle_name = name.clone();
									let checked =
										move || selected.with(|list| list.contains(&toggle_name));
									let update_name = name.clone();
									view! {
										<label class="landscape-item">
											<input
												type="checkbox"
												prop:checked=checked
												on:change=move |_| {
													selected
														.update(|list| {
															if let Some(pos) = list
																.iter()
																.position(|n| n == &update_name)
															{
																list.remove(pos);
															} else {
																list.push(update_name.clone());
															}
														})
												}
											/>
											{name}
										</label>
									}
								})
								.collect_view()
						}}
					</div>
					<button on:click=move |_| selected.set(available.get_untracked())>
						"Select all"
					</button>
					<button
						on:click=add_selected_landscapes
						prop:disabled=move || selected.with(Vec::is_empty)
					>
						"Add selected landscapes"
					</button>

					<div class="divider">"Custom landscapes"</div>
					<input
						type="text"
						placeholder="Landscape name"
						prop:value=move || custom_name.get()
						on:input=move |ev| custom_name.set(event_target_value(&ev))
					/>
					<textarea
						placeholder="Landscape data (JSON)"
						rows="8"
						prop:value=move || custom_data.get()
						on:input=move |ev| custom_data.set(event_target_value(&ev))
					></textarea>
					<button
						on:click=add_custom_landscape
						prop:disabled=move || custom_name.with(String::is_empty)
					>
						"Add custom landscape"
					</button>

					<div class="divider">"Loaded landscapes"</div>
					<div class="landscape-list">
						<Show when=move || loaded.with(Vec::is_empty)>
							<p class="hint">"No landscapes loaded"</p>
						</Show>
						{
							let api = api_items.clone();
							move || {
								let api = api.clone();
								loaded
									.get()
									.into_iter()
									.map(|landscape| {
										let api = api.clone();
										let name = landscape.name.clone();
										let remove = move |_| {
											let api = api.clone();
											let name = name.clone();
											loaded.update(|list| list.retain(|l| l.name != name));
											apply_graph_response(
												set_graph,
												"removing landscape",
												async move { api.remove_landscape(&name).await },
											);
										};
										view! {
											<div class="landscape-item">
												<span>{landscape.name.clone()}</span>
												<button class="danger" on:click=remove>
													"Remove"
												</button>
											</div>
										}
									})
									.collect_view()
							}
						}
					</div>

					<div class="divider">"Uploaded datasets"</div>
					<button on:click=add_random_dataset>"Add a random uploaded dataset"</button>
					<button on:click=add_real_dataset>"Add a real uploaded dataset"</button>
					<div class="landscape-list">
						<Show when=move || uploaded.with(Vec::is_empty)>
							<p class="hint">"No uploaded datasets"</p>
						</Show>
						{
							let api = api_items.clone();
							move || {
								let api = api.clone();
								uploaded
									.get()
									.into_iter()
									.map(|dataset_id| {
										let api = api.clone();
										let id = dataset_id.clone();
										let remove = move |_| {
											let api = api.clone();
											let id = id.clone();
											uploaded.update(|list| list.retain(|d| d != &id));
											apply_graph_response(
												set_graph,
												"removing uploaded dataset",
												async move {
													api.remove_uploaded_dataset(&id).await
												},
											);
										};
										view! {
											<div class="landscape-item">
												<span>{dataset_id.clone()}</span>
												<button class="danger" on:click=remove>
													"Remove"
												</button>
											</div>
										}
									})
									.collect_view()
							}
						}
					</div>
				</div>
			</details>

			<details open class="panel">
				<summary>"Graph controls"</summary>
				<div class="panel-body">
					<label class="toggle">
						<input
							type="checkbox"
							prop:checked=move || with_idtype_nodes.get()
							on:change=toggle_idtype_nodes
							prop:disabled=no_graph
						/>
						"Show idtype nodes"
					</label>
					<label class="toggle">
						<input
							type="checkbox"
							prop:checked=move || remove_isolated.get()
							on:change=toggle_remove_isolated
							prop:disabled=no_graph
						/>
						"Remove isolated nodes"
					</label>
				</div>
			</details>

			<div class="actions">
				<button class="danger" on:click=reset_graph prop:disabled=no_graph>
					"Reset graph"
				</button>
				<button on:click=refresh_graph prop:disabled=move || loaded.with(Vec::is_empty)>
					"Refresh"
				</button>
			</div>
		</div>
	}
}
