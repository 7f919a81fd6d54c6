use leptos::prelude::*;

use crate::api::GraphConfig;
use crate::components::force_graph::{ForceGraphCanvas, GraphData};
use crate::components::sidebar::Sidebar;

/// Explorer page: the force-directed graph canvas next to the control
/// sidebar. The graph signal holds the last snapshot the backend returned;
/// failed requests leave it untouched.
#[component]
pub fn Home() -> impl IntoView {
	let (graph, set_graph) = signal(None::<GraphConfig>);
	let graph_data = Signal::derive(move || {
		graph.with(|g| g.as_ref().map(GraphData::from_config).unwrap_or_default())
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="explorer">
				<div class="graph-pane">
					<Show
						when=move || graph.with(Option::is_some)
						fallback=|| {
							view! {
								<p class="hint">"Load a landscape to see the graph."</p>
							}
						}
					>
						<ForceGraphCanvas data=graph_data />
					</Show>
				</div>
				<Sidebar graph=graph set_graph=set_graph />
			</div>
		</ErrorBoundary>
	}
}
