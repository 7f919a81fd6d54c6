mod controls;
mod query;

pub use controls::Controls;
pub use query::Query;

use leptos::prelude::*;

use crate::api::GraphConfig;

/// Control and query panels shown next to the graph canvas.
#[component]
pub fn Sidebar(
	graph: ReadSignal<Option<GraphConfig>>,
	set_graph: WriteSignal<Option<GraphConfig>>,
) -> impl IntoView {
	view! {
		<aside class="sidebar">
			<Controls graph=graph set_graph=set_graph />
			<Show when=move || graph.with(Option::is_some)>
				<Query graph=graph />
			</Show>
		</aside>
	}
}
