//! Scales from graph-model values to canvas attributes.

use super::types::{LinkKind, LinkMeta, NodeKind};

/// Node fill color by kind.
pub fn node_color(kind: NodeKind) -> &'static str {
	match kind {
		NodeKind::Entity => "orange",
		NodeKind::IdType => "green",
		NodeKind::Upload => "red",
		NodeKind::Other => "gray",
	}
}

/// Link stroke color by relation kind.
pub fn link_color(meta: &LinkMeta) -> &'static str {
	match meta.kind {
		LinkKind::IdtypeMapping => "green",
		LinkKind::OneToOne if meta.via_idtype => "lightgreen",
		LinkKind::OneToOne => "green",
		LinkKind::OneToN | LinkKind::NToOne => "orange",
		LinkKind::Drilldown => "blue",
		LinkKind::DrilldownFragment => "rgba(0, 0, 255, 0.25)",
		LinkKind::Other => "gray",
	}
}

/// Dash pattern for derived links; solid otherwise.
pub fn link_dash(meta: &LinkMeta) -> Option<[f64; 2]> {
	meta.is_derived.then_some([3.0, 1.0])
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn node_kinds_map_to_their_colors() {
		assert_eq!(node_color(NodeKind::Entity), "orange");
		assert_eq!(node_color(NodeKind::IdType), "green");
		assert_eq!(node_color(NodeKind::Upload), "red");
		assert_eq!(node_color(NodeKind::Other), "gray");
	}

	#[test]
	fn one_to_one_color_depends_on_the_idtype_hop() {
		let direct = LinkMeta {
			kind: LinkKind::OneToOne,
			..LinkMeta::default()
		};
		let via = LinkMeta {
			via_idtype: true,
			..direct.clone()
		};
		assert_eq!(link_color(&direct), "green");
		assert_eq!(link_color(&via), "lightgreen");
	}

	#[test]
	fn only_derived_links_are_dashed() {
		let derived = LinkMeta {
			kind: LinkKind::OneToN,
			is_derived: true,
			..LinkMeta::default()
		};
		assert_eq!(link_dash(&derived), Some([3.0, 1.0]));
		assert_eq!(link_dash(&LinkMeta::default()), None);
	}
}
