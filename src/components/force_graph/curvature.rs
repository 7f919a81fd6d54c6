//! Curvature disambiguation for parallel directed links.
//!
//! Several links between the same ordered node pair would otherwise render
//! on top of each other. Links are grouped by direction ((A,B) and (B,A)
//! are separate groups), a group of n links gets the bend steps
//! `0.15, 0.30, .., 0.15*n`, and each link takes the step matching its
//! visit order within its group. The assignment is pure and recomputed from
//! scratch for every new link set; no state survives a rebuild.

use std::collections::HashMap;

use super::types::GraphLink;

/// Bend applied to a link with no parallel siblings.
pub const BASE_CURVATURE: f64 = 0.15;

/// Ordered (source, target) pair; the reverse direction is a distinct key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct DirectionKey(String, String);

impl DirectionKey {
	fn of(link: &GraphLink) -> Self {
		Self(link.source.clone(), link.target.clone())
	}
}

/// Distinguishes otherwise-identical parallel links: the direction plus the
/// relation kind and the joined view names from the link metadata.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeIdentity {
	source: String,
	target: String,
	kind: &'static str,
	views: String,
}

impl EdgeIdentity {
	/// Identity of a single link. Links lacking any metadata still get a
	/// well-formed identity with empty discriminators.
	pub fn of(link: &GraphLink) -> Self {
		Self {
			source: link.source.clone(),
			target: link.target.clone(),
			kind: link.meta.kind.as_str(),
			views: link.meta.views.join(","),
		}
	}
}

/// Curvature assignment for one link set.
#[derive(Clone, Debug, Default)]
pub struct EdgeCurvatures {
	by_position: Vec<f64>,
	by_identity: HashMap<EdgeIdentity, f64>,
}

impl EdgeCurvatures {
	/// Assign a curvature to every link in `links`.
	///
	/// `links` must be in a stable order (the wire payload's array order);
	/// the slot a link lands in follows from that order, so identical input
	/// yields identical assignments.
	pub fn compute(links: &[GraphLink]) -> Self {
		let mut counts: HashMap<DirectionKey, usize> = HashMap::new();
		for link in links.iter().filter(|link| has_endpoints(link)) {
			*counts.entry(DirectionKey::of(link)).or_insert(0) += 1;
		}

		let mut tables: HashMap<DirectionKey, Vec<f64>> = HashMap::with_capacity(counts.len());
		for (key, count) in counts {
			let steps = if count > 1 {
				(1..=count).map(|i| BASE_CURVATURE * i as f64).collect()
			} else {
				vec![BASE_CURVATURE]
			};
			tables.insert(key, steps);
		}

		let mut counters: HashMap<DirectionKey, usize> = HashMap::new();
		let mut by_position = Vec::with_capacity(links.len());
		let mut by_identity = HashMap::new();
		for link in links {
			if !has_endpoints(link) {
				by_position.push(BASE_CURVATURE);
				continue;
			}
			let key = DirectionKey::of(link);
			let counter = counters.entry(key.clone()).or_insert(0);
			let slot = *counter;
			*counter += 1;

			// The modulo keeps the lookup total even if the slot and the
			// table length ever disagree.
			let curvature = tables
				.get(&key)
				.map(|steps| steps[slot % steps.len()])
				.unwrap_or(BASE_CURVATURE);
			by_position.push(curvature);
			// Duplicate identities keep their first slot here while still
			// consuming sequential slots positionally.
			by_identity.entry(EdgeIdentity::of(link)).or_insert(curvature);
		}

		Self {
			by_position,
			by_identity,
		}
	}

	/// Curvature of the link at `position` in the sequence this assignment
	/// was computed from.
	pub fn for_position(&self, position: usize) -> f64 {
		self.by_position
			.get(position)
			.copied()
			.unwrap_or(BASE_CURVATURE)
	}

	/// Curvature of a link by identity, independent of its position.
	pub fn for_link(&self, link: &GraphLink) -> f64 {
		self.by_identity
			.get(&EdgeIdentity::of(link))
			.copied()
			.unwrap_or(BASE_CURVATURE)
	}
}

// A link missing either endpoint cannot be grouped; it keeps the baseline
// bend instead of joining a direction group.
fn has_endpoints(link: &GraphLink) -> bool {
	!link.source.is_empty() && !link.target.is_empty()
}

/// Curvature for one `link` among `links`, recomputed from scratch.
pub fn link_curvature(link: &GraphLink, links: &[GraphLink]) -> f64 {
	EdgeCurvatures::compute(links).for_link(link)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{LinkKind, LinkMeta};

	fn link(source: &str, target: &str, kind: LinkKind) -> GraphLink {
		GraphLink {
			source: source.into(),
			target: target.into(),
			meta: LinkMeta {
				kind,
				..LinkMeta::default()
			},
		}
	}

	#[test]
	fn single_link_gets_the_baseline_bend() {
		let links = vec![link("a", "b", LinkKind::OneToOne)];
		let curvatures = EdgeCurvatures::compute(&links);
		assert_eq!(curvatures.for_position(0), 0.15);
	}

	#[test]
	fn parallel_links_fan_out_in_increasing_steps() {
		let links = vec![
			link("a", "b", LinkKind::OneToOne),
			link("a", "b", LinkKind::OneToN),
			link("a", "b", LinkKind::Drilldown),
		];
		let curvatures = EdgeCurvatures::compute(&links);
		let assigned: Vec<f64> = (0..3).map(|i| curvatures.for_position(i)).collect();
		// Expected steps spelled as the same products to stay exact.
		assert_eq!(assigned, vec![0.15, 0.15 * 2.0, 0.15 * 3.0]);
		assert!(assigned.windows(2).all(|pair| pair[0] < pair[1]));
	}

	#[test]
	fn reverse_direction_is_a_separate_group() {
		let links = vec![
			link("a", "b", LinkKind::OneToOne),
			link("a", "b", LinkKind::OneToN),
			link("b", "a", LinkKind::NToOne),
		];
		let curvatures = EdgeCurvatures::compute(&links);
		assert_eq!(curvatures.for_position(0), 0.15);
		assert_eq!(curvatures.for_position(1), 0.30);
		assert_eq!(curvatures.for_position(2), 0.15);
	}

	#[test]
	fn assignment_is_deterministic() {
		let links = vec![
			link("a", "b", LinkKind::IdtypeMapping),
			link("a", "b", LinkKind::OneToOne),
			link("b", "c", LinkKind::OneToN),
			link("c", "a", LinkKind::Drilldown),
		];
		let first = EdgeCurvatures::compute(&links);
		let second = EdgeCurvatures::compute(&links);
		for i in 0..links.len() {
			assert_eq!(first.for_position(i), second.for_position(i));
		}
	}

	#[test]
	fn identity_lookup_matches_positional_assignment() {
		let links = vec![
			link("a", "b", LinkKind::OneToOne),
			link("a", "b", LinkKind::OneToN),
			link("b", "a", LinkKind::NToOne),
		];
		let curvatures = EdgeCurvatures::compute(&links);
		for (i, l) in links.iter().enumerate() {
			assert_eq!(curvatures.for_link(l), curvatures.for_position(i));
		}
		assert_eq!(link_curvature(&links[1], &links), 0.30);
	}

	#[test]
	fn unknown_links_fall_back_to_the_baseline() {
		let links = vec![link("a", "b", LinkKind::OneToOne)];
		let curvatures = EdgeCurvatures::compute(&links);
		assert_eq!(curvatures.for_link(&link("x", "y", LinkKind::OneToOne)), 0.15);
		assert_eq!(curvatures.for_position(7), 0.15);
	}

	#[test]
	fn missing_endpoints_fall_back_to_the_baseline() {
		let links = vec![
			link("", "b", LinkKind::OneToOne),
			link("", "b", LinkKind::OneToN),
			link("a", "", LinkKind::Drilldown),
		];
		let curvatures = EdgeCurvatures::compute(&links);
		// No grouping happens for these, each keeps the baseline.
		for i in 0..links.len() {
			assert_eq!(curvatures.for_position(i), 0.15);
		}
	}

	#[test]
	fn duplicate_identities_take_sequential_slots() {
		let links = vec![
			link("a", "b", LinkKind::OneToOne),
			link("a", "b", LinkKind::OneToOne),
		];
		let curvatures = EdgeCurvatures::compute(&links);
		assert_eq!(curvatures.for_position(0), 0.15);
		assert_eq!(curvatures.for_position(1), 0.30);
		// Order of first encounter wins for the shared identity.
		assert_eq!(curvatures.for_link(&links[0]), 0.15);
	}

	#[test]
	fn missing_metadata_still_yields_a_curvature() {
		let links = vec![GraphLink {
			source: "a".into(),
			target: "b".into(),
			meta: LinkMeta::default(),
		}];
		assert_eq!(link_curvature(&links[0], &links), 0.15);
	}

	#[test]
	fn views_distinguish_otherwise_identical_drilldown_links() {
		let with_views = |views: &[&str]| GraphLink {
			source: "a".into(),
			target: "b".into(),
			meta: LinkMeta {
				kind: LinkKind::Drilldown,
				views: views.iter().map(|v| v.to_string()).collect(),
				..LinkMeta::default()
			},
		};
		let links = vec![with_views(&["celllines"]), with_views(&["tissues"])];
		let curvatures = EdgeCurvatures::compute(&links);
		assert_eq!(curvatures.for_link(&links[0]), 0.15);
		assert_eq!(curvatures.for_link(&links[1]), 0.30);
	}
}
