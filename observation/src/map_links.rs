//! Canonical URL query handling for the active map-layer set.
//!
//! Layer state travels in a single `layers` query parameter holding a
//! comma-separated list of integer ids. The canonical form is sorted
//! ascending with no duplicates, whatever order toggles were applied in,
//! so the same selection always produces the same shareable URL.

use std::collections::{BTreeSet, HashMap};

/// Applies one toggle batch to the current `layers` parameter and returns
/// the next query-string fragment.
///
/// Unparseable pieces of the current value are silently dropped during
/// normalization. An empty result set yields `""`, not `"?"`.
pub fn toggle_layers(current: &str, ids: &[u32], is_active: bool) -> String {
    let mut next: BTreeSet<u32> = current
        .split(',')
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.parse().ok())
        .collect();

    if is_active {
        next.extend(ids.iter().copied());
    } else {
        for id in ids {
            next.remove(id);
        }
    }

    if next.is_empty() {
        return String::new();
    }
    let joined = next
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("?layers={joined}")
}

/// Carries the current `layers` parameter over to `pathname`, but only when
/// the target is the map surface and a non-empty parameter exists. With no
/// query context (`params` is `None`) the pathname passes through untouched.
pub fn link_with_layers(pathname: &str, params: Option<&HashMap<String, String>>) -> String {
    let Some(params) = params else {
        return pathname.to_string();
    };
    match params.get("layers") {
        Some(layers) if pathname.starts_with("/map") && !layers.is_empty() => {
            format!("{pathname}?layers={layers}")
        }
        _ => pathname.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(layers: &str) -> HashMap<String, String> {
        HashMap::from([("layers".to_string(), layers.to_string())])
    }

    #[test]
    fn toggling_on_inserts_in_sorted_position() {
        assert_eq!(toggle_layers("1,3", &[2], true), "?layers=1,2,3");
    }

    #[test]
    fn toggling_off_removes_every_given_id() {
        assert_eq!(toggle_layers("1,2,3", &[2], false), "?layers=1,3");
        assert_eq!(toggle_layers("1,2,3", &[1, 3], false), "?layers=2");
    }

    #[test]
    fn removing_the_last_layer_yields_the_empty_string() {
        assert_eq!(toggle_layers("1", &[1], false), "");
    }

    #[test]
    fn result_is_canonical_regardless_of_operation_order() {
        // Same selection reached two ways.
        let a = toggle_layers(&toggle_layers("7,2", &[5], true)[8..], &[2], true);
        let b = toggle_layers(&toggle_layers("2,2,5", &[7], true)[8..], &[9], true);
        let b = toggle_layers(&b[8..], &[9], false);
        assert_eq!(a, "?layers=2,5,7");
        assert_eq!(b, "?layers=2,5,7");
    }

    #[test]
    fn junk_and_duplicates_are_normalized_away() {
        assert_eq!(toggle_layers("3,,x,1,3", &[2], true), "?layers=1,2,3");
        assert_eq!(toggle_layers("", &[4], true), "?layers=4");
        assert_eq!(toggle_layers("", &[4], false), "");
    }

    #[test]
    fn map_links_keep_the_layer_parameter() {
        assert_eq!(
            link_with_layers("/map", Some(&params("2,4"))),
            "/map?layers=2,4"
        );
        assert_eq!(
            link_with_layers("/map/quality", Some(&params("1"))),
            "/map/quality?layers=1"
        );
    }

    #[test]
    fn other_paths_and_empty_parameters_pass_through() {
        assert_eq!(link_with_layers("/about", Some(&params("2,4"))), "/about");
        assert_eq!(link_with_layers("/map", Some(&params(""))), "/map");
        assert_eq!(link_with_layers("/map", Some(&HashMap::new())), "/map");
        assert_eq!(link_with_layers("/map", None), "/map");
    }
}
