//! Canonical form of a selection, plus the id-list helpers toggles share.
//!
//! An explicit list that is set-equal to the whole catalog is stored as
//! [`Selection::AllTools`]. Every toggle runs its result through
//! [`validate_tool_selection`].

use std::collections::HashSet;

use toolpick_types::Selection;

use crate::catalog::ToolCatalog;

/// Collapse `candidate` to `AllTools` when it lists exactly the catalog.
///
/// Order and duplicates do not matter. `AllTools` and lists that differ from
/// the catalog (including `[]`) are returned unchanged. Idempotent.
pub fn validate_tool_selection(candidate: Selection, catalog: &ToolCatalog) -> Selection {
    let Selection::Tools(ids) = candidate else {
        return Selection::AllTools;
    };
    if ids.is_empty() {
        return Selection::Tools(ids);
    }

    let all = catalog.all_tool_ids();
    let selected: HashSet<&str> = ids.iter().map(String::as_str).collect();
    let universe: HashSet<&str> = all.iter().map(String::as_str).collect();
    if selected == universe {
        tracing::trace!(
            count = universe.len(),
            "Selection covers the catalog, storing as all tools"
        );
        return Selection::AllTools;
    }
    Selection::Tools(ids)
}

/// Catalog ids a selection actually enables, in catalog order.
///
/// Stale ids of an explicit list (tools no longer in the catalog) are skipped.
pub fn resolve_enabled_tools(selection: &Selection, catalog: &ToolCatalog) -> Vec<String> {
    catalog
        .all_tool_ids()
        .into_iter()
        .filter(|id| selection.contains(id))
        .collect()
}

/// Append every id not already present.
pub(crate) fn add_ids<I>(list: &mut Vec<String>, ids: I)
where
    I: IntoIterator<Item = String>,
{
    for id in ids {
        if !list.contains(&id) {
            list.push(id);
        }
    }
}

/// Keep the ids a UI filter shows. No filter shows everything.
pub(crate) fn visible_only(ids: Vec<String>, visible: Option<&[String]>) -> Vec<String> {
    match visible {
        None => ids,
        Some(visible) => ids.into_iter().filter(|id| visible.contains(id)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::*;

    fn all() -> Vec<String> {
        catalog().all_tool_ids()
    }

    #[test]
    fn test_full_list_collapses_to_all() {
        let result = validate_tool_selection(Selection::Tools(all()), &catalog());
        assert_eq!(result, Selection::AllTools);
    }

    #[test]
    fn test_order_does_not_matter() {
        let mut reversed = all();
        reversed.reverse();
        let result = validate_tool_selection(Selection::Tools(reversed), &catalog());
        assert_eq!(result, Selection::AllTools);
    }

    #[test]
    fn test_partial_list_unchanged() {
        let partial = ids(&["web_search", "filesystem_list"]);
        let result = validate_tool_selection(Selection::Tools(partial.clone()), &catalog());
        assert_eq!(result, Selection::Tools(partial));
    }

    #[test]
    fn test_all_tools_passes_through() {
        let result = validate_tool_selection(Selection::AllTools, &catalog());
        assert_eq!(result, Selection::AllTools);
    }

    #[test]
    fn test_empty_list_unchanged() {
        let result = validate_tool_selection(Selection::none(), &catalog());
        assert_eq!(result, Selection::none());
    }

    #[test]
    fn test_empty_list_with_empty_catalog_stays_empty() {
        let result = validate_tool_selection(Selection::none(), &ToolCatalog::default());
        assert_eq!(result, Selection::none());
    }

    #[test]
    fn test_superset_with_stale_id_is_not_collapsed() {
        let mut list = all();
        list.push("removed_tool".into());
        let result = validate_tool_selection(Selection::Tools(list.clone()), &catalog());
        assert_eq!(result, Selection::Tools(list));
    }

    #[test]
    fn test_resolve_enabled_tools() {
        let catalog = catalog();
        assert_eq!(resolve_enabled_tools(&Selection::AllTools, &catalog), all());
        let sel = Selection::from_ids(["tool1_1", "gone", "web_search"]);
        assert_eq!(
            resolve_enabled_tools(&sel, &catalog),
            ids(&["web_search", "tool1_1"])
        );
        assert!(resolve_enabled_tools(&Selection::none(), &catalog).is_empty());
    }

    #[test]
    fn test_add_ids_skips_duplicates() {
        let mut list = ids(&["a"]);
        add_ids(&mut list, ids(&["a", "b"]));
        assert_eq!(list, ids(&["a", "b"]));
    }

    #[test]
    fn test_visible_only() {
        let filter = ids(&["b", "zzz"]);
        assert_eq!(visible_only(ids(&["a", "b"]), Some(filter.as_slice())), ids(&["b"]));
        assert_eq!(visible_only(ids(&["a", "b"]), None), ids(&["a", "b"]));
        assert!(visible_only(ids(&["a"]), Some(&[][..])).is_empty());
    }
}
