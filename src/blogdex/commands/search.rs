use crate::commands::{CmdMessage, CmdResult, SearchReport};
use crate::controller::VisibilityController;
use crate::model::{ALL_CATEGORY, Mode, Visibility};
use tracing::{debug, info};

pub const MISSING_QUERY_PROMPT: &str = "Please enter a search term";

/// Shows the items whose title or description contains `query`, ignoring case.
///
/// Every item is matched, whatever category was selected before: a search
/// replaces the category filter rather than narrowing it further.
pub fn run(controller: &mut VisibilityController, query: &str) -> CmdResult {
    if query.trim().is_empty() {
        return CmdResult::default()
            .with_search(SearchReport::MissingQuery)
            .with_message(CmdMessage::warning(MISSING_QUERY_PROMPT));
    }

    let needle = query.to_lowercase();
    let mut changes = Vec::new();
    let mut count = 0;

    for index in 0..controller.len() {
        let record = &controller.items()[index].record;
        let matched = record.title.to_lowercase().contains(&needle)
            || record.description.to_lowercase().contains(&needle);
        let visibility = if matched {
            count += 1;
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        controller.set_visibility(index, visibility, &mut changes);
    }

    let state = controller.state_mut();
    state.mode = Mode::Searched;
    state.active_category = ALL_CATEGORY.to_string();

    let result = CmdResult::default().with_changes(changes);
    if count == 0 {
        info!(query, "search found no articles");
        result
            .with_search(SearchReport::NoResults {
                query: query.to_string(),
            })
            .with_message(CmdMessage::warning(format!(
                "No articles found for \"{}\". Try different keywords!",
                query
            )))
    } else {
        debug!(query, count, "search applied");
        result
            .with_search(SearchReport::Matches {
                query: query.to_string(),
                count,
            })
            .with_message(CmdMessage::info(format!("Found {} articles", count)))
    }
}

/// Leaves Searched mode, restoring the browsing view. No-op in any other mode.
pub fn clear(controller: &mut VisibilityController) -> CmdResult {
    if controller.mode() != Mode::Searched {
        return CmdResult::default();
    }

    let mut changes = Vec::new();
    controller.restore_browsing(&mut changes);
    debug!(cursor = controller.reveal_cursor(), "search cleared");
    CmdResult::default().with_changes(changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::filter;
    use crate::document::memory::fixtures::PageFixture;

    #[test]
    fn empty_query_changes_nothing() {
        let (mut controller, _) = PageFixture::new().with_posts(8, "food").initialize(6);

        for query in ["", "   ", "\t\n"] {
            let result = run(&mut controller, query);
            assert_eq!(result.search, Some(SearchReport::MissingQuery));
            assert!(result.changes.is_empty());
            assert_eq!(result.messages[0].content, MISSING_QUERY_PROMPT);
        }
        assert_eq!(controller.mode(), Mode::Browsing);
        assert_eq!(controller.visible_count(), 6);
    }

    #[test]
    fn no_results_keeps_original_query() {
        let (mut controller, _) = PageFixture::new()
            .with_post("travel", "Old Town Walk", "lanterns at night")
            .initialize(6);

        let result = run(&mut controller, "HoiAn");

        assert_eq!(
            result.search,
            Some(SearchReport::NoResults {
                query: "HoiAn".to_string()
            })
        );
        assert!(result.messages[0].content.contains("\"HoiAn\""));
        assert_eq!(controller.visible_count(), 0);
        assert_eq!(controller.mode(), Mode::Searched);
    }

    #[test]
    fn matches_title_or_description_case_insensitively() {
        let (mut controller, _) = PageFixture::new()
            .with_post("travel", "Hoi An Travel", "")
            .with_post("food", "Street Food", "visit hoi an")
            .with_post("food", "Banh Mi", "a sandwich")
            .initialize(6);

        let result = run(&mut controller, "Hoi");

        assert_eq!(result.search.as_ref().map(|r| r.match_count()), Some(2));
        assert!(controller.items()[0].is_visible());
        assert!(controller.items()[1].is_visible());
        assert!(!controller.items()[2].is_visible());
        assert!(!controller.load_more_visible());
    }

    #[test]
    fn matching_is_substring_based() {
        let (mut controller, _) = PageFixture::new()
            .with_post("food", "Cao Lau noodles", "")
            .initialize(6);
        let result = run(&mut controller, "odle");
        assert_eq!(result.search.map(|r| r.match_count()), Some(1));
    }

    #[test]
    fn search_covers_items_not_yet_revealed() {
        let (mut controller, _) = PageFixture::new()
            .with_posts(8, "food")
            .with_post("travel", "Needle", "")
            .initialize(6);

        run(&mut controller, "needle");
        assert_eq!(controller.visible_count(), 1);
        assert!(controller.items()[8].is_visible());
    }

    #[test]
    fn search_replaces_category_filter() {
        let (mut controller, _) = PageFixture::new()
            .with_post("food", "Pho", "")
            .with_post("travel", "Pho Day Trip", "")
            .initialize(6);

        filter::run(&mut controller, "food");
        run(&mut controller, "pho");

        assert_eq!(controller.visible_count(), 2);
        assert_eq!(controller.active_category(), ALL_CATEGORY);
    }

    #[test]
    fn clear_restores_browsing_view() {
        let (mut controller, _) = PageFixture::new().with_posts(9, "food").initialize(6);
        run(&mut controller, "post 9");
        assert_eq!(controller.visible_count(), 1);

        let result = clear(&mut controller);

        assert_eq!(controller.mode(), Mode::Browsing);
        assert_eq!(controller.visible_count(), 6);
        assert_eq!(controller.pending_count(), 3);
        assert!(controller.load_more_visible());
        assert!(!result.changes.is_empty());
    }

    #[test]
    fn clear_outside_search_is_noop() {
        let (mut controller, _) = PageFixture::new().with_posts(3, "food").initialize(6);
        filter::run(&mut controller, "travel");

        let result = clear(&mut controller);

        assert!(result.changes.is_empty());
        assert_eq!(controller.mode(), Mode::Filtered);
        assert_eq!(controller.visible_count(), 0);
    }
}
