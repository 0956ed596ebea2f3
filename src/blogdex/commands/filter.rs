use crate::commands::CmdResult;
use crate::controller::VisibilityController;
use crate::model::{ALL_CATEGORY, Mode, Visibility};
use tracing::debug;

/// Narrows the view to one category, or returns to browsing for `"all"`.
///
/// A category filter shows every matching item at once; it does not page.
pub fn run(controller: &mut VisibilityController, category: &str) -> CmdResult {
    let mut changes = Vec::new();

    if category == ALL_CATEGORY {
        controller.restore_browsing(&mut changes);
        debug!(
            cursor = controller.reveal_cursor(),
            "category filter cleared"
        );
        return CmdResult::default()
            .with_changes(changes)
            .with_category(ALL_CATEGORY);
    }

    for index in 0..controller.len() {
        let visibility = if controller.items()[index].record.category == category {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        controller.set_visibility(index, visibility, &mut changes);
    }

    let state = controller.state_mut();
    state.mode = Mode::Filtered;
    state.active_category = category.to_string();

    let shown = controller.visible_count();
    let known = controller.registry().get(category).is_some();
    debug!(category, shown, known, "category filter applied");

    CmdResult::default()
        .with_changes(changes)
        .with_category(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{reveal, search};
    use crate::document::memory::fixtures::PageFixture;

    fn food_and_travel() -> PageFixture {
        PageFixture::new()
            .with_post("food", "A", "")
            .with_post("travel", "B", "")
            .with_post("food", "C", "")
    }

    #[test]
    fn shows_only_matching_items() {
        let (mut controller, _) = food_and_travel().initialize(6);

        let result = run(&mut controller, "food");

        let vis: Vec<_> = controller.items().iter().map(|i| i.visibility).collect();
        assert_eq!(
            vis,
            vec![Visibility::Visible, Visibility::Hidden, Visibility::Visible]
        );
        assert_eq!(controller.mode(), Mode::Filtered);
        assert_eq!(controller.active_category(), "food");
        assert!(!controller.load_more_visible());
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.category.as_deref(), Some("food"));
    }

    #[test]
    fn filter_ignores_page_size() {
        let (mut controller, _) = PageFixture::new().with_posts(10, "food").initialize(6);
        run(&mut controller, "food");
        assert_eq!(controller.visible_count(), 10);
        assert_eq!(controller.pending_count(), 0);
        // Pagination accounting is untouched by the filter.
        assert_eq!(controller.reveal_cursor(), 6);
    }

    #[test]
    fn all_restores_cursor_governed_view() {
        let (mut controller, _) = PageFixture::new()
            .with_posts(4, "food")
            .with_posts(6, "travel")
            .initialize(6);

        run(&mut controller, "food");
        run(&mut controller, ALL_CATEGORY);

        assert_eq!(controller.mode(), Mode::Browsing);
        assert_eq!(controller.active_category(), ALL_CATEGORY);
        assert_eq!(controller.visible_count(), 6);
        assert_eq!(controller.pending_count(), 4);
        assert!(controller.load_more_visible());
        assert!(controller.items()[..6].iter().all(|i| i.is_visible()));
    }

    #[test]
    fn all_after_exhaustion_keeps_load_more_hidden() {
        let (mut controller, _) = PageFixture::new().with_posts(8, "food").initialize(6);
        reveal::run(&mut controller, 3);
        run(&mut controller, "food");
        run(&mut controller, ALL_CATEGORY);

        assert_eq!(controller.visible_count(), 8);
        assert!(!controller.load_more_visible());
    }

    #[test]
    fn unknown_category_hides_everything_silently() {
        let (mut controller, _) = food_and_travel().initialize(6);
        let result = run(&mut controller, "nightlife");

        assert_eq!(controller.visible_count(), 0);
        assert_eq!(controller.mode(), Mode::Filtered);
        assert!(!controller.load_more_visible());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn filter_replaces_active_search() {
        let (mut controller, _) = food_and_travel().initialize(6);
        search::run(&mut controller, "B");
        assert_eq!(controller.mode(), Mode::Searched);

        run(&mut controller, "food");
        assert_eq!(controller.mode(), Mode::Filtered);
        assert_eq!(controller.visible_count(), 2);
    }

    #[test]
    fn reapplying_same_filter_changes_nothing() {
        let (mut controller, _) = food_and_travel().initialize(6);
        run(&mut controller, "travel");
        let result = run(&mut controller, "travel");
        assert!(result.changes.is_empty());
        assert_eq!(controller.visible_count(), 1);
    }
}
