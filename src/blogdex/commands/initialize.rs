use crate::commands::CmdResult;
use crate::controller::{ControllerState, VisibilityController};
use crate::model::{CategoryRegistry, Item, ItemRecord, Visibility, VisibilityChange};
use tracing::debug;

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Builds a controller over `records`, showing the first `page_size` items.
///
/// The returned result lists a change for every item so a renderer can paint
/// the initial page from scratch.
pub fn run(
    records: Vec<ItemRecord>,
    registry: CategoryRegistry,
    page_size: usize,
) -> (VisibilityController, CmdResult) {
    let total = records.len();
    let cursor = page_size.min(total);

    let mut changes = Vec::with_capacity(total);
    let items = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let visibility = if index < cursor {
                Visibility::Visible
            } else {
                Visibility::PendingReveal
            };
            changes.push(VisibilityChange { index, visibility });
            Item::new(record, visibility)
        })
        .collect();

    let state = ControllerState {
        reveal_cursor: cursor,
        ..ControllerState::default()
    };
    debug!(total, page_size, cursor, "initialized visibility controller");

    let controller = VisibilityController::from_parts(items, registry, state);
    (controller, CmdResult::default().with_changes(changes))
}
