use crate::commands::{CmdMessage, CmdResult, RevealReport};
use crate::controller::VisibilityController;
use crate::model::{Mode, Visibility};
use tracing::{debug, info};

pub const DEFAULT_BATCH_SIZE: usize = 3;

/// Discloses up to `batch_size` pending items, in collection order.
///
/// Only meaningful while browsing; under a filter or a search, and once every
/// item has been disclosed, this does nothing and reports nothing.
pub fn run(controller: &mut VisibilityController, batch_size: usize) -> CmdResult {
    if controller.mode() != Mode::Browsing || controller.is_exhausted() {
        debug!(mode = ?controller.mode(), "load more ignored");
        return CmdResult::default();
    }

    let pending: Vec<usize> = controller
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| item.visibility == Visibility::PendingReveal)
        .map(|(i, _)| i)
        .take(batch_size)
        .collect();

    let mut changes = Vec::with_capacity(pending.len());
    for &index in &pending {
        controller.set_visibility(index, Visibility::Visible, &mut changes);
    }

    let total = controller.len();
    let state = controller.state_mut();
    state.reveal_cursor = (state.reveal_cursor + pending.len()).min(total);
    let cursor = state.reveal_cursor;

    let all_loaded = controller.pending_count() == 0;

    let mut result = CmdResult::default()
        .with_changes(changes)
        .with_reveal(RevealReport {
            revealed: pending.len(),
            all_loaded,
        });
    if all_loaded {
        info!(total, "all articles loaded");
        result.add_message(CmdMessage::info("All articles loaded"));
    } else {
        debug!(revealed = pending.len(), cursor, "revealed more articles");
    }
    result
}
