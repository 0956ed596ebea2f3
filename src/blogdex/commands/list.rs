use crate::commands::CmdResult;
use crate::controller::VisibilityController;

pub fn run(controller: &VisibilityController) -> CmdResult {
    CmdResult::default().with_listed_items(controller.visible_items())
}
