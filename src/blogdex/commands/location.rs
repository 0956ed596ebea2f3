use crate::commands::{CmdResult, filter};
use crate::controller::VisibilityController;
use tracing::debug;

const CATEGORY_PARAM: &str = "category";

/// Applies the `category` parameter of the page's query string, once.
///
/// The parameter is matched against category labels, not tags, the same way
/// a reader would pick the control whose text mentions it. Anything that does
/// not resolve leaves the default browsing view in place.
pub fn run(controller: &mut VisibilityController, location_query: &str) -> CmdResult {
    if controller.state().location_applied {
        debug!("location query already applied");
        return CmdResult::default();
    }
    controller.state_mut().location_applied = true;

    let Some(wanted) = category_param(location_query) else {
        return CmdResult::default();
    };

    let Some(tag) = controller
        .registry()
        .find_by_label(&wanted)
        .map(|c| c.tag.clone())
    else {
        debug!(category = %wanted, "location category did not match any label");
        return CmdResult::default();
    };

    debug!(category = %wanted, %tag, "applying category from location");
    filter::run(controller, &tag)
}

/// Extracts the first `category` value from a query string or full URL.
/// Empty values count as absent.
///
/// A bare query string may start with one `?`; any later `?` belongs to a
/// value. Only full URLs are split at their first `?`.
pub fn category_param(location_query: &str) -> Option<String> {
    let query = if let Some(rest) = location_query.strip_prefix('?') {
        rest
    } else if is_url(location_query) {
        location_query
            .split_once('?')
            .map_or("", |(_, rest)| rest)
    } else {
        location_query
    };
    let query = query.split('#').next().unwrap_or_default();

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == CATEGORY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn is_url(location: &str) -> bool {
    location.contains("://") || location.starts_with('/')
}
