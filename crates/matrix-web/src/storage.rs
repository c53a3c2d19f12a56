use web_sys as web;

const VISITED_KEY: &str = "matrixTestVisited";

fn local_storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

/// Whether the onboarding overlay has been dismissed before.
pub fn has_visited() -> bool {
    local_storage()
        .and_then(|s| s.get_item(VISITED_KEY).ok().flatten())
        .is_some_and(|v| v == "true")
}

pub fn mark_visited() {
    match local_storage() {
        Some(s) => {
            if let Err(e) = s.set_item(VISITED_KEY, "true") {
                log::warn!("[storage] could not persist visited flag: {:?}", e);
            }
        }
        None => log::warn!("[storage] localStorage unavailable"),
    }
}
