//! Path-derived selection and the navigation contract
//!
//! Selection is never stored on its own: it is a pure function of the
//! router's current path. The router is the sole source of truth; the engine
//! queries it and only remembers the last derived id for change detection.

/// Options for a navigation request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

/// One-way navigation into a path-addressed history.
pub trait SelectionRouter {
    fn current_path(&self) -> String;
    fn navigate(&mut self, path: &str, options: NavigateOptions);
}

/// History-stack router for tests and in-process hosts.
#[derive(Debug)]
pub struct MemoryRouter {
    history: Vec<String>,
}

impl MemoryRouter {
    pub fn new() -> Self {
        Self {
            history: vec!["/".to_owned()],
        }
    }

    /// Pop one entry, as a host back button would. Returns the new path.
    pub fn back(&mut self) -> String {
        if self.history.len() > 1 {
            self.history.pop();
        }
        self.current_path()
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionRouter for MemoryRouter {
    fn current_path(&self) -> String {
        self.history.last().cloned().unwrap_or_else(|| "/".to_owned())
    }

    fn navigate(&mut self, path: &str, options: NavigateOptions) {
        if options.replace {
            if let Some(last) = self.history.last_mut() {
                *last = path.to_owned();
                return;
            }
        }
        self.history.push(path.to_owned());
    }
}

/// Derive the selected place id from a path.
///
/// Matches the first `place/<segment>` pair where `place` is a whole path
/// segment. No such pair means no selection.
pub fn selected_place_id(path: &str) -> Option<&str> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    while let Some(segment) = segments.next() {
        if segment == "place" {
            return segments.next();
        }
    }
    None
}

/// The absolute path that selects `id`.
pub fn place_path(id: &str) -> String {
    format!("/place/{id}")
}

/// `path` with its trailing `place/<id>` pair removed.
///
/// `/place/a` becomes `/`, `/x/place/a` becomes `/x`; paths without a
/// trailing selection come back unchanged.
pub fn parent_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [head @ .., pair, _] if *pair == "place" => format!("/{}", head.join("/")),
        _ => path.to_owned(),
    }
}
