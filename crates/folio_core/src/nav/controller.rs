//! Navigation controller: the single owner of navigation state.
//!
//! # Responsibility
//! - Derive the current page from the location.
//! - Run navigation side effects (location push, menu close, scroll reset).
//! - Feed route keys into the transition machine.
//!
//! # Invariants
//! - `current_page` always equals `Route::parse(location).page()`.
//! - State changes only through controller methods; the render layer reads
//!   snapshots.
//! - `navigate` never fails; unknown page ids land on home.
//! - The controller never caches catalog records; detail pages resolve
//!   their project on every mount.

use crate::nav::page::{PageId, NAVIGATION_ORDER};
use crate::nav::route::Route;
use crate::nav::transition::{TransitionMachine, TransitionPhase};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Viewport scroll animation requested on navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Renderer-side effects the controller triggers.
pub trait NavigationHost {
    /// Makes `path` the active location (history push).
    fn push_location(&mut self, path: &str);
    /// Scrolls the viewport to the top.
    fn scroll_to_top(&mut self, behavior: ScrollBehavior);
}

/// Host that discards every effect. Useful for headless route evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl NavigationHost for NoopHost {
    fn push_location(&mut self, _path: &str) {}

    fn scroll_to_top(&mut self, _behavior: ScrollBehavior) {}
}

/// Ephemeral navigation state. Fields are read-only outside the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    current_page: PageId,
    mobile_menu_open: bool,
    location: String,
}

impl NavigationState {
    pub fn current_page(&self) -> PageId {
        self.current_page
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn location(&self) -> &str {
        self.location.as_str()
    }
}

/// One menu entry with its highlight flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub page: PageId,
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Read-only view handed to the render layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationSnapshot {
    pub state: NavigationState,
    pub route: Route,
    pub transition: TransitionPhase,
    /// Increments on every state change.
    pub revision: u64,
}

/// Owns `NavigationState` and serializes every mutation of it.
pub struct NavigationController<H: NavigationHost> {
    host: H,
    state: NavigationState,
    route: Route,
    transition: TransitionMachine,
    scroll_behavior: ScrollBehavior,
    revision: u64,
}

impl<H: NavigationHost> NavigationController<H> {
    /// Creates a controller showing `initial_path` (deep link or `/`).
    pub fn new(host: H, initial_path: &str) -> Self {
        let route = Route::parse(initial_path);
        let state = NavigationState {
            current_page: route.page(),
            mobile_menu_open: false,
            location: route.path(),
        };
        let transition = TransitionMachine::new(route.key());
        info!(
            "event=nav_init module=nav status=ok location={} page={}",
            state.location, state.current_page
        );
        Self {
            host,
            state,
            route,
            transition,
            scroll_behavior: ScrollBehavior::default(),
            revision: 0,
        }
    }

    /// Sets the scroll animation used by `navigate`.
    pub fn with_scroll_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.scroll_behavior = behavior;
        self
    }

    /// Navigates to a page by identifier.
    ///
    /// # Contract
    /// - Unknown identifiers navigate to `/`.
    /// - Effects, in order: push location, close menu, scroll to top.
    /// - Effects run on every call, including repeat navigation.
    pub fn navigate(&mut self, page_id: &str) -> PageId {
        let page = match PageId::parse(page_id) {
            Some(page) => page,
            None => {
                debug!(
                    "event=nav_unknown_page module=nav status=degraded page_id={}",
                    page_id.trim()
                );
                PageId::Home
            }
        };
        self.navigate_to_page(page);
        page
    }

    /// Typed variant of `navigate`.
    pub fn navigate_to_page(&mut self, page: PageId) {
        self.navigate_to_route(Route::for_page(page));
    }

    /// Opens a project case study at `/projects/<id>`.
    ///
    /// The id is not checked against the catalog here; the detail page
    /// renders its own not-found state.
    pub fn open_project(&mut self, project_id: &str) {
        let path = format!("{}/{}", PageId::Projects.path(), project_id.trim());
        self.navigate_to_route(Route::parse(path.as_str()));
    }

    /// Applies an external location change (back/forward, deep link).
    ///
    /// Does not push history or scroll; closes the mobile menu.
    pub fn location_changed(&mut self, path: &str) {
        let route = Route::parse(path);
        self.apply_route(route);
        self.state.mobile_menu_open = false;
        self.bump();
    }

    pub fn toggle_mobile_menu(&mut self) -> bool {
        let open = !self.state.mobile_menu_open;
        self.set_mobile_menu_open(open);
        open
    }

    pub fn set_mobile_menu_open(&mut self, open: bool) {
        if self.state.mobile_menu_open != open {
            self.state.mobile_menu_open = open;
            self.bump();
        }
    }

    /// Renderer callback for the end of the exit animation.
    pub fn exit_finished(&mut self) {
        if self.transition.exit_finished() {
            self.bump();
        }
    }

    /// Renderer callback for the end of the enter animation.
    pub fn enter_finished(&mut self) {
        if self.transition.enter_finished() {
            self.bump();
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_page(&self) -> PageId {
        self.state.current_page
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn transition(&self) -> &TransitionMachine {
        &self.transition
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            state: self.state.clone(),
            route: self.route.clone(),
            transition: self.transition.phase().clone(),
            revision: self.revision,
        }
    }

    /// Menu entries in display order, with the current page marked.
    pub fn navigation_items(&self) -> Vec<NavItem> {
        NAVIGATION_ORDER
            .into_iter()
            .map(|page| NavItem {
                page,
                label: page.label(),
                path: page.path(),
                active: page == self.state.current_page,
            })
            .collect()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn navigate_to_route(&mut self, route: Route) {
        let path = route.path();
        self.host.push_location(path.as_str());
        self.apply_route(route);
        self.state.mobile_menu_open = false;
        self.host.scroll_to_top(self.scroll_behavior);
        self.bump();
        info!(
            "event=nav_navigate module=nav status=ok location={} page={}",
            self.state.location, self.state.current_page
        );
    }

    fn apply_route(&mut self, route: Route) {
        self.state.current_page = route.page();
        self.state.location = route.path();
        if self.transition.request(route.key()) {
            debug!(
                "event=transition_request module=nav mounted={} target={}",
                self.transition.mounted(),
                self.transition.target()
            );
        }
        self.route = route;
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
