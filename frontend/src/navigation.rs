use std::rc::Rc;

use log::debug;
use yew::prelude::*;

pub const HOME_ANCHOR: &str = "home-section";
pub const ABOUT_ANCHOR: &str = "about-section";
pub const CONTACT_ANCHOR: &str = "contact-section";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Services,
    Resources,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Resources,
        Page::Contact,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Resources => "resources",
            Page::Contact => "contact",
        }
    }

    pub fn from_key(key: &str) -> Option<Page> {
        let key = key.trim();
        Page::ALL
            .into_iter()
            .find(|page| page.key().eq_ignore_ascii_case(key))
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Services => "Services",
            Page::Resources => "Resources",
            Page::Contact => "Contact Us",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StandalonePage {
    Services,
    Resources,
}

/// What the main content area renders for a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderTarget {
    StandalonePage(StandalonePage),
    /// Home, About and Contact share one view and differ only by scroll position.
    CompositeHome,
}

pub fn route(page: Page) -> RenderTarget {
    match page {
        Page::Services => RenderTarget::StandalonePage(StandalonePage::Services),
        Page::Resources => RenderTarget::StandalonePage(StandalonePage::Resources),
        Page::Home | Page::About | Page::Contact => RenderTarget::CompositeHome,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Anchor(&'static str),
}

pub fn scroll_target(page: Page) -> ScrollTarget {
    match page {
        Page::Home | Page::Services | Page::Resources => ScrollTarget::Top,
        Page::About => ScrollTarget::Anchor(ABOUT_ANCHOR),
        Page::Contact => ScrollTarget::Anchor(CONTACT_ANCHOR),
    }
}

/// Snapshot of the navigation controller.
///
/// `generation` advances on every request, including repeats of the current
/// page, so effects keyed on it re-run the scroll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavState {
    pub current: Page,
    pub generation: u64,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            current: Page::Home,
            generation: 0,
        }
    }
}

impl NavState {
    pub fn navigate(&self, page: Page) -> NavState {
        NavState {
            current: page,
            generation: self.generation.wrapping_add(1),
        }
    }

    pub fn render_target(&self) -> RenderTarget {
        route(self.current)
    }

    pub fn scroll_target(&self) -> ScrollTarget {
        scroll_target(self.current)
    }
}

pub enum NavAction {
    Navigate(Page),
    /// Textual request from markup; unknown keys are dropped.
    NavigateKey(String),
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let page = match action {
            NavAction::Navigate(page) => page,
            NavAction::NavigateKey(key) => match Page::from_key(&key) {
                Some(page) => page,
                None => {
                    debug!("Ignoring navigation to unknown destination {:?}", key);
                    return self;
                }
            },
        };
        debug!("Navigating {:?} -> {:?}", self.current, page);
        Rc::new(self.navigate(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: NavState, action: NavAction) -> NavState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn route_is_total_over_destinations() {
        for page in Page::ALL {
            let target = route(page);
            assert!(matches!(
                target,
                RenderTarget::CompositeHome
                    | RenderTarget::StandalonePage(StandalonePage::Services)
                    | RenderTarget::StandalonePage(StandalonePage::Resources)
            ));
        }
    }

    #[test]
    fn services_and_resources_are_standalone() {
        assert_eq!(
            route(Page::Services),
            RenderTarget::StandalonePage(StandalonePage::Services)
        );
        assert_eq!(
            route(Page::Resources),
            RenderTarget::StandalonePage(StandalonePage::Resources)
        );
        for page in [Page::Home, Page::About, Page::Contact] {
            assert_eq!(route(page), RenderTarget::CompositeHome);
        }
    }

    #[test]
    fn scroll_targets_follow_anchors() {
        assert_eq!(scroll_target(Page::Home), ScrollTarget::Top);
        assert_eq!(scroll_target(Page::Services), ScrollTarget::Top);
        assert_eq!(scroll_target(Page::Resources), ScrollTarget::Top);
        assert_eq!(scroll_target(Page::About), ScrollTarget::Anchor("about-section"));
        assert_eq!(scroll_target(Page::Contact), ScrollTarget::Anchor("contact-section"));
    }

    #[test]
    fn starts_at_home() {
        let state = NavState::default();
        assert_eq!(state.current, Page::Home);
        assert_eq!(state.render_target(), RenderTarget::CompositeHome);
    }

    #[test]
    fn keys_round_trip_and_ignore_case() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key(" Contact "), Some(Page::Contact));
        assert_eq!(Page::from_key("careers"), None);
    }

    #[test]
    fn unknown_key_is_a_no_op() {
        let state = NavState::default().navigate(Page::About);
        let after = reduce(state.clone(), NavAction::NavigateKey("blog".into()));
        assert_eq!(after, state);
    }

    #[test]
    fn repeat_navigation_keeps_page_but_advances_generation() {
        let once = reduce(NavState::default(), NavAction::Navigate(Page::About));
        let twice = reduce(once.clone(), NavAction::Navigate(Page::About));
        assert_eq!(once.current, twice.current);
        assert_eq!(twice.generation, once.generation + 1);
        assert_eq!(once.scroll_target(), twice.scroll_target());
    }

    #[test]
    fn contact_then_services_scenario() {
        let state = NavState::default();
        let state = reduce(state, NavAction::NavigateKey("contact".into()));
        assert_eq!(state.current, Page::Contact);
        assert_eq!(state.render_target(), RenderTarget::CompositeHome);
        assert_eq!(state.scroll_target(), ScrollTarget::Anchor(CONTACT_ANCHOR));

        let state = reduce(state, NavAction::Navigate(Page::Services));
        assert_eq!(
            state.render_target(),
            RenderTarget::StandalonePage(StandalonePage::Services)
        );
        assert_eq!(state.scroll_target(), ScrollTarget::Top);
    }
}
