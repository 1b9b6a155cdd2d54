pub mod error;

pub mod config;

pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod action_dispatcher;
    pub use action_dispatcher::{ActionDispatcher, DispatchResult};

    pub mod key_map;

    pub mod navigation;
    pub use navigation::NavigationController;
}

pub mod model {
    pub mod app_state;

    pub mod catalog;
    pub use catalog::{Catalog, Prompt};

    pub mod navigation;
    pub use navigation::{NavigationState, RegionVisibility};

    pub mod ui_state;
    pub use ui_state::{Notification, NotificationLevel, PromptKey, RedrawFlag, UIState};
}

pub mod view {
    pub mod render;

    pub mod snapshots;

    pub mod theme;

    pub mod ui;

    pub mod components {
        pub mod category_cards;
        pub mod load_status;
        pub mod menu_panel;
        pub mod notification_overlay;
        pub mod prompt_display;
        pub mod quick_links_sidebar;
        pub mod search_bar;
        pub mod search_results;
        pub mod status_bar;
    }
}

pub mod operators {
    pub mod catalog_loader;

    pub mod search_engine;
}

pub mod logging;
pub use logging::Logger;

pub use error::AppError;

pub use model::{app_state::AppState, catalog::Catalog};
