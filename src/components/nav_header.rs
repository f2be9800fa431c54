//! Navigation Header Component

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Showcase,
    Compare,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Showcase => "Card",
            NavLocation::Compare => "Compare",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Showcase => Route::Showcase {},
            NavLocation::Compare => Route::Compare {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

/// Header with the app title and one link per page.
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let locations = [NavLocation::Showcase, NavLocation::Compare];

    rsx! {
        header { class: "nav-header",
            span { class: "nav-title", "Tilt Card" }
            nav { class: "nav-links",
                {locations.into_iter().map(|location| {
                    let class = if location == props.current { "nav-link active" } else { "nav-link" };
                    rsx! {
                        Link {
                            key: "{location.display_name()}",
                            class: class.to_string(),
                            to: location.route(),
                            "{location.display_name()}"
                        }
                    }
                })}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(NavLocation::Showcase.display_name(), "Card");
        assert_eq!(NavLocation::Compare.display_name(), "Compare");
    }
}
