//! Inputs to the header controller

use super::state::TimerToken;

#[derive(Debug, Clone, PartialEq)]
pub enum HeaderMessage {
    /// First render: sync progress, active section, scrolled style and `<html lang>`
    Init,

    /// Window `scroll` event
    Scrolled,

    /// Click on a navigation link
    NavClicked { href: String },

    /// A debounce timer armed by the controller fired
    DebounceElapsed(TimerToken),

    /// The browser reported the end of a smooth scroll (`scrollend`)
    ScrollSettled,

    /// Hamburger button
    ToggleMenu,

    ToggleTheme,

    ToggleLanguage,

    /// Any click on the document; `inside_menu` is true when the target is
    /// inside the nav or the hamburger button
    DocumentClicked { inside_menu: bool },
}
