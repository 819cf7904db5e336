/// Visibility state of the chat panel and its toggle control.
///
/// Pure state transitions; rendering is the caller's concern. The panel
/// starts hidden and only `on_toggle_pressed` ever changes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    panel_visible: bool,
    toggle_visible: bool,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reacts to a network-status change. Online and offline arrive at the
    /// same place: the toggle control becomes reachable and the panel is
    /// left alone. Network status never shows or hides the panel itself.
    /// Also called once at startup to establish initial visibility.
    pub fn on_network_status_changed(&mut self, _online: bool) {
        self.toggle_visible = true;
    }

    /// Flips the panel open or closed.
    pub fn on_toggle_pressed(&mut self) {
        self.panel_visible = !self.panel_visible;
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn toggle_visible(&self) -> bool {
        self.toggle_visible
    }
}
