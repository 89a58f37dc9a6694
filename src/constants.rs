/// DOM contract and bell tuning for the web front-end.
///
/// The host page provides the dial markup; these class names are looked up
/// beneath the root element handed to the mount call.
// Markup
pub const DEFAULT_ROOT_ID: &str = "engine-telegraph";
pub const FACE_CLASS: &str = "telegraph-face"; // labels are injected here
pub const LEVER_CLASS: &str = "telegraph-lever"; // rotated to the live angle
pub const KNOB_CLASS: &str = "telegraph-knob"; // pointer-capture target
pub const READOUT_CLASS: &str = "telegraph-readout"; // current order label
pub const LABEL_CLASS: &str = "telegraph-label";

// Input strategies accepted by `mount_telegraph`
pub const STRATEGY_GLOBAL: &str = "global";
pub const STRATEGY_CAPTURE: &str = "capture";

// Bell
pub const BELL_SRC: &str = "https://actions.google.com/sounds/v1/alarms/ship_bell.ogg";
pub const BELL_VOLUME: f64 = 1.0;
