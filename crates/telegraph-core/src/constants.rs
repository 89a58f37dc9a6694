// Dial tuning shared by the core resolver and the web front-end.

// Mechanical stops of the lever (degrees, clockwise from north)
pub const MIN_ANGLE_DEG: f32 = -135.0; // full astern
pub const MAX_ANGLE_DEG: f32 = 180.0; // finished with engines

// atan2 measures from the +x axis; the dial measures from north
pub const QUARTER_TURN_DEG: f32 = 90.0;
pub const FULL_TURN_DEG: f32 = 360.0;

// Layout
pub const LABEL_RADIUS_PX: f32 = 140.0; // distance of the position labels from the dial center
