//! Default value functions for serde deserialization.

pub fn car_length() -> f32 {
    4.0
}

pub fn car_width() -> f32 {
    2.0
}

pub fn wheel_length() -> f32 {
    0.75
}

pub fn wheel_width() -> f32 {
    0.35
}

pub fn front_margin() -> f32 {
    0.20
}

pub fn rear_margin() -> f32 {
    0.20
}

pub fn side_margin() -> f32 {
    0.10
}

pub fn max_steering_angle() -> f32 {
    std::f32::consts::FRAC_PI_4
}

pub fn max_steering_rate() -> f32 {
    0.6
}

pub fn max_acceleration() -> f32 {
    1.0
}

pub fn max_speed() -> f32 {
    2.78
}

pub fn slot_length() -> f32 {
    6.0
}

pub fn slot_width() -> f32 {
    3.5
}

pub fn longitudinal_tolerance() -> f32 {
    1.5
}

pub fn lateral_tolerance() -> f32 {
    1.0
}

pub fn yaw_tolerance_deg() -> f32 {
    10.0
}

pub fn slot_x_range() -> (f32, f32) {
    (-15.0, 15.0)
}

pub fn slot_y_range() -> (f32, f32) {
    (-10.0, 10.0)
}

pub fn spawn_offset() -> f32 {
    5.0
}

pub fn sim_dt() -> f64 {
    0.01
}

pub fn max_catch_up_steps() -> u32 {
    5
}
