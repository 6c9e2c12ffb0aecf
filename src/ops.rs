pub mod bind;
pub mod catch_to;
pub mod deliver_on;
pub mod map;
pub mod subscribe_on;
pub mod throttle;
pub mod throttle_progress;
