pub mod controller;
pub mod ports;
pub mod state;

pub use controller::{open, DialogClosed, DialogHandle, Options, Ports, Props, CLOSE_DELAY};
pub use state::{DialogError, DialogView, Phase};
