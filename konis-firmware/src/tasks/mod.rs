//! Embassy async tasks
//!
//! Each task runs independently and communicates via the shared state in
//! `channels`.

pub mod button;
pub mod scan;
pub mod sensor;

pub use button::button_task;
pub use scan::scan_task;
pub use sensor::sensor_task;
