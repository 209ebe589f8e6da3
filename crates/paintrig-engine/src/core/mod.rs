//! Contract between the window runtime and the application.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};

pub(crate) use ctx::viewport_of;
