//! Capture camera and culling results.

mod camera;
mod frustum;
mod render_view;

pub use camera::Camera;
pub use frustum::Frustum;
pub use render_view::RenderView;
