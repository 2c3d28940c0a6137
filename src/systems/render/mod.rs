mod transform;

pub use transform::sync_render_transform_system;
