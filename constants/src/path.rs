/// Scene manifest listing the models to load, relative to the asset root.
pub const RELATIVE_MANIFEST_PATH: &str = "scene_manifest.json";

/// Log filter handed to bevy's `LogPlugin`.
pub const LOG_FILTER: &str = "info,wgpu=error,naga=warn,scene_render_engine=debug";
