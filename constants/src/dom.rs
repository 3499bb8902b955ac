/// Canvas element bevy renders into on the web.
pub const CANVAS_SELECTOR: &str = "#bevy";

/// Page region whose scroll range drives the timeline.
pub const PAGE_SELECTOR: &str = ".page";

/// Class held by `<body>` until every model has loaded.
pub const LOADING_CLASS: &str = "loading";

/// Media query that must match before the scroll timeline is armed.
pub const MOTION_ALLOWED_QUERY: &str = "(prefers-reduced-motion: no-preference)";

/// Custom properties written on overlay elements every frame.
pub const OVERLAY_X_PROPERTY: &str = "--x";
pub const OVERLAY_Y_PROPERTY: &str = "--y";

/// Overlay offsets saturate at this magnitude (half of the viewport, in percent).
pub const OVERLAY_OFFSET_BOUND: f32 = 50.0;
