//! Global constants for the pinview application

/// Data set fetched when `<body>` carries no `data-data-url`
pub const DEFAULT_DATA_URL: &str = "./data/data1.json";

/// Marker hit radius in screen pixels
pub const MARKER_HIT_RADIUS: f32 = 12.0;

/// Default container size for native inspection runs
pub const DEFAULT_CONTAINER_SIZE: (f32, f32) = (800.0, 600.0);

/// Text of the link shown under an annotation that carries a URL
pub const OPEN_LINK_LABEL: &str = "Open link";

/// Page elements the host binding looks up.
pub mod dom {
    /// The annotated `<img>`
    pub const IMAGE: &str = "#annotated-image";
    /// `<ul>` holding one entry per annotation
    pub const ANNOTATION_LIST: &str = "#annotation-list";
    /// Layer holding the marker buttons, transformed with the image
    pub const MARKER_LAYER: &str = "#marker-layer";
    /// Zoom percentage label
    pub const ZOOM_LEVEL: &str = "#zoom-level";
    /// Viewport container receiving wheel and pointer input
    pub const IMAGE_WRAPPER: &str = ".image-wrapper";
    /// Zoom buttons, each with `data-zoom="in"` or `data-zoom="out"`
    pub const ZOOM_BUTTONS: &str = ".zoom-controls button";

    pub const IMAGE_TITLE_ID: &str = "image-title";
    pub const IMAGE_MIME_ID: &str = "image-mime";
    pub const IMAGE_DIMENSION_ID: &str = "image-dimension";
    pub const IMAGE_CREATED_ID: &str = "image-created";
}

/// CSS classes toggled by the host binding.
pub mod class {
    pub const MARKER: &str = "marker";
    pub const ANNOTATION_ITEM: &str = "annotation-item";
    pub const ACTIVE: &str = "active";
    /// Set on the wrapper while a pan gesture is active
    pub const PANNING: &str = "is-panning";
}
