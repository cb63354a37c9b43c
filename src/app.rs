//! pinview application - annotated image viewer
//!
//! Ties the loaded data set to the viewport engine:
//! - Viewport: zoom/pan engine, published to the image and marker layers
//! - Markers: one per annotation, positioned in the shared marker layer
//! - Selection: the annotation currently hovered or focused

use pinview_viewport::{
    ConfigError, GeometryProvider, PointerCapture, Publication, TransformPublisher, TransformSink,
    ViewportConfig, ViewportEngine, ZoomDisplay,
};

use crate::format::Dataset;
use crate::handlers::{handle_annotation, handle_view};
use crate::markers::MarkerLayout;
use crate::message::{Message, ViewMessage};
use crate::selection::{Selection, SelectionChange};

/// What an update changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateResult {
    /// Transform pushed to the image and marker layers
    pub publication: Option<Publication>,
    /// Pointer capture the host must acquire or release
    pub capture: Option<PointerCapture>,
    /// Active annotation change
    pub selection: Option<SelectionChange>,
}

impl UpdateResult {
    pub fn is_empty(&self) -> bool {
        self.publication.is_none() && self.capture.is_none() && self.selection.is_none()
    }
}

/// The annotated image viewer.
pub struct Viewer<G, C, M, Z = ()> {
    dataset: Dataset,
    markers: MarkerLayout,
    engine: ViewportEngine<G>,
    publisher: TransformPublisher<C, M, Z>,
    selection: Selection,
}

impl<G, C, M, Z> Viewer<G, C, M, Z>
where
    G: GeometryProvider,
    C: TransformSink,
    M: TransformSink,
    Z: ZoomDisplay,
{
    /// Build a viewer and publish the initial transform.
    pub fn new(
        dataset: Dataset,
        config: ViewportConfig,
        geometry: G,
        publisher: TransformPublisher<C, M, Z>,
    ) -> Result<Self, ConfigError> {
        let base = geometry.snapshot().content;
        let engine = ViewportEngine::new(config, geometry)?;
        let markers = MarkerLayout::new(&dataset.annotations, base);

        let mut viewer = Self {
            dataset,
            markers,
            engine,
            publisher,
            selection: Selection::new(),
        };
        viewer.publish();
        log::info!(
            "Viewer ready: '{}' with {} markers",
            viewer.dataset.image.display_name(),
            viewer.markers.markers().len()
        );
        Ok(viewer)
    }

    /// Apply a message. Any transform change is published before returning.
    pub fn update(&mut self, message: Message) -> UpdateResult {
        match message {
            Message::View(msg) => {
                if msg == ViewMessage::Resized {
                    self.markers.relayout(self.engine.geometry().snapshot().content);
                }
                let output = handle_view(msg, &mut self.engine);
                UpdateResult {
                    publication: output.transform.map(|t| self.publisher.publish(t)),
                    capture: output.capture,
                    selection: None,
                }
            }
            Message::Annotation(msg) => UpdateResult {
                selection: handle_annotation(msg, &mut self.selection),
                ..UpdateResult::default()
            },
        }
    }

    /// Publish the current transform unconditionally.
    pub fn publish(&mut self) -> Publication {
        let transform = self.engine.transform();
        self.publisher.publish(transform)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn markers(&self) -> &MarkerLayout {
        &self.markers
    }

    pub fn engine(&self) -> &ViewportEngine<G> {
        &self.engine
    }

    pub fn publisher(&self) -> &TransformPublisher<C, M, Z> {
        &self.publisher
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Mutable selection access, for subscribing renderers.
    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Current zoom as a rounded percentage.
    pub fn zoom_percent(&self) -> i32 {
        self.engine.zoom_percent()
    }
}
