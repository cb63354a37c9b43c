//! Browser host for the viewer.
//!
//! Fetches the data set, renders the image info, markers and annotation
//! list, and forwards page input to [`Viewer`]. Layout is read from the DOM
//! on every clamp, so window and image size changes need no bookkeeping.

use std::cell::RefCell;
use std::rc::Rc;

use pinview_viewport::{
    anchor_offset, GeometryProvider, GeometrySnapshot, Point, PointerButton, PointerCapture, Size,
    Transform, TransformPublisher, TransformSink, ZoomDirection, ZoomDisplay,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, HtmlImageElement,
    PointerEvent, Request, RequestCache, RequestInit, Response, WheelEvent, Window,
};

use crate::app::Viewer;
use crate::config::{AppConfig, Labels};
use crate::constants::{class, dom};
use crate::format::{format_timestamp, Dataset};
use crate::message::{AnnotationMessage, Message, ViewMessage};
use crate::model::{Annotation, ImageInfo};
use crate::selection::SelectionChange;

type JsResult<T> = Result<T, JsValue>;

const INIT_FAILED_ALERT: &str = "Failed to initialise the annotator. See console for details.";

/// Image and wrapper sizes, measured live.
struct DomGeometry {
    image: HtmlElement,
    wrapper: HtmlElement,
}

impl GeometryProvider for DomGeometry {
    fn snapshot(&self) -> GeometrySnapshot {
        GeometrySnapshot::new(
            Size::new(
                self.wrapper.client_width() as f32,
                self.wrapper.client_height() as f32,
            ),
            Size::new(
                self.image.client_width() as f32,
                self.image.client_height() as f32,
            ),
        )
    }
}

/// Writes the transform to an element's inline style.
struct StyleTransform(Option<HtmlElement>);

impl TransformSink for StyleTransform {
    fn apply_transform(&mut self, transform: &Transform) {
        let Some(element) = &self.0 else {
            return;
        };
        if let Err(e) = element.style().set_property("transform", &transform.to_css()) {
            log::warn!("Failed to apply transform: {:?}", e);
        }
    }
}

struct ZoomLabel(Option<Element>);

impl ZoomDisplay for ZoomLabel {
    fn show_zoom_percent(&mut self, percent: i32) {
        if let Some(label) = &self.0 {
            label.set_text_content(Some(&format!("{percent}%")));
        }
    }
}

type DomViewer = Viewer<DomGeometry, StyleTransform, StyleTransform, ZoomLabel>;

/// Shared state behind every event listener.
struct Host {
    viewer: RefCell<DomViewer>,
    wrapper: HtmlElement,
}

impl Host {
    fn dispatch(&self, message: Message) {
        let result = match self.viewer.try_borrow_mut() {
            Ok(mut viewer) => viewer.update(message),
            Err(_) => {
                log::warn!("Dropped {:?}: viewer busy", message);
                return;
            }
        };

        match result.capture {
            Some(PointerCapture::Acquire(id)) => {
                if let Err(e) = self.wrapper.set_pointer_capture(id) {
                    log::warn!("Failed to capture pointer {}: {:?}", id, e);
                }
                toggle_class(&self.wrapper, class::PANNING, true);
            }
            Some(PointerCapture::Release(id)) => {
                if self.wrapper.has_pointer_capture(id) {
                    if let Err(e) = self.wrapper.release_pointer_capture(id) {
                        log::warn!("Failed to release pointer {}: {:?}", id, e);
                    }
                }
                toggle_class(&self.wrapper, class::PANNING, false);
            }
            None => {}
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(e) = console_log::init_with_level(config.log_level.to_level()) {
        web_sys::console::warn_1(&format!("Logger already initialised: {e}").into());
    }

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = bootstrap(config).await {
            log::error!("Initialisation failed: {:?}", e);
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.alert_with_message(INIT_FAILED_ALERT) {
                    log::error!("Failed to show alert: {:?}", e);
                }
            }
        }
    });
}

async fn bootstrap(mut config: AppConfig) -> JsResult<()> {
    let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
    let document = window.document().ok_or_else(|| js_error("no document"))?;

    if let Some(body) = document.body() {
        let data = body.dataset();
        if let Some(label) = data.get("untitledLabel") {
            config.labels.untitled_image = label;
        }
        if let Some(label) = data.get("openLinkLabel") {
            config.labels.open_link = label;
        }
    }

    let data_url = document
        .body()
        .and_then(|body| body.dataset().get("dataUrl"))
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| config.data_url.clone());
    let dataset = fetch_dataset(&window, &data_url).await?;

    let image: HtmlImageElement = query(&document, dom::IMAGE)?.dyn_into()?;
    let wrapper: HtmlElement = query(&document, dom::IMAGE_WRAPPER)?.dyn_into()?;
    let marker_layer = document
        .query_selector(dom::MARKER_LAYER)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    render_image_info(&document, &image, &dataset.image, &config.labels);
    image.set_draggable(false);

    let geometry = DomGeometry {
        image: image.clone().into(),
        wrapper: wrapper.clone(),
    };
    let publisher = TransformPublisher::with_zoom_display(
        StyleTransform(Some(image.clone().into())),
        StyleTransform(marker_layer.clone()),
        ZoomLabel(document.query_selector(dom::ZOOM_LEVEL)?),
    );
    let mut viewer = Viewer::new(dataset, config.viewport, geometry, publisher)
        .map_err(|e| js_error(&e.to_string()))?;

    {
        let document = document.clone();
        viewer
            .selection_mut()
            .subscribe(move |change| highlight(&document, change));
    }

    let host = Rc::new(Host {
        viewer: RefCell::new(viewer),
        wrapper,
    });

    if let Some(layer) = &marker_layer {
        render_markers(&document, layer, &host, &config.labels)?;
    }
    render_annotation_list(&document, &host, &config.labels)?;
    setup_zoom_controls(&document, &host)?;
    setup_panning(&host)?;
    setup_resize(&window, &image, &host)?;

    log::info!("Viewer initialised from {}", data_url);
    Ok(())
}

async fn fetch_dataset(window: &Window, url: &str) -> JsResult<Dataset> {
    let opts = RequestInit::new();
    opts.set_cache(RequestCache::NoCache);
    let request = Request::new_with_str_and_init(url, &opts)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(js_error(&format!("Failed to load data from {url}")));
    }

    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| js_error("data set response is not text"))?;
    Dataset::from_json(&text).map_err(|e| js_error(&format!("{url}: {e}")))
}

fn render_image_info(
    document: &Document,
    image_el: &HtmlImageElement,
    image: &ImageInfo,
    labels: &Labels,
) {
    image_el.set_src(&image.url);
    image_el.set_alt(image.name.as_deref().unwrap_or_default());

    let created = image
        .created_at
        .as_deref()
        .map(format_timestamp)
        .unwrap_or_default();
    for (id, text) in [
        (dom::IMAGE_TITLE_ID, image.display_name_or(&labels.untitled_image).to_string()),
        (dom::IMAGE_MIME_ID, image.mime.clone()),
        (dom::IMAGE_DIMENSION_ID, image.dimension_label()),
        (dom::IMAGE_CREATED_ID, created),
    ] {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(&text));
        }
    }
}

fn render_markers(
    document: &Document,
    layer: &HtmlElement,
    host: &Rc<Host>,
    labels: &Labels,
) -> JsResult<()> {
    layer.set_inner_html("");

    let viewer = host.viewer.borrow();
    // Markers follow data set order, so duplicate ids keep their own details.
    let annotations = viewer.dataset().annotations.iter();
    for (annotation, marker) in annotations.zip(viewer.markers().markers()) {
        let button = create_element(document, "button")?;
        button.set_attribute("type", "button")?;
        button.set_class_name(class::MARKER);
        button.dataset().set("id", &marker.id)?;
        button.set_attribute("aria-label", &marker.title)?;
        let style = button.style();
        style.set_property("left", &format!("{}%", marker.left_percent()))?;
        style.set_property("top", &format!("{}%", marker.top_percent()))?;

        let dot = create_element(document, "span")?;
        dot.set_attribute("aria-hidden", "true")?;
        dot.set_text_content(Some("●"));
        button.append_child(&dot)?;

        let tooltip = create_element(document, "div")?;
        tooltip.set_class_name("tooltip");
        append_details(document, &tooltip, annotation, labels)?;
        button.append_child(&tooltip)?;

        listen_highlight(&button, &marker.id, host)?;
        layer.append_child(&button)?;
    }
    Ok(())
}

fn render_annotation_list(document: &Document, host: &Rc<Host>, labels: &Labels) -> JsResult<()> {
    let list = query(document, dom::ANNOTATION_LIST)?;
    list.set_inner_html("");

    let viewer = host.viewer.borrow();
    for annotation in &viewer.dataset().annotations {
        let item = create_element(document, "li")?;
        item.set_class_name(class::ANNOTATION_ITEM);
        item.set_tab_index(0);
        item.dataset().set("id", &annotation.id)?;
        append_details(document, &item, annotation, labels)?;

        listen_highlight(&item, &annotation.id, host)?;
        list.append_child(&item)?;
    }
    Ok(())
}

/// Title, description and link, as text nodes.
fn append_details(
    document: &Document,
    parent: &HtmlElement,
    annotation: &Annotation,
    labels: &Labels,
) -> JsResult<()> {
    let title = create_element(document, "p")?;
    title.set_class_name("annotation-title");
    title.set_text_content(Some(&annotation.title));
    parent.append_child(&title)?;

    if let Some(description) = annotation.description_text() {
        let p = create_element(document, "p")?;
        p.set_class_name("annotation-description");
        p.set_text_content(Some(description));
        parent.append_child(&p)?;
    }

    if let Some(link) = annotation.link_url() {
        let a = create_element(document, "a")?;
        a.set_class_name("annotation-link");
        a.set_attribute("href", link)?;
        a.set_attribute("target", "_blank")?;
        a.set_attribute("rel", "noopener noreferrer")?;
        a.set_text_content(Some(&labels.open_link));
        parent.append_child(&a)?;
    }
    Ok(())
}

fn listen_highlight(element: &HtmlElement, id: &str, host: &Rc<Host>) -> JsResult<()> {
    let bindings: [(&str, fn(String) -> AnnotationMessage); 2] = [
        ("mouseenter", AnnotationMessage::Hovered),
        ("focus", AnnotationMessage::Focused),
    ];
    for (event_type, message) in bindings {
        let host = Rc::clone(host);
        let id = id.to_string();
        listen(element, event_type, move |_: Event| {
            host.dispatch(message(id.clone()).into());
        })?;
    }

    for (event_type, message) in [
        ("mouseleave", AnnotationMessage::Left),
        ("blur", AnnotationMessage::Blurred),
    ] {
        let host = Rc::clone(host);
        listen(element, event_type, move |_: Event| {
            host.dispatch(message.clone().into());
        })?;
    }
    Ok(())
}

/// Subscriber that syncs the `active` class with the selection.
fn highlight(document: &Document, change: &SelectionChange) {
    let selector = format!(".{}, .{}", class::MARKER, class::ANNOTATION_ITEM);
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let Some(id) = element.dataset().get("id") else {
            continue;
        };
        if change.affects(&id) {
            toggle_class(&element, class::ACTIVE, change.current.as_deref() == Some(id.as_str()));
        }
    }
}

fn setup_zoom_controls(document: &Document, host: &Rc<Host>) -> JsResult<()> {
    let buttons = document.query_selector_all(dom::ZOOM_BUTTONS)?;
    for i in 0..buttons.length() {
        let Some(button) = buttons.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        let direction = button.dataset().get("zoom");
        let message = match direction.as_deref().and_then(ZoomDirection::parse) {
            Some(ZoomDirection::In) => ViewMessage::ZoomIn,
            Some(ZoomDirection::Out) => ViewMessage::ZoomOut,
            None => {
                log::warn!("Zoom button without a valid data-zoom: {:?}", direction);
                continue;
            }
        };

        let host = Rc::clone(host);
        listen(&button, "click", move |_: Event| host.dispatch(message.into()))?;
    }

    let wheel_host = Rc::clone(host);
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    listen_with_options(&host.wrapper, "wheel", &options, move |event: WheelEvent| {
        event.prevent_default();
        let rect = wheel_host.wrapper.get_bounding_client_rect();
        let cursor = anchor_offset(
            Point::new(event.client_x() as f32, event.client_y() as f32),
            Point::new(rect.left() as f32, rect.top() as f32),
            Size::new(rect.width() as f32, rect.height() as f32),
        );
        wheel_host.dispatch(
            ViewMessage::Wheel {
                delta_y: event.delta_y() as f32,
                cursor,
            }
            .into(),
        );
    })
}

fn setup_panning(host: &Rc<Host>) -> JsResult<()> {
    let down = Rc::clone(host);
    listen(&host.wrapper, "pointerdown", move |event: PointerEvent| {
        let button = PointerButton::from_dom_button(event.button());
        if button == PointerButton::Primary {
            event.prevent_default();
        }
        down.dispatch(
            ViewMessage::PointerDown {
                pointer_id: event.pointer_id(),
                button,
                position: client_position(&event),
            }
            .into(),
        );
    })?;

    let moved = Rc::clone(host);
    listen(&host.wrapper, "pointermove", move |event: PointerEvent| {
        moved.dispatch(
            ViewMessage::PointerMove {
                pointer_id: event.pointer_id(),
                position: client_position(&event),
            }
            .into(),
        );
    })?;

    let endings: [(&str, fn(i32) -> ViewMessage); 3] = [
        ("pointerup", |pointer_id| ViewMessage::PointerUp { pointer_id }),
        ("pointercancel", |pointer_id| ViewMessage::PointerCancel { pointer_id }),
        ("pointerleave", |pointer_id| ViewMessage::PointerLeave { pointer_id }),
    ];
    for (event_type, message) in endings {
        let ended = Rc::clone(host);
        listen(&host.wrapper, event_type, move |event: PointerEvent| {
            ended.dispatch(message(event.pointer_id()).into());
        })?;
    }
    Ok(())
}

fn setup_resize(window: &Window, image: &HtmlImageElement, host: &Rc<Host>) -> JsResult<()> {
    let on_window = Rc::clone(host);
    listen(window, "resize", move |_: Event| {
        on_window.dispatch(ViewMessage::Resized.into());
    })?;

    // Rendered size is unknown until the image has decoded
    let on_load = Rc::clone(host);
    listen(image, "load", move |_: Event| {
        on_load.dispatch(ViewMessage::Resized.into());
    })
}

fn client_position(event: &PointerEvent) -> Point {
    Point::new(event.client_x() as f32, event.client_y() as f32)
}

fn listen<E, F>(target: &EventTarget, event_type: &str, handler: F) -> JsResult<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = event_closure(handler);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn listen_with_options<E, F>(
    target: &EventTarget,
    event_type: &str,
    options: &AddEventListenerOptions,
    handler: F,
) -> JsResult<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = event_closure(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event_type,
        closure.as_ref().unchecked_ref(),
        options,
    )?;
    closure.forget();
    Ok(())
}

fn event_closure<E, F>(mut handler: F) -> Closure<dyn FnMut(Event)>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    Closure::wrap(Box::new(move |event: Event| match event.dyn_into::<E>() {
        Ok(event) => handler(event),
        Err(event) => log::warn!("Unexpected event type: {}", event.type_()),
    }) as Box<dyn FnMut(Event)>)
}

fn query(document: &Document, selector: &str) -> JsResult<Element> {
    document
        .query_selector(selector)?
        .ok_or_else(|| js_error(&format!("element not found: {selector}")))
}

fn create_element(document: &Document, tag: &str) -> JsResult<HtmlElement> {
    Ok(document.create_element(tag)?.dyn_into()?)
}

fn toggle_class(element: &Element, name: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(name, on) {
        log::warn!("Failed to toggle class {}: {:?}", name, e);
    }
}

fn js_error(message: &str) -> JsValue {
    JsValue::from_str(message)
}
