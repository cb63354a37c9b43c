//! pinview native entry point
//!
//! Loads a data set, replays zoom and pan input against a fixed viewport and
//! prints where every marker ends up.
#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;
    use pinview::constants::{DEFAULT_CONTAINER_SIZE, MARKER_HIT_RADIUS};
    use pinview::format::format_timestamp;
    use pinview::{AppConfig, Dataset, Labels, LogLevel, ViewMessage, Viewer};
    use pinview_viewport::{
        FixedGeometry, Point, PointerButton, Size, Transform, TransformPublisher, TransformSink,
        ZoomDisplay,
    };

    #[derive(Parser, Debug)]
    #[command(name = "pinview-native")]
    #[command(about = "Inspect an annotated image data set and its zoom/pan transform", long_about = None)]
    struct Args {
        /// Data set JSON file
        dataset: PathBuf,

        /// Viewport container size in pixels, e.g. "800x600"
        #[arg(short, long, value_parser = parse_size)]
        container: Option<Size>,

        /// Number of zoom-in button presses
        #[arg(long, default_value_t = 0)]
        zoom_in: u32,

        /// Number of zoom-out button presses
        #[arg(long, default_value_t = 0)]
        zoom_out: u32,

        /// Scroll up at a cursor offset from the viewport centre, e.g. "50,-20".
        /// May be repeated.
        #[arg(short, long, value_parser = parse_point, allow_hyphen_values = true)]
        wheel: Vec<Point>,

        /// Drag the image by an offset, e.g. "-120,40". May be repeated.
        #[arg(short, long, value_parser = parse_point, allow_hyphen_values = true)]
        drag: Vec<Point>,

        /// Configuration file (defaults to the user config directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured log level
        #[arg(long, value_parser = parse_log_level)]
        log_level: Option<LogLevel>,

        /// Write the effective configuration back to the config file
        #[arg(long)]
        save_config: bool,
    }

    fn parse_size(s: &str) -> Result<Size, String> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
        let width: f32 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
        let height: f32 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(format!("container size must be positive, got '{s}'"));
        }
        Ok(Size::new(width, height))
    }

    fn parse_point(s: &str) -> Result<Point, String> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
        let x: f32 = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
        let y: f32 = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
        Ok(Point::new(x, y))
    }

    fn parse_log_level(s: &str) -> Result<LogLevel, String> {
        serde_json::from_value(serde_json::Value::String(s.to_lowercase()))
            .map_err(|_| format!("unknown log level '{s}'"))
    }

    /// Rendered image size: the natural size scaled down to fit the container.
    fn fit_within(natural: Size, container: Size) -> Size {
        if natural.is_degenerate() {
            return Size::ZERO;
        }
        let scale = (container.width / natural.width)
            .min(container.height / natural.height)
            .min(1.0);
        Size::new(natural.width * scale, natural.height * scale)
    }

    /// Keeps the CSS transform a page layer would receive.
    #[derive(Default)]
    struct CssLayer(String);

    impl TransformSink for CssLayer {
        fn apply_transform(&mut self, transform: &Transform) {
            self.0 = transform.to_css();
        }
    }

    #[derive(Default)]
    struct ZoomLabel(String);

    impl ZoomDisplay for ZoomLabel {
        fn show_zoom_percent(&mut self, percent: i32) {
            self.0 = format!("{percent}%");
        }
    }

    fn load_config(args: &Args) -> AppConfig {
        let mut config = match &args.config {
            Some(path) => AppConfig::load(path).unwrap_or_else(|e| {
                eprintln!("Ignoring config {}: {}", path.display(), e);
                AppConfig::default()
            }),
            None => AppConfig::load_from_default_path().unwrap_or_default(),
        };
        if let Some(level) = args.log_level {
            config.log_level = level;
        }
        config
    }

    fn save_config(args: &Args, config: &AppConfig) {
        let saved = match &args.config {
            Some(path) => config.save(path).map(|()| path.clone()),
            None => config.save_to_default_path(),
        };
        match saved {
            Ok(path) => println!("Saved configuration to {}", path.display()),
            Err(e) => eprintln!("Failed to save configuration: {e}"),
        }
    }

    fn print_dataset(dataset: &Dataset, labels: &Labels) {
        let image = &dataset.image;
        println!("Image:      {}", image.display_name_or(&labels.untitled_image));
        println!("URL:        {}", image.url);
        println!("Type:       {}", image.mime);
        println!("Dimensions: {}", image.dimension_label());
        if let Some(created) = image.created_at.as_deref() {
            println!("Created:    {}", format_timestamp(created));
        }
        println!();
        println!("Annotations ({}):", dataset.len());
        for annotation in &dataset.annotations {
            println!(
                "  [{}] {} at ({:.3}, {:.3})",
                annotation.id, annotation.title, annotation.x, annotation.y
            );
            if let Some(description) = annotation.description_text() {
                println!("       {description}");
            }
            if let Some(link) = annotation.link_url() {
                println!("       {link}");
            }
        }
    }

    pub fn run() -> ExitCode {
        let args = Args::parse();
        let config = load_config(&args);

        env_logger::Builder::new()
            .filter_level(config.log_level.to_level_filter())
            .parse_default_env()
            .init();

        if args.save_config {
            save_config(&args, &config);
        }

        let dataset = match Dataset::load(&args.dataset) {
            Ok(dataset) => dataset,
            Err(e) => {
                eprintln!("Failed to load {}: {}", args.dataset.display(), e);
                return ExitCode::FAILURE;
            }
        };
        print_dataset(&dataset, &config.labels);

        let container = args
            .container
            .unwrap_or_else(|| Size::new(DEFAULT_CONTAINER_SIZE.0, DEFAULT_CONTAINER_SIZE.1));
        let content = fit_within(dataset.image.natural_size(), container);
        log::debug!("Container {:?}, rendered image {:?}", container, content);

        let publisher = TransformPublisher::with_zoom_display(
            CssLayer::default(),
            CssLayer::default(),
            ZoomLabel::default(),
        );
        let geometry = FixedGeometry::new(container, content);
        let mut viewer = match Viewer::new(dataset, config.viewport, geometry, publisher) {
            Ok(viewer) => viewer,
            Err(e) => {
                eprintln!("Invalid viewport configuration: {e}");
                return ExitCode::FAILURE;
            }
        };

        for _ in 0..args.zoom_in {
            viewer.update(ViewMessage::ZoomIn.into());
        }
        for _ in 0..args.zoom_out {
            viewer.update(ViewMessage::ZoomOut.into());
        }
        for cursor in &args.wheel {
            viewer.update(
                ViewMessage::Wheel {
                    delta_y: -1.0,
                    cursor: *cursor,
                }
                .into(),
            );
        }
        for offset in &args.drag {
            let start = Point::ZERO;
            viewer.update(
                ViewMessage::PointerDown {
                    pointer_id: 1,
                    button: PointerButton::Primary,
                    position: start,
                }
                .into(),
            );
            viewer.update(
                ViewMessage::PointerMove {
                    pointer_id: 1,
                    position: start + *offset,
                }
                .into(),
            );
            viewer.update(ViewMessage::PointerUp { pointer_id: 1 }.into());
        }

        let transform = viewer.engine().transform();
        let publisher = viewer.publisher();
        println!();
        println!("Zoom:       {}", publisher.zoom_display().0);
        println!("Image:      {}", publisher.content().0);
        println!("Markers:    {}", publisher.markers().0);
        println!();
        println!("Marker screen positions (from viewport centre):");
        for (marker, position) in viewer.markers().screen_positions(&transform) {
            println!(
                "  [{}] {:>9.2}, {:>9.2}  {}",
                marker.id, position.x, position.y, marker.title
            );
        }
        if let Some(marker) = viewer
            .markers()
            .hit_test(&transform, Point::ZERO, MARKER_HIT_RADIUS)
        {
            println!();
            println!("Marker under viewport centre: [{}] {}", marker.id, marker.title);
        }

        ExitCode::SUCCESS
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_size() {
            assert_eq!(parse_size("800x600").unwrap(), Size::new(800.0, 600.0));
            assert!(parse_size("800").is_err());
            assert!(parse_size("0x600").is_err());
        }

        #[test]
        fn test_parse_point() {
            assert_eq!(parse_point("-12.5, 40").unwrap(), Point::new(-12.5, 40.0));
            assert!(parse_point("12").is_err());
        }

        #[test]
        fn test_parse_log_level() {
            assert_eq!(parse_log_level("Debug").unwrap(), LogLevel::Debug);
            assert!(parse_log_level("loud").is_err());
        }

        #[test]
        fn test_args_accept_save_config() {
            let args =
                Args::try_parse_from(["pinview-native", "harbour.json", "--save-config", "-w", "-5,10"])
                    .unwrap();
            assert!(args.save_config);
            assert_eq!(args.wheel, vec![Point::new(-5.0, 10.0)]);
            assert!(!Args::try_parse_from(["pinview-native", "harbour.json"]).unwrap().save_config);
        }

        #[test]
        fn test_fit_within() {
            let fitted = fit_within(Size::new(1600.0, 1200.0), Size::new(800.0, 800.0));
            assert_eq!(fitted, Size::new(800.0, 600.0));
            let small = fit_within(Size::new(200.0, 100.0), Size::new(800.0, 600.0));
            assert_eq!(small, Size::new(200.0, 100.0));
            assert_eq!(fit_within(Size::ZERO, Size::new(800.0, 600.0)), Size::ZERO);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::run()
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
