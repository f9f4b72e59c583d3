use std::path::PathBuf;
use std::process;

use clap::Parser;

use facetrack_core::annotation::domain::frame_annotator::FrameAnnotator;
use facetrack_core::annotation::domain::selection_policy::SelectionPolicy;
use facetrack_core::capture::infrastructure::image_sequence_source::ImageSequenceSource;
use facetrack_core::detection::infrastructure::scripted_detector::ScriptedDetector;
use facetrack_core::display::infrastructure::annotated_image_sink::AnnotatedImageSink;
use facetrack_core::pipeline::track_faces_use_case::TrackFacesUseCase;
use facetrack_core::shared::constants::{DEFAULT_RESIZE_SCALE, DEFAULT_SEARCH_REGION_PADDING};

/// Face tracking overlay for frame sequences.
#[derive(Parser)]
#[command(name = "facetrack")]
struct Cli {
    /// Directory of input frames (sorted by file name).
    input: PathBuf,

    /// Detection script (JSON, working-frame coordinates).
    #[arg(long)]
    detections: PathBuf,

    /// Directory for annotated output frames.
    #[arg(long)]
    output: PathBuf,

    /// Downscale factor between display frames and the detection frame.
    #[arg(long, default_value_t = DEFAULT_RESIZE_SCALE)]
    resize_scale: u32,

    /// Search-region padding as a fraction of face width/height.
    #[arg(long, default_value_t = DEFAULT_SEARCH_REGION_PADDING)]
    padding: f64,

    /// Which face gets landmarks when several are detected: largest or first.
    #[arg(long, default_value = "largest")]
    policy: String,

    /// Stop after this many frames.
    #[arg(long)]
    max_frames: Option<u64>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let source = ImageSequenceSource::new(&cli.input);
    let detector = ScriptedDetector::from_path(&cli.detections)?;
    let sink = AnnotatedImageSink::new(&cli.output);
    let annotator = FrameAnnotator::new(
        cli.resize_scale as f64,
        cli.padding,
        parse_policy(&cli.policy),
    )?;

    let progress: Box<dyn Fn(usize, Option<usize>) -> bool + Send> =
        Box::new(|current, total| {
            match total {
                Some(total) => eprint!("\rAnnotating frame {current}/{total}"),
                None => eprint!("\rAnnotating frame {current}"),
            }
            true
        });

    let mut use_case = TrackFacesUseCase::new(
        Box::new(source),
        Box::new(detector),
        Box::new(sink),
        annotator,
        cli.resize_scale,
        cli.max_frames,
        Some(progress),
    );
    let summary = use_case.run()?;
    eprintln!();
    log::info!(
        "Annotated {} frames ({} skipped), average {:.1} fps, output in {}",
        summary.frames_presented,
        summary.frames_skipped,
        summary.average_fps,
        cli.output.display()
    );
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.is_dir() {
        return Err(format!("Input directory not found: {}", cli.input.display()).into());
    }
    if !cli.detections.is_file() {
        return Err(format!("Detection script not found: {}", cli.detections.display()).into());
    }
    if cli.resize_scale == 0 {
        return Err("Resize scale must be at least 1".into());
    }
    if cli.padding < 0.0 {
        return Err(format!("Padding must be non-negative, got {}", cli.padding).into());
    }
    if cli.policy != "largest" && cli.policy != "first" {
        return Err(format!("Policy must be 'largest' or 'first', got '{}'", cli.policy).into());
    }
    if let Some(max) = cli.max_frames {
        if max == 0 {
            return Err("Max frames must be at least 1".into());
        }
    }
    Ok(())
}

fn parse_policy(policy: &str) -> SelectionPolicy {
    if policy == "first" {
        SelectionPolicy::FirstDetected
    } else {
        SelectionPolicy::LargestArea
    }
}
