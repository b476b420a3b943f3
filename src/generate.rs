//! Pipeline orchestration
//!
//! The two batch generators. Both share the same shape: one scratch
//! directory for the whole run, discover examples, then for each example
//! build → capture → post-process → copy into the output directory,
//! narrating every step. Processing is strictly sequential and the first
//! failure aborts the batch; a broken example is a bug to fix, not a gap to
//! paper over.
//!
//! The scratch directory is reused (overwritten, not reset) across examples
//! within one run. Concurrent invocations sharing a scratch directory are
//! unsupported.

use std::fs;

use crate::builder::build_example;
use crate::config::{PngSettings, SvgSettings};
use crate::discover::discover_examples;
use crate::error::Result;
use crate::exec::{capture_output, Pipeline, Stage};
use crate::geometry::Geometry;
use crate::html::{compose_document, load_stylesheet, validate_png};
use crate::record::record_svg;
use crate::svg::crop_svg_file;

/// Generate one SVG image per example.
///
/// Returns the number of artifacts produced. An input directory with no
/// example subdirectories succeeds with zero artifacts.
pub fn generate_svgs(settings: &SvgSettings) -> Result<usize> {
    let scratch = tempfile::tempdir()?;
    fs::create_dir_all(&settings.output_dir)?;

    let examples = discover_examples(&settings.input_dir)?;
    let mut generated = 0;

    for example in &examples {
        let image_name = format!("{}.svg", example.name);
        info!(
            "Generating image {} from example package {}",
            image_name,
            example.path.display()
        );

        let binary = build_example(example, scratch.path())?;

        info!("Binary built, running it to guess geometry...");
        let captured = capture_output(&binary)?;
        let geometry = Geometry::infer(&captured);
        if !geometry.fits_within(settings.cols as usize) {
            warn!(
                "output has a line of length {}, but cols={} was requested, so the image will be cropped",
                geometry.columns, settings.cols
            );
        }

        // One extra row for the recorder's prompt line; the crop removes it.
        let total_lines = geometry.rows + 1;

        info!("Minimal geometry {}, recording svg image...", geometry);
        let svg_path = scratch.path().join("output.svg");
        record_svg(
            &example.name,
            &binary,
            &svg_path,
            settings.cols,
            total_lines,
            &settings.template,
        )?;

        info!("Cropping the prompt line...");
        crop_svg_file(&svg_path, total_lines)?;

        let final_path = settings.output_dir.join(&image_name);
        fs::copy(&svg_path, &final_path)?;
        info!(
            "Image for example {} generated at {}",
            example.name,
            final_path.display()
        );
        generated += 1;
    }

    Ok(generated)
}

/// Generate one PNG image per example.
///
/// Returns the number of artifacts produced. An input directory with no
/// example subdirectories succeeds with zero artifacts.
pub fn generate_pngs(settings: &PngSettings) -> Result<usize> {
    let scratch = tempfile::tempdir()?;
    fs::create_dir_all(&settings.output_dir)?;

    let stylesheet = load_stylesheet(&settings.stylesheet)?;
    let examples = discover_examples(&settings.input_dir)?;
    let mut generated = 0;

    for example in &examples {
        let image_name = format!("{}.png", example.name);
        info!(
            "Generating image {} from example package {}",
            image_name,
            example.path.display()
        );

        let binary = build_example(example, scratch.path())?;

        info!("Capturing terminal output as html...");
        let fragment = Pipeline::new()
            .stage(Stage::new("faketty").arg(binary.to_string_lossy()))
            .stage(Stage::new("aha").arg("--no-header"))
            .run(&[])?;
        let document = compose_document(&String::from_utf8_lossy(&fragment), &stylesheet);

        info!("Rasterizing html at width {}px...", settings.width);
        let png = Pipeline::new()
            .stage(
                Stage::new("wkhtmltoimage")
                    .arg("--width")
                    .arg(settings.width.to_string())
                    .arg("--quality")
                    .arg("100")
                    .arg("-f")
                    .arg("png")
                    .arg("-")
                    .arg("-"),
            )
            .run(document.as_bytes())?;
        validate_png(&png)?;

        let final_path = settings.output_dir.join(&image_name);
        fs::write(&final_path, &png)?;
        info!(
            "Image for example {} generated at {}",
            example.name,
            final_path.display()
        );
        generated += 1;
    }

    Ok(generated)
}
