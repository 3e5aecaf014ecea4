//! Dominant-color extraction over real image files.

use std::path::PathBuf;

use image::{Rgb as Pixel, RgbImage};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

use color_engine::{ExtractStrategy, Rgb};
use tinct::commands;
use tinct::report::OutputFormat;

fn write_png(dir: &TempDir, name: &str, img: RgbImage) -> PathBuf {
    let path = dir.path().join(name);
    img.save(&path).unwrap();
    path
}

fn extracted_hex(path: &PathBuf, strategy: ExtractStrategy) -> String {
    let output = commands::extract(path, strategy, OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    parsed[0]["hex"].as_str().unwrap().to_string()
}

/// Resampling may shift a channel by one step; the extracted color must
/// still land on the expected tone.
fn assert_near(hex: &str, expected: Rgb) {
    let actual: Rgb = hex.parse().unwrap();
    for (a, e) in actual.channels().into_iter().zip(expected.channels()) {
        let diff = (a as i32 - e as i32).abs();
        assert!(diff <= 1, "extracted {hex}, expected about {expected}");
    }
}

#[test]
fn mode_returns_solid_image_color() {
    let dir = TempDir::new().unwrap();
    let path = write_png(
        &dir,
        "solid.png",
        RgbImage::from_pixel(120, 80, Pixel([0, 128, 128])),
    );

    assert_near(
        &extracted_hex(&path, ExtractStrategy::Mode),
        Rgb::new(0, 128, 128),
    );
}

#[test]
fn mode_returns_majority_color_of_split_image() {
    // 70% teal, 30% white; downsampling blends only the boundary column
    let mut img = RgbImage::from_pixel(100, 100, Pixel([0, 128, 128]));
    for x in 70..100 {
        for y in 0..100 {
            img.put_pixel(x, y, Pixel([255, 255, 255]));
        }
    }
    let dir = TempDir::new().unwrap();
    let path = write_png(&dir, "split.png", img);

    assert_near(
        &extracted_hex(&path, ExtractStrategy::Mode),
        Rgb::new(0, 128, 128),
    );
}

#[test]
fn mean_averages_at_native_resolution() {
    let mut img = RgbImage::new(2, 1);
    img.put_pixel(0, 0, Pixel([10, 10, 10]));
    img.put_pixel(1, 0, Pixel([20, 20, 20]));
    let dir = TempDir::new().unwrap();
    let path = write_png(&dir, "pair.png", img);

    assert_eq!(extracted_hex(&path, ExtractStrategy::Mean), "#0F0F0F");
}

#[test]
fn cluster_center_of_solid_image_matches_its_color() {
    let dir = TempDir::new().unwrap();
    let path = write_png(
        &dir,
        "solid.png",
        RgbImage::from_pixel(64, 64, Pixel([10, 180, 90])),
    );

    assert_near(
        &extracted_hex(&path, ExtractStrategy::ClusterCenter { clusters: 1 }),
        Rgb::new(10, 180, 90),
    );
}

#[test]
fn cluster_dominant_tracks_majority_tone() {
    // 90% warm red, 10% cold blue
    let mut img = RgbImage::from_pixel(100, 100, Pixel([220, 30, 30]));
    for x in 90..100 {
        for y in 0..100 {
            img.put_pixel(x, y, Pixel([20, 20, 220]));
        }
    }
    let dir = TempDir::new().unwrap();
    let path = write_png(&dir, "two_tone.png", img);

    let hex = extracted_hex(&path, ExtractStrategy::ClusterCenter { clusters: 2 });
    let color: Rgb = hex.parse().unwrap();
    assert!(
        color.r > color.b,
        "dominant center {hex} should lean toward the majority tone"
    );
}

#[test]
fn non_image_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fake.png");
    std::fs::write(&path, b"this is not an image").unwrap();

    let result = commands::extract(&path, ExtractStrategy::Mode, OutputFormat::Text);
    assert!(result.is_err(), "format sniffing must reject non-images");
}
