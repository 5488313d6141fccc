//! PNG export of composited rasters

use image::{ImageBuffer, Rgba};
use std::path::Path;

use crate::io::configuration::{MOTIF_COLOR, OFF_COLOR, ON_COLOR};
use crate::io::error::{MosaicError, Result};
use crate::spatial::pixel::Pixel;
use crate::spatial::raster::Raster;

/// Colour of one pixel in exported images
pub const fn pixel_color(pixel: Pixel) -> Rgba<u8> {
    match pixel {
        Pixel::Off => Rgba(OFF_COLOR),
        Pixel::On => Rgba(ON_COLOR),
        Pixel::Motif => Rgba(MOTIF_COLOR),
    }
}

/// Convert a raster into an RGBA image, one image pixel per raster pixel
pub fn raster_to_image(raster: &Raster) -> ImageBuffer<Rgba<u8>, Vec<u8>> {
    let mut img = ImageBuffer::new(raster.cols() as u32, raster.rows() as u32);
    for ((row, col), &pixel) in raster.pixels().indexed_iter() {
        img.put_pixel(col as u32, row as u32, pixel_color(pixel));
    }
    img
}

/// Export the raster as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The raster is empty
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_raster_as_png(raster: &Raster, output_path: &Path) -> Result<()> {
    if raster.rows() == 0 || raster.cols() == 0 {
        return Err(MosaicError::InvalidParameter {
            parameter: "raster",
            value: format!("{}x{}", raster.rows(), raster.cols()),
            reason: "cannot export an empty raster".to_string(),
        });
    }

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    raster_to_image(raster)
        .save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
