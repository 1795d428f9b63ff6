//! Seed fill operations on binary images
//!
//! Image-level wrappers around the scanline fill: filling one component
//! into a destination image, extracting a component into a new image,
//! reconstructing every component touched by a seed image, and the two
//! border-driven operations (hole filling and border clearing).
//!
//! All connectivity is 4-way.

use crate::error::RegionResult;
use crate::scanline::FillScratch;
use scanfill_core::BitImage;

/// Flood fill from a seed point into `destination`.
///
/// Sets every pixel of `destination` that is 4-connected to the seed
/// through ON pixels of `source`. A seed outside the image or on an OFF
/// source pixel fills nothing.
///
/// # Arguments
///
/// * `source` - Fillable mask
/// * `destination` - Image receiving the fill; ON pixels act as visited
/// * `seed_x` - X coordinate of the seed point
/// * `seed_y` - Y coordinate of the seed point
///
/// # Returns
///
/// The number of destination pixels changed from 0 to 1.
///
/// # Errors
///
/// Returns an error if the two images differ in size.
pub fn floodfill(
    source: &BitImage,
    destination: &mut BitImage,
    seed_x: i32,
    seed_y: i32,
) -> RegionResult<u64> {
    source.check_same_size(destination)?;
    let layout = *source.layout();
    let stats = FillScratch::new().fill(
        &layout,
        seed_x,
        seed_y,
        source.data(),
        destination.data_mut(),
    )?;
    Ok(stats.filled)
}

/// Extract the component containing the seed point.
///
/// # Returns
///
/// A new image, the size of `source`, holding only the seed's
/// 4-connected component.
pub fn seedfill_binary(source: &BitImage, seed_x: i32, seed_y: i32) -> RegionResult<BitImage> {
    let mut output = source.create_template();
    floodfill(source, &mut output, seed_x, seed_y)?;
    Ok(output)
}

/// Binary reconstruction: keep every component of `mask` that contains an
/// ON pixel of `seed`.
///
/// # Arguments
///
/// * `seed` - Seed image; only pixels that are also ON in `mask` matter
/// * `mask` - Filling mask
///
/// # Errors
///
/// Returns an error if the two images differ in size.
pub fn seedfill_from_seeds(seed: &BitImage, mask: &BitImage) -> RegionResult<BitImage> {
    seed.check_same_size(mask)?;
    let layout = *mask.layout();
    let stride = layout.stride() as usize;
    let width = layout.width();
    let mut output = mask.create_template();
    let mut scratch = FillScratch::new();

    for y in 0..layout.height() {
        let seed_row = seed.row(y);
        let mask_row = mask.row(y);
        for i in 0..stride {
            let mut bits = seed_row[i] & mask_row[i];
            while bits != 0 {
                let x = (i as u32) * 32 + bits.trailing_zeros();
                if x >= width {
                    break;
                }
                scratch.fill_at(&layout, x, y, mask.data(), output.data_mut())?;
                bits &= bits - 1;
            }
        }
    }

    Ok(output)
}

/// Fill holes in a binary image
///
/// A hole is a region of OFF pixels that is not 4-connected to the image
/// border.
///
/// # Returns
///
/// A new image with holes filled.
pub fn fill_holes(pix: &BitImage) -> RegionResult<BitImage> {
    let background = pix.invert();
    let mut outside = pix.create_template();
    fill_from_border(&background, &mut outside)?;
    Ok(pix.or(&outside.invert())?)
}

/// Clear pixels connected to the border
///
/// Removes foreground components that are 4-connected to the image border.
///
/// # Returns
///
/// A new image with border-connected regions removed.
pub fn clear_border(pix: &BitImage) -> RegionResult<BitImage> {
    let mut touching = pix.create_template();
    fill_from_border(pix, &mut touching)?;
    Ok(pix.and_not(&touching)?)
}

/// Fill into `marker` from every border pixel of `mask`.
fn fill_from_border(mask: &BitImage, marker: &mut BitImage) -> RegionResult<()> {
    let layout = *mask.layout();
    let width = layout.width();
    let height = layout.height();
    let mut scratch = FillScratch::new();

    // Top and bottom edges
    for x in 0..width {
        scratch.fill_at(&layout, x, 0, mask.data(), marker.data_mut())?;
        scratch.fill_at(&layout, x, height - 1, mask.data(), marker.data_mut())?;
    }

    // Left and right edges
    for y in 1..height.saturating_sub(1) {
        scratch.fill_at(&layout, 0, y, mask.data(), marker.data_mut())?;
        scratch.fill_at(&layout, width - 1, y, mask.data(), marker.data_mut())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(rows: &[&str]) -> BitImage {
        BitImage::from_ascii(rows).unwrap()
    }

    #[test]
    fn test_floodfill_basic() {
        let source = image(&["#####", "#####", "#####", "#####", "#####"]);
        let mut destination = source.create_template();

        let count = floodfill(&source, &mut destination, 2, 2).unwrap();

        // All 25 pixels should be filled
        assert_eq!(count, 25);
        assert!(destination.equals(&source));
    }

    #[test]
    fn test_floodfill_bounded() {
        // Fill outside a ring; the enclosed pixel must stay empty
        let source = image(&["#####", "#...#", "#.#.#", "#...#", "#####"]);
        let background = source.invert();
        let mut destination = source.create_template();

        let count = floodfill(&background, &mut destination, 1, 1).unwrap();
        assert_eq!(count, 8);
        assert_eq!(destination.get_pixel(2, 2), Some(0));
        assert_eq!(destination.get_pixel(0, 0), Some(0));
    }

    #[test]
    fn test_floodfill_size_mismatch() {
        let source = BitImage::new(5, 5).unwrap();
        let mut destination = BitImage::new(5, 4).unwrap();
        assert!(floodfill(&source, &mut destination, 0, 0).is_err());
    }

    #[test]
    fn test_seedfill_binary() {
        let source = image(&["##..#", "..#.#", "###.#"]);
        let filled = seedfill_binary(&source, 0, 2).unwrap();
        assert_eq!(filled.to_ascii(), ".....\n..#..\n###..\n");
    }

    #[test]
    fn test_seedfill_binary_diagonal_not_connected() {
        let source = image(&["#.", ".#"]);
        let filled = seedfill_binary(&source, 0, 0).unwrap();
        assert_eq!(filled.to_ascii(), "#.\n..\n");
    }

    #[test]
    fn test_seedfill_from_seeds() {
        let mask = image(&["##..#", "....#", "##..."]);
        let seed = image(&[".#...", "....#", "....."]);
        let filled = seedfill_from_seeds(&seed, &mask).unwrap();
        assert_eq!(filled.to_ascii(), "##..#\n....#\n.....\n");
    }

    #[test]
    fn test_fill_holes() {
        // Ring with a hole in the middle
        let pix = image(&[".....", ".###.", ".#.#.", ".###.", "....."]);
        let filled = fill_holes(&pix).unwrap();

        // The hole should now be filled
        assert_eq!(filled.get_pixel(2, 2), Some(1));
        // But corners should still be 0
        assert_eq!(filled.get_pixel(0, 0), Some(0));
        assert_eq!(filled.count_pixels(), 9);
    }

    #[test]
    fn test_clear_border() {
        let pix = image(&[
            ".......",
            ".......",
            "##.....",
            "...##..",
            "...##..",
            ".......",
            ".......",
        ]);
        let cleared = clear_border(&pix).unwrap();

        // Border-touching region should be gone
        assert_eq!(cleared.get_pixel(0, 2), Some(0));
        assert_eq!(cleared.get_pixel(1, 2), Some(0));

        // Interior region should remain
        assert_eq!(cleared.get_pixel(3, 3), Some(1));
        assert_eq!(cleared.get_pixel(4, 4), Some(1));
        assert_eq!(cleared.count_pixels(), 4);
    }

    #[test]
    fn test_single_row_border_ops() {
        let pix = image(&["#.#"]);
        assert_eq!(clear_border(&pix).unwrap().count_pixels(), 0);
        assert_eq!(fill_holes(&pix).unwrap().count_pixels(), 2);
    }
}
