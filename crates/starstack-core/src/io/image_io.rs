use std::path::Path;

use image::{DynamicImage, ImageBuffer, Luma, LumaA, Pixel, Rgb, Rgba};
use ndarray::Array3;

use crate::consts::MAX_CHANNELS;
use crate::error::{Result, StarstackError};
use crate::frame::{Frame, FrameMetadata};

/// Load an image file into a Frame, keeping its channel count and bit depth.
///
/// 8-bit sources stay 8-bit; anything wider (16-bit, float) is read as 16-bit.
pub fn load_image(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    let color = img.color();
    let channels = color.channel_count() as usize;
    let bit_depth: u8 = if color.bytes_per_pixel() / color.channel_count() == 1 {
        8
    } else {
        16
    };
    let (w, h) = (img.width(), img.height());

    let samples: Vec<f32> = match (channels, bit_depth) {
        (1, 8) => widen(img.to_luma8().into_raw()),
        (1, _) => widen(img.to_luma16().into_raw()),
        (2, 8) => widen(img.to_luma_alpha8().into_raw()),
        (2, _) => widen(img.to_luma_alpha16().into_raw()),
        (3, 8) => widen(img.to_rgb8().into_raw()),
        (3, _) => widen(img.to_rgb16().into_raw()),
        (4, 8) => widen(img.to_rgba8().into_raw()),
        (4, _) => widen(img.to_rgba16().into_raw()),
        (n, _) => return Err(StarstackError::UnsupportedChannels(n)),
    };

    let data = Array3::from_shape_vec((h as usize, w as usize, channels), samples)
        .map_err(|_| StarstackError::InvalidDimensions {
            width: w,
            height: h,
        })?;

    Ok(Frame::new(data, bit_depth).with_metadata(FrameMetadata {
        frame_index: 0,
        source: Some(path.to_path_buf()),
    }))
}

/// Save a frame at its native bit depth; the format follows the file extension.
///
/// Samples are rounded and clamped to the representable range.
pub fn save_image(frame: &Frame, path: &Path) -> Result<()> {
    let img = to_dynamic_image(frame)?;
    img.save(path)?;
    Ok(())
}

fn to_dynamic_image(frame: &Frame) -> Result<DynamicImage> {
    let (h, w, channels) = frame.dim();
    if channels == 0 || channels > MAX_CHANNELS {
        return Err(StarstackError::UnsupportedChannels(channels));
    }
    let (w, h) = (w as u32, h as u32);
    let max = frame.max_value();
    // Standard layout iterates in (row, col, channel) order, matching interleaved pixels.
    let samples = frame.data.iter().map(|&v| v.round().clamp(0.0, max));

    let img = if frame.bit_depth <= 8 {
        let raw: Vec<u8> = samples.map(|v| v as u8).collect();
        match channels {
            1 => DynamicImage::ImageLuma8(buffer::<Luma<u8>>(w, h, raw)?),
            2 => DynamicImage::ImageLumaA8(buffer::<LumaA<u8>>(w, h, raw)?),
            3 => DynamicImage::ImageRgb8(buffer::<Rgb<u8>>(w, h, raw)?),
            _ => DynamicImage::ImageRgba8(buffer::<Rgba<u8>>(w, h, raw)?),
        }
    } else {
        let raw: Vec<u16> = samples.map(|v| v as u16).collect();
        match channels {
            1 => DynamicImage::ImageLuma16(buffer::<Luma<u16>>(w, h, raw)?),
            2 => DynamicImage::ImageLumaA16(buffer::<LumaA<u16>>(w, h, raw)?),
            3 => DynamicImage::ImageRgb16(buffer::<Rgb<u16>>(w, h, raw)?),
            _ => DynamicImage::ImageRgba16(buffer::<Rgba<u16>>(w, h, raw)?),
        }
    };
    Ok(img)
}

fn buffer<P: Pixel>(
    w: u32,
    h: u32,
    raw: Vec<P::Subpixel>,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>> {
    ImageBuffer::from_raw(w, h, raw).ok_or(StarstackError::InvalidDimensions {
        width: w,
        height: h,
    })
}

fn widen<T: Into<f32>>(raw: Vec<T>) -> Vec<f32> {
    raw.into_iter().map(Into::into).collect()
}
