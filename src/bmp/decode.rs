//! Uncompressed BMP decoder: headers plus the raw row-padded pixel buffer.
//!
//! The file layout is little-endian by definition, so every multi-byte
//! field goes through `from_le_bytes` rather than an in-memory struct cast.

use crate::error::BmpError;
use crate::image::{BMP_MAGIC, FILE_HEADER_SIZE, INFO_HEADER_SIZE, FileHeader, Image, InfoHeader};

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn set_position(&mut self, pos: usize) -> Result<(), BmpError> {
        if pos > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        if self.pos + 2 > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        let val = u16::from_le_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        Ok(val)
    }

    fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        if self.pos + 4 > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        let val = u32::from_le_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ]);
        self.pos += 4;
        Ok(val)
    }

    fn get_i32_le(&mut self) -> Result<i32, BmpError> {
        self.get_u32_le().map(|v| v as i32)
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], BmpError> {
        if self.remaining() < n {
            return Err(BmpError::UnexpectedEof);
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }
}

// ── Header parsing ──────────────────────────────────────────────────

fn read_file_header(cur: &mut Cursor) -> Result<FileHeader, BmpError> {
    let file_type = cur.get_u16_le()?;
    if file_type != BMP_MAGIC {
        return Err(BmpError::UnrecognizedFormat);
    }
    Ok(FileHeader {
        file_type,
        file_size: cur.get_u32_le()?,
        reserved1: cur.get_u16_le()?,
        reserved2: cur.get_u16_le()?,
        offset_data: cur.get_u32_le()?,
    })
}

fn read_info_header(cur: &mut Cursor) -> Result<InfoHeader, BmpError> {
    Ok(InfoHeader {
        size: cur.get_u32_le()?,
        width: cur.get_i32_le()?,
        height: cur.get_i32_le()?,
        planes: cur.get_u16_le()?,
        bit_count: cur.get_u16_le()?,
        compression: cur.get_u32_le()?,
        image_size: cur.get_u32_le()?,
        x_pixels_per_meter: cur.get_i32_le()?,
        y_pixels_per_meter: cur.get_i32_le()?,
        colors_used: cur.get_u32_le()?,
        colors_important: cur.get_u32_le()?,
    })
}

fn validate(file: &FileHeader, info: &InfoHeader) -> Result<(), BmpError> {
    if info.size < INFO_HEADER_SIZE {
        return Err(BmpError::InvalidHeader(format!(
            "info header size {} is below the 40-byte BITMAPINFOHEADER",
            info.size
        )));
    }
    if (file.offset_data as u64) < FILE_HEADER_SIZE as u64 + info.size as u64 {
        return Err(BmpError::InvalidHeader(format!(
            "pixel data offset {} overlaps the headers",
            file.offset_data
        )));
    }
    if info.width <= 0 {
        return Err(BmpError::InvalidHeader(format!(
            "width must be positive, got {}",
            info.width
        )));
    }
    if info.height == 0 {
        return Err(BmpError::InvalidHeader("height is zero".into()));
    }
    if info.height < 0 {
        return Err(BmpError::UnsupportedVariant(format!(
            "top-down row order (height {})",
            info.height
        )));
    }
    if info.compression != 0 {
        return Err(BmpError::UnsupportedVariant(format!(
            "compression scheme {}",
            info.compression
        )));
    }
    if info.bit_count != 24 && info.bit_count != 32 {
        return Err(BmpError::UnsupportedVariant(format!(
            "bit depth {}, expected 24 or 32",
            info.bit_count
        )));
    }
    Ok(())
}

/// Row length in bytes, padded to a 4-byte boundary.
fn row_stride(width: usize, bytes_per_pixel: usize, info: &InfoHeader) -> Result<usize, BmpError> {
    width
        .checked_mul(bytes_per_pixel)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
        .ok_or(BmpError::DimensionsTooLarge {
            width: info.width,
            height: info.height,
        })
}

// ── Full decode ─────────────────────────────────────────────────────

pub(crate) fn decode(data: &[u8]) -> Result<Image, BmpError> {
    let mut cur = Cursor::new(data);
    let file_header = read_file_header(&mut cur)?;
    let info_header = read_info_header(&mut cur)?;
    validate(&file_header, &info_header)?;

    let width = info_header.width as usize;
    let height = info_header.height as usize;
    let bytes_per_pixel = info_header.bit_count as usize / 8;
    let stride = row_stride(width, bytes_per_pixel, &info_header)?;
    let data_len = stride
        .checked_mul(height)
        .ok_or(BmpError::DimensionsTooLarge {
            width: info_header.width,
            height: info_header.height,
        })?;

    // The pixel data may start past the 54-byte header pair (extra header
    // bytes, or a palette this decoder ignores).
    cur.set_position(file_header.offset_data as usize)?;
    if cur.remaining() < data_len {
        return Err(BmpError::TruncatedPixelData {
            needed: data_len,
            actual: cur.remaining(),
        });
    }
    let pixels = cur.take(data_len)?.to_vec();

    Ok(Image::new(file_header, info_header, stride, pixels))
}
