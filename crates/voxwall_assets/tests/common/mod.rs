//! Test-only `.vox` writer.
//!
//! The crate is a decoder only; fixtures are assembled byte by byte here.

/// Builds `.vox` byte streams chunk by chunk.
pub struct VoxWriter {
    buffer: Vec<u8>,
}

impl VoxWriter {
    /// Starts a file with magic, version and the MAIN header.
    pub fn new() -> Self {
        let mut writer = Self { buffer: Vec::new() };
        writer.write_bytes(b"VOX ");
        writer.write_i32(150);
        writer.chunk_header(b"MAIN");
        writer
    }

    /// Starts an empty buffer with no header at all.
    pub fn raw() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buffer.extend_from_slice(bytes);
        self
    }

    pub fn write_i32(&mut self, value: i32) -> &mut Self {
        self.buffer.extend_from_slice(&value.to_le_bytes());
        self
    }

    /// Writes an id followed by zero content/children sizes.
    pub fn chunk_header(&mut self, id: &[u8; 4]) -> &mut Self {
        self.write_bytes(id).write_i32(0).write_i32(0)
    }

    pub fn pack(&mut self, frame_count: i32) -> &mut Self {
        self.chunk_header(b"PACK").write_i32(frame_count)
    }

    /// Writes SIZE with the file's field order: width, depth, height.
    pub fn size(&mut self, width: i32, depth: i32, height: i32) -> &mut Self {
        self.chunk_header(b"SIZE")
            .write_i32(width)
            .write_i32(depth)
            .write_i32(height)
    }

    /// Writes XYZI with file-space voxels `(x, y, z, index)`.
    pub fn xyzi(&mut self, voxels: &[[u8; 4]]) -> &mut Self {
        let count = i32::try_from(voxels.len()).expect("fixture too large");
        self.chunk_header(b"XYZI").write_i32(count);
        for voxel in voxels {
            self.write_bytes(voxel);
        }
        self
    }

    pub fn frame(&mut self, size: [i32; 3], voxels: &[[u8; 4]]) -> &mut Self {
        self.size(size[0], size[1], size[2]).xyzi(voxels)
    }

    /// Writes RGBA with the given quadruples.
    pub fn rgba(&mut self, entries: &[[u8; 4]]) -> &mut Self {
        self.chunk_header(b"RGBA");
        for entry in entries {
            self.write_bytes(entry);
        }
        self
    }

    pub fn finish(&self) -> Vec<u8> {
        self.buffer.clone()
    }
}

/// The single-voxel file: one 1x1x1 frame holding palette index 7.
pub fn minimal_file() -> Vec<u8> {
    VoxWriter::new().frame([1, 1, 1], &[[0, 0, 0, 7]]).finish()
}

/// 255 distinct palette entries: entry `i` is `(i, 255 - i, i / 2, 255)`.
pub fn gradient_entries() -> Vec<[u8; 4]> {
    (0..=254u8).map(|i| [i, 255 - i, i / 2, 255]).collect()
}
