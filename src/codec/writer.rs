use super::section::SectionTag;

/// Binary writer for PUD data
#[derive(Debug, Default)]
pub struct BinaryWriter {
    data: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, v: u8) {
        self.data.push(v);
    }

    pub fn write_u16_le(&mut self, v: u16) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u32_le(&mut self, v: u32) {
        self.data.extend_from_slice(&v.to_le_bytes());
    }

    /// Write a section header followed by its payload.
    ///
    /// Panics if the payload does not fit the u32 length field.
    pub fn write_section(&mut self, tag: SectionTag, payload: &[u8]) {
        let len = u32::try_from(payload.len()).expect("section payload exceeds u32::MAX bytes");
        self.write_bytes(tag.as_bytes());
        self.write_u32_le(len);
        self.write_bytes(payload);
    }
}
