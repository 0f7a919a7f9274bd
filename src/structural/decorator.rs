//! Decorator: wrap a data source in encryption and compression layers, in any
//! combination, without the caller noticing.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::rc::Rc;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use sha2::{Digest, Sha256};
use tracing::debug;

pub trait DataSource {
    fn write_data(&mut self, data: &[u8]) -> io::Result<()>;
    fn read_data(&mut self) -> io::Result<Vec<u8>>;
}

#[derive(Debug, Clone)]
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DataSource for FileDataSource {
    fn write_data(&mut self, data: &[u8]) -> io::Result<()> {
        debug!(path = %self.path.display(), bytes = data.len(), "writing file");
        fs::write(&self.path, data)
    }

    fn read_data(&mut self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }
}

/// In-memory source. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryDataSource {
    buffer: Rc<RefCell<Vec<u8>>>,
}

impl MemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Vec<u8> {
        self.buffer.borrow().clone()
    }
}

impl DataSource for MemoryDataSource {
    fn write_data(&mut self, data: &[u8]) -> io::Result<()> {
        *self.buffer.borrow_mut() = data.to_vec();
        Ok(())
    }

    fn read_data(&mut self) -> io::Result<Vec<u8>> {
        Ok(self.buffer.borrow().clone())
    }
}

/// XOR with a keystream of SHA-256 blocks over `key || block counter`.
/// Applying it twice gives back the input.
pub struct EncryptionDecorator {
    wrappee: Box<dyn DataSource>,
    key: Vec<u8>,
}

impl EncryptionDecorator {
    pub fn new(wrappee: Box<dyn DataSource>, key: impl AsRef<[u8]>) -> Self {
        Self {
            wrappee,
            key: key.as_ref().to_vec(),
        }
    }

    fn apply_keystream(&self, data: &[u8]) -> Vec<u8> {
        data.chunks(32)
            .enumerate()
            .flat_map(|(block, chunk)| {
                let mut hasher = Sha256::new();
                hasher.update(&self.key);
                hasher.update((block as u64).to_le_bytes());
                let pad = hasher.finalize();
                chunk
                    .iter()
                    .zip(pad)
                    .map(|(byte, k)| byte ^ k)
                    .collect::<Vec<u8>>()
            })
            .collect()
    }
}

impl DataSource for EncryptionDecorator {
    fn write_data(&mut self, data: &[u8]) -> io::Result<()> {
        let encrypted = self.apply_keystream(data);
        self.wrappee.write_data(&encrypted)
    }

    fn read_data(&mut self) -> io::Result<Vec<u8>> {
        let encrypted = self.wrappee.read_data()?;
        Ok(self.apply_keystream(&encrypted))
    }
}

pub struct CompressionDecorator {
    wrappee: Box<dyn DataSource>,
    level: Compression,
}

impl CompressionDecorator {
    pub fn new(wrappee: Box<dyn DataSource>) -> Self {
        Self {
            wrappee,
            level: Compression::default(),
        }
    }

    pub fn with_level(wrappee: Box<dyn DataSource>, level: u32) -> Self {
        Self {
            wrappee,
            level: Compression::new(level.min(9)),
        }
    }
}

impl DataSource for CompressionDecorator {
    fn write_data(&mut self, data: &[u8]) -> io::Result<()> {
        let mut encoder = GzEncoder::new(Vec::new(), self.level);
        encoder.write_all(data)?;
        let compressed = encoder.finish()?;
        debug!(before = data.len(), after = compressed.len(), "compressed");
        self.wrappee.write_data(&compressed)
    }

    fn read_data(&mut self) -> io::Result<Vec<u8>> {
        let compressed = self.wrappee.read_data()?;
        let mut decoder = GzDecoder::new(compressed.as_slice());
        let mut data = Vec::new();
        decoder.read_to_end(&mut data)?;
        Ok(data)
    }
}

/// Stack the configured layers on top of `source`: compression inside, encryption outside.
pub fn layered(
    source: Box<dyn DataSource>,
    encryption_key: Option<&str>,
    compression: bool,
) -> Box<dyn DataSource> {
    let mut source = source;
    if compression {
        source = Box::new(CompressionDecorator::new(source));
    }
    if let Some(key) = encryption_key {
        source = Box::new(EncryptionDecorator::new(source, key));
    }
    source
}

pub struct SalaryManager {
    source: Box<dyn DataSource>,
}

impl SalaryManager {
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn save(&mut self, salary: u64) -> io::Result<()> {
        self.source.write_data(salary.to_string().as_bytes())
    }

    pub fn load(&mut self) -> io::Result<u64> {
        let raw = self.source.read_data()?;
        let text = String::from_utf8(raw)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        text.trim()
            .parse()
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

pub fn demo(encryption_key: Option<&str>, compression: bool) -> io::Result<Vec<String>> {
    let storage = MemoryDataSource::new();
    let mut manager = SalaryManager::new(layered(
        Box::new(storage.clone()),
        encryption_key,
        compression,
    ));

    manager.save(11_000)?;
    let stored = storage.contents();
    let loaded = manager.load()?;

    Ok(vec![
        format!(
            "layers: encryption={} compression={compression}",
            encryption_key.is_some()
        ),
        format!("stored {} bytes: {:02x?}", stored.len(), &stored[..stored.len().min(8)]),
        format!("loaded salary: {loaded}"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_source_round_trip() {
        let mut source = MemoryDataSource::new();
        source.write_data(b"hello").unwrap();
        assert_eq!(source.read_data().unwrap(), b"hello");
    }

    #[test]
    fn test_encryption_hides_plaintext() {
        let storage = MemoryDataSource::new();
        let mut encrypted = EncryptionDecorator::new(Box::new(storage.clone()), "secret");
        let message = b"a message longer than one thirty-two byte keystream block";
        encrypted.write_data(message).unwrap();

        assert_ne!(storage.contents(), message.to_vec());
        assert_eq!(storage.contents().len(), message.len());
        assert_eq!(encrypted.read_data().unwrap(), message.to_vec());
    }

    #[test]
    fn test_wrong_key_does_not_decrypt() {
        let storage = MemoryDataSource::new();
        EncryptionDecorator::new(Box::new(storage.clone()), "right")
            .write_data(b"payload")
            .unwrap();
        let read = EncryptionDecorator::new(Box::new(storage), "wrong")
            .read_data()
            .unwrap();
        assert_ne!(read, b"payload".to_vec());
    }

    #[test]
    fn test_compression_shrinks_repetitive_data() {
        let storage = MemoryDataSource::new();
        let mut compressed = CompressionDecorator::with_level(Box::new(storage.clone()), 9);
        let data = vec![b'a'; 4096];
        compressed.write_data(&data).unwrap();
        assert!(storage.contents().len() < data.len() / 10);
        assert_eq!(compressed.read_data().unwrap(), data);
    }

    #[test]
    fn test_corrupt_compressed_data_is_an_error() {
        let mut storage = MemoryDataSource::new();
        storage.write_data(b"not gzip").unwrap();
        let mut compressed = CompressionDecorator::new(Box::new(storage));
        assert!(compressed.read_data().is_err());
    }

    #[test]
    fn test_salary_through_file_with_both_layers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("salary.dat");
        let source = layered(Box::new(FileDataSource::new(&path)), Some("k"), true);
        let mut manager = SalaryManager::new(source);

        manager.save(11_000).unwrap();
        let on_disk = fs::read(&path).unwrap();
        assert_ne!(on_disk, b"11000".to_vec());
        assert_eq!(manager.load().unwrap(), 11_000);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let mut source = FileDataSource::new(dir.path().join("missing"));
        let err = source.read_data().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_salary_rejects_garbage() {
        let mut storage = MemoryDataSource::new();
        storage.write_data(b"lots").unwrap();
        let mut manager = SalaryManager::new(Box::new(storage));
        assert_eq!(manager.load().unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_demo_without_layers_stores_plaintext() {
        let lines = demo(None, false).unwrap();
        assert!(lines[1].starts_with("stored 5 bytes"));
        assert_eq!(lines[2], "loaded salary: 11000");
    }

    #[test]
    fn test_demo_with_layers() {
        let lines = demo(Some("key"), true).unwrap();
        assert_eq!(lines[0], "layers: encryption=true compression=true");
        assert_eq!(lines[2], "loaded salary: 11000");
    }
}
