//! Facade: `VideoConverter::convert` is the one call clients need; the codec,
//! bitrate and audio classes behind it stay out of their way.

use std::fmt;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FacadeError {
    #[error("cannot detect codec of '{0}'")]
    UnknownSourceCodec(String),
    #[error("unsupported target format '{0}', expected mp4 or ogg")]
    UnsupportedFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Ogg,
    Mpeg4,
}

impl Codec {
    fn extension(self) -> &'static str {
        match self {
            Codec::Ogg => "ogg",
            Codec::Mpeg4 => "mp4",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "ogg" | "ogv" => Some(Codec::Ogg),
            "mp4" | "m4v" => Some(Codec::Mpeg4),
            _ => None,
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

// =============================================================================
// Subsystem
// =============================================================================

#[derive(Debug, Clone)]
struct VideoFile {
    name: String,
}

struct CodecFactory;

impl CodecFactory {
    fn extract(file: &VideoFile) -> Result<Codec, FacadeError> {
        Path::new(&file.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Codec::from_extension)
            .ok_or_else(|| FacadeError::UnknownSourceCodec(file.name.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Buffer {
    codec: Codec,
    frames: Vec<String>,
}

struct BitrateReader;

impl BitrateReader {
    fn read(file: &VideoFile, codec: Codec) -> Buffer {
        Buffer {
            codec,
            frames: (0..3).map(|i| format!("{}#{i}", file.name)).collect(),
        }
    }

    fn convert(buffer: Buffer, destination: Codec) -> Buffer {
        Buffer {
            codec: destination,
            frames: buffer.frames,
        }
    }
}

struct AudioMixer;

impl AudioMixer {
    fn fix(buffer: Buffer) -> (Buffer, bool) {
        (buffer, true)
    }
}

// =============================================================================
// Facade
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    pub name: String,
    pub source_codec: Codec,
    pub codec: Codec,
    pub frames: usize,
    pub audio_fixed: bool,
}

#[derive(Debug, Default)]
pub struct VideoConverter;

impl VideoConverter {
    pub fn new() -> Self {
        Self
    }

    pub fn convert(&self, file_name: &str, format: &str) -> Result<ConvertedFile, FacadeError> {
        let destination = Codec::from_extension(format)
            .ok_or_else(|| FacadeError::UnsupportedFormat(format.to_string()))?;
        let file = VideoFile {
            name: file_name.to_string(),
        };
        let source_codec = CodecFactory::extract(&file)?;
        debug!(file = file_name, %source_codec, %destination, "converting");

        let buffer = BitrateReader::read(&file, source_codec);
        let buffer = BitrateReader::convert(buffer, destination);
        let (buffer, audio_fixed) = AudioMixer::fix(buffer);

        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(file_name);
        Ok(ConvertedFile {
            name: format!("{stem}.{}", buffer.codec.extension()),
            source_codec,
            codec: buffer.codec,
            frames: buffer.frames.len(),
            audio_fixed,
        })
    }
}

pub fn demo() -> Result<Vec<String>, FacadeError> {
    let converter = VideoConverter::new();
    let mp4 = converter.convert("funny-cats.ogg", "mp4")?;
    let mut lines = vec![format!(
        "{} ({} -> {}, {} frames, audio fixed: {})",
        mp4.name, mp4.source_codec, mp4.codec, mp4.frames, mp4.audio_fixed
    )];
    if let Err(err) = converter.convert("funny-cats.ogg", "avi") {
        lines.push(format!("error: {err}"));
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_ogg_to_mp4() {
        let file = VideoConverter::new().convert("funny-cats.ogg", "mp4").unwrap();
        assert_eq!(
            file,
            ConvertedFile {
                name: "funny-cats.mp4".into(),
                source_codec: Codec::Ogg,
                codec: Codec::Mpeg4,
                frames: 3,
                audio_fixed: true,
            }
        );
    }

    #[test]
    fn test_format_is_case_insensitive() {
        let file = VideoConverter::new().convert("clip.MP4", "OGG").unwrap();
        assert_eq!(file.name, "clip.ogg");
        assert_eq!(file.source_codec, Codec::Mpeg4);
    }

    #[test]
    fn test_unknown_source_codec() {
        assert_eq!(
            VideoConverter::new().convert("clip.avi", "mp4"),
            Err(FacadeError::UnknownSourceCodec("clip.avi".into()))
        );
        assert!(VideoConverter::new().convert("noextension", "mp4").is_err());
    }

    #[test]
    fn test_unsupported_target() {
        assert_eq!(
            VideoConverter::new().convert("clip.ogg", "avi"),
            Err(FacadeError::UnsupportedFormat("avi".into()))
        );
    }

    #[test]
    fn test_demo() {
        let lines = demo().unwrap();
        assert!(lines[0].starts_with("funny-cats.mp4 (ogg -> mp4"));
        assert!(lines[1].contains("avi"));
    }
}
