use std::io::{self, Cursor, Read, Seek};
use std::path::Path;

/// A seekable byte source the MP4 reader can pull samples from
pub trait SeekableStream: Read + Seek {
    /// Total length in bytes, leaving the position unchanged.
    fn stream_len(&mut self) -> io::Result<u64> {
        let pos = self.stream_position()?;
        let len = self.seek(io::SeekFrom::End(0))?;
        if pos != len {
            self.seek(io::SeekFrom::Start(pos))?;
        }
        Ok(len)
    }
}

/// Local file wrapper
pub struct LocalSeekableStream(std::fs::File);
impl LocalSeekableStream {
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(LocalSeekableStream(std::fs::File::open(path)?))
    }
}
impl Read for LocalSeekableStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.0.read(buf)
    }
}
impl Seek for LocalSeekableStream {
    fn seek(&mut self, pos: io::SeekFrom) -> io::Result<u64> {
        self.0.seek(pos)
    }
}
impl SeekableStream for LocalSeekableStream {
    fn stream_len(&mut self) -> io::Result<u64> {
        Ok(self.0.metadata()?.len())
    }
}

// In-memory files, used for synthetic input
impl<T: AsRef<[u8]>> SeekableStream for Cursor<T> {}
