//! Line-buffered framing over a raw byte stream.
//!
//! TCP gives the client arbitrary chunks with no message boundaries; IRC's
//! only boundary is the textual CRLF terminator. Received chunks are decoded
//! and accumulated until at least one full line is available, and lines come
//! out in exactly the order the bytes arrived, no matter how the stream was
//! chunked -- including a chunk boundary that splits the terminator itself.

/// Bytes requested per socket read.
pub const READ_CHUNK_SIZE: usize = 4096;

/// Accumulates decoded text and yields complete CRLF-terminated lines.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: String,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a received chunk. Invalid UTF-8 sequences are replaced; the
    /// decode itself never fails.
    pub fn push_bytes(&mut self, chunk: &[u8]) {
        self.buf.push_str(&String::from_utf8_lossy(chunk));
    }

    /// Pop the first complete line, with its terminator stripped. Returns
    /// `None` while the buffer holds no full line; the partial tail stays
    /// buffered until its terminator arrives.
    pub fn next_line(&mut self) -> Option<String> {
        let end = self.buf.find("\r\n")?;
        let line = self.buf[..end].to_string();
        self.buf.drain(..end + 2);
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(buffer: &mut LineBuffer) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = buffer.next_line() {
            lines.push(line);
        }
        lines
    }

    #[test]
    fn test_single_complete_line() {
        let mut buffer = LineBuffer::new();
        buffer.push_bytes(b"PING :token\r\n");
        assert_eq!(drain(&mut buffer), vec!["PING :token"]);
    }

    #[test]
    fn test_multiple_lines_in_one_chunk() {
        let mut buffer = LineBuffer::new();
        buffer.push_bytes(b"first\r\nsecond\r\nthird\r\n");
        assert_eq!(drain(&mut buffer), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_line_spanning_chunks_dispatches_once() {
        let mut buffer = LineBuffer::new();
        buffer.push_bytes(b":alice!a@host PRIV");
        assert_eq!(buffer.next_line(), None);
        buffer.push_bytes(b"MSG #chan :hi\r\n");
        assert_eq!(drain(&mut buffer), vec![":alice!a@host PRIVMSG #chan :hi"]);
    }

    #[test]
    fn test_terminator_split_across_chunks() {
        let mut buffer = LineBuffer::new();
        buffer.push_bytes(b"hello\r");
        assert_eq!(buffer.next_line(), None);
        buffer.push_bytes(b"\nworld\r\n");
        assert_eq!(drain(&mut buffer), vec!["hello", "world"]);
    }

    #[test]
    fn test_order_preserved_across_arbitrary_chunking() {
        let stream = b"one\r\ntwo\r\nthree\r\nfour\r\n";
        // Every possible split point of the stream into two chunks.
        for split in 0..stream.len() {
            let mut buffer = LineBuffer::new();
            let mut lines = Vec::new();
            buffer.push_bytes(&stream[..split]);
            lines.extend(drain(&mut buffer));
            buffer.push_bytes(&stream[split..]);
            lines.extend(drain(&mut buffer));
            assert_eq!(lines, vec!["one", "two", "three", "four"]);
        }
    }

    #[test]
    fn test_lone_newline_is_not_a_terminator() {
        let mut buffer = LineBuffer::new();
        buffer.push_bytes(b"unix\nstyle\r\n");
        assert_eq!(drain(&mut buffer), vec!["unix\nstyle"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        let mut buffer = LineBuffer::new();
        buffer.push_bytes(b"bad \xff\xfe bytes\r\n");
        let lines = drain(&mut buffer);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("bad "));
        assert!(lines[0].ends_with(" bytes"));
    }

    #[test]
    fn test_empty_line() {
        let mut buffer = LineBuffer::new();
        buffer.push_bytes(b"\r\nnext\r\n");
        assert_eq!(drain(&mut buffer), vec!["", "next"]);
    }
}
