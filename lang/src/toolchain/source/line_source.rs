use std::io::BufRead;

use bstr::ByteSlice;

/// Presents a buffered input stream as a sequence of lines.
///
/// Lines are split on `\n`, with a trailing `\r` removed, and the final line is returned even if
/// it has no terminator. Input that isn't valid utf-8 is decoded lossily, so invalid sequences
/// show up as U+FFFD characters for the lexer to flag instead of failing the read. A read error
/// ends the sequence just like the end of the stream does, after handing out any partial line
/// read before the failure. Once the sequence has ended it stays ended.
pub struct LineSource<R> {
    reader: R,
    buffer: Vec<u8>,
    exhausted: bool,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> LineSource<R> {
        LineSource { reader, buffer: Vec::new(), exhausted: false }
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Iterator for LineSource<R> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }

        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => {
                log::trace!("input exhausted");
                self.exhausted = true;
                None
            }
            Ok(_) => {
                let line = trim_line_end(&self.buffer);
                Some(line.to_str_lossy().into_owned())
            }
            Err(e) => {
                log::debug!("input read failed, treating as end of input: {}", e);
                self.exhausted = true;
                // Whatever arrived before the failure is still a line.
                if self.buffer.is_empty() {
                    return None;
                }
                Some(trim_line_end(&self.buffer).to_str_lossy().into_owned())
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for LineSource<R> {}

fn trim_line_end(bytes: &[u8]) -> &[u8] {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    bytes.strip_suffix(b"\r").unwrap_or(bytes)
}
