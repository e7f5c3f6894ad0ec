/// Splits a byte stream into lines as chunks arrive. `\n`, `\r` and `\r\n`
/// all end a line; lines are decoded lossily once complete.
#[derive(Debug, Default)]
pub struct LineSplitter {
    pending: Vec<u8>,
    skip_lf: bool,
}

impl LineSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();
        let mut rest = chunk;

        if self.skip_lf && !rest.is_empty() {
            self.skip_lf = false;
            if let Some(stripped) = rest.strip_prefix(b"\n") {
                rest = stripped;
            }
        }

        while let Some(pos) = rest.iter().position(|&b| b == b'\n' || b == b'\r') {
            self.pending.extend_from_slice(&rest[..pos]);
            lines.push(self.take_line());

            let terminator_len = match &rest[pos..] {
                [b'\r', b'\n', ..] => 2,
                [b'\r'] => {
                    self.skip_lf = true;
                    1
                }
                _ => 1,
            };
            rest = &rest[pos + terminator_len..];
        }

        self.pending.extend_from_slice(rest);
        lines
    }

    /// Returns the trailing line if the stream did not end with a terminator.
    pub fn finish(mut self) -> Option<String> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.take_line())
        }
    }

    fn take_line(&mut self) -> String {
        let line = String::from_utf8_lossy(&self.pending).into_owned();
        self.pending.clear();
        line
    }
}
