/// Substring closing a PEM certificate record
///
/// Detection is substring based, so `-----END CERTIFICATE-----` with
/// trailing whitespace or a carriage return still closes the record.
pub const END_MARKER: &str = "END CERTIFICATE";

/// CertificateBlock value object: the raw lines of exactly one PEM record
///
/// Invariant: the last line always contains [`END_MARKER`]. Lines that
/// preceded the record in its bundle (comments, blank lines) are kept.
/// Blocks are only produced by the bundle splitter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CertificateBlock {
    lines: Vec<String>,
}

impl CertificateBlock {
    /// Splitter-side constructor; the caller guarantees the invariant.
    pub(crate) fn from_closed_lines(lines: Vec<String>) -> Self {
        debug_assert!(lines.last().is_some_and(|l| l.contains(END_MARKER)));
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Block text as written to the staging file, newline terminated
    pub fn to_pem(&self) -> String {
        let mut pem = self.lines.join("\n");
        pem.push('\n');
        pem
    }
}
