use crate::certificate_discovery::domain::{CertificateBlock, END_MARKER};

/// PemBundleSplitter service splitting a bundle into individual PEM records
///
/// Lines are accumulated until one contains the END marker, at which point
/// the accumulator becomes one block. Anything left over at end of input is
/// an unterminated fragment and is dropped. Text between records (blank
/// lines, `# Issuer:` comments) ends up at the start of the following block.
pub struct PemBundleSplitter;

impl PemBundleSplitter {
    /// Splits raw bundle text. Both `\n` and `\r\n` line endings are accepted.
    pub fn split(content: &str) -> Vec<CertificateBlock> {
        Self::split_lines(content.lines())
    }

    /// Splits an already line-separated bundle
    pub fn split_lines<I, S>(lines: I) -> Vec<CertificateBlock>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut blocks = Vec::new();
        let mut accumulator: Vec<String> = Vec::new();

        for line in lines {
            let line = line.into();
            let closes_record = line.contains(END_MARKER);
            accumulator.push(line);

            if closes_record {
                blocks.push(CertificateBlock::from_closed_lines(std::mem::take(
                    &mut accumulator,
                )));
            }
        }

        blocks
    }
}
