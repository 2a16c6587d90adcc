use std::io::{self, Write};

use tracing::debug;

use crate::core::block::MafBlock;

/// First line of every MAF file we write
pub const MAF_VERSION_LINE: &str = "##maf version=1";

/// Trailer written by [`MafWriter::finish`]
pub const MAF_EOF_LINE: &str = "#eof";

/// Writes a complete MAF file: version header, blocks, `#eof` trailer
pub struct MafWriter<W: Write> {
    inner: W,
    blocks_written: usize,
    blocks_suppressed: usize,
}

impl<W: Write> MafWriter<W> {
    /// Wrap `inner` and write the file header.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from writing the header.
    pub fn new(mut inner: W) -> io::Result<Self> {
        writeln!(inner, "{MAF_VERSION_LINE}")?;
        writeln!(inner, "# {}", env!("CARGO_PKG_NAME"))?;
        writeln!(inner)?;
        Ok(Self {
            inner,
            blocks_written: 0,
            blocks_suppressed: 0,
        })
    }

    /// Print one block. Empty and all-gap blocks are skipped and counted as suppressed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the underlying writer.
    pub fn write_block(&mut self, block: &MafBlock) -> io::Result<bool> {
        let written = block.write_to(&mut self.inner)?;
        if written {
            self.blocks_written += 1;
        } else {
            debug!(header = block.header(), "Suppressed empty or all-gap block");
            self.blocks_suppressed += 1;
        }
        Ok(written)
    }

    #[must_use]
    pub fn blocks_written(&self) -> usize {
        self.blocks_written
    }

    #[must_use]
    pub fn blocks_suppressed(&self) -> usize {
        self.blocks_suppressed
    }

    /// Write the `#eof` trailer, flush, and hand back the inner writer.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from writing or flushing.
    pub fn finish(mut self) -> io::Result<W> {
        writeln!(self.inner, "{MAF_EOF_LINE}")?;
        self.inner.flush()?;
        Ok(self.inner)
    }
}
