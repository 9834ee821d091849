/*! Record sources.

Dumps are read as streams of [RawRecord], either from JSON lines files or from (possibly huge) JSON arrays,
that are never loaded in memory as a whole. Gzipped files are transparently decompressed.
!*/
mod archive;

pub use archive::{Archive, ArchiveFormat, RawRecord};
