/// Postcard rendering module
///
/// This module turns the form state into the exported artifact:
/// - `typeface.rs` - system font discovery for glyph drawing
/// - `postcard.rs` - offscreen composition of the card bitmap
/// - `export.rs` - PNG encoding and the async download-style write
///
/// The live on-screen preview is built separately by the iced view; the
/// composition here mirrors its layout pixel for pixel at export time.

pub mod export;
pub mod postcard;
pub mod typeface;

pub use postcard::PostcardSurface;
