//! glyphgrid library crate.
//!
//! Converts PNG, JPEG and GIF images into an eight-level grid of block
//! glyphs for terminal display.
//!
//! ```no_run
//! use glyphgrid::glyph::DecoderRegistry;
//! use glyphgrid::{pipeline, PipelineConfig};
//!
//! let config = PipelineConfig::new("photo.jpg", 0.1).unwrap().with_reverse(true);
//! let grid = pipeline::convert(&config, &DecoderRegistry::default()).unwrap();
//! print!("{}", grid);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod glyph;
pub mod pipeline;
pub mod pipeline_config;

pub use error::ConvertError;
pub use pipeline_config::PipelineConfig;
