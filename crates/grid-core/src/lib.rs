// File: crates/grid-core/src/lib.rs
// Summary: Core library entry point; exports the grid component, registry, and collaborators.

pub mod dimension;
pub mod error;
pub mod grid;
pub mod key;
pub mod reconcile;
pub mod registry;
pub mod surface;

pub use dimension::{Dimension, MemoryDimension};
pub use error::GridError;
pub use grid::{DataGrid, SectionEntry, GRID_ITEM_CLASS, GRID_SECTION_CLASS};
pub use key::{ascending, descending, Key, OrderFn};
pub use registry::{ChartHandle, ChartRegistry, GridChart, DEFAULT_GROUP};
pub use surface::{Element, Surface};
