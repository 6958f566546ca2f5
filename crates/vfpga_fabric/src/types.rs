//! Tile types and the fabric grid.

use serde::{Deserialize, Serialize};
use vfpga_common::Coord;

use crate::error::FabricError;

/// The kind of logic a tile provides.
///
/// This is a closed, tagged variant: the fabric never grows a new tile kind
/// at runtime, so callers can match exhaustively instead of treating it as
/// an open class hierarchy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TileType {
    /// A configurable logic block: LUTs and flip-flops.
    Clb,
    /// A block RAM tile.
    Bram,
    /// A DSP (multiply-accumulate) tile.
    Dsp,
    /// An I/O tile at the fabric boundary.
    Io,
}

impl std::fmt::Display for TileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TileType::Clb => "CLB",
            TileType::Bram => "BRAM",
            TileType::Dsp => "DSP",
            TileType::Io => "IO",
        };
        write!(f, "{s}")
    }
}

/// A single tile in the fabric grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Tile {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
    /// The tile's kind.
    pub tile_type: TileType,
}

/// The virtual fabric: a rectangular grid of tiles.
///
/// Construction is columnar: every tile in `bram_column` is a BRAM tile,
/// every tile in `dsp_column` is a DSP tile, and all other tiles are CLBs.
/// `Io` tiles exist in the type system but are never placed on by the
/// columnar construction rule; they are reserved for a future I/O-ring
/// extension.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fabric {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl Fabric {
    /// Builds a fabric of the given dimensions, with the given columns
    /// assigned to BRAM and DSP tiles respectively. All other tiles are CLBs.
    pub fn new(width: u32, height: u32, bram_column: u32, dsp_column: u32) -> Result<Self, FabricError> {
        if width == 0 || height == 0 {
            return Err(FabricError::EmptyFabric { width, height });
        }
        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let tile_type = if x == bram_column {
                    TileType::Bram
                } else if x == dsp_column {
                    TileType::Dsp
                } else {
                    TileType::Clb
                };
                tiles.push(Tile { x, y, tile_type });
            }
        }
        Ok(Self { width, height, tiles })
    }

    /// The fabric's width, in tiles.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The fabric's height, in tiles.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The total number of tiles in the fabric.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Looks up the tile at `(x, y)`, bounds-checked.
    pub fn get_tile(&self, x: u32, y: u32) -> Result<&Tile, FabricError> {
        if x >= self.width || y >= self.height {
            return Err(FabricError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(&self.tiles[(y * self.width + x) as usize])
    }

    /// All tiles in the fabric, in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The coordinates of every tile of the given kind, in row-major order.
    pub fn tiles_of_type(&self, tile_type: TileType) -> Vec<Coord> {
        self.tiles
            .iter()
            .filter(|t| t.tile_type == tile_type)
            .map(|t| Coord::new(t.x, t.y))
            .collect()
    }
}
