// terratin\crates\tt_io\src/lib.rs

//! TerraTin IO 模块
//!
//! 高程图的图像解码与网格导出。核心算法本身不做任何 IO，
//! 本模块作为外部协作层，向核心提供扁平高程网格并消费其输出。
//!
//! # 模块
//!
//! - [`decode`]: 从地形图像解码高程网格
//! - [`obj`]: Wavefront OBJ 网格导出
//!
//! # 示例
//!
//! ```no_run
//! use std::sync::Arc;
//! use tt_io::decode::{load_heightmap, HeightFormula};
//! use tt_io::obj::ObjExporter;
//! use tt_rtin::{Tile, TriangleTable};
//!
//! # fn main() -> tt_foundation::TtResult<()> {
//! let terrain = load_heightmap("tile.png", HeightFormula::TerrainRgb)?;
//! let table = Arc::new(TriangleTable::new(terrain.grid_size())?);
//! let tile = Tile::new(terrain, table)?;
//!
//! let mesh = tile.extract_mesh(50.0);
//! ObjExporter::new().export("tile.obj", &mesh)?;
//! # Ok(())
//! # }
//! ```

pub mod decode;
pub mod obj;

// 重导出常用类型
pub use decode::{heightmap_from_image, load_heightmap, HeightFormula};
pub use obj::ObjExporter;
