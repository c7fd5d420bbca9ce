// terratin\crates\tt_rtin\src/lib.rs

//! TerraTin RTIN 核心
//!
//! 将 (2^n+1) × (2^n+1) 高程网格转换为自适应三角网格。三角形密度随地表
//! 复杂度变化，由调用方给定的最大垂直误差约束，远少于逐单元剖分的三角形数。
//!
//! # 核心类型
//!
//! - [`TriangleTable`]: 固定网格尺寸下隐式二叉树全部三角形的坐标表，
//!   构建一次后在同尺寸的多个瓦片间复用
//! - [`Tile`]: 绑定一张高程图的误差面，构造时完成自底向上误差传播，
//!   之后可按任意阈值多次提取网格
//! - [`MeshData`]: 提取结果，扁平顶点缓冲与三角形索引缓冲
//!
//! # 数据流
//!
//! 高程图 → [`Tile::new`] (一次性, O(网格单元)) →
//! [`Tile::extract_mesh`] → (顶点, 三角形)
//!
//! # 示例
//!
//! ```
//! use std::sync::Arc;
//! use tt_rtin::{Heightmap, Tile, TriangleTable};
//!
//! let table = Arc::new(TriangleTable::new(5).unwrap());
//! let terrain = Heightmap::from_fn(5, |x, y| (x + y) as f32);
//! let tile = Tile::new(terrain, table).unwrap();
//!
//! let mesh = tile.extract_mesh(0.5);
//! assert_eq!(mesh.triangles.len() % 3, 0);
//! ```

pub mod heightmap;
pub mod mesh;
pub mod table;
pub mod tile;

// 重导出核心类型
pub use heightmap::Heightmap;
pub use mesh::{MeshData, MeshStatistics};
pub use table::TriangleTable;
pub use tile::Tile;

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::heightmap::Heightmap;
    pub use crate::mesh::{MeshData, MeshStatistics};
    pub use crate::table::TriangleTable;
    pub use crate::tile::Tile;
}
