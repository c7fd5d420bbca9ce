// terratin\crates\tt_rtin\src/table.rs

//! RTIN 三角形坐标表
//!
//! 对固定网格尺寸预计算隐式完全二叉树中所有三角形的斜边端点坐标。
//!
//! # 算法原理
//!
//! 树中节点的身份即其下标，不存在指针结构。三角形下标 i 对应树编号
//! id = i + 2，把 id 的二进制位当作从根到该节点的路径：最低有效位决定
//! 根三角形（奇为左下、偶为右上），其后每一位决定取左半还是右半。
//! 逐位右移 id 并旋转三个角点即可在 O(log n) 内重建任意节点的几何。
//!
//! 表中仅存储斜边两端点 A、B，直角点 C 恒可由 A、B 的中点反射得到，
//! 按需计算。全表构建一次后在同尺寸的所有瓦片间复用。
//!
//! # 示例
//!
//! ```
//! use tt_rtin::TriangleTable;
//!
//! let table = TriangleTable::new(5).unwrap();
//! assert_eq!(table.num_triangles(), 30);
//! assert_eq!(table.num_parent_triangles(), 14);
//!
//! assert!(TriangleTable::new(10).is_err());
//! ```

use rayon::prelude::*;
use tt_foundation::error::{TtError, TtResult};

/// 坐标分量以 u16 存储，瓦片尺寸不得超过该上限
const MAX_TILE_SIZE: usize = u16::MAX as usize;

/// RTIN 三角形坐标表
///
/// 构建后只读，可在多个瓦片间共享。
#[derive(Debug, Clone)]
pub struct TriangleTable {
    /// 网格尺寸（每边网格点数，2^n+1）
    grid_size: usize,
    /// 瓦片尺寸（grid_size - 1，2 的幂）
    tile_size: usize,
    /// 三角形总数
    num_triangles: usize,
    /// 父三角形数量（其误差需要聚合子三角形）
    num_parent_triangles: usize,
    /// 坐标表，每三角形 4 个分量 (ax, ay, bx, by)
    coords: Vec<u16>,
}

impl TriangleTable {
    /// 为给定网格尺寸构建坐标表
    ///
    /// `grid_size - 1` 必须是 2 的幂且不超过 `u16` 上限，
    /// 否则返回 [`TtError::InvalidGridSize`]。
    pub fn new(grid_size: usize) -> TtResult<Self> {
        if grid_size < 2 {
            return Err(TtError::invalid_grid_size(grid_size));
        }
        let tile_size = grid_size - 1;
        if !tile_size.is_power_of_two() || tile_size > MAX_TILE_SIZE {
            return Err(TtError::invalid_grid_size(grid_size));
        }

        let num_triangles = tile_size * tile_size * 2 - 2;
        // tile_size = 1 时没有父三角形
        let num_parent_triangles = num_triangles.saturating_sub(tile_size * tile_size);

        // 各下标的重建互不依赖，可并行填表
        let mut coords = vec![0u16; num_triangles * 4];
        coords
            .par_chunks_exact_mut(4)
            .enumerate()
            .for_each(|(i, quad)| {
                let (ax, ay, bx, by) = triangle_corners(i, tile_size);
                quad[0] = ax as u16;
                quad[1] = ay as u16;
                quad[2] = bx as u16;
                quad[3] = by as u16;
            });

        log::debug!(
            "三角形坐标表构建完成: grid_size={}, 三角形数={}",
            grid_size,
            num_triangles
        );

        Ok(Self {
            grid_size,
            tile_size,
            num_triangles,
            num_parent_triangles,
            coords,
        })
    }

    /// 网格尺寸（每边网格点数）
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// 瓦片尺寸（grid_size - 1）
    #[inline]
    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// 三角形总数
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.num_triangles
    }

    /// 父三角形数量
    #[inline]
    pub fn num_parent_triangles(&self) -> usize {
        self.num_parent_triangles
    }

    /// 坐标表切片，每三角形 4 个分量 (ax, ay, bx, by)
    #[inline]
    pub fn coords(&self) -> &[u16] {
        &self.coords
    }

    /// 单个三角形的斜边端点 (ax, ay, bx, by)
    #[inline]
    pub fn triangle(&self, index: usize) -> Option<[u16; 4]> {
        let k = index * 4;
        self.coords.get(k..k + 4).map(|c| [c[0], c[1], c[2], c[3]])
    }
}

/// 由三角形下标重建斜边端点坐标
///
/// 把 id = index + 2 的二进制位当作从根到节点的路径，逐位右移并旋转
/// 角点。位为 1 取左半 (B←A, A←C)，位为 0 取右半 (A←B, B←C)，每步
/// 之后直角点落在旧斜边中点。
fn triangle_corners(index: usize, tile_size: usize) -> (usize, usize, usize, usize) {
    let mut id = index + 2;
    let (mut ax, mut ay, mut bx, mut by, mut cx, mut cy) = (0, 0, 0, 0, 0, 0);

    if id & 1 != 0 {
        // 左下角根三角形
        bx = tile_size;
        by = tile_size;
        cx = tile_size;
    } else {
        // 右上角根三角形
        ax = tile_size;
        ay = tile_size;
        cy = tile_size;
    }

    loop {
        id >>= 1;
        if id <= 1 {
            break;
        }

        let mx = (ax + bx) >> 1;
        let my = (ay + by) >> 1;

        if id & 1 != 0 {
            // 左半
            bx = ax;
            by = ay;
            ax = cx;
            ay = cy;
        } else {
            // 右半
            ax = bx;
            ay = by;
            bx = cx;
            by = cy;
        }
        cx = mx;
        cy = my;
    }

    (ax, ay, bx, by)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_counts() {
        // num_triangles = (N-1)² * 2 - 2, num_parent = num_triangles - (N-1)²
        for &(grid_size, tiles) in &[(3usize, 2usize), (5, 4), (9, 8), (17, 16), (257, 256)] {
            let table = TriangleTable::new(grid_size).unwrap();
            assert_eq!(table.num_triangles(), tiles * tiles * 2 - 2);
            assert_eq!(
                table.num_parent_triangles(),
                table.num_triangles() - tiles * tiles
            );
            assert_eq!(table.coords().len(), table.num_triangles() * 4);
        }
    }

    #[test]
    fn test_invalid_grid_sizes() {
        for &grid_size in &[0usize, 1, 4, 6, 10, 100] {
            assert!(
                matches!(
                    TriangleTable::new(grid_size),
                    Err(TtError::InvalidGridSize { .. })
                ),
                "grid_size={} 应当被拒绝",
                grid_size
            );
        }
    }

    #[test]
    fn test_tile_size_exceeding_u16_rejected() {
        // 65537 - 1 = 2^16 是 2 的幂但超出 u16 存储上限
        assert!(TriangleTable::new(65537).is_err());
    }

    #[test]
    fn test_minimal_grid() {
        // grid_size = 2: 单个单元，表为空
        let table = TriangleTable::new(2).unwrap();
        assert_eq!(table.tile_size(), 1);
        assert_eq!(table.num_triangles(), 0);
        assert_eq!(table.num_parent_triangles(), 0);
    }

    #[test]
    fn test_grid3_coords() {
        let table = TriangleTable::new(3).unwrap();
        assert_eq!(table.num_triangles(), 6);
        // 两个根三角形：右上 (A=(2,2), B=(0,0)) 与左下 (A=(0,0), B=(2,2))
        assert_eq!(table.triangle(0), Some([2, 2, 0, 0]));
        assert_eq!(table.triangle(1), Some([0, 0, 2, 2]));
        // 第二层
        assert_eq!(table.triangle(2), Some([0, 0, 0, 2]));
        assert_eq!(table.triangle(3), Some([2, 2, 2, 0]));
        assert_eq!(table.triangle(4), Some([0, 2, 2, 2]));
        assert_eq!(table.triangle(5), Some([2, 0, 0, 0]));
        assert_eq!(table.triangle(6), None);
    }

    #[test]
    fn test_midpoints_are_integer() {
        // 表中所有三角形的斜边端点坐标和均为偶数，中点必为整点
        let table = TriangleTable::new(9).unwrap();
        for i in 0..table.num_triangles() {
            let [ax, ay, bx, by] = table.triangle(i).unwrap();
            assert_eq!((ax as usize + bx as usize) % 2, 0);
            assert_eq!((ay as usize + by as usize) % 2, 0);
        }
    }
}
