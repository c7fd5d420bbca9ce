// terratin\crates\tt_rtin\src/heightmap.rs

//! 高程网格
//!
//! 提供行主序的方形高程数据存储与访问。网格尺寸通常为 2^n+1，
//! 但本类型不强制该约束，约束在 [`crate::TriangleTable`] 构造时检查。

use tt_foundation::error::{TtError, TtResult};

/// 高程网格
///
/// 行主序 f32 高程数组，每个网格点一个值。作为瓦片的不可变输入。
#[derive(Debug, Clone)]
pub struct Heightmap {
    /// 网格尺寸（每边网格点数）
    grid_size: usize,
    /// 高程数据，长度为 grid_size²
    data: Vec<f32>,
}

impl Heightmap {
    /// 从数据创建
    ///
    /// 数据长度必须等于 `grid_size²`，否则返回 [`TtError::SizeMismatch`]。
    pub fn from_vec(data: Vec<f32>, grid_size: usize) -> TtResult<Self> {
        TtError::check_size("heightmap", grid_size * grid_size, data.len())?;
        Ok(Self { grid_size, data })
    }

    /// 创建常量高程网格
    pub fn constant(grid_size: usize, height: f32) -> Self {
        Self {
            grid_size,
            data: vec![height; grid_size * grid_size],
        }
    }

    /// 按坐标函数生成高程网格
    ///
    /// # 参数
    ///
    /// - `f`: 返回给定 (x, y) 网格点处高程的函数
    pub fn from_fn(grid_size: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(grid_size * grid_size);
        for y in 0..grid_size {
            for x in 0..grid_size {
                data.push(f(x, y));
            }
        }
        Self { grid_size, data }
    }

    /// 网格尺寸（每边网格点数）
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// 获取网格点高程
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.grid_size && y < self.grid_size {
            Some(self.data[y * self.grid_size + x])
        } else {
            None
        }
    }

    /// 行主序数据切片
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
