// terratin\crates\tt_rtin\src/mesh.rs

//! 网格提取结果
//!
//! 扁平缓冲布局，可直接送入渲染或导出管线。

use serde::{Deserialize, Serialize};

/// 提取出的三角网格
///
/// - `vertices`: 每顶点 3 个分量 (x, y, z)，x、y 为网格坐标，z 为高程
/// - `triangles`: 每三角形 3 个顶点索引，按 (A, B, C) 顺序
///
/// 顶点已去重：被多个三角形共享的网格点只出现一次。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshData {
    /// 顶点坐标缓冲
    pub vertices: Vec<f64>,
    /// 三角形索引缓冲
    pub triangles: Vec<u32>,
}

impl MeshData {
    /// 顶点数量
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// 三角形数量
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// 是否为空网格
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// 获取单个顶点 (x, y, z)
    #[inline]
    pub fn vertex(&self, index: usize) -> Option<[f64; 3]> {
        let k = index * 3;
        self.vertices.get(k..k + 3).map(|v| [v[0], v[1], v[2]])
    }

    /// 汇总统计
    pub fn statistics(&self) -> MeshStatistics {
        let mut z_min = f64::INFINITY;
        let mut z_max = f64::NEG_INFINITY;
        for v in self.vertices.chunks_exact(3) {
            z_min = z_min.min(v[2]);
            z_max = z_max.max(v[2]);
        }
        if self.vertices.is_empty() {
            z_min = 0.0;
            z_max = 0.0;
        }
        MeshStatistics {
            n_vertices: self.vertex_count(),
            n_triangles: self.triangle_count(),
            z_min,
            z_max,
        }
    }
}

/// 网格统计信息
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshStatistics {
    /// 顶点数量
    pub n_vertices: usize,
    /// 三角形数量
    pub n_triangles: usize,
    /// 最小高程
    pub z_min: f64,
    /// 最大高程
    pub z_max: f64,
}
