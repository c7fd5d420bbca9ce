// terratin\crates\tt_rtin\src/tile.rs

//! 瓦片误差面与网格提取
//!
//! [`Tile`] 把一张高程图绑定到共享的 [`TriangleTable`] 上。构造时立即
//! 完成逐点最大误差的计算（自底向上动态规划），之后误差网格只读，可按
//! 任意阈值多次提取网格。误差值与阈值无关。
//!
//! # 误差传播
//!
//! 从最大下标（最深、最小的三角形）向下标 0（根）遍历：对每个三角形取
//! 斜边中点 M，记录线性插值高程与真实高程之差；父三角形再并入两个子
//! 三角形中点处已定型的误差。降序遍历保证子误差先于父误差定型，这是
//! 该趟计算的核心正确性不变量。
//!
//! # 网格提取
//!
//! 自顶向下的两阶段遍历：第一阶段统计顶点与三角形数量并分配去重索引，
//! 第二阶段按既定尺寸填充缓冲。两阶段共用同一个递归遍历器与细分判定，
//! 决策逐位一致。

use std::sync::Arc;

use tt_foundation::error::{TtError, TtResult};

use crate::heightmap::Heightmap;
use crate::mesh::MeshData;
use crate::table::TriangleTable;

/// 网格点坐标
type Corner = (usize, usize);

/// 瓦片：一张高程图及其误差面
///
/// 构造完成后高程图与误差网格均只读，[`Tile::extract_mesh`] 以 `&self`
/// 接收者工作且不共享可变暂存，可安全地从多个线程并发提取。
#[derive(Debug, Clone)]
pub struct Tile {
    /// 共享坐标表
    table: Arc<TriangleTable>,
    /// 高程数据
    terrain: Heightmap,
    /// 逐网格点最大垂直误差
    errors: Vec<f64>,
}

impl Tile {
    /// 绑定高程图并计算误差面
    ///
    /// 高程图的网格尺寸必须与坐标表一致，否则返回 [`TtError::SizeMismatch`]。
    /// 误差传播在构造内完成，不产生半成品瓦片。
    pub fn new(terrain: Heightmap, table: Arc<TriangleTable>) -> TtResult<Self> {
        let size = table.grid_size();
        TtError::check_size("terrain", size * size, terrain.as_slice().len())?;

        let mut tile = Self {
            errors: vec![0.0; size * size],
            table,
            terrain,
        };
        tile.propagate_errors();
        Ok(tile)
    }

    /// 共享坐标表
    #[inline]
    pub fn table(&self) -> &TriangleTable {
        &self.table
    }

    /// 高程图
    #[inline]
    pub fn heightmap(&self) -> &Heightmap {
        &self.terrain
    }

    /// 误差网格（行主序，逐网格点最大垂直误差）
    #[inline]
    pub fn errors(&self) -> &[f64] {
        &self.errors
    }

    /// 自底向上误差传播
    fn propagate_errors(&mut self) {
        let size = self.table.grid_size();
        let num_parent = self.table.num_parent_triangles();
        let coords = self.table.coords();
        let terrain = self.terrain.as_slice();

        // 从最小层级的三角形开始遍历，保证子三角形误差先于父三角形定型
        for i in (0..self.table.num_triangles()).rev() {
            let k = i * 4;
            let ax = coords[k] as usize;
            let ay = coords[k + 1] as usize;
            let bx = coords[k + 2] as usize;
            let by = coords[k + 3] as usize;
            let mx = (ax + bx) >> 1;
            let my = (ay + by) >> 1;
            let cx = mx + my - ay;
            let cy = my + ax - mx;

            // 斜边中点处的插值误差，插值按 f32 计算后放宽为 f64
            let interpolated = (terrain[ay * size + ax] + terrain[by * size + bx]) / 2.0;
            let middle = my * size + mx;
            let middle_error = f64::from((interpolated - terrain[middle]).abs());

            self.errors[middle] = self.errors[middle].max(middle_error);

            if i < num_parent {
                // 父三角形：并入左右子三角形中点处的误差
                let left = ((ay + cy) >> 1) * size + ((ax + cx) >> 1);
                let right = ((by + cy) >> 1) * size + ((bx + cx) >> 1);
                self.errors[middle] = self.errors[middle]
                    .max(self.errors[left])
                    .max(self.errors[right]);
            }
        }
    }

    /// 按误差阈值提取自适应网格
    ///
    /// 阈值为 0 时强制最大细分（全分辨率网格）；阈值增大时平坦区域
    /// 塌缩为更大的三角形。阈值按原样参与比较：负阈值同样强制最大
    /// 细分，NaN 阈值因比较恒为假而不触发任何细分，得到最粗网格。
    ///
    /// 提取对误差网格无副作用，去重暂存为本次调用私有，
    /// 可从多个线程对同一瓦片并发调用。
    pub fn extract_mesh(&self, max_error: f64) -> MeshData {
        let size = self.table.grid_size();

        // 去重索引网格：1 起始的输出顶点索引，0 表示未分配
        let mut indices = vec![0u32; size * size];
        let mut num_vertices: u32 = 0;
        let mut num_triangles: usize = 0;

        // 第一阶段：统计数量并分配顶点索引，先于分配确定缓冲尺寸
        self.walk(max_error, &mut |a: Corner, b: Corner, c: Corner| {
            for (x, y) in [a, b, c] {
                let cell = y * size + x;
                if indices[cell] == 0 {
                    num_vertices += 1;
                    indices[cell] = num_vertices;
                }
            }
            num_triangles += 1;
        });

        // 第二阶段：按相同的遍历决策填充缓冲
        let terrain = self.terrain.as_slice();
        let mut vertices = vec![0.0f64; num_vertices as usize * 3];
        let mut triangles = vec![0u32; num_triangles * 3];
        let mut cursor = 0usize;

        self.walk(max_error, &mut |a: Corner, b: Corner, c: Corner| {
            for (x, y) in [a, b, c] {
                let cell = y * size + x;
                let v = (indices[cell] - 1) as usize;
                vertices[v * 3] = x as f64;
                vertices[v * 3 + 1] = y as f64;
                vertices[v * 3 + 2] = f64::from(terrain[cell]);
                triangles[cursor] = v as u32;
                cursor += 1;
            }
        });

        log::debug!(
            "网格提取完成: max_error={}, 顶点={}, 三角形={}",
            max_error,
            num_vertices,
            num_triangles
        );

        MeshData {
            vertices,
            triangles,
        }
    }

    /// 从两个根三角形开始遍历，对每个被保留的三角形调用 `emit`
    fn walk<F: FnMut(Corner, Corner, Corner)>(&self, max_error: f64, emit: &mut F) {
        let max = self.table.grid_size() - 1;
        self.descend((0, 0), (max, max), (max, 0), max_error, emit);
        self.descend((max, max), (0, 0), (0, max), max_error, emit);
    }

    /// 递归下降：细分则进入两个子三角形，否则发射当前三角形
    ///
    /// 递归深度不超过 log2(tile_size) + 1。
    fn descend<F: FnMut(Corner, Corner, Corner)>(
        &self,
        a: Corner,
        b: Corner,
        c: Corner,
        max_error: f64,
        emit: &mut F,
    ) {
        let m = ((a.0 + b.0) >> 1, (a.1 + b.1) >> 1);

        if self.should_split(a, c, m, max_error) {
            self.descend(c, a, m, max_error, emit);
            self.descend(b, c, m, max_error, emit);
        } else {
            emit(a, b, c);
        }
    }

    /// 细分判定：斜边跨度大于一个网格单元且中点误差超过阈值
    ///
    /// 两阶段遍历共用此判定，保证决策一致。
    #[inline]
    fn should_split(&self, a: Corner, c: Corner, m: Corner, max_error: f64) -> bool {
        let span = a.0.abs_diff(c.0) + a.1.abs_diff(c.1);
        span > 1 && self.errors[m.1 * self.table.grid_size() + m.0] > max_error
    }
}
