// terratin\crates\tt_io\src/decode.rs

//! 高程图解码
//!
//! 把 tile × tile 的地形图像解码为 (tile+1) × (tile+1) 的高程网格。
//! 最右一列与最底一行由相邻像素回填，使网格点数比像素数各多一。
//!
//! # 高程公式
//!
//! - [`HeightFormula::TerrainRgb`]: terrain-RGB DEM 编码，
//!   `(r·65536 + g·256 + b) / 10 - 10000`
//! - [`HeightFormula::Grayscale`]: 三通道均值 `(r + g + b) / 3`

use std::path::Path;

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tt_foundation::{ensure, TtError, TtResult};
use tt_rtin::Heightmap;

/// 像素到高程的换算公式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightFormula {
    /// terrain-RGB DEM 编码，高程单位米
    #[default]
    TerrainRgb,
    /// 三通道灰度均值
    Grayscale,
}

impl HeightFormula {
    /// 由像素通道计算高程
    #[inline]
    pub fn decode(&self, r: u8, g: u8, b: u8) -> f32 {
        match self {
            HeightFormula::TerrainRgb => {
                (f32::from(r) * 65536.0 + f32::from(g) * 256.0 + f32::from(b)) / 10.0 - 10000.0
            }
            HeightFormula::Grayscale => {
                (f32::from(r) + f32::from(g) + f32::from(b)) / 3.0
            }
        }
    }
}

/// 从图像解码高程网格
///
/// 图像必须为非空方形。tile × tile 像素产生 (tile+1)² 网格点：
/// 每行最后一个网格点复制其左邻，最后一行复制上一行。
///
/// # 参数
///
/// - `image`: 方形地形图像
/// - `formula`: 像素高程换算公式
pub fn heightmap_from_image(image: &DynamicImage, formula: HeightFormula) -> TtResult<Heightmap> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();
    let (width, height) = (width as usize, height as usize);
    ensure!(width > 0, TtError::invalid_input("图像为空"));
    ensure!(
        width == height,
        TtError::invalid_input(format!("期望方形图像, 实际 {}x{}", width, height))
    );

    let tile_size = width;
    let grid_size = tile_size + 1;

    let mut data = vec![0.0f32; grid_size * grid_size];
    for y in 0..tile_size {
        for x in 0..tile_size {
            let pixel = rgb.get_pixel(x as u32, y as u32);
            data[y * grid_size + x] = formula.decode(pixel[0], pixel[1], pixel[2]);
        }
        // 回填每行最右网格点
        data[y * grid_size + grid_size - 1] = data[y * grid_size + grid_size - 2];
    }
    // 回填最底一行（复制倒数第二行）
    for x in 0..grid_size {
        data[(grid_size - 1) * grid_size + x] = data[(grid_size - 2) * grid_size + x];
    }

    Heightmap::from_vec(data, grid_size)
}

/// 从图像文件加载高程网格
///
/// 文件不存在时返回 [`TtError::FileNotFound`]，
/// 图像无法解码时返回 [`TtError::Decode`]。
pub fn load_heightmap(path: impl AsRef<Path>, formula: HeightFormula) -> TtResult<Heightmap> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TtError::file_not_found(path));
    }

    let image = image::open(path).map_err(|e| TtError::decode(e.to_string()))?;
    let heightmap = heightmap_from_image(&image, formula)?;

    log::debug!(
        "高程图加载完成: {} -> 网格尺寸 {}",
        path.display(),
        heightmap.grid_size()
    );
    Ok(heightmap)
}
