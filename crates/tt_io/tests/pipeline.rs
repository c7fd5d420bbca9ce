// crates/tt_io/tests/pipeline.rs
//!
//! 端到端流水线测试
//!
//! 合成图像 → 高程解码 → 坐标表 → 瓦片 → 网格提取 → OBJ 导出

use std::sync::Arc;

use image::{DynamicImage, Rgb, RgbImage};
use tt_io::decode::{heightmap_from_image, HeightFormula};
use tt_io::obj::ObjExporter;
use tt_rtin::{Tile, TriangleTable};

/// 合成 4×4 地形图像（tile 4 -> 网格尺寸 5）
fn synthetic_image() -> DynamicImage {
    let img = RgbImage::from_fn(4, 4, |x, y| {
        let v = ((x * 61 + y * 97) % 200) as u8;
        Rgb([v, v, v])
    });
    DynamicImage::ImageRgb8(img)
}

#[test]
fn image_to_obj_pipeline() {
    let terrain = heightmap_from_image(&synthetic_image(), HeightFormula::Grayscale).unwrap();
    assert_eq!(terrain.grid_size(), 5);

    let table = Arc::new(TriangleTable::new(terrain.grid_size()).unwrap());
    let tile = Tile::new(terrain, table).unwrap();

    let fine = tile.extract_mesh(0.0);
    let coarse = tile.extract_mesh(1e6);

    // 细网格不少于粗网格，粗网格塌缩为两个根三角形
    assert!(fine.triangle_count() >= coarse.triangle_count());
    assert_eq!(coarse.triangle_count(), 2);
    assert!(fine.triangle_count() >= 2);

    for mesh in [&fine, &coarse] {
        assert_eq!(mesh.vertices.len() % 3, 0);
        assert_eq!(mesh.triangles.len() % 3, 0);
        let n = mesh.vertex_count() as u32;
        assert!(mesh.triangles.iter().all(|&i| i < n));
    }

    // OBJ 文本行数与网格元素数一致
    let mut buf = Vec::new();
    ObjExporter::new()
        .precision(3)
        .object_name("tile")
        .write(&mut buf, &fine)
        .unwrap();
    let text = String::from_utf8(buf).unwrap();

    let v_lines = text.lines().filter(|l| l.starts_with("v ")).count();
    let f_lines = text.lines().filter(|l| l.starts_with("f ")).count();
    assert_eq!(v_lines, fine.vertex_count());
    assert_eq!(f_lines, fine.triangle_count());
}

#[test]
fn terrain_rgb_roundtrip_heights() {
    // 单色 terrain-RGB 图像解码后高程恒定，网格塌缩为两个根三角形
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([1, 134, 160])));
    let terrain = heightmap_from_image(&img, HeightFormula::TerrainRgb).unwrap();
    assert!(terrain.as_slice().iter().all(|&h| h == 0.0));

    let table = Arc::new(TriangleTable::new(5).unwrap());
    let tile = Tile::new(terrain, table).unwrap();
    let mesh = tile.extract_mesh(0.0);
    assert_eq!(mesh.triangle_count(), 2);
}
