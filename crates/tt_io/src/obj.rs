// terratin\crates\tt_io\src/obj.rs

//! Wavefront OBJ 导出器
//!
//! 把提取出的三角网格写为 ASCII OBJ，用于通用建模与可视化工具。
//!
//! # 功能
//!
//! - 顶点与三角形面的 ASCII 导出
//! - 可配置小数位数与对象名

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tt_foundation::TtResult;
use tt_rtin::MeshData;

/// 默认小数位数
const DEFAULT_PRECISION: usize = 6;

/// OBJ 导出器
#[derive(Debug, Clone)]
pub struct ObjExporter {
    /// 坐标输出的小数位数
    precision: usize,
    /// 可选的对象名（`o` 行）
    object_name: Option<String>,
}

impl Default for ObjExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjExporter {
    /// 创建新的 OBJ 导出器
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            object_name: None,
        }
    }

    /// 设置小数位数
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// 设置对象名
    pub fn object_name(mut self, name: impl Into<String>) -> Self {
        self.object_name = Some(name.into());
        self
    }

    /// 导出到文件
    pub fn export(&self, path: impl AsRef<Path>, mesh: &MeshData) -> TtResult<()> {
        let file = File::create(path.as_ref())?;
        let mut w = BufWriter::new(file);

        self.write(&mut w, mesh)?;
        w.flush()?;
        Ok(())
    }

    /// 写入任意输出流
    pub fn write<W: Write>(&self, w: &mut W, mesh: &MeshData) -> TtResult<()> {
        if let Some(name) = &self.object_name {
            writeln!(w, "o {}", name)?;
        }

        for v in mesh.vertices.chunks_exact(3) {
            writeln!(
                w,
                "v {:.p$} {:.p$} {:.p$}",
                v[0],
                v[1],
                v[2],
                p = self.precision
            )?;
        }

        // OBJ 面索引从 1 开始
        for t in mesh.triangles.chunks_exact(3) {
            writeln!(w, "f {} {} {}", t[0] + 1, t[1] + 1, t[2] + 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mesh() -> MeshData {
        MeshData {
            vertices: vec![0.0, 0.0, 1.5, 2.0, 0.0, 0.25, 0.0, 2.0, -1.0],
            triangles: vec![0, 1, 2],
        }
    }

    fn render(exporter: &ObjExporter, mesh: &MeshData) -> String {
        let mut buf = Vec::new();
        exporter.write(&mut buf, mesh).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_basic() {
        let text = render(&ObjExporter::new().precision(2), &sample_mesh());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "v 0.00 0.00 1.50");
        assert_eq!(lines[1], "v 2.00 0.00 0.25");
        assert_eq!(lines[2], "v 0.00 2.00 -1.00");
        // 面索引 1 起始
        assert_eq!(lines[3], "f 1 2 3");
    }

    #[test]
    fn test_object_name_header() {
        let text = render(
            &ObjExporter::new().precision(1).object_name("terrain"),
            &sample_mesh(),
        );
        assert!(text.starts_with("o terrain\n"));
    }

    #[test]
    fn test_line_counts_match_mesh() {
        let mesh = sample_mesh();
        let text = render(&ObjExporter::new(), &mesh);

        let v_lines = text.lines().filter(|l| l.starts_with("v ")).count();
        let f_lines = text.lines().filter(|l| l.starts_with("f ")).count();
        assert_eq!(v_lines, mesh.vertex_count());
        assert_eq!(f_lines, mesh.triangle_count());
    }
}
