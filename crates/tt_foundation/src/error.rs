// terratin\crates\tt_foundation\src/error.rs

//! 错误处理模块，定义统一错误类型
//!
//! 提供 `TtError` 枚举和 `TtResult` 类型别名，用于整个项目的错误处理。
//!
//! # 设计原则
//!
//! 1. **同步检测**: 结构性错误在构造期检测，构造失败即硬失败
//! 2. **易用性**: 提供便捷的构造方法
//! 3. **可追溯**: IO 错误保留底层错误源
//!
//! # 示例
//!
//! ```
//! use tt_foundation::error::{TtError, TtResult};
//!
//! fn read_terrain() -> TtResult<()> {
//!     Err(TtError::invalid_input("高程数据为空"))
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// 统一结果类型
pub type TtResult<T> = Result<T, TtError>;

/// TerraTin 错误类型
#[derive(Error, Debug)]
pub enum TtError {
    // ========================================================================
    // IO 相关错误
    // ========================================================================
    /// IO 错误
    #[error("IO错误: {message}")]
    Io {
        /// 描述性错误信息
        message: String,
        #[source]
        /// 可选的底层 IO 错误
        source: Option<std::io::Error>,
    },

    /// 文件不存在
    #[error("文件不存在: {path}")]
    FileNotFound {
        /// 未找到的路径
        path: PathBuf,
    },

    /// 图像解码错误
    #[error("图像解码错误: {message}")]
    Decode {
        /// 解码失败原因
        message: String,
    },

    // ========================================================================
    // 结构性校验错误
    // ========================================================================
    /// 网格尺寸无效
    ///
    /// 网格尺寸必须为 2^n+1 形式，且瓦片尺寸 (网格尺寸减 1) 不超过 u16 上限。
    #[error("网格尺寸无效: 期望 2^n+1 形式, 实际 {grid_size}")]
    InvalidGridSize {
        /// 调用方提供的网格尺寸
        grid_size: usize,
    },

    /// 数组大小不匹配
    #[error("数组大小不匹配: {name} 期望{expected}, 实际{actual}")]
    SizeMismatch {
        /// 数据名称
        name: &'static str,
        /// 期望大小
        expected: usize,
        /// 实际大小
        actual: usize,
    },

    /// 无效输入
    #[error("无效的输入数据: {message}")]
    InvalidInput {
        /// 说明无效原因
        message: String,
    },
}

// ========================================================================
// 便捷构造方法
// ========================================================================

impl TtError {
    /// 从IO错误创建
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// 从IO错误创建（带源）
    pub fn io_with_source(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(source),
        }
    }

    /// 文件不存在
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// 图像解码错误
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// 网格尺寸无效
    pub fn invalid_grid_size(grid_size: usize) -> Self {
        Self::InvalidGridSize { grid_size }
    }

    /// 数组大小不匹配
    pub fn size_mismatch(name: &'static str, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            name,
            expected,
            actual,
        }
    }

    /// 无效输入
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

// ========================================================================
// 验证辅助方法
// ========================================================================

impl TtError {
    /// 检查数组大小是否匹配
    #[inline]
    pub fn check_size(name: &'static str, expected: usize, actual: usize) -> TtResult<()> {
        if expected != actual {
            Err(Self::size_mismatch(name, expected, actual))
        } else {
            Ok(())
        }
    }
}

// ========================================================================
// 标准库错误转换
// ========================================================================

impl From<std::io::Error> for TtError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

// ========================================================================
// 测试
// ========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TtError::invalid_grid_size(10);
        assert!(err.to_string().contains("网格尺寸无效"));
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_io_error() {
        let err = TtError::io("读取失败");
        assert!(err.to_string().contains("IO错误"));
    }

    #[test]
    fn test_file_not_found() {
        let err = TtError::file_not_found("/path/to/file");
        assert!(err.to_string().contains("/path/to/file"));
    }

    #[test]
    fn test_size_mismatch() {
        let err = TtError::size_mismatch("terrain", 25, 20);
        assert!(err.to_string().contains("terrain"));
        assert!(err.to_string().contains("25"));
        assert!(err.to_string().contains("20"));
    }

    #[test]
    fn test_check_size() {
        assert!(TtError::check_size("test", 10, 10).is_ok());
        assert!(TtError::check_size("test", 10, 5).is_err());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let tt_err: TtError = io_err.into();
        assert!(matches!(tt_err, TtError::Io { .. }));
    }

    #[test]
    fn test_ensure_macro() {
        fn check(value: i32) -> TtResult<()> {
            crate::ensure!(value > 0, TtError::invalid_input("值必须为正"));
            Ok(())
        }

        assert!(check(1).is_ok());
        assert!(check(-1).is_err());
    }
}
