// terratin\crates\tt_foundation\src/lib.rs

//! TerraTin Foundation Layer
//!
//! 基础层，提供整个项目的统一错误类型与验证工具。
//!
//! # 模块概览
//!
//! - [`error`]: 统一错误类型 `TtError` 与结果别名 `TtResult`
//!
//! # 设计原则
//!
//! 1. **最小依赖**: 仅依赖 thiserror
//! 2. **硬失败**: 所有构造期校验失败直接返回错误，不产生降级对象
//! 3. **易用性**: 提供便捷的构造方法与检查函数
//!
//! # 示例
//!
//! ```
//! use tt_foundation::error::{TtError, TtResult};
//!
//! fn check_grid(grid_size: usize) -> TtResult<()> {
//!     tt_foundation::ensure!(
//!         grid_size >= 2,
//!         TtError::invalid_grid_size(grid_size)
//!     );
//!     Ok(())
//! }
//!
//! assert!(check_grid(5).is_ok());
//! assert!(check_grid(0).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

// 重导出常用类型
pub use error::{TtError, TtResult};

/// 条件检查宏
///
/// 条件不满足时提前返回给定错误。
///
/// # 示例
///
/// ```
/// use tt_foundation::{ensure, TtError, TtResult};
///
/// fn positive(value: f64) -> TtResult<f64> {
///     ensure!(value > 0.0, TtError::invalid_input("值必须为正"));
///     Ok(value)
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err);
        }
    };
}

/// Prelude 模块，包含常用类型
pub mod prelude {
    pub use crate::ensure;
    pub use crate::error::{TtError, TtResult};
}
