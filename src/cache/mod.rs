//! 缓存层
//!
//! 对象缓存以插件形式注册（ctor 在启动前写入注册表），运行时按配置选择
//! 后端：moka（进程内）或 redis。当前主要用于认证中间件缓存已验证账号。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明一个对象缓存插件并在程序启动时自动注册
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ty) => {
        #[ctor::ctor]
        fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let plugin = <$plugin>::new()
                            .map_err($crate::errors::SchoolSystemError::cache_connection)?;
                        Ok(Box::new(plugin) as Box<dyn $crate::cache::ObjectCache>)
                    })
                        as $crate::cache::register::BoxedObjectCacheFuture
                }),
            );
        }
    };
}
