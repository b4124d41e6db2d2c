use md5::{Digest, Md5};
use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::CacheConfig;

/// 缓存后端存储
///
/// 可注入替换，便于在测试中确定性地断言命中与未命中。
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
}

/// 进程生命周期内的内存存储，无淘汰策略，不跨进程持久化
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries.write().unwrap().insert(key.to_string(), value);
    }
}

/// 缓存命中统计
#[derive(Default)]
pub struct CacheStats {
    hits: AtomicUsize,
    misses: AtomicUsize,
    writes: AtomicUsize,
}

impl CacheStats {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }

    fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    /// 生成命中率报告文本
    pub fn report(&self) -> String {
        let hits = self.hits();
        let misses = self.misses();
        let total = hits + misses;
        let hit_rate = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64 * 100.0
        };
        format!(
            "📊 缓存统计: 命中 {} / 未命中 {} / 写入 {} (命中率 {:.1}%)",
            hits,
            misses,
            self.writes(),
            hit_rate
        )
    }
}

/// 缓存管理器
///
/// 以规范化请求文本的MD5为键关联既有结果，按类别（completion、search）
/// 分命名空间。只缓存成功结果，失败后的重新触发会再次调用外部服务。
pub struct CacheManager {
    config: CacheConfig,
    store: Box<dyn CacheStore>,
    stats: CacheStats,
}

impl CacheManager {
    pub fn new(config: CacheConfig) -> Self {
        Self::with_store(config, Box::new(MemoryStore::new()))
    }

    /// 使用自定义后端存储创建缓存管理器
    pub fn with_store(config: CacheConfig, store: Box<dyn CacheStore>) -> Self {
        Self {
            config,
            store,
            stats: CacheStats::default(),
        }
    }

    /// 生成规范化请求文本的MD5哈希
    pub fn hash_key(payload: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(payload.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn scoped_key(category: &str, payload: &str) -> String {
        format!("{}:{}", category, Self::hash_key(payload))
    }

    /// 获取缓存，未启用或未命中时返回None
    pub fn get<T>(&self, category: &str, payload: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        if !self.config.enabled {
            return None;
        }

        match self.store.get(&Self::scoped_key(category, payload)) {
            Some(content) => match serde_json::from_str::<T>(&content) {
                Ok(value) => {
                    self.stats.record_hit();
                    Some(value)
                }
                Err(_) => {
                    self.stats.record_miss();
                    None
                }
            },
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// 写入缓存
    pub fn set<T>(&self, category: &str, payload: &str, value: &T)
    where
        T: Serialize,
    {
        if !self.config.enabled {
            return;
        }

        if let Ok(content) = serde_json::to_string(value) {
            self.store.set(&Self::scoped_key(category, payload), content);
            self.stats.record_write();
        }
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
