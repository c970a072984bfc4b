pub mod logging;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// 获取状态锁；锁中毒时沿用内部数据（状态切片都是纯数据，不存在半更新）
pub(crate) fn lock_state<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
