//! 通知提示组件
//!
//! 页面持有 `(消息内容, 是否出错)` 信号，本组件负责展示与
//! 3 秒后的自动清除。

use leptos::prelude::*;
use std::time::Duration;

/// 页面级通知：消息内容 + 是否出错
pub type Notification = Option<(String, bool)>;

/// 定时器代次。每条新通知递增一次，旧通知装上的定时器据此作废，
/// 避免前一条的 3 秒倒计时提前清掉后一条。
#[derive(Default)]
struct DismissGeneration(u64);

impl DismissGeneration {
    fn arm(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}

#[component]
pub fn Toast(
    /// 当前通知（只读）
    notification: ReadSignal<Notification>,
    /// 清除通知用的写入端
    set_notification: WriteSignal<Notification>,
) -> impl IntoView {
    let generation = StoredValue::new(DismissGeneration::default());

    // 3秒后清除通知；视图可能已卸载，写入失败则忽略
    Effect::new(move |_| {
        if notification.get().is_some() {
            let token = generation
                .try_update_value(|g| g.arm())
                .unwrap_or_default();
            set_timeout(
                move || {
                    let still_current = generation
                        .try_with_value(|g| g.is_current(token))
                        .unwrap_or(false);
                    if still_current {
                        let _ = set_notification.try_set(None);
                    }
                },
                Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || notification.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let is_err = notification.get().map(|(_, e)| e).unwrap_or(false);
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notification.get().map(|(msg, _)| msg).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::DismissGeneration;

    #[test]
    fn armed_timer_stays_current_until_next_notification() {
        let mut generation = DismissGeneration::default();
        let token = generation.arm();
        assert!(generation.is_current(token));
    }

    #[test]
    fn newer_notification_invalidates_older_timer() {
        let mut generation = DismissGeneration::default();
        let first = generation.arm();
        let second = generation.arm();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
